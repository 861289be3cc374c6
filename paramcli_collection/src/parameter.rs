use crate::collection::{CollectionError, ParameterCollection};
use crate::converter::{convert, render, ConversionError, Converter, Converters};
use crate::model::{ParameterType, Value};

/// A named, typed value with optional metadata and optional custom converters.
///
/// The declared type is fixed at construction; every later value must match it.
///
/// ### Example
/// ```
/// # use paramcli_collection::*;
/// let mut parameter = Parameter::new("sleepFor", 1000)
///     .with_info("description", "Milliseconds to sleep.")
///     .unwrap();
///
/// parameter.set_value_from_token("2000", &Converters::default()).unwrap();
/// assert_eq!(parameter.value(), &Value::Int(2000));
/// assert_eq!(parameter.kind(), ParameterType::Int);
/// ```
#[derive(Debug, Clone)]
pub struct Parameter {
    key: String,
    kind: ParameterType,
    value: Value,
    additional_info: ParameterCollection,
    converters: Converters,
}

impl Parameter {
    /// Create a parameter, declaring its type from `value`.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            key: key.into(),
            kind: value.kind(),
            value,
            additional_info: ParameterCollection::default(),
            converters: Converters::default(),
        }
    }

    /// Create a parameter of the declared `kind` by converting `token`.
    ///
    /// Conversion tries the parameter's own `converters`, then the `global` converters, then the built-in rules.
    pub fn from_token(
        key: impl Into<String>,
        token: &str,
        kind: ParameterType,
        additional_info: ParameterCollection,
        converters: Converters,
        global: &Converters,
    ) -> Result<Self, ConversionError> {
        let value = convert(token, kind, &converters, global)?;
        Ok(Self {
            key: key.into(),
            kind,
            value,
            additional_info,
            converters,
        })
    }

    /// Replace the metadata of this parameter.
    pub fn with_additional_info(mut self, additional_info: ParameterCollection) -> Self {
        self.additional_info = additional_info;
        self
    }

    /// Add a single metadata entry (ex: a description).
    pub fn with_info(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, CollectionError> {
        self.additional_info.add_value(key, value)?;
        Ok(self)
    }

    /// Replace the custom converters scoped to this parameter.
    pub fn with_converters(mut self, converters: Converters) -> Self {
        self.converters = converters;
        self
    }

    /// Add a custom converter scoped to this parameter.
    pub fn with_converter(mut self, converter: Converter) -> Self {
        self.converters.push(converter);
        self
    }

    /// The unique name of this parameter.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The declared type.
    pub fn kind(&self) -> ParameterType {
        self.kind
    }

    /// The stored value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The metadata collection.
    pub fn additional_info(&self) -> &ParameterCollection {
        &self.additional_info
    }

    /// The custom converters scoped to this parameter.
    pub fn converters(&self) -> &Converters {
        &self.converters
    }

    /// Store a new value of the declared type.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<(), CollectionError> {
        let value = value.into();

        if value.kind() != self.kind {
            return Err(CollectionError::TypeMismatch {
                key: self.key.clone(),
                declared: self.kind,
                provided: value.kind(),
            });
        }

        self.value = value;
        Ok(())
    }

    /// Convert `token` to the declared type and store it.
    /// On error, the stored value is left untouched.
    pub fn set_value_from_token(
        &mut self,
        token: &str,
        global: &Converters,
    ) -> Result<(), ConversionError> {
        self.value = convert(token, self.kind, &self.converters, global)?;
        Ok(())
    }

    /// The stored value as display text, preferring this parameter's custom render converters.
    pub fn value_as_string(&self) -> String {
        render(&self.value, &self.converters)
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        // Converters are opaque functions, so they don't take part in equality.
        self.key == other.key
            && self.kind == other.kind
            && self.value == other.value
            && self.additional_info == other.additional_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn percent() -> Converter {
        Converter::new(ParameterType::Float, |token| {
            token
                .strip_suffix('%')
                .and_then(|number| number.parse::<f64>().ok())
                .map(|number| Value::Float(number / 100.0))
        })
        .with_render(|value| value.as_float().map(|v| format!("{}%", v * 100.0)))
    }

    #[rstest]
    #[case(Value::Bool(false), ParameterType::Bool)]
    #[case(Value::Int(1000), ParameterType::Int)]
    #[case(Value::Float(1.0), ParameterType::Float)]
    #[case(Value::String("".to_string()), ParameterType::String)]
    fn new_declares_kind(#[case] value: Value, #[case] expected: ParameterType) {
        let parameter = Parameter::new("key", value.clone());
        assert_eq!(parameter.key(), "key");
        assert_eq!(parameter.kind(), expected);
        assert_eq!(parameter.value(), &value);
        assert!(parameter.additional_info().is_empty());
        assert!(parameter.converters().is_empty());
    }

    #[test]
    fn from_token() {
        // Setup
        let info = ParameterCollection::default()
            .with("description", "How loud.")
            .unwrap();

        // Execute
        let parameter = Parameter::from_token(
            "volume",
            "50%",
            ParameterType::Float,
            info.clone(),
            Converters::new().with(percent()),
            &Converters::default(),
        )
        .unwrap();

        // Verify
        assert_eq!(parameter.value(), &Value::Float(0.5));
        assert_eq!(parameter.additional_info(), &info);
        assert_eq!(parameter.converters().len(), 1);
        assert_eq!(parameter.value_as_string(), "50%");
    }

    #[test]
    fn from_token_error() {
        let error = Parameter::from_token(
            "volume",
            "loud",
            ParameterType::Float,
            ParameterCollection::default(),
            Converters::default(),
            &Converters::default(),
        )
        .unwrap_err();
        assert_eq!(error.kind, ParameterType::Float);
        assert_eq!(error.token, "loud");
    }

    #[test]
    fn set_value() {
        // Setup
        let mut parameter = Parameter::new("sleepFor", 1000);

        // Execute
        parameter.set_value(2000).unwrap();
        let error = parameter.set_value("2000").unwrap_err();

        // Verify
        assert_eq!(parameter.value(), &Value::Int(2000));
        assert_matches!(
            error,
            CollectionError::TypeMismatch {
                declared: ParameterType::Int,
                provided: ParameterType::String,
                ..
            }
        );
    }

    #[test]
    fn set_value_from_token() {
        // Setup
        let mut parameter = Parameter::new("volume", 1.0).with_converter(percent());

        // Execute
        parameter
            .set_value_from_token("25%", &Converters::default())
            .unwrap();

        // Verify
        assert_eq!(parameter.value(), &Value::Float(0.25));
        parameter
            .set_value_from_token("0.75", &Converters::default())
            .unwrap();
        assert_eq!(parameter.value(), &Value::Float(0.75));
    }

    #[test]
    fn set_value_from_token_error_keeps_value() {
        // Setup
        let mut parameter = Parameter::new("sleepFor", 1000);

        // Execute
        let result = parameter.set_value_from_token("notanumber", &Converters::default());

        // Verify
        assert_matches!(result, Err(ConversionError { kind: ParameterType::Int, .. }));
        assert_eq!(parameter.value(), &Value::Int(1000));
    }

    #[test]
    fn with_info() {
        let parameter = Parameter::new("output", "test.mkv")
            .with_info("desc", "Where to write.")
            .unwrap();
        assert_eq!(
            parameter
                .additional_info()
                .get_by_key("desc")
                .map(|p| p.value_as_string()),
            Some("Where to write.".to_string())
        );

        let error = parameter.with_info("desc", "again").unwrap_err();
        assert_matches!(error, CollectionError::DuplicateKey { ref key } if key == "desc");
    }

    #[test]
    fn equality_ignores_converters() {
        let a = Parameter::new("volume", 1.0);
        let b = Parameter::new("volume", 1.0).with_converter(percent());
        assert_eq!(a, b);
        assert_ne!(a, Parameter::new("volume", 2.0));
        assert_ne!(a, Parameter::new("volume", 1));
    }

    #[test]
    fn with_additional_info_replaces() {
        // Setup
        let info = ParameterCollection::default()
            .with("description", "Seconds.")
            .unwrap();

        // Execute
        let parameter = Parameter::new("sleepFor", 1000)
            .with_info("desc", "old")
            .unwrap()
            .with_additional_info(info.clone());

        // Verify
        assert_eq!(parameter.additional_info(), &info);
        assert!(!parameter.additional_info().has_key("desc"));
    }

    #[test]
    fn with_converters_replaces() {
        // Execute
        let mut parameter = Parameter::new("volume", 1.0)
            .with_converter(percent())
            .with_converters(Converters::default());

        // Verify
        assert!(parameter.converters().is_empty());
        assert_matches!(
            parameter.set_value_from_token("50%", &Converters::default()),
            Err(ConversionError { kind: ParameterType::Float, .. })
        );
        parameter
            .set_value_from_token("50%", &Converters::new().with(percent()))
            .unwrap();
        assert_eq!(parameter.value(), &Value::Float(0.5));
    }
}

