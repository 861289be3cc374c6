use std::sync::Arc;

use thiserror::Error;

use crate::model::{ParameterType, Value};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

type ParseFn = dyn Fn(&str) -> Option<Value> + Send + Sync;
type RenderFn = dyn Fn(&Value) -> Option<String> + Send + Sync;

/// A custom string conversion for one target [`ParameterType`].
///
/// Custom converters take precedence over the built-in conversion rules.
///
/// ### Example
/// ```
/// # use paramcli_collection::*;
/// // Accept "on"/"off" in addition to "true"/"false".
/// let switch = Converter::new(ParameterType::Bool, |token| match token {
///     "on" => Some(Value::Bool(true)),
///     "off" => Some(Value::Bool(false)),
///     _ => None,
/// });
///
/// assert_eq!(switch.parse("on"), Some(Value::Bool(true)));
/// assert_eq!(switch.parse("true"), None);
/// ```
#[derive(Clone)]
pub struct Converter {
    kind: ParameterType,
    parse: Arc<ParseFn>,
    render: Option<Arc<RenderFn>>,
}

impl Converter {
    /// Create a converter from a raw token into `kind`.
    /// The function returns `None` when it cannot convert the token.
    pub fn new(
        kind: ParameterType,
        parse: impl Fn(&str) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            parse: Arc::new(parse),
            render: None,
        }
    }

    /// Also use this converter to display values of its kind.
    pub fn with_render(
        mut self,
        render: impl Fn(&Value) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.render.replace(Arc::new(render));
        self
    }

    /// The target type of this converter.
    pub fn kind(&self) -> ParameterType {
        self.kind
    }

    /// Convert a raw token.
    /// Results which do not match the target type are rejected.
    pub fn parse(&self, token: &str) -> Option<Value> {
        (self.parse)(token).filter(|value| value.kind() == self.kind)
    }

    /// Display a value, if this converter has a render function for the value's type.
    pub fn render(&self, value: &Value) -> Option<String> {
        if value.kind() != self.kind {
            return None;
        }

        self.render.as_ref().and_then(|render| render(value))
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let render = if self.render.is_some() { ", render" } else { "" };
        write!(f, "Converter[{kind}{render}]", kind = self.kind)
    }
}

/// An ordered set of [`Converter`]s.
#[derive(Debug, Clone, Default)]
pub struct Converters {
    converters: Vec<Converter>,
}

impl Converters {
    /// Create an empty set of converters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a converter.
    /// Converters for the same type are tried in the order they are added.
    pub fn push(&mut self, converter: Converter) {
        self.converters.push(converter);
    }

    /// Add a converter (builder style).
    pub fn with(mut self, converter: Converter) -> Self {
        self.push(converter);
        self
    }

    /// The converters that target `kind`, in insertion order.
    pub fn for_kind(&self, kind: ParameterType) -> impl Iterator<Item = &Converter> {
        self.converters
            .iter()
            .filter(move |converter| converter.kind == kind)
    }

    /// All converters, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Converter> {
        self.converters.iter()
    }

    /// The number of converters.
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Whether there are no converters.
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl FromIterator<Converter> for Converters {
    fn from_iter<I: IntoIterator<Item = Converter>>(iter: I) -> Self {
        Self {
            converters: iter.into_iter().collect(),
        }
    }
}

/// Raised when no converter (custom or built-in) can convert a token into the declared type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot convert '{token}' to {kind}.")]
pub struct ConversionError {
    /// The raw token.
    pub token: String,
    /// The declared type.
    pub kind: ParameterType,
}

/// Convert `token` into `kind`.
///
/// Precedence: the parameter's own converters, then the caller supplied (global) converters, then the built-in rules.
pub fn convert(
    token: &str,
    kind: ParameterType,
    own: &Converters,
    global: &Converters,
) -> Result<Value, ConversionError> {
    for converter in own.for_kind(kind).chain(global.for_kind(kind)) {
        if let Some(value) = converter.parse(token) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Converted '{token}' to {kind} via {converter:?}.");
            }

            return Ok(value);
        }
    }

    kind.parse(token).ok_or_else(|| ConversionError {
        token: token.to_string(),
        kind,
    })
}

/// Display `value`, preferring a render function from `own`.
pub fn render(value: &Value, own: &Converters) -> String {
    own.for_kind(value.kind())
        .find_map(|converter| converter.render(value))
        .unwrap_or_else(|| value.to_string())
}
