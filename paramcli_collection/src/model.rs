use crate::collection::ParameterCollection;

/// The declared type of a [`Parameter`](crate::Parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
    /// `true` or `false`.
    Bool,
    /// A signed 64 bit integer.
    Int,
    /// A 64 bit float.
    Float,
    /// Free text.
    String,
    /// A comma separated list of text items.
    StringList,
    /// A nested [`ParameterCollection`].
    Collection,
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ParameterType::Bool => "bool",
            ParameterType::Int => "int",
            ParameterType::Float => "float",
            ParameterType::String => "string",
            ParameterType::StringList => "string list",
            ParameterType::Collection => "collection",
        };
        write!(f, "{name}")
    }
}

impl ParameterType {
    /// The built-in conversion from a raw token into this type.
    ///
    /// Returns `None` when the token cannot be represented.
    /// There is no built-in text form for [`ParameterType::Collection`].
    pub fn parse(&self, token: &str) -> Option<Value> {
        match self {
            ParameterType::Bool => {
                let token = token.trim();
                if token.eq_ignore_ascii_case("true") {
                    Some(Value::Bool(true))
                } else if token.eq_ignore_ascii_case("false") {
                    Some(Value::Bool(false))
                } else {
                    None
                }
            }
            ParameterType::Int => token.trim().parse::<i64>().ok().map(Value::Int),
            ParameterType::Float => token.trim().parse::<f64>().ok().map(Value::Float),
            ParameterType::String => Some(Value::String(token.to_string())),
            ParameterType::StringList => {
                if token.trim().is_empty() {
                    Some(Value::StringList(Vec::default()))
                } else {
                    Some(Value::StringList(
                        token.split(',').map(|item| item.trim().to_string()).collect(),
                    ))
                }
            }
            ParameterType::Collection => None,
        }
    }
}

/// A parameter value, tagged by its [`ParameterType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// See [`ParameterType::Bool`].
    Bool(bool),
    /// See [`ParameterType::Int`].
    Int(i64),
    /// See [`ParameterType::Float`].
    Float(f64),
    /// See [`ParameterType::String`].
    String(String),
    /// See [`ParameterType::StringList`].
    StringList(Vec<String>),
    /// See [`ParameterType::Collection`].
    Collection(ParameterCollection),
}

impl Value {
    /// The type tag of this value.
    pub fn kind(&self) -> ParameterType {
        match self {
            Value::Bool(_) => ParameterType::Bool,
            Value::Int(_) => ParameterType::Int,
            Value::Float(_) => ParameterType::Float,
            Value::String(_) => ParameterType::String,
            Value::StringList(_) => ParameterType::StringList,
            Value::Collection(_) => ParameterType::Collection,
        }
    }

    /// Get the inner `bool`, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the inner `i64`, if this is a [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the inner `f64`, if this is a [`Value::Float`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the inner text, if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => {
                // Integral floats still show a fractional part.
                if value.is_finite() && value.fract() == 0.0 {
                    write!(f, "{value:.1}")
                } else {
                    write!(f, "{value}")
                }
            }
            Value::String(value) => write!(f, "{value}"),
            Value::StringList(items) => write!(f, "[{}]", items.join(", ")),
            Value::Collection(collection) => write!(f, "{collection}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::StringList(value)
    }
}

impl From<ParameterCollection> for Value {
    fn from(value: ParameterCollection) -> Self {
        Value::Collection(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    #[rstest]
    #[case(ParameterType::Bool, "true", Some(Value::Bool(true)))]
    #[case(ParameterType::Bool, "True", Some(Value::Bool(true)))]
    #[case(ParameterType::Bool, " FALSE ", Some(Value::Bool(false)))]
    #[case(ParameterType::Bool, "yes", None)]
    #[case(ParameterType::Int, "2000", Some(Value::Int(2000)))]
    #[case(ParameterType::Int, " -3 ", Some(Value::Int(-3)))]
    #[case(ParameterType::Int, "notanumber", None)]
    #[case(ParameterType::Int, "1.5", None)]
    #[case(ParameterType::Float, "0.25", Some(Value::Float(0.25)))]
    #[case(ParameterType::Float, "3", Some(Value::Float(3.0)))]
    #[case(ParameterType::Float, "abc", None)]
    #[case(ParameterType::String, " movie.mkv", Some(Value::String(" movie.mkv".to_string())))]
    #[case(ParameterType::String, "", Some(Value::String("".to_string())))]
    #[case(ParameterType::StringList, "a, b,c", Some(Value::StringList(vec!["a".to_string(), "b".to_string(), "c".to_string()])))]
    #[case(ParameterType::StringList, "  ", Some(Value::StringList(vec![])))]
    #[case(ParameterType::Collection, "{}", None)]
    fn parse(#[case] kind: ParameterType, #[case] token: &str, #[case] expected: Option<Value>) {
        assert_eq!(kind.parse(token), expected);
    }

    #[rstest]
    #[case(ParameterType::Bool, "true")]
    #[case(ParameterType::Int, "17")]
    #[case(ParameterType::Float, "1.5")]
    #[case(ParameterType::String, "text")]
    fn parse_kind(#[case] kind: ParameterType, #[case] token: &str) {
        assert_eq!(kind.parse(token).unwrap().kind(), kind);
    }

    #[rstest]
    #[case(Value::Bool(false), "false")]
    #[case(Value::Int(1000), "1000")]
    #[case(Value::Float(1.0), "1.0")]
    #[case(Value::Float(0.5), "0.5")]
    #[case(Value::String("test.mkv".to_string()), "test.mkv")]
    #[case(Value::StringList(vec!["a".to_string(), "b".to_string()]), "[a, b]")]
    #[case(Value::Collection(ParameterCollection::default()), "{}")]
    fn display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(1000), Value::Int(1000));
        assert_eq!(Value::from(1.0f32), Value::Float(1.0));
        assert_eq!(Value::from("x"), Value::String("x".to_string()));
        assert_matches!(Value::from(ParameterCollection::default()), Value::Collection(_));
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(3).as_int(), Some(3));
        assert_eq!(Value::Int(3).as_float(), None);
        assert_eq!(Value::Float(2.5).as_float(), Some(2.5));
        assert_eq!(Value::String("s".to_string()).as_str(), Some("s"));
        assert_eq!(Value::Bool(true).as_str(), None);
    }

    #[test]
    fn display_parse_inverse() {
        for _ in 0..100 {
            let int = Value::Int(thread_rng().gen());
            assert_eq!(ParameterType::Int.parse(&int.to_string()), Some(int));

            let boolean = Value::Bool(thread_rng().gen());
            assert_eq!(ParameterType::Bool.parse(&boolean.to_string()), Some(boolean));
        }
    }
}
