use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "--";

/// The value given to a key that has no following value token.
// Must be accepted by the built-in bool conversion.
pub const FLAG_VALUE: &str = "true";

/// Raised before any argument processing, when the merge configuration is unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An empty (or whitespace only) prefix cannot be told apart from a value token.
    #[error("prefix '{prefix}' must not be empty or whitespace.")]
    InvalidPrefix {
        /// The rejected prefix.
        prefix: String,
    },
}

/// The literal marker of an argument key (ex: `--`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    /// Validate a prefix.
    pub fn new(prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = prefix.into();

        if prefix.trim().is_empty() {
            return Err(ConfigError::InvalidPrefix { prefix });
        }

        Ok(Self(prefix))
    }

    /// The prefix text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self(DEFAULT_PREFIX.to_string())
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The key/value pairs found in an argument list, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentTokens {
    pairs: Vec<(String, String)>,
}

impl ArgumentTokens {
    /// Record `value` for `key`.
    /// A repeated key keeps its original position, but takes the latest value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.pairs.iter_mut().find(|(k, _)| k == &key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// The value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` was found.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The pairs, in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no keys were found.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Scan `arguments` into key/value pairs.
///
/// * A token starting with `prefix` is a key (with the prefix stripped).
/// * The next token is its value, unless that token is also a key or there is no next token.
/// In that case the key is a flag, and gets [`FLAG_VALUE`].
/// * Any other token is skipped.
///
/// ### Example
/// ```
/// use paramcli::{tokenize, Prefix};
///
/// let tokens = tokenize(["--output", "movie.mkv", "stray", "--shouldSleep"], &Prefix::default());
///
/// assert_eq!(tokens.get("output"), Some("movie.mkv"));
/// assert_eq!(tokens.get("shouldSleep"), Some("true"));
/// assert_eq!(tokens.len(), 2);
/// ```
pub fn tokenize<I, S>(arguments: I, prefix: &Prefix) -> ArgumentTokens
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = prefix.as_str();
    let mut tokens = ArgumentTokens::default();
    let mut arguments = arguments.into_iter().peekable();

    while let Some(token) = arguments.next() {
        let token = token.as_ref();

        match token.strip_prefix(prefix) {
            Some(key) => {
                let value = match arguments.next_if(|next| !next.as_ref().starts_with(prefix)) {
                    Some(value) => value.as_ref().to_string(),
                    None => FLAG_VALUE.to_string(),
                };

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Tokenized '{key}' = '{value}'.");
                }

                tokens.insert(key, value);
            }
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Skipping stray token '{token}'.");
                }
            }
        }
    }

    tokens
}
