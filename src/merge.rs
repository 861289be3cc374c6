use std::sync::Arc;

use paramcli_collection::{ConversionError, Converter, Converters, Parameter, ParameterCollection};
use thiserror::Error;

use crate::tokens::{tokenize, ConfigError, Prefix, DEFAULT_PREFIX};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Raised when merging arguments onto a [`ParameterCollection`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// The merge options are unusable; no arguments were processed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An argument value could not be converted to its parameter's declared type.
    ///
    /// For [`merge_in_place`], parameters updated before the failing one keep their new values.
    #[error("parameter '{key}': {source}")]
    Conversion {
        /// The key of the failing parameter.
        key: String,
        /// The underlying conversion failure.
        #[source]
        source: ConversionError,
    },
}

/// The configuration of a merge.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    prefix: String,
    converters: Converters,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            converters: Converters::default(),
        }
    }
}

impl MergeOptions {
    /// Set the argument key prefix (default `--`).
    /// The prefix is validated when the merge runs.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Add a caller supplied converter.
    /// These apply to every parameter, after the parameter's own converters.
    pub fn converter(mut self, converter: Converter) -> Self {
        self.converters.push(converter);
        self
    }

    /// Replace the caller supplied converters.
    pub fn converters(mut self, converters: Converters) -> Self {
        self.converters = converters;
        self
    }

    /// The configured prefix.
    pub fn get_prefix(&self) -> &str {
        &self.prefix
    }

    /// The caller supplied converters.
    pub fn get_converters(&self) -> &Converters {
        &self.converters
    }
}

/// Produce a new collection from `parameters`, with values overridden by `arguments`.
///
/// Parameters not mentioned in `arguments` are shared (not copied) with `parameters`, which is never mutated.
/// Argument keys that are not in `parameters` are ignored.
///
/// ### Example
/// ```
/// use paramcli::*;
///
/// let defaults = ParameterCollection::new()
///     .with("output", "test.mkv")?
///     .with("shouldSleep", false)?;
///
/// let merged = merge_new(&defaults, ["--output", "movie.mkv", "--shouldSleep"], &MergeOptions::default())?;
///
/// assert_eq!(merged.get_by_key("output").unwrap().value(), &Value::from("movie.mkv"));
/// assert_eq!(merged.get_by_key("shouldSleep").unwrap().value(), &Value::Bool(true));
/// assert_eq!(defaults.get_by_key("shouldSleep").unwrap().value(), &Value::Bool(false));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn merge_new<I, S>(
    parameters: &ParameterCollection,
    arguments: I,
    options: &MergeOptions,
) -> Result<ParameterCollection, MergeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = Prefix::new(options.prefix.as_str())?;
    let tokens = tokenize(arguments, &prefix);
    let mut result = ParameterCollection::new();

    for parameter in parameters.iter_shared() {
        let merged = match tokens.get(parameter.key()) {
            Some(token) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Setting '{}' from '{token}'.", parameter.key());
                }

                let updated = Parameter::from_token(
                    parameter.key(),
                    token,
                    parameter.kind(),
                    parameter.additional_info().clone(),
                    parameter.converters().clone(),
                    &options.converters,
                )
                .map_err(|source| MergeError::Conversion {
                    key: parameter.key().to_string(),
                    source,
                })?;
                Arc::new(updated)
            }
            None => Arc::clone(parameter),
        };

        result
            .push_shared(merged)
            .expect("internal error - keys of the source collection must be unique");
    }

    #[cfg(feature = "tracing_debug")]
    {
        for (key, _) in tokens.iter().filter(|(key, _)| !parameters.has_key(key)) {
            debug!("Ignoring unknown argument '{key}'.");
        }
    }

    Ok(result)
}

/// Override the values of `parameters` by `arguments`, mutating the collection.
///
/// Argument keys are applied in order of first appearance; keys that are not in `parameters` are ignored.
/// On a conversion error the merge stops: parameters updated before the failing one are *not* rolled back.
///
/// ### Example
/// ```
/// use paramcli::*;
///
/// let mut defaults = ParameterCollection::new().with("sleepFor", 1000)?;
///
/// merge_in_place(&mut defaults, ["--sleepFor", "2000"], &MergeOptions::default())?;
///
/// assert_eq!(defaults.get_by_key("sleepFor").unwrap().value(), &Value::Int(2000));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn merge_in_place<'p, I, S>(
    parameters: &'p mut ParameterCollection,
    arguments: I,
    options: &MergeOptions,
) -> Result<&'p mut ParameterCollection, MergeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = Prefix::new(options.prefix.as_str())?;
    let tokens = tokenize(arguments, &prefix);

    for (key, token) in tokens.iter() {
        match parameters.get_by_key_mut(key) {
            Some(parameter) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Setting '{key}' from '{token}'.");
                }

                parameter
                    .set_value_from_token(token, &options.converters)
                    .map_err(|source| MergeError::Conversion {
                        key: key.to_string(),
                        source,
                    })?;
            }
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Ignoring unknown argument '{key}'.");
                }
            }
        }
    }

    Ok(parameters)
}

/// Behaviour for setting parameter values from the command line.
///
/// ### Example
/// ```no_run
/// use paramcli::*;
///
/// let defaults = ParameterCollection::new().with("verbose", false)?;
/// let parameters = defaults.with_console_arguments(std::env::args().skip(1), &MergeOptions::default())?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait ConsoleArguments {
    /// See [`merge_new`].
    fn with_console_arguments<I, S>(
        &self,
        arguments: I,
        options: &MergeOptions,
    ) -> Result<ParameterCollection, MergeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// See [`merge_in_place`].
    fn apply_console_arguments<I, S>(
        &mut self,
        arguments: I,
        options: &MergeOptions,
    ) -> Result<&mut Self, MergeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;
}

impl ConsoleArguments for ParameterCollection {
    fn with_console_arguments<I, S>(
        &self,
        arguments: I,
        options: &MergeOptions,
    ) -> Result<ParameterCollection, MergeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        merge_new(self, arguments, options)
    }

    fn apply_console_arguments<I, S>(
        &mut self,
        arguments: I,
        options: &MergeOptions,
    ) -> Result<&mut Self, MergeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        merge_in_place(self, arguments, options)
    }
}
