use std::sync::Arc;

use thiserror::Error;

use crate::model::{ParameterType, Value};
use crate::parameter::Parameter;

/// Raised when a [`ParameterCollection`] or [`Parameter`] invariant would be broken.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Parameter names must be unique within a collection.
    #[error("parameter '{key}' already exists.")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },

    /// A parameter's declared type never changes.
    #[error("parameter '{key}' is declared as {declared}, not {provided}.")]
    TypeMismatch {
        /// The parameter key.
        key: String,
        /// The declared type of the parameter.
        declared: ParameterType,
        /// The type of the rejected value.
        provided: ParameterType,
    },
}

/// An ordered, key-unique set of [`Parameter`]s.
///
/// Parameters are held behind [`Arc`], so cloning a collection is shallow: both copies share every parameter.
/// Mutation through [`ParameterCollection::get_by_key_mut`] is copy-on-write, and never leaks into other collections.
///
/// Collections are `Send + Sync`, but carry no locking of their own: share one across threads behind a `Mutex` (or similar).
///
/// ### Example
/// ```
/// # use paramcli_collection::*;
/// let defaults = ParameterCollection::new()
///     .with("input", "")?
///     .with("output", "test.mkv")?
///     .with("volume", 1.0)?
///     .with("sleepFor", 1000)?
///     .with("shouldSleep", false)?;
///
/// assert_eq!(defaults.len(), 5);
/// assert_eq!(
///     defaults.to_string(),
///     "{input: , output: test.mkv, volume: 1.0, sleepFor: 1000, shouldSleep: false}"
/// );
/// # Ok::<(), CollectionError>(())
/// ```
#[derive(Clone, Default)]
pub struct ParameterCollection {
    parameters: Vec<Arc<Parameter>>,
}

impl ParameterCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn add(&mut self, parameter: Parameter) -> Result<(), CollectionError> {
        self.push_shared(Arc::new(parameter))
    }

    /// Add a parameter that may already be shared with other collections.
    pub fn push_shared(&mut self, parameter: Arc<Parameter>) -> Result<(), CollectionError> {
        if self.has_key(parameter.key()) {
            return Err(CollectionError::DuplicateKey {
                key: parameter.key().to_string(),
            });
        }

        self.parameters.push(parameter);
        Ok(())
    }

    /// Add a parameter built from `key` and `value`; the declared type follows the value.
    pub fn add_value(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), CollectionError> {
        self.add(Parameter::new(key, value))
    }

    /// Add a parameter built from `key` and `value` (builder style).
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, CollectionError> {
        self.add_value(key, value)?;
        Ok(self)
    }

    /// Add a parameter (builder style).
    pub fn with_parameter(mut self, parameter: Parameter) -> Result<Self, CollectionError> {
        self.add(parameter)?;
        Ok(self)
    }

    /// Whether a parameter with `key` exists.
    pub fn has_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Get the parameter with `key`.
    pub fn get_by_key(&self, key: &str) -> Option<&Parameter> {
        self.shared_by_key(key).map(Arc::as_ref)
    }

    /// Get the shared handle of the parameter with `key`.
    pub fn shared_by_key(&self, key: &str) -> Option<&Arc<Parameter>> {
        self.position(key).map(|i| &self.parameters[i])
    }

    /// Get the parameter with `key` for mutation.
    ///
    /// If the parameter is shared with another collection, it is first copied so that the other collection is unaffected.
    pub fn get_by_key_mut(&mut self, key: &str) -> Option<&mut Parameter> {
        let i = self.position(key)?;
        Some(Arc::make_mut(&mut self.parameters[i]))
    }

    /// The parameters, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().map(Arc::as_ref)
    }

    /// The shared handles of the parameters, in insertion order.
    pub fn iter_shared(&self) -> impl Iterator<Item = &Arc<Parameter>> {
        self.parameters.iter()
    }

    /// The parameter keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|parameter| parameter.key())
    }

    /// The number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the collection has no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.parameters
            .iter()
            .position(|parameter| parameter.key() == key)
    }
}

impl PartialEq for ParameterCollection {
    fn eq(&self, other: &Self) -> bool {
        self.parameters.len() == other.parameters.len()
            && self
                .parameters
                .iter()
                .zip(other.parameters.iter())
                .all(|(a, b)| Arc::ptr_eq(a, b) || a == b)
    }
}

impl std::fmt::Debug for ParameterCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.parameters
                    .iter()
                    .map(|parameter| (parameter.key(), parameter.value())),
            )
            .finish()
    }
}

impl std::fmt::Display for ParameterCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self
            .parameters
            .iter()
            .map(|parameter| format!("{}: {}", parameter.key(), parameter.value_as_string()))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

impl<'a> IntoIterator for &'a ParameterCollection {
    type Item = &'a Parameter;
    type IntoIter =
        std::iter::Map<std::slice::Iter<'a, Arc<Parameter>>, fn(&Arc<Parameter>) -> &Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters
            .iter()
            .map(Arc::as_ref as fn(&Arc<Parameter>) -> &Parameter)
    }
}
