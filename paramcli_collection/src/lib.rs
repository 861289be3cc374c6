//! Collection module for `paramcli`.
//! See [documentation root](https://docs.rs/paramcli/latest/paramcli/index.html) for full details.
//!
//! A [`ParameterCollection`] is an ordered, key-unique set of [`Parameter`]s.
//! Each parameter carries a declared [`ParameterType`] which never changes once created;
//! string input is converted into that type via [`Converters`] (custom) or the built-in rules.
#![deny(missing_docs)]
mod collection;
mod converter;
mod model;
mod parameter;

pub use collection::*;
pub use converter::*;
pub use model::*;
pub use parameter::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
