//! `paramcli` overlays command line arguments onto a collection of named, typed default parameters.
//!
//! Rather than declaring a parser, you declare your *defaults*: a [`ParameterCollection`] where each entry has a key, a value, and (implicitly) a declared type.
//! `paramcli` then reads `--key value` pairs from the command line and converts each value to the declared type of the matching parameter.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/test_project.rs")]
//! ```
//!
//! ```console
//! $ test_project --output movie.mkv --shouldSleep
//! The default parameters: {input: , output: test.mkv, volume: 1.0, sleepFor: 1000, shouldSleep: false}
//!
//! Parameters with values gotten from arguments: {input: , output: movie.mkv, volume: 1.0, sleepFor: 1000, shouldSleep: true}
//! +-------------+-----------+----------------------------------+
//! | Parameter   | Value     | Description                      |
//! +-------------+-----------+----------------------------------+
//! | input       |           | The file to read.                |
//! | output      | movie.mkv | The file to write.               |
//! | volume      | 1.0       |                                  |
//! | sleepFor    | 1000      | Milliseconds to sleep, if asked. |
//! | shouldSleep | true      |                                  |
//! +-------------+-----------+----------------------------------+
//! ```
//!
//! # Cli Semantics
//! * A token starting with the prefix (default `--`, see [`MergeOptions::prefix`]) is a key.
//! The prefix cannot be empty or whitespace, since it must be distinguishable from values.
//! * The token following a key is its value, unless that token is itself a key.
//! A key without a value is a flag, and takes the value `true`.
//! * Any other token is ignored.
//! * When a key is repeated, the last value wins.
//! * Keys that are not in the default collection are ignored; keys that are not on the command line keep their default.
//!
//! # Merging
//! There are two ways to merge, with distinct ownership:
//! * [`merge_new`] borrows the defaults and produces a new collection.
//! Parameters that are not overridden are shared with the defaults, not copied.
//! * [`merge_in_place`] mutates the collection it is given, and returns it.
//! If a value fails to convert, the merge stops with [`MergeError::Conversion`].
//! Parameters updated before the failure keep their new values (there is no rollback).
//!
//! Both are also available as methods via [`ConsoleArguments`].
//!
//! # Conversion
//! Each value is converted to its parameter's declared [`ParameterType`], trying in order:
//! 1. The parameter's own [`Converter`]s.
//! 2. The caller supplied converters (see [`MergeOptions::converter`]).
//! 3. The built-in rules (see [`ParameterType::parse`]).
//!
//! # Tables
//! [`TableRenderer`] (or [`render_table`]) formats a collection as a bordered text table, with an optional description column sourced from each parameter's metadata.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events for tokenizing, merging, conversion, and table layout.
#![deny(missing_docs)]
mod merge;
mod table;
mod tokens;
mod ui;

pub use merge::*;
pub use paramcli_collection::*;
pub use table::*;
pub use tokens::*;
pub use ui::{ConsoleInterface, UserInterface};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
