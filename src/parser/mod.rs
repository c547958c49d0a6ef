//! Parsing of taxonomy labels.
//!
//! * [label_grammar] - splitting a label into dotted path and text
//! * [label_source] - reading labels from files and readers
//! * [parsing_error] - the crate's error type

pub mod label_grammar;
pub mod label_source;
pub mod parsing_error;

pub use self::label_grammar::{LabelParts, split_label};
pub use self::parsing_error::LabelTreeError;
