//! File parsers and writers.
//!
//! - `json`: localization export loader and translated-file exporter

pub mod json;
