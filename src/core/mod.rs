//! Core localization engine.
//!
//! Data flows leaf first: a raw mapping is checked by `structure`, each entry
//! is classified by `classify`, and the classified set is summarized and
//! filtered by `index`. Translation values live in `translations`.
//!
//! ## Module Structure
//!
//! - `classify`: key string → topic, component, element, context, description
//! - `data`: record types shared across modules
//! - `index`: summaries, filters and analysis reports over classified records
//! - `parsers`: localization file loading and export
//! - `structure`: structural validation of raw mappings
//! - `translations`: per-key, per-language translation store

pub mod classify;
pub mod data;
pub mod index;
pub mod parsers;
pub mod structure;
pub mod translations;

pub use data::{
    ClassifiedRecord, ClassifiedRecords, ContextAttr, ElementType, KeyClassification,
    TranslationStatus, UiComponent,
};
pub use parsers::json::{LoadError, LocalizationFile, check_file, classify_mapping, export, load, write_json};
pub use structure::{StructureReport, validate_structure};
pub use translations::TranslationStore;
