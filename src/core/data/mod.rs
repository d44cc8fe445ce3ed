//! Core data types shared by classification, indexing and translation.
//!
//! ## Module Structure
//!
//! - `record`: classified records and their enums (UiComponent, ElementType, ContextAttr)
//! - `status`: translation status of an entry

pub mod record;
pub mod status;

pub use record::{
    ClassifiedRecord, ClassifiedRecords, ContextAttr, ElementType, GLOBAL_VARIABLES_TOPIC,
    KeyClassification, KeyContext, UNKNOWN_TOPIC, UiComponent,
};
pub use status::TranslationStatus;
