//! Udyam Registration Schema Model
//!
//! Shared data model for the MSME registration portal: the identity-field
//! pattern registry, the form field/step schema types, the hand-authored
//! default schemas, and the submission record shape.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Schema Subsystem                        │
//! │                                                             │
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐       │
//! │  │   Pattern   │   │ Field/Form  │   │   Static    │       │
//! │  │  Registry   │──▶│   Schema    │◀──│  Defaults   │       │
//! │  │  (regex)    │   │   Model     │   │ (step 1/2)  │       │
//! │  └─────────────┘   └─────────────┘   └─────────────┘       │
//! │         │                                   │               │
//! │         ▼                                   ▼               │
//! │     Validator                        Schema Provider        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]

pub mod defaults;
pub mod field;
pub mod patterns;
pub mod submission;

pub use field::{FieldOption, FieldType, FieldValidation, FormField, FormSchema};
pub use patterns::{PatternKind, PatternRegistry};
pub use submission::SubmissionRecord;
