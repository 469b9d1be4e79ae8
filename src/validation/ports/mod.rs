//! Port definitions for the validation adapter.

pub mod machinery;
pub mod schema;

pub use machinery::{ClassMachinery, ClassToolkit, ConstraintValidator, InstanceTransformer};
pub use schema::{
    Issue, IssueReport, PathSegment, SafeParse, SafeParseOutcome, SchemaProbe, ThrowingValidate,
    ThrownFailure, ValidateOptions,
};
