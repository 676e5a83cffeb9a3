//! Export error types.

use arco_core::{ConstraintId, VariableId};

use crate::names::NameIssue;

/// Which kind of model item a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Variable,
    Constraint,
}

impl NameKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NameKind::Variable => "variable",
            NameKind::Constraint => "constraint",
        }
    }
}

/// Errors that abort an export. No partial output is returned with them.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// A declared name breaks the LP/MPS grammar and names are not obfuscated.
    InvalidName {
        kind: NameKind,
        index: usize,
        name: String,
        issue: NameIssue,
    },
    /// A constraint row references a variable outside the model.
    OutOfRangeReference {
        constraint: ConstraintId,
        position: usize,
        variable: VariableId,
        num_variables: usize,
    },
}

impl ExportError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ExportError::InvalidName { .. } => "EXPORT_INVALID_NAME",
            ExportError::OutOfRangeReference { .. } => "EXPORT_OUT_OF_RANGE_REFERENCE",
        }
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::InvalidName {
                kind,
                index,
                name,
                issue,
            } => write!(
                f,
                "[{}] Invalid {} name {:?} at index {}: {}; export with obfuscated names instead",
                self.code(),
                kind.as_str(),
                name,
                index,
                issue
            ),
            ExportError::OutOfRangeReference {
                constraint,
                position,
                variable,
                num_variables,
            } => write!(
                f,
                "[{}] Constraint {} term {} references variable {} but the model has {} variables",
                self.code(),
                constraint.inner(),
                position,
                variable.inner(),
                num_variables
            ),
        }
    }
}

impl std::error::Error for ExportError {}
