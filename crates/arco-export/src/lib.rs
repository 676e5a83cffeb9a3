//! LP and MPS text exporters for Arco models.
//!
//! [`ModelExporter`] borrows a [`Model`](arco_core::Model) and renders it as
//! LP text or as MPS text in fixed or free layout. Names are either the
//! declared ones, validated against the LP grammar, or synthetic `V`/`C`
//! names when obfuscation is requested.

mod analysis;
mod config;
mod error;
mod exporter;
mod header;
mod line_breaker;
mod lp;
mod mps;
mod names;
mod number;

pub use analysis::{
    classify, is_boolean, ModelAnalysis, NameTable, VariableKind, FIXED_MPS_NAME_WIDTH,
};
pub use config::{ExportOptions, MpsLayout, DEFAULT_MAX_LINE_LENGTH};
pub use error::{ExportError, NameKind};
pub use exporter::ModelExporter;
pub use line_breaker::LineBreaker;
pub use names::{is_valid_name, validate_name, NameIssue, MAX_NAME_LENGTH};
pub use number::format_general;
