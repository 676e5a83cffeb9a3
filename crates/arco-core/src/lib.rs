//! Arco core model for linear and mixed-integer programs.
//!
//! The model is row-major: every [`Constraint`] owns its sparse list of
//! `(VariableId, coefficient)` terms, and every [`Variable`] carries its own
//! objective coefficient. Exporters borrow a fully populated [`Model`] and
//! never mutate it.

pub mod ids;
pub mod model;
pub mod types;

pub use ids::{ConstraintId, VariableId};
pub use model::{Model, ModelError};
pub use types::{Bounds, Constraint, Sense, Variable};
