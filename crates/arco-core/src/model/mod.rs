//! Model module for building optimization models.
//!
//! # Module Organization
//!
//! - [`error`]: Model error types
//! - [`builder`]: Methods for adding variables, constraints, and coefficients
//! - [`storage`]: Read access used by exporters

mod builder;
mod error;
mod storage;

use serde::{Deserialize, Serialize};

use crate::ids::VariableId;
use crate::types::{Constraint, Sense, Variable};

pub use error::ModelError;

/// A linear or mixed-integer program.
///
/// Fields are public so that callers (and deserializers) can populate a model
/// directly; the builder methods add validation on top. Variable and
/// constraint IDs are positions in the respective vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub sense: Sense,
    #[serde(default)]
    pub objective_offset: f64,
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty model with a name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether the objective is maximized.
    pub fn maximize(&self) -> bool {
        self.sense == Sense::Maximize
    }

    pub(crate) fn ensure_variable_exists(&self, id: VariableId) -> Result<(), ModelError> {
        if id.index() < self.variables.len() {
            Ok(())
        } else {
            Err(ModelError::InvalidVariableId(id))
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::ids::ConstraintId;
    use crate::types::Bounds;

    mod support;

    use support::{bounded_constraint, continuous_variable};

    #[test]
    fn test_new_model_is_empty() {
        let model = Model::new();
        assert_eq!(model.num_variables(), 0);
        assert_eq!(model.num_constraints(), 0);
        assert!(!model.maximize());
    }

    #[test]
    fn test_add_variable() {
        let mut model = Model::new();
        let var = continuous_variable(0.0, 10.0);

        let id = model.add_variable(var.clone()).unwrap();
        assert_eq!(id, VariableId::new(0));
        assert_eq!(model.num_variables(), 1);
        assert_eq!(model.get_variable(id).unwrap(), &var);
    }

    #[test]
    fn test_add_constraint() {
        let mut model = Model::new();
        let constraint = bounded_constraint(0.0, 100.0);

        let id = model.add_constraint(constraint.clone()).unwrap();
        assert_eq!(model.num_constraints(), 1);
        assert_eq!(model.get_constraint(id).unwrap(), &constraint);
    }

    #[test]
    fn test_add_constraint_with_unknown_term_fails() {
        let mut model = Model::new();
        let result =
            model.add_constraint(bounded_constraint(0.0, 1.0).with_term(VariableId::new(3), 1.0));
        assert_eq!(result, Err(ModelError::InvalidVariableId(VariableId::new(3))));
    }

    #[test]
    fn test_set_coefficient_overwrites_existing_entry() {
        let mut model = Model::new();
        let x = model.add_variable(continuous_variable(0.0, 10.0)).unwrap();
        let y = model.add_variable(continuous_variable(0.0, 10.0)).unwrap();
        let c = model.add_constraint(bounded_constraint(0.0, 15.0)).unwrap();

        model.set_coefficient(x, c, 1.5).unwrap();
        model.set_coefficient(y, c, -2.0).unwrap();
        model.set_coefficient(x, c, 4.0).unwrap();

        let row = &model.get_constraint(c).unwrap().terms;
        assert_eq!(row, &vec![(x, 4.0), (y, -2.0)]);
        assert_eq!(model.num_coefficients(), 2);
    }

    #[test]
    fn test_set_coefficient_with_invalid_ids_fails() {
        let mut model = Model::new();
        let x = model.add_variable(continuous_variable(0.0, 1.0)).unwrap();
        let c = model.add_constraint(bounded_constraint(0.0, 1.0)).unwrap();

        let bad_var = VariableId::new(99);
        assert_eq!(
            model.set_coefficient(bad_var, c, 1.0),
            Err(ModelError::InvalidVariableId(bad_var))
        );
        let bad_con = ConstraintId::new(99);
        assert_eq!(
            model.set_coefficient(x, bad_con, 1.0),
            Err(ModelError::InvalidConstraintId(bad_con))
        );
        assert!(matches!(
            model.set_coefficient(x, c, f64::NAN),
            Err(ModelError::InvalidCoefficient { .. })
        ));
    }

    #[test]
    fn test_variable_bounds_validation() {
        let mut model = Model::new();
        let result = model.add_variable(continuous_variable(5.0, 1.0));
        assert!(matches!(
            result,
            Err(ModelError::InvalidVariableBounds { .. })
        ));
    }

    #[test]
    fn test_constraint_bounds_validation() {
        let mut model = Model::new();
        let result = model.add_constraint(Constraint::new(Bounds::new(10.0, 0.0)));
        assert!(matches!(
            result,
            Err(ModelError::InvalidConstraintBounds { .. })
        ));
    }

    #[test]
    fn test_names_and_lookup() {
        let mut model = Model::with_name("plant");
        let x = model.add_variable(continuous_variable(0.0, 1.0)).unwrap();
        let c = model.add_constraint(bounded_constraint(0.0, 1.0)).unwrap();
        model.set_variable_name(x, "flow".to_string()).unwrap();
        model.set_constraint_name(c, "cap".to_string()).unwrap();

        assert_eq!(model.name.as_deref(), Some("plant"));
        assert_eq!(model.get_variable_by_name("flow"), Some(x));
        assert_eq!(model.get_constraint_by_name("cap"), Some(c));
        assert_eq!(model.get_variable_by_name("missing"), None);
    }

    #[test]
    fn test_objective_setters() {
        let mut model = Model::new();
        let x = model.add_variable(continuous_variable(0.0, 1.0)).unwrap();
        model.set_sense(Sense::Maximize);
        model.set_objective_coefficient(x, 3.5).unwrap();
        model.set_objective_offset(-2.0).unwrap();

        assert!(model.maximize());
        assert_eq!(model.variables[0].objective_coefficient, 3.5);
        assert_eq!(model.objective_offset, -2.0);
        assert!(model.set_objective_offset(f64::INFINITY).is_err());
    }

    #[test]
    fn test_model_json_roundtrip() {
        let mut model = Model::with_name("tiny");
        model.set_sense(Sense::Maximize);
        let x = model
            .add_variable(Variable::integer(Bounds::new(0.0, 4.0)).with_name("x"))
            .unwrap();
        model
            .add_constraint(Constraint::new(Bounds::at_most(7.0)).with_term(x, 2.0))
            .unwrap();

        let json = serde_json::to_string(&model).unwrap();
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}
