//! Storage access methods for the model.

use crate::ids::{ConstraintId, VariableId};
use crate::types::{Constraint, Variable};

use super::error::ModelError;
use super::Model;

impl Model {
    /// Get the number of variables
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Get the number of constraints
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Get the number of stored row entries, zeros included.
    pub fn num_coefficients(&self) -> usize {
        self.constraints.iter().map(|con| con.terms.len()).sum()
    }

    /// Get a variable by ID.
    pub fn get_variable(&self, id: VariableId) -> Result<&Variable, ModelError> {
        self.variables
            .get(id.index())
            .ok_or(ModelError::InvalidVariableId(id))
    }

    /// Get a constraint by ID.
    pub fn get_constraint(&self, id: ConstraintId) -> Result<&Constraint, ModelError> {
        self.constraints
            .get(id.index())
            .ok_or(ModelError::InvalidConstraintId(id))
    }

    /// Iterate over variables together with their IDs.
    pub fn variables(&self) -> impl Iterator<Item = (VariableId, &Variable)> {
        self.variables
            .iter()
            .enumerate()
            .map(|(idx, var)| (VariableId::new(idx as u32), var))
    }

    /// Iterate over constraints together with their IDs.
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, &Constraint)> {
        self.constraints
            .iter()
            .enumerate()
            .map(|(idx, con)| (ConstraintId::new(idx as u32), con))
    }

    /// Lookup a variable by name.
    pub fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variables()
            .find_map(|(id, var)| (var.name.as_deref() == Some(name)).then_some(id))
    }

    /// Lookup a constraint by name.
    pub fn get_constraint_by_name(&self, name: &str) -> Option<ConstraintId> {
        self.constraints()
            .find_map(|(id, con)| (con.name.as_deref() == Some(name)).then_some(id))
    }
}
