//! Model builder methods for adding variables, constraints, and coefficients.

use crate::ids::{ConstraintId, VariableId};
use crate::types::{Bounds, Constraint, Sense, Variable};

use super::error::ModelError;
use super::Model;

impl Model {
    /// Add a variable to the model.
    pub fn add_variable(&mut self, variable: Variable) -> Result<VariableId, ModelError> {
        if invalid_bounds(variable.bounds) {
            return Err(ModelError::InvalidVariableBounds {
                lower: variable.bounds.lower,
                upper: variable.bounds.upper,
            });
        }
        if !variable.objective_coefficient.is_finite() {
            return Err(ModelError::InvalidCoefficient {
                coefficient: variable.objective_coefficient,
            });
        }

        let id = VariableId::new(self.variables.len() as u32);
        self.variables.push(variable);
        Ok(id)
    }

    /// Add a constraint to the model.
    ///
    /// Terms already present on `constraint` are checked against the current
    /// variable set.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId, ModelError> {
        if invalid_bounds(constraint.bounds) {
            return Err(ModelError::InvalidConstraintBounds {
                lower: constraint.bounds.lower,
                upper: constraint.bounds.upper,
            });
        }
        for (var_id, coeff) in &constraint.terms {
            self.ensure_variable_exists(*var_id)?;
            if !coeff.is_finite() {
                return Err(ModelError::InvalidCoefficient {
                    coefficient: *coeff,
                });
            }
        }

        let id = ConstraintId::new(self.constraints.len() as u32);
        self.constraints.push(constraint);
        Ok(id)
    }

    /// Set the coefficient of a variable in a constraint row.
    ///
    /// An existing entry for the same variable is overwritten in place, so the
    /// row keeps its first-insertion order.
    pub fn set_coefficient(
        &mut self,
        var_id: VariableId,
        constraint_id: ConstraintId,
        coefficient: f64,
    ) -> Result<(), ModelError> {
        if !coefficient.is_finite() {
            return Err(ModelError::InvalidCoefficient { coefficient });
        }
        self.ensure_variable_exists(var_id)?;
        let row = &mut self
            .constraints
            .get_mut(constraint_id.index())
            .ok_or(ModelError::InvalidConstraintId(constraint_id))?
            .terms;

        match row.iter_mut().find(|(id, _)| *id == var_id) {
            Some(entry) => entry.1 = coefficient,
            None => row.push((var_id, coefficient)),
        }
        Ok(())
    }

    /// Set the objective coefficient of a variable.
    pub fn set_objective_coefficient(
        &mut self,
        var_id: VariableId,
        coefficient: f64,
    ) -> Result<(), ModelError> {
        if !coefficient.is_finite() {
            return Err(ModelError::InvalidCoefficient { coefficient });
        }
        let var = self
            .variables
            .get_mut(var_id.index())
            .ok_or(ModelError::InvalidVariableId(var_id))?;
        var.objective_coefficient = coefficient;
        Ok(())
    }

    /// Set the objective sense.
    pub fn set_sense(&mut self, sense: Sense) {
        self.sense = sense;
        tracing::debug!(
            component = "model",
            operation = "set_sense",
            status = "success",
            sense = sense.as_str(),
            "Updated objective sense"
        );
    }

    /// Set the constant term added to the objective.
    pub fn set_objective_offset(&mut self, offset: f64) -> Result<(), ModelError> {
        if !offset.is_finite() {
            return Err(ModelError::InvalidCoefficient {
                coefficient: offset,
            });
        }
        self.objective_offset = offset;
        Ok(())
    }

    /// Set name for a variable.
    pub fn set_variable_name(&mut self, id: VariableId, name: String) -> Result<(), ModelError> {
        self.variables
            .get_mut(id.index())
            .ok_or(ModelError::InvalidVariableId(id))?
            .name = Some(name);
        Ok(())
    }

    /// Set name for a constraint.
    pub fn set_constraint_name(
        &mut self,
        id: ConstraintId,
        name: String,
    ) -> Result<(), ModelError> {
        self.constraints
            .get_mut(id.index())
            .ok_or(ModelError::InvalidConstraintId(id))?
            .name = Some(name);
        Ok(())
    }
}

fn invalid_bounds(bounds: Bounds) -> bool {
    bounds.lower.is_nan() || bounds.upper.is_nan() || bounds.lower > bounds.upper
}
