//! One-pass model analysis shared by the LP and MPS writers.

use std::borrow::Cow;

use arco_core::{Model, Variable};

use crate::error::{ExportError, NameKind};
use crate::names::check_name;

/// Width of a name field in fixed MPS.
pub const FIXED_MPS_NAME_WIDTH: usize = 8;

/// Integrality class of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    /// Integer with bounds that round to exactly `[0, 1]`.
    Binary,
    Integer,
    Continuous,
}

/// Integer variable whose bounds round inward to `[0, 1]`.
pub fn is_boolean(var: &Variable) -> bool {
    var.is_integer && var.bounds.lower.ceil() == 0.0 && var.bounds.upper.floor() == 1.0
}

pub fn classify(var: &Variable) -> VariableKind {
    if is_boolean(var) {
        VariableKind::Binary
    } else if var.is_integer {
        VariableKind::Integer
    } else {
        VariableKind::Continuous
    }
}

/// Derived counts and name widths, computed once per exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelAnalysis {
    num_binary_variables: usize,
    num_integer_variables: usize,
    num_continuous_variables: usize,
    variable_digits: usize,
    constraint_digits: usize,
}

impl ModelAnalysis {
    pub fn setup(model: &Model) -> Self {
        let mut analysis = Self {
            num_binary_variables: 0,
            num_integer_variables: 0,
            num_continuous_variables: 0,
            variable_digits: decimal_digits(model.num_variables()),
            constraint_digits: decimal_digits(model.num_constraints()),
        };
        for var in &model.variables {
            match classify(var) {
                VariableKind::Binary => analysis.num_binary_variables += 1,
                VariableKind::Integer => analysis.num_integer_variables += 1,
                VariableKind::Continuous => analysis.num_continuous_variables += 1,
            }
        }

        tracing::debug!(
            component = "export",
            operation = "setup",
            status = "success",
            binary = analysis.num_binary_variables,
            integer = analysis.num_integer_variables,
            continuous = analysis.num_continuous_variables,
            variable_digits = analysis.variable_digits,
            constraint_digits = analysis.constraint_digits,
            "Analyzed model for export"
        );
        analysis
    }

    pub fn num_binary_variables(&self) -> usize {
        self.num_binary_variables
    }

    /// Integer variables that are not binary.
    pub fn num_integer_variables(&self) -> usize {
        self.num_integer_variables
    }

    pub fn num_continuous_variables(&self) -> usize {
        self.num_continuous_variables
    }

    /// Zero-padding width of synthetic variable names.
    pub fn variable_digits(&self) -> usize {
        self.variable_digits
    }

    /// Zero-padding width of synthetic constraint names.
    pub fn constraint_digits(&self) -> usize {
        self.constraint_digits
    }

    pub fn synthetic_variable_name(&self, index: usize) -> String {
        format!("V{index:0width$}", width = self.variable_digits)
    }

    pub fn synthetic_constraint_name(&self, index: usize) -> String {
        format!("C{index:0width$}", width = self.constraint_digits)
    }
}

/// Display names of every variable and constraint for one naming mode.
#[derive(Debug, Clone)]
pub struct NameTable<'m> {
    variables: Vec<Cow<'m, str>>,
    constraints: Vec<Cow<'m, str>>,
}

impl<'m> NameTable<'m> {
    /// Declared names where present; synthetic `V`/`C` names otherwise or
    /// when `obfuscate` is set.
    pub fn build(model: &'m Model, analysis: &ModelAnalysis, obfuscate: bool) -> Self {
        let variables = model
            .variables
            .iter()
            .enumerate()
            .map(|(idx, var)| match var.name.as_deref() {
                Some(name) if !obfuscate => Cow::Borrowed(name),
                _ => Cow::Owned(analysis.synthetic_variable_name(idx)),
            })
            .collect();
        let constraints = model
            .constraints
            .iter()
            .enumerate()
            .map(|(idx, con)| match con.name.as_deref() {
                Some(name) if !obfuscate => Cow::Borrowed(name),
                _ => Cow::Owned(analysis.synthetic_constraint_name(idx)),
            })
            .collect();
        Self {
            variables,
            constraints,
        }
    }

    /// Name of the variable at `index`; callers check the index first.
    pub fn variable(&self, index: usize) -> &str {
        &self.variables[index]
    }

    /// Name of the constraint at `index`.
    pub fn constraint(&self, index: usize) -> &str {
        &self.constraints[index]
    }

    /// Whether every name fits a fixed MPS name field.
    pub fn can_use_fixed_mps(&self) -> bool {
        self.variables
            .iter()
            .chain(&self.constraints)
            .all(|name| name.chars().count() <= FIXED_MPS_NAME_WIDTH)
    }

    /// Validate variable names, then constraint names; first failure wins.
    pub fn check_all_names(&self, log_invalid_names: bool) -> Result<(), ExportError> {
        let groups = [
            (NameKind::Variable, &self.variables),
            (NameKind::Constraint, &self.constraints),
        ];
        for (kind, names) in groups {
            for (index, name) in names.iter().enumerate() {
                if let Err(issue) = check_name(name, log_invalid_names) {
                    return Err(ExportError::InvalidName {
                        kind,
                        index,
                        name: name.to_string(),
                        issue,
                    });
                }
            }
        }
        Ok(())
    }
}

fn decimal_digits(count: usize) -> usize {
    count.to_string().len()
}
