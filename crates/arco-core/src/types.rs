use serde::{Deserialize, Serialize};

use crate::ids::VariableId;

/// Optimization sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sense {
    #[default]
    Minimize,
    Maximize,
}

impl Sense {
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Minimize => "minimize",
            Sense::Maximize => "maximize",
        }
    }
}

/// Bounds for a variable or constraint.
///
/// Either side may be infinite. In JSON, infinite values are written as the
/// strings `"inf"` and `"-inf"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    #[serde(with = "bound_value")]
    pub lower: f64,
    #[serde(with = "bound_value")]
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// `(-inf, +inf)`
    pub fn free() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// `[0, +inf)`, the default domain of a variable.
    pub fn non_negative() -> Self {
        Self::new(0.0, f64::INFINITY)
    }

    /// `[value, value]`
    pub fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    /// `(-inf, upper]`
    pub fn at_most(upper: f64) -> Self {
        Self::new(f64::NEG_INFINITY, upper)
    }

    /// `[lower, +inf)`
    pub fn at_least(lower: f64) -> Self {
        Self::new(lower, f64::INFINITY)
    }

    pub fn is_fixed(&self) -> bool {
        self.lower == self.upper
    }

    pub fn has_finite_lower(&self) -> bool {
        self.lower != f64::NEG_INFINITY
    }

    pub fn has_finite_upper(&self) -> bool {
        self.upper != f64::INFINITY
    }
}

/// A decision variable with bounds, integrality and objective coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "Bounds::non_negative")]
    pub bounds: Bounds,
    #[serde(default)]
    pub is_integer: bool,
    #[serde(default)]
    pub objective_coefficient: f64,
}

impl Variable {
    /// Create a binary variable with bounds [0, 1] and integer constraint.
    pub fn binary() -> Self {
        Self::integer(Bounds::new(0.0, 1.0))
    }

    /// Create a continuous variable with specified bounds.
    pub fn continuous(bounds: Bounds) -> Self {
        Self {
            name: None,
            bounds,
            is_integer: false,
            objective_coefficient: 0.0,
        }
    }

    /// Create an integer variable with specified bounds.
    pub fn integer(bounds: Bounds) -> Self {
        Self {
            is_integer: true,
            ..Self::continuous(bounds)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_objective(mut self, coefficient: f64) -> Self {
        self.objective_coefficient = coefficient;
        self
    }
}

/// A linear constraint `lower <= sum(coeff * var) <= upper`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "Bounds::free")]
    pub bounds: Bounds,
    /// Sparse row; entries are kept in insertion order.
    #[serde(default)]
    pub terms: Vec<(VariableId, f64)>,
}

impl Constraint {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            name: None,
            bounds,
            terms: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_term(mut self, var_id: VariableId, coefficient: f64) -> Self {
        self.terms.push((var_id, coefficient));
        self
    }
}

/// Serde adapter for bound values that may be infinite.
mod bound_value {
    use std::fmt;

    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;

    pub(super) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_infinite() {
            serializer.serialize_str(if value.is_sign_positive() { "inf" } else { "-inf" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(BoundVisitor)
    }

    struct BoundVisitor;

    impl Visitor<'_> for BoundVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, \"inf\" or \"-inf\"")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
            match value.to_ascii_lowercase().as_str() {
                "inf" | "+inf" | "infinity" | "+infinity" => Ok(f64::INFINITY),
                "-inf" | "-infinity" => Ok(f64::NEG_INFINITY),
                _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
            }
        }
    }
}
