//! Index newtypes for variables and constraints.

use serde::{Deserialize, Serialize};

macro_rules! define_id_type {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an ID from a u32 value.
            pub fn new(value: u32) -> Self {
                Self(value)
            }

            /// Get the inner u32 value.
            pub fn inner(self) -> u32 {
                self.0
            }

            /// Position of the referenced item in its model vector.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", $prefix, self.0)
            }
        }
    };
}

define_id_type!(VariableId, "variable");
define_id_type!(ConstraintId, "constraint");

#[cfg(test)]
mod tests {
    use super::{ConstraintId, VariableId};

    #[test]
    fn variable_id_index_matches_inner() {
        let id = VariableId::new(7);
        assert_eq!(id.inner(), 7);
        assert_eq!(id.index(), 7);
    }

    #[test]
    fn ids_display_with_kind() {
        assert_eq!(VariableId::new(3).to_string(), "variable#3");
        assert_eq!(ConstraintId::new(11).to_string(), "constraint#11");
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&VariableId::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: ConstraintId = serde_json::from_str("5").unwrap();
        assert_eq!(back, ConstraintId::new(5));
    }
}
