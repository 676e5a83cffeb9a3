//! Name grammar shared by the LP and MPS formats.

/// Longest name accepted by LP and MPS readers.
pub const MAX_NAME_LENGTH: usize = 255;

const FORBIDDEN_CHARS: [char; 10] = [' ', '+', '-', '*', '/', '<', '>', '=', ':', '\\'];
const FORBIDDEN_FIRST_CHARS: [char; 12] =
    ['$', '.', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Reason a name cannot be written to an LP or MPS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameIssue {
    Empty,
    TooLong { length: usize },
    ForbiddenCharacter(char),
    ForbiddenFirstCharacter(char),
}

impl std::fmt::Display for NameIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameIssue::Empty => write!(f, "name is empty"),
            NameIssue::TooLong { length } => {
                write!(f, "length {length} exceeds {MAX_NAME_LENGTH}")
            }
            NameIssue::ForbiddenCharacter(ch) => {
                write!(f, "contains forbidden character {ch:?}")
            }
            NameIssue::ForbiddenFirstCharacter(ch) => {
                write!(f, "starts with forbidden character {ch:?}")
            }
        }
    }
}

/// Check `name` against the LP/MPS name grammar.
pub fn validate_name(name: &str) -> Result<(), NameIssue> {
    let Some(first) = name.chars().next() else {
        return Err(NameIssue::Empty);
    };
    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(NameIssue::TooLong { length });
    }
    if let Some(ch) = name.chars().find(|ch| FORBIDDEN_CHARS.contains(ch)) {
        return Err(NameIssue::ForbiddenCharacter(ch));
    }
    if FORBIDDEN_FIRST_CHARS.contains(&first) {
        return Err(NameIssue::ForbiddenFirstCharacter(first));
    }
    Ok(())
}

/// Whether `name` can be written to an LP or MPS file.
pub fn is_valid_name(name: &str) -> bool {
    validate_name(name).is_ok()
}

/// [`validate_name`] that reports failures as warnings when `log_invalid` is set.
pub(crate) fn check_name(name: &str, log_invalid: bool) -> Result<(), NameIssue> {
    let result = validate_name(name);
    if let Err(issue) = &result {
        if log_invalid {
            tracing::warn!(
                component = "export",
                operation = "validate_name",
                status = "invalid",
                name,
                reason = %issue,
                "Invalid name; model cannot be written without obfuscation"
            );
        }
    }
    result
}
