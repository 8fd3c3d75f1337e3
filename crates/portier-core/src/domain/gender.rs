//! Gender wire format: stored as a boolean, sent as `"0"` / `"1"`.

use portier_shared::constants::{GENDER_FEMALE, GENDER_MALE};

use crate::error::DomainError;

pub fn gender_from_wire(value: &str) -> Result<bool, DomainError> {
    match value {
        GENDER_FEMALE => Ok(false),
        GENDER_MALE => Ok(true),
        other => Err(DomainError::ValidationError(format!(
            "gender must be \"{}\" or \"{}\", got {:?}",
            GENDER_FEMALE, GENDER_MALE, other
        ))),
    }
}

pub fn gender_to_wire(value: bool) -> &'static str {
    if value { GENDER_MALE } else { GENDER_FEMALE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for s in ["0", "1"] {
            assert_eq!(gender_to_wire(gender_from_wire(s).unwrap()), s);
        }
    }

    #[test]
    fn test_rejects_other_values() {
        for s in ["2", "male", "", " 1", "true"] {
            assert!(matches!(
                gender_from_wire(s),
                Err(DomainError::ValidationError(_))
            ));
        }
    }

    #[test]
    fn test_to_wire() {
        assert_eq!(gender_to_wire(true), "1");
        assert_eq!(gender_to_wire(false), "0");
    }
}
