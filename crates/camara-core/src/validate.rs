//! # Input Validators
//!
//! Stateless precondition checks run once, when a proposition is
//! constructed. Each returns `Ok(())` or a [`ValidationError`] carrying the
//! caller's message or context prefix.

use crate::error::ValidationError;
use crate::temporal::Timestamp;

/// Year of the current constitution. No proposition predates it.
pub const CONSTITUTION_YEAR: i32 = 1988;

/// Reject empty or whitespace-only strings.
///
/// `message` is the full error text reported on failure.
pub fn require_non_empty(value: &str, message: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty {
            message: message.to_string(),
        });
    }
    Ok(())
}

/// Reject author identifiers that are not in `NNNNNNNNN-N` form.
///
/// `context` prefixes the fixed reason `"dni invalido"`.
pub fn require_valid_author_id(value: &str, context: &str) -> Result<(), ValidationError> {
    if !is_dni(value) {
        return Err(ValidationError::InvalidAuthorId {
            context: context.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Reject years before [`CONSTITUTION_YEAR`] or after the current UTC year.
pub fn require_valid_year(year: i32, context: &str) -> Result<(), ValidationError> {
    let current = Timestamp::now().year();
    require_valid_year_at(year, current, context)
}

/// [`require_valid_year`] against an explicit current year.
pub fn require_valid_year_at(year: i32, current: i32, context: &str) -> Result<(), ValidationError> {
    if year < CONSTITUTION_YEAR {
        return Err(ValidationError::YearBeforeConstitution {
            context: context.to_string(),
            year,
        });
    }
    if year > current {
        return Err(ValidationError::YearInFuture {
            context: context.to_string(),
            year,
            current,
        });
    }
    Ok(())
}

fn is_dni(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 11
        && bytes[..9].iter().all(u8::is_ascii_digit)
        && bytes[9] == b'-'
        && bytes[10].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: &str = "Erro ao cadastrar projeto: ";

    #[test]
    fn test_non_empty_accepts_text() {
        assert!(require_non_empty("PL 1/2016", "codigo vazio").is_ok());
    }

    #[test]
    fn test_non_empty_rejects_blank() {
        for value in ["", "   ", "\t\n"] {
            let err = require_non_empty(value, "Erro ao cadastrar projeto: ementa nao pode ser vazia ou nula")
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                "Erro ao cadastrar projeto: ementa nao pode ser vazia ou nula"
            );
        }
    }

    #[test]
    fn test_valid_dni() {
        assert!(require_valid_author_id("123456789-0", CTX).is_ok());
    }

    #[test]
    fn test_invalid_dni_shapes() {
        for value in ["12345678-90", "123456789", "123456789-", "12345678a-0", "1234567890-1", "123456789_0"] {
            let err = require_valid_author_id(value, CTX).unwrap_err();
            assert_eq!(err.to_string(), "Erro ao cadastrar projeto: dni invalido");
        }
    }

    #[test]
    fn test_year_bounds() {
        assert!(require_valid_year_at(1988, 2026, CTX).is_ok());
        assert!(require_valid_year_at(2026, 2026, CTX).is_ok());

        let err = require_valid_year_at(1987, 2026, CTX).unwrap_err();
        assert_eq!(err.to_string(), "Erro ao cadastrar projeto: ano anterior a 1988");

        let err = require_valid_year_at(2027, 2026, CTX).unwrap_err();
        assert!(matches!(err, ValidationError::YearInFuture { year: 2027, current: 2026, .. }));
        assert_eq!(err.to_string(), "Erro ao cadastrar projeto: ano posterior ao ano atual");
    }

    #[test]
    fn test_year_against_clock() {
        assert!(require_valid_year(2016, CTX).is_ok());
        assert!(require_valid_year(1900, CTX).is_err());
        assert!(require_valid_year(9999, CTX).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every nine-digit body with a one-digit check is a valid DNI.
        #[test]
        fn well_formed_dni_accepted(dni in "[0-9]{9}-[0-9]") {
            prop_assert!(require_valid_author_id(&dni, "").is_ok());
        }

        /// Anything containing a non-digit outside the hyphen slot is rejected.
        #[test]
        fn letters_rejected(body in "[0-9]{0,8}[a-zA-Z][0-9]{0,8}") {
            let dni = format!("{body}-0");
            prop_assert!(require_valid_author_id(&dni, "").is_err());
        }

        /// Years in [1988, current] are accepted, everything else rejected.
        #[test]
        fn year_window(year in 1900i32..2100, current in 1988i32..2100) {
            let ok = require_valid_year_at(year, current, "").is_ok();
            prop_assert_eq!(ok, (CONSTITUTION_YEAR..=current).contains(&year));
        }
    }
}
