//! Employee field validation
//!
//! Rules run in a fixed order and each produces its own [`ValidationError`],
//! so callers can report the first violation or all of them.

use rust_decimal::Decimal;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::domain::entities::EmployeeFields;

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Employee name must not be empty")]
    EmptyName,

    #[error("Employee name may contain only letters and spaces")]
    InvalidName,

    #[error("Employee position must not be empty")]
    EmptyPosition,

    #[error("Employee position may contain only letters and spaces")]
    InvalidPosition,

    #[error("Salary must be a positive amount, got {0}")]
    NonPositiveSalary(Decimal),

    #[error("Name may contain only letters and spaces: '{0}'")]
    InvalidSearchName(String),
}

/// Check every rule against an employee, returning violations in rule order.
///
/// An empty vector means the employee is valid.
pub fn validate<E: EmployeeFields + ?Sized>(employee: &E) -> Vec<ValidationError> {
    let mut violations = Vec::new();

    let name = employee.name();
    if name.trim().is_empty() {
        violations.push(ValidationError::EmptyName);
    }
    if !is_valid_name(name) {
        violations.push(ValidationError::InvalidName);
    }

    let position = employee.position();
    if position.trim().is_empty() {
        violations.push(ValidationError::EmptyPosition);
    }
    if !is_valid_name(position) {
        violations.push(ValidationError::InvalidPosition);
    }

    let salary = employee.salary();
    if salary <= Decimal::ZERO {
        violations.push(ValidationError::NonPositiveSalary(salary));
    }

    violations
}

/// Run [`validate`] and fail with the first violation, if any
pub fn ensure_valid<E: EmployeeFields + ?Sized>(employee: &E) -> Result<(), ValidationError> {
    match validate(employee).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// True when `text` is non-empty and made only of letters and whitespace.
///
/// Letters are any Unicode alphabetic character, so Latin and Cyrillic
/// (including Ё/ё) pass while digits and punctuation do not. Text is checked
/// per grapheme cluster, so a decomposed letter such as `и` + U+0306 counts as
/// the single letter `й`. A string of only spaces passes here; emptiness after
/// trimming is a separate rule.
pub fn is_valid_name(text: &str) -> bool {
    !text.is_empty()
        && text.graphemes(true).all(|grapheme| {
            grapheme
                .chars()
                .next()
                .is_some_and(|base| base.is_alphabetic() || base.is_whitespace())
        })
}

/// Reject a malformed lookup key before it reaches the store
pub fn ensure_valid_search_name(name: &str) -> Result<(), ValidationError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSearchName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewEmployee;
    use chrono::NaiveDateTime;

    fn employee(name: &str, position: &str, salary: i64) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            age: 25,
            date_of_joining: NaiveDateTime::default(),
            salary: Decimal::from(salary),
            position: position.to_string(),
        }
    }

    #[test]
    fn valid_employee_has_no_violations() {
        assert!(validate(&employee("Стас", "Designer", 3000)).is_empty());
        assert!(validate(&employee("Anna Maria", "Lead Engineer", 1)).is_empty());
    }

    #[test]
    fn empty_name_reports_empty_then_invalid() {
        let violations = validate(&employee("", "Designer", 3000));
        assert_eq!(
            violations,
            vec![ValidationError::EmptyName, ValidationError::InvalidName]
        );
    }

    #[test]
    fn whitespace_name_is_empty_but_well_formed() {
        let violations = validate(&employee("   ", "Designer", 3000));
        assert_eq!(violations, vec![ValidationError::EmptyName]);
    }

    #[test]
    fn name_with_digits_is_rejected() {
        assert_eq!(
            ensure_valid(&employee("Agent 007", "Spy", 3000)),
            Err(ValidationError::InvalidName)
        );
    }

    #[test]
    fn position_rules_follow_name_rules() {
        assert_eq!(
            ensure_valid(&employee("Петр", " ", 3000)),
            Err(ValidationError::EmptyPosition)
        );
        assert_eq!(
            ensure_valid(&employee("Петр", "C# Developer", 3000)),
            Err(ValidationError::InvalidPosition)
        );
    }

    #[test]
    fn salary_must_be_positive() {
        assert_eq!(
            ensure_valid(&employee("Петр", "Developer", 0)),
            Err(ValidationError::NonPositiveSalary(Decimal::ZERO))
        );
        assert_eq!(
            ensure_valid(&employee("Петр", "Developer", -10)),
            Err(ValidationError::NonPositiveSalary(Decimal::from(-10)))
        );
    }

    #[test]
    fn first_violation_wins() {
        let result = ensure_valid(&employee("R2D2", "", -1));
        assert_eq!(result, Err(ValidationError::InvalidName));
        assert_eq!(validate(&employee("R2D2", "", -1)).len(), 4);
    }

    #[test]
    fn is_valid_name_accepts_letters_and_spaces() {
        for ok in ["Игорь", "игорь", "Ёлкин Пётр", "John Smith", "Zoë", "a"] {
            assert!(is_valid_name(ok), "expected '{}' to be valid", ok);
        }
    }

    #[test]
    fn is_valid_name_accepts_decomposed_letters() {
        assert!(is_valid_name("Андре\u{0438}\u{0306}"));
        assert!(is_valid_name("Zoe\u{0308}"));
        assert!(is_valid_name("Е\u{0308}лкин"));
        assert_eq!(
            ensure_valid(&employee("Серге\u{0438}\u{0306}", "Developer", 1)),
            Ok(())
        );
    }

    #[test]
    fn is_valid_name_rejects_marks_without_a_letter() {
        assert!(!is_valid_name("\u{0306}"));
        assert!(!is_valid_name("7\u{0306}"));
    }

    #[test]
    fn is_valid_name_rejects_digits_and_punctuation() {
        for bad in ["", "John1", "O'Brien", "Smith-Jones", "Dr.", "a_b", "Игорь!", "50%"] {
            assert!(!is_valid_name(bad), "expected '{}' to be invalid", bad);
        }
    }

    #[test]
    fn search_name_error_echoes_input() {
        let err = ensure_valid_search_name("abc123").unwrap_err();
        assert_eq!(err, ValidationError::InvalidSearchName("abc123".to_string()));
        assert!(err.to_string().contains("abc123"));
        assert!(ensure_valid_search_name("Андрей").is_ok());
    }
}
