//! Field validation rules for forms

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// No constraints
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn required_with_min_length(min_length: usize) -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            min_length: Some(min_length),
            max_length: None,
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required", field_label));
        }

        if let Some(min) = self.min_length {
            if !value.trim().is_empty() && value.chars().count() < min {
                return Err(format!(
                    "{} must contain at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }
        Ok(())
    }
}

/// Loose structural check: one '@', a non-empty local part and a dot in the
/// domain. Deliverability is out of scope.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !domain.contains('@')
}

/// Algerian phone numbers: a leading 0 followed by 8 or 9 digits.
/// Spaces, dots and dashes are ignored.
pub fn is_valid_phone_dz(value: &str) -> bool {
    let digits: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-'))
        .collect();
    if !digits.starts_with('0') {
        return false;
    }
    matches!(digits.len(), 9 | 10) && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rule() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("", "Name").is_err());
        assert!(rules.validate_string("   ", "Name").is_err());
        assert!(rules.validate_string("ok", "Name").is_ok());
    }

    #[test]
    fn test_min_length_only_applies_to_non_empty_optional_fields() {
        let rules = ValidationRules {
            min_length: Some(6),
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("", "Password").is_ok());
        assert!(rules.validate_string("abc", "Password").is_err());
        assert!(rules.validate_string("abcdef", "Password").is_ok());
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules {
            min: Some(0.0),
            max: Some(100.0),
            ..ValidationRules::none()
        };
        assert!(rules.validate_number(-1.0, "Quantity").is_err());
        assert!(rules.validate_number(50.0, "Quantity").is_ok());
        assert!(rules.validate_number(101.0, "Quantity").is_err());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("user@scrapdz.dz"));
        assert!(is_valid_email("a.b@mail.example.com"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@nodomain.dz"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.leadingdot"));
    }

    #[test]
    fn test_phone_shapes() {
        assert!(is_valid_phone_dz("0550123456"));
        assert!(is_valid_phone_dz("055 01 23 456"));
        assert!(is_valid_phone_dz("038123456"));
        assert!(!is_valid_phone_dz("550123456"));
        assert!(!is_valid_phone_dz("05501"));
        assert!(!is_valid_phone_dz("05501234x6"));
    }
}
