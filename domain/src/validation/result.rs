//! Validation verdicts.

use serde::{Deserialize, Serialize};

/// Verdict of one or more constraint checks.
///
/// Validity is derived from the error list: a result is valid if and only if
/// it carries no error. Warnings and suggestions never affect validity.
///
/// # Example
///
/// ```
/// use supervision_domain::ValidationResult;
///
/// let mut result = ValidationResult::valid();
/// result.push_warning("close to the limit");
/// assert!(result.is_valid());
///
/// result.push_error("limit reached");
/// assert!(!result.is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Hard failures, in emission order
    #[serde(default)]
    pub errors: Vec<String>,
    /// Informational findings, in emission order
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Optional hints for the planner
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            errors: vec![error.into()],
            ..Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn push_suggestion(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }

    /// Append another verdict after this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.suggestions.extend(other.suggestions);
    }

    /// Concatenate verdicts in iteration order.
    pub fn merged(results: impl IntoIterator<Item = ValidationResult>) -> Self {
        results.into_iter().fold(Self::valid(), |mut acc, r| {
            acc.merge(r);
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_iff_no_errors() {
        let result = ValidationResult::valid();
        assert!(result.is_valid());
        assert!(!ValidationResult::invalid("boom").is_valid());
    }

    #[test]
    fn test_warnings_do_not_affect_validity() {
        let mut result = ValidationResult::valid();
        result.push_warning("w1");
        result.push_suggestion("s1");
        assert!(result.is_valid());
        assert!(result.has_warnings());
    }

    #[test]
    fn test_merged_preserves_order() {
        let mut first = ValidationResult::invalid("e1");
        first.push_warning("w1");
        let mut second = ValidationResult::invalid("e2");
        second.push_suggestion("s2");

        let merged = ValidationResult::merged([first, ValidationResult::valid(), second]);
        assert_eq!(merged.errors, vec!["e1", "e2"]);
        assert_eq!(merged.warnings, vec!["w1"]);
        assert_eq!(merged.suggestions, vec!["s2"]);
        assert!(!merged.is_valid());
    }

    #[test]
    fn test_json_without_suggestions() {
        let result: ValidationResult =
            serde_json::from_str(r#"{"errors": [], "warnings": ["w"]}"#).unwrap();
        assert!(result.is_valid());
        assert!(result.suggestions.is_empty());
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("suggestions"));
    }
}
