use std::fmt;

/// Findings from checking a conversion table
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub message: String,
    /// Table cell or chain the issue refers to, e.g. "Mile -> Foot"
    pub location: Option<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: String, location: Option<String>) {
        self.errors.push(ValidationIssue {
            message,
            location,
        });
    }

    pub fn add_warning(&mut self, message: String, location: Option<String>) {
        self.warnings.push(ValidationIssue {
            message,
            location,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_issues() {
            return writeln!(f, "No issues found");
        }

        for (title, issues) in [("Errors", &self.errors), ("Warnings", &self.warnings)] {
            if issues.is_empty() {
                continue;
            }
            writeln!(f, "{}:", title)?;
            for issue in issues {
                match &issue.location {
                    Some(loc) => writeln!(f, "  [{}] {}", loc, issue.message)?,
                    None => writeln!(f, "  {}", issue.message)?,
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(!result.has_issues());
        assert_eq!(result.to_string(), "No issues found\n");
    }

    #[test]
    fn test_warnings_do_not_invalidate() {
        let mut result = ValidationResult::new();
        result.add_warning("drift".to_string(), Some("Mile -> Foot".to_string()));
        assert!(result.is_valid());
        assert!(result.has_issues());
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings[0].location.as_deref(), Some("Mile -> Foot"));
    }

    #[test]
    fn test_display_groups_by_severity() {
        let mut result = ValidationResult::new();
        result.add_error("bad factor".to_string(), Some("Metre -> Foot".to_string()));
        result.add_warning("drift".to_string(), None);

        let text = result.to_string();
        assert!(!result.is_valid());
        assert_eq!(
            text,
            "Errors:\n  [Metre -> Foot] bad factor\nWarnings:\n  drift\n"
        );
    }
}
