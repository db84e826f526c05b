//! Domain label validation utilities

use crate::error::Result;
use crate::validation_error;
use regex::Regex;

/// Validator for single DNS labels (words and TLDs)
pub struct LabelValidator {
    label: Regex,
}

impl LabelValidator {
    /// Create a new label validator
    pub fn new() -> Self {
        Self {
            label: Regex::new(r"^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$")
                .expect("Failed to compile label pattern"),
        }
    }

    /// Lowercase and trim a raw label
    pub fn normalize(&self, raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Whether an already-normalized label is a valid DNS label
    pub fn is_valid(&self, label: &str) -> bool {
        self.label.is_match(label) && !label.contains("--") || self.is_idna(label)
    }

    /// Normalize and validate a word used as the name part
    pub fn validate_word(&self, raw: &str) -> Result<String> {
        let word = self.normalize(raw);
        if word.is_empty() {
            return Err(validation_error!("Word cannot be empty"));
        }
        if !self.is_valid(&word) {
            return Err(validation_error!(
                "'{}' is not a valid domain label (letters, digits and inner hyphens only)",
                word
            ));
        }
        Ok(word)
    }

    /// Normalize and validate a TLD; a leading dot is accepted
    pub fn validate_tld(&self, raw: &str) -> Result<String> {
        let tld = self.normalize(raw);
        let tld = tld.trim_start_matches('.').to_string();
        if tld.is_empty() {
            return Err(validation_error!("TLD cannot be empty"));
        }
        if !self.is_valid(&tld) || tld.chars().all(|c| c.is_ascii_digit()) {
            return Err(validation_error!("'{}' is not a valid TLD", tld));
        }
        Ok(tld)
    }

    /// Split a domain into its name and TLD
    pub fn split_domain<'a>(&self, domain: &'a str) -> Result<(&'a str, &'a str)> {
        match domain.rsplit_once('.') {
            Some((name, tld)) if !name.is_empty() && !tld.is_empty() => Ok((name, tld)),
            _ => Err(validation_error!("'{}' must look like name.tld", domain)),
        }
    }

    // Punycode labels carry a double hyphen at positions 3-4.
    fn is_idna(&self, label: &str) -> bool {
        label.starts_with("xn--") && self.label.is_match(label)
    }
}

impl Default for LabelValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_labels() {
        let v = LabelValidator::new();
        assert!(v.is_valid("dog"));
        assert!(v.is_valid("a"));
        assert!(v.is_valid("web3"));
        assert!(v.is_valid("my-site"));
        assert!(v.is_valid("xn--bcher-kva"));
    }

    #[test]
    fn test_invalid_labels() {
        let v = LabelValidator::new();
        assert!(!v.is_valid(""));
        assert!(!v.is_valid("-dog"));
        assert!(!v.is_valid("dog-"));
        assert!(!v.is_valid("dog's"));
        assert!(!v.is_valid("two words"));
        assert!(!v.is_valid("a--b"));
        assert!(!v.is_valid(&"a".repeat(64)));
    }

    #[test]
    fn test_validate_word_normalizes() {
        let v = LabelValidator::new();
        assert_eq!(v.validate_word("  Apple ").unwrap(), "apple");
        assert!(v.validate_word("   ").is_err());
    }

    #[test]
    fn test_validate_tld() {
        let v = LabelValidator::new();
        assert_eq!(v.validate_tld(".IO").unwrap(), "io");
        assert!(v.validate_tld("123").is_err());
        assert!(v.validate_tld("c_m").is_err());
    }

    #[test]
    fn test_split_domain() {
        let v = LabelValidator::new();
        assert_eq!(v.split_domain("dog.io").unwrap(), ("dog", "io"));
        assert!(v.split_domain("dog").is_err());
        assert!(v.split_domain(".io").is_err());
    }
}
