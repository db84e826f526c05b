//! Dictionary words for candidate generation

use std::path::Path;

use crate::domain::LabelValidator;
use crate::error::{DomainHuntError, Result};
use crate::types::CorpusSource;

/// Built-in English dictionary (~41k lowercase base words), one word per line
const BUILTIN_WORDS: &str = include_str!("../../data/words.txt");

/// A loaded word corpus
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// Create with the built-in word list
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_WORDS)
    }

    /// Create with an explicit word list (same normalization as files)
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let validator = LabelValidator::new();
        let words = words
            .into_iter()
            .filter_map(|w| {
                let word = validator.normalize(w.as_ref());
                validator.is_valid(&word).then_some(word)
            })
            .collect();
        Self { words }
    }

    /// Load words from file (one word per line)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainHuntError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;
        let source = Self::parse(&content);
        tracing::debug!(path = %path.display(), words = source.len(), "Loaded word list");
        Ok(source)
    }

    /// Load the configured corpus
    pub fn load(source: &CorpusSource) -> Result<Self> {
        let words = match source {
            CorpusSource::Builtin => Self::builtin(),
            CorpusSource::File(path) => Self::from_file(path)?,
        };
        if words.is_empty() {
            tracing::warn!(source = ?source, "Word list has no usable words");
        }
        Ok(words)
    }

    fn parse(content: &str) -> Self {
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        let total = lines.len();
        let source = Self::with_words(lines);
        if source.len() < total {
            tracing::debug!(
                skipped = total - source.len(),
                "Skipped words that are not valid domain labels"
            );
        }
        source
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The corpus followed by the custom words, duplicates kept
pub fn words(corpus: Vec<String>, custom_words: &[String]) -> Vec<String> {
    let mut all = corpus;
    all.extend(custom_words.iter().cloned());
    all
}

/// Keep words matching every given prefix/suffix filter
pub fn filter_words(
    list: Vec<String>,
    startswith: Option<&str>,
    endswith: Option<&str>,
) -> Vec<String> {
    list.into_iter()
        .filter(|w| startswith.map_or(true, |prefix| w.starts_with(prefix)))
        .filter(|w| endswith.map_or(true, |suffix| w.ends_with(suffix)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_is_usable() {
        let source = WordSource::builtin();
        assert!(source.len() > 40_000);
        assert!(source.words().iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));

        let unique: std::collections::HashSet<_> = source.words().iter().collect();
        assert_eq!(unique.len(), source.len());
        assert!(source.words().iter().any(|w| w == "zymurgy"));
    }

    #[test]
    fn test_filter_prefix() {
        let list = strings(&["apple", "apricot", "banana"]);
        assert_eq!(filter_words(list, Some("ap"), None), strings(&["apple", "apricot"]));
    }

    #[test]
    fn test_filter_prefix_and_suffix() {
        let list = strings(&["apple", "apricot", "banana"]);
        assert_eq!(filter_words(list, Some("ap"), Some("e")), strings(&["apple"]));
    }

    #[test]
    fn test_filter_none_keeps_everything() {
        let list = strings(&["apple", "apple", "banana"]);
        assert_eq!(filter_words(list.clone(), None, None), list);
    }

    #[test]
    fn test_custom_words_appended() {
        let all = words(strings(&["dog", "cat"]), &strings(&["cat", "zebra"]));
        assert_eq!(all, strings(&["dog", "cat", "cat", "zebra"]));
    }

    #[test]
    fn test_from_file_normalizes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Apple\n  banana  \n\ndog's\n-bad\ncherry").unwrap();

        let source = WordSource::from_file(file.path()).unwrap();
        assert_eq!(source.words(), &strings(&["apple", "banana", "cherry"])[..]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WordSource::load(&CorpusSource::File("/no/such/words.txt".into())).unwrap_err();
        assert!(matches!(err, DomainHuntError::Io { .. }));
    }
}
