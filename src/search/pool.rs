//! Sampling without replacement

use rand::Rng;

/// Shrinking pool of words; each draw removes exactly one occurrence
#[derive(Debug, Clone, Default)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Remove and return a uniformly random word (O(1) swap-remove)
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.words.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.words.len());
        Some(self.words.swap_remove(index))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for WordPool {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_draws_every_word_once() {
        let words: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let mut pool = WordPool::new(words.clone());
        let mut rng = StdRng::seed_from_u64(7);

        let mut drawn = Vec::new();
        while let Some(word) = pool.draw(&mut rng) {
            drawn.push(word);
        }
        drawn.sort();
        assert_eq!(drawn, words);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_duplicates_removed_one_at_a_time() {
        let mut pool = WordPool::from(vec!["dog".to_string(), "dog".to_string()]);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(pool.draw(&mut rng).as_deref(), Some("dog"));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.draw(&mut rng).as_deref(), Some("dog"));
        assert_eq!(pool.draw(&mut rng), None);
    }
}
