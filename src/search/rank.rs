//! Ranking of found domains

/// How many domains `--shortest` prints
pub const DEFAULT_SHORTEST: usize = 15;

/// The `n` shortest domains; equal lengths keep their discovery order
pub fn shortest_n(domains: &[String], n: usize) -> Vec<String> {
    let mut ranked = domains.to_vec();
    ranked.sort_by_key(|d| d.len());
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_shortest_first() {
        let domains = strings(&["gamma", "ab", "delta", "x"]);
        assert_eq!(shortest_n(&domains, 2), strings(&["x", "ab"]));
    }

    #[test]
    fn test_ties_keep_order() {
        let domains = strings(&["delta.io", "gamma.io", "ab.io"]);
        assert_eq!(shortest_n(&domains, 15), strings(&["ab.io", "delta.io", "gamma.io"]));
    }

    #[test]
    fn test_zero_and_empty() {
        assert!(shortest_n(&strings(&["a"]), 0).is_empty());
        assert!(shortest_n(&[], DEFAULT_SHORTEST).is_empty());
    }
}
