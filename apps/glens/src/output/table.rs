//! Table display and filtering helpers for CLI commands

/// Truncate a string for table display, handling Unicode safely.
///
/// If the string exceeds `max_len`, it is truncated with "..." appended.
/// Uses character boundaries to avoid panicking on multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Case-insensitive substring match over a member's name and username.
///
/// An empty query matches everyone.
pub fn matches_query(name: &str, username: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    name.to_lowercase().contains(&query) || username.to_lowercase().contains(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        let result = truncate("hello world this is long", 10);
        assert!(result.len() <= 10);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_unicode() {
        let result = truncate("héllo wörld café", 10);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_query_matches_name_any_case() {
        assert!(matches_query("Ada Lovelace", "ada", "ada"));
        assert!(matches_query("Ada Lovelace", "ada", "ADA"));
        assert!(matches_query("Ada Lovelace", "ada", "lovel"));
        assert!(!matches_query("Bob Marley", "bobm", "ada"));
    }

    #[test]
    fn test_query_matches_username() {
        assert!(matches_query("Bob Marley", "bobm", "bobm"));
        assert!(!matches_query("Bob Marley", "bobm", "ada"));
    }

    #[test]
    fn test_empty_query_matches_everyone() {
        assert!(matches_query("Ada Lovelace", "ada", ""));
        assert!(matches_query("Bob Marley", "bobm", ""));
    }

    #[test]
    fn test_filter_preserves_order() {
        let users = [("Ada Lovelace", "ada"), ("Bob Marley", "bobm")];
        let kept: Vec<&str> = users
            .iter()
            .filter(|(name, username)| matches_query(name, username, ""))
            .map(|(_, username)| *username)
            .collect();
        assert_eq!(kept, vec!["ada", "bobm"]);
    }
}
