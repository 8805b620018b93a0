/// Case-insensitive substring test. `needle_lower` must already be lowercase,
/// so callers filtering a list lowercase the query once.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format a date string as "January 5, 2024"
pub fn format_date(date: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date) {
        dt.format("%B %-d, %Y").to_string()
    } else if let Ok(d) = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        d.format("%B %-d, %Y").to_string()
    } else {
        date.to_string()
    }
}

/// `part / total` as a percentage, 0 when `total` is 0.
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Intro to Go", "go"));
        assert!(contains_ignore_case("ALGORITHMS", "go"));
        assert!(!contains_ignore_case("Graphs 101", "go"));
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
        assert_eq!(truncate_string("héllo wörld", 7), "héll...");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05"), "January 5, 2024");
        assert_eq!(format_date("2024-03-15T10:00:00Z"), "March 15, 2024");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 4), 25.0);
        assert_eq!(percent(3, 0), 0.0);
    }
}
