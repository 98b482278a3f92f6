//! Formatting utilities for display values.

/// Capitalize the first character of a string (e.g., "xiaomi" -> "Xiaomi").
///
/// Uses Unicode-aware uppercasing, so a single lowercase character may
/// expand into several.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a version name with its numeric code (e.g., "1.9.2 (7024)").
pub fn format_version(name: &str, code: u32) -> String {
    format!("{} ({})", name, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("xiaomi"), "Xiaomi");
        assert_eq!(capitalize_first("Google"), "Google");
        assert_eq!(capitalize_first("x"), "X");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_format_version() {
        assert_eq!(format_version("1.9.2", 7024), "1.9.2 (7024)");
    }
}
