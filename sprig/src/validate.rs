//! Validation for tag names entering through the dynamic call surface.

/// Validate that a name can be used as a tag.
/// Returns None if valid, Some(reason) if invalid.
///
/// Tag names are data, not host-language identifiers, so reserved words
/// like `class` or `type` are fine. The rules are only what rendering
/// needs: non-empty, starting with a letter or underscore, and free of
/// whitespace and markup characters. Dashes, dots, and colons are allowed
/// for dashed and namespaced tags.
pub(crate) fn validate_tag_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("tag name must start with a letter or underscore"),
        None => return Some("tag name cannot be empty"),
    }

    // Remaining characters must be alphanumeric, underscore, dash, dot, or colon
    for c in chars {
        if !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':')) {
            return Some(
                "tag name must contain only letters, numbers, underscores, dashes, dots, and colons",
            );
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tag_names() {
        assert!(validate_tag_name("report").is_none());
        assert!(validate_tag_name("next_meeting").is_none());
        assert!(validate_tag_name("h1").is_none());
        assert!(validate_tag_name("my-tag").is_none());
        assert!(validate_tag_name("xhtml:div").is_none());
        assert!(validate_tag_name("a.b").is_none());
        assert!(validate_tag_name("_private").is_none());
    }

    #[test]
    fn test_reserved_words_are_valid_tags() {
        assert!(validate_tag_name("class").is_none());
        assert!(validate_tag_name("type").is_none());
        assert!(validate_tag_name("use").is_none());
        assert!(validate_tag_name("fn").is_none());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_tag_name(""), Some("tag name cannot be empty"));
    }

    #[test]
    fn test_invalid_start_character() {
        assert!(validate_tag_name("1st").is_some());
        assert!(validate_tag_name("-tag").is_some());
        assert!(validate_tag_name(".hidden").is_some());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(validate_tag_name("bad name").is_some());
        assert!(validate_tag_name("<tag>").is_some());
        assert!(validate_tag_name("tag/").is_some());
        assert!(validate_tag_name("tag\n").is_some());
    }
}
