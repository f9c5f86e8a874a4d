//! Text helpers shared across screens.

use std::sync::LazyLock;

use regex::Regex;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Strip markup tags from a rich-text description.
///
/// This is a lossy, one-way transform: tags are removed verbatim, entities
/// are not decoded, and formatting is not preserved.
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Lowercase a title into a hyphenated slug, e.g. "Brew Gear" -> "brew-gear".
pub fn slugify(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Truncate to `max` characters, appending an ellipsis when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_strip_tags_leaves_plain_text() {
        assert_eq!(strip_tags("no markup here"), "no markup here");
    }

    #[test]
    fn test_strip_tags_does_not_decode_entities() {
        assert_eq!(strip_tags("<p>a &amp; b</p>"), "a &amp; b");
    }

    #[test]
    fn test_strip_tags_attributes() {
        assert_eq!(
            strip_tags(r#"<a href="https://example.com">link</a> text"#),
            "link text"
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Brew Gear"), "brew-gear");
        assert_eq!(slugify("Brew  Merch "), "brew-merch");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 8), "a longe…");
    }
}
