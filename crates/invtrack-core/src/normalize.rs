//! Canonical item-name normalization.
//!
//! Inventory text arrives as display strings like `"f) 3 daggers (weapon in
//! hand)"`. Counters must aggregate by the underlying item, so every string
//! is reduced to a canonical name (`"daggers"`) before it is counted. The
//! pipeline order is load-bearing: each stage assumes the output shape of
//! the previous one.

use regex::Regex;
use std::sync::LazyLock;

static LETTER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]\s*[-)]\s+").unwrap());
static PARENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());
static WS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static COUNT_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\s+").unwrap());

/// Reduce one decoded inventory line to its canonical name.
///
/// Stages, in order: trim; drop the inventory-letter prefix (`"a - "`,
/// `"b) "`); drop a bare `"- "` prefix; trim; remove parenthesized
/// annotations; collapse whitespace runs; drop one leading article
/// (the/an/a, case-insensitive, at most once); drop a leading quantity
/// token; lowercase and trim. An empty result means the slot holds nothing
/// countable.
pub fn canonical_name(text: &str) -> String {
    let mut text = text.trim().to_string();
    if let Some(m) = LETTER_PREFIX.find(&text) {
        text = text[m.end()..].to_string();
    }
    if let Some(rest) = text.strip_prefix("- ") {
        text = rest.to_string();
    }
    text = text.trim().to_string();
    text = PARENS.replace_all(&text, "").into_owned();
    text = WS_RUN.replace_all(&text, " ").into_owned();
    for article in ["the ", "an ", "a "] {
        if text.to_lowercase().starts_with(article) {
            text = text[article.len()..].to_string();
            break;
        }
    }
    text = COUNT_PREFIX.replace(&text, "").into_owned();
    text.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_prefix_and_article() {
        assert_eq!(canonical_name("a - the scroll of identify"), "scroll of identify");
    }

    #[test]
    fn test_count_and_annotation() {
        assert_eq!(canonical_name("f) 3 daggers (weapon in hand)"), "daggers");
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(canonical_name("  an elven cloak  "), "elven cloak");
    }

    #[test]
    fn test_paren_close_prefix() {
        assert_eq!(canonical_name("b)  an apple"), "apple");
    }

    #[test]
    fn test_bare_dash_prefix() {
        assert_eq!(canonical_name("- food ration"), "food ration");
    }

    #[test]
    fn test_article_stripped_at_most_once() {
        // Only the first article goes; "an" inside the name survives.
        assert_eq!(canonical_name("the an odd thing"), "an odd thing");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(canonical_name("g -   2   potions   of  water"), "potions of water");
    }

    #[test]
    fn test_lowercasing() {
        assert_eq!(canonical_name("c - The Amulet of Yendor"), "amulet of yendor");
    }

    #[test]
    fn test_annotation_only_slot_is_empty() {
        assert_eq!(canonical_name("(being worn)"), "");
        assert_eq!(canonical_name(""), "");
        assert_eq!(canonical_name("   "), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["a - the scroll of identify", "f) 3 daggers (weapon in hand)", "plain rock"] {
            let once = canonical_name(raw);
            assert_eq!(canonical_name(&once), once);
        }
    }
}
