//! Text normalization, slugs and match highlighting.
//!
//! Every piece of free text that participates in search or routing goes
//! through [`normalize`] first, so "Škoda" and "skoda" compare equal.

use regex::RegexBuilder;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, decompose (NFD) and drop combining diacritical marks.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

const fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

/// Build a URL slug: normalized, runs of anything outside `[a-z0-9]`
/// collapsed to a single `-`, no leading or trailing `-`.
///
/// The output only contains `[a-z0-9-]` with no doubled hyphens, so
/// `slugify(slugify(x)) == slugify(x)`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let normalized = normalize(text);
    let mut slug = String::with_capacity(normalized.len());
    let mut pending_hyphen = false;

    for c in normalized.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Split a query into normalized whitespace-separated tokens.
///
/// A whitespace-only query yields no tokens.
#[must_use]
pub fn tokenize(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// A run of display text, flagged when it matched the search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
    pub highlighted: bool,
}

impl TextSegment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }
}

/// Split `text` into highlighted and plain segments for `query`.
///
/// Matching is case-insensitive on the raw text. When the trimmed query is
/// exactly one of `year_list`, the whole text is highlighted, since a year
/// query matches through the year range rather than the display string.
#[must_use]
pub fn highlight_segments(text: &str, query: &str, year_list: &[String]) -> Vec<TextSegment> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return vec![TextSegment::plain(text)];
    }

    if year_list.iter().any(|y| y == trimmed) {
        return vec![TextSegment {
            text: text.to_string(),
            highlighted: true,
        }];
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(trimmed))
        .case_insensitive(true)
        .build()
    else {
        return vec![TextSegment::plain(text)];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in pattern.find_iter(text) {
        if m.start() > last {
            segments.push(TextSegment::plain(&text[last..m.start()]));
        }
        segments.push(TextSegment {
            text: m.as_str().to_string(),
            highlighted: true,
        });
        last = m.end();
    }
    if last < text.len() {
        segments.push(TextSegment::plain(&text[last..]));
    }
    if segments.is_empty() {
        segments.push(TextSegment::plain(text));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_diacritics() {
        assert_eq!(normalize("Škoda Ényaq"), "skoda enyaq");
        assert_eq!(normalize("CITROËN"), "citroen");
        assert_eq!(normalize("plain"), "plain");
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Honda Civic 2022"), "honda-civic-2022");
        assert_eq!(slugify("Hyundai Ioniq 5 (with HDA II) 2022-24"), "hyundai-ioniq-5-with-hda-ii-2022-24");
        assert_eq!(slugify("  --Škoda  Kodiaq--  "), "skoda-kodiaq");
    }

    #[test]
    fn test_slugify_empty_and_symbols() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        for input in ["Honda Civic 2022", "Lexus ES Hybrid 2019-24", "a--b__c"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  Honda   CIVIC "), vec!["honda", "civic"]);
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_highlight_segments_case_insensitive() {
        let segments = highlight_segments("Honda Civic", "civ", &[]);
        assert_eq!(
            segments,
            vec![
                TextSegment::plain("Honda "),
                TextSegment {
                    text: "Civ".to_string(),
                    highlighted: true
                },
                TextSegment::plain("ic"),
            ]
        );
    }

    #[test]
    fn test_highlight_year_query_marks_whole_text() {
        let years = vec!["2019".to_string(), "2020".to_string()];
        let segments = highlight_segments("2019-20", "2020", &years);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].highlighted);
    }

    #[test]
    fn test_highlight_escapes_regex_metacharacters() {
        let segments = highlight_segments("Model 3 (2021+)", "(2021+)", &[]);
        assert!(segments.iter().any(|s| s.highlighted && s.text == "(2021+)"));
    }

    #[test]
    fn test_highlight_empty_query() {
        let segments = highlight_segments("Toyota", "   ", &[]);
        assert_eq!(segments, vec![TextSegment::plain("Toyota")]);
    }
}
