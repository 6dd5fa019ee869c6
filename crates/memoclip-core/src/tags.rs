//! Tag vocabulary analysis and reconciliation.
//!
//! Proposed tags coming back from a language model are reconciled against the
//! tags that already exist on the Memos server:
//!
//! 1. A proposal that matches an existing tag (case-insensitive equality,
//!    then case-insensitive containment in either direction) is replaced by
//!    the existing tag, keeping its canonical spelling.
//! 2. Remaining proposals become new tags after normalization: they are
//!    clamped to `ceil(1.5 × average existing length)` characters and
//!    stripped of everything except ASCII word characters and CJK ideographs.
//! 3. The result never holds duplicates and never exceeds the max-tags bound.
//!
//! Lengths are counted in Unicode scalar values.

use tracing::trace;

use crate::defaults::{MAX_TAGS_CEILING, MAX_TAGS_FLOOR, TAG_AVG_LENGTH, TAG_LENGTH_FACTOR};

/// Descriptor used when there is no vocabulary to learn from.
pub const DEFAULT_TAG_STYLE: &str = "short Chinese words, 2-4 characters";

// =============================================================================
// CHARACTER CLASSES
// =============================================================================

/// CJK Unified Ideographs block.
fn is_han(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Characters a new tag may keep: ASCII word characters and CJK ideographs.
fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || is_han(c)
}

/// Script classes found across a tag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagScript {
    /// At least one tag has Han characters and at least one has Latin letters.
    Mixed,
    /// Han characters present, no Latin letters.
    Han,
    /// No Han characters anywhere.
    Latin,
}

impl TagScript {
    /// Classify a vocabulary.
    pub fn detect(tags: &[String]) -> Self {
        let has_han = tags.iter().any(|t| t.chars().any(is_han));
        let has_latin = tags.iter().any(|t| t.chars().any(is_latin_letter));

        match (has_han, has_latin) {
            (true, true) => Self::Mixed,
            (true, false) => Self::Han,
            (false, _) => Self::Latin,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Mixed => "mixed Chinese and English",
            Self::Han => "Chinese",
            Self::Latin => "English",
        }
    }
}

// =============================================================================
// PATTERN ANALYSIS
// =============================================================================

/// Style summary of the existing tag vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct TagPattern {
    /// Human-readable descriptor, used as a prompt hint.
    pub description: String,
    /// Mean tag length in characters (unrounded).
    pub average_length: f64,
}

impl Default for TagPattern {
    fn default() -> Self {
        Self {
            description: DEFAULT_TAG_STYLE.to_string(),
            average_length: TAG_AVG_LENGTH,
        }
    }
}

impl TagPattern {
    /// Average length rounded to the nearest whole character.
    pub fn rounded_average(&self) -> usize {
        self.average_length.round() as usize
    }

    /// Longest allowed new tag, in characters.
    pub fn max_new_tag_length(&self) -> usize {
        (self.average_length * TAG_LENGTH_FACTOR).ceil() as usize
    }
}

/// Analyze the existing vocabulary.
///
/// Returns the fixed default descriptor for an empty vocabulary.
pub fn analyze_tag_patterns(tags: &[String]) -> TagPattern {
    if tags.is_empty() {
        return TagPattern::default();
    }

    let total: usize = tags.iter().map(|t| t.chars().count()).sum();
    let average_length = total as f64 / tags.len() as f64;
    let script = TagScript::detect(tags);

    TagPattern {
        description: format!(
            "{}, average {} characters",
            script.label(),
            average_length.round() as usize
        ),
        average_length,
    }
}

// =============================================================================
// MATCHING AND NORMALIZATION
// =============================================================================

/// Clamp a max-tags bound into the supported range.
pub fn clamp_max_tags(max_tags: usize) -> usize {
    max_tags.clamp(MAX_TAGS_FLOOR, MAX_TAGS_CEILING)
}

/// Find the existing tag a proposal refers to.
///
/// Exact case-insensitive equality wins over containment; within each rule the
/// first tag in vocabulary order wins.
pub fn find_similar_tag<'a>(candidate: &str, existing: &'a [String]) -> Option<&'a str> {
    let target = candidate.to_lowercase();

    if let Some(tag) = existing.iter().find(|t| t.to_lowercase() == target) {
        return Some(tag.as_str());
    }

    existing
        .iter()
        .find(|t| {
            let lowered = t.to_lowercase();
            lowered.contains(&target) || target.contains(&lowered)
        })
        .map(String::as_str)
}

/// Normalize a new tag to the vocabulary's conventions.
///
/// Truncation happens before character filtering, so the result is never
/// longer than [`TagPattern::max_new_tag_length`]. May return an empty string.
pub fn normalize_new_tag(tag: &str, pattern: &TagPattern) -> String {
    tag.trim()
        .chars()
        .take(pattern.max_new_tag_length())
        .filter(|c| is_tag_char(*c))
        .collect()
}

/// Reconcile proposed tags against the existing vocabulary.
pub fn reconcile_tags(proposed: &[String], existing: &[String], max_tags: usize) -> Vec<String> {
    let max_tags = clamp_max_tags(max_tags);
    let pattern = analyze_tag_patterns(existing);
    let mut selected: Vec<String> = Vec::new();

    // Pass 1: reuse existing tags.
    for candidate in proposed {
        if let Some(matched) = find_similar_tag(candidate, existing) {
            if !selected.iter().any(|t| t == matched) {
                trace!(proposed = %candidate, existing = %matched, "Reusing existing tag");
                selected.push(matched.to_string());
            }
        }
    }

    // Pass 2: add normalized new tags while there is room.
    for candidate in proposed {
        if selected.len() >= max_tags {
            break;
        }
        if find_similar_tag(candidate, existing).is_some() || selected.contains(candidate) {
            continue;
        }

        let normalized = normalize_new_tag(candidate, &pattern);
        if normalized.is_empty() {
            trace!(proposed = %candidate, "Dropping tag that normalizes to nothing");
            continue;
        }
        if !selected.contains(&normalized) {
            trace!(proposed = %candidate, normalized = %normalized, "Adding new tag");
            selected.push(normalized);
        }
    }

    selected.truncate(max_tags);
    selected
}

/// Split a model response into tag candidates.
///
/// Accepts ASCII and full-width commas as separators; fragments are trimmed and
/// empty ones dropped.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c == '，')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
