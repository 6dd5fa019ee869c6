//! Prompt templates for tag generation.

use memoclip_core::TagPattern;

/// System message for tag generation.
pub const TAG_SYSTEM_PROMPT: &str = "You are a professional content tagger. \
Generate accurate, relevant tags based on the characteristics of the content.";

/// Build the user prompt asking for at most `max_tags` comma-separated tags.
///
/// The existing vocabulary is listed so the model can reuse it, and the
/// vocabulary's style descriptor tells it how new tags should look.
pub fn tag_prompt(content: &str, existing: &[String], max_tags: usize, pattern: &TagPattern) -> String {
    let vocabulary = if existing.is_empty() {
        "none".to_string()
    } else {
        existing.join(", ")
    };

    format!(
        "Generate suitable tags for the following content:\n\
         \n\
         Content:\n\
         {content}\n\
         \n\
         Requirements:\n\
         1. Generate 1-{max_tags} relevant tags\n\
         2. Prefer existing tags: {vocabulary}\n\
         3. New tags should follow the existing convention: {style}\n\
         4. Return only the tag names, separated by commas\n\
         5. Tags should be concise and meaningful\n\
         \n\
         Example format: 学习,技术,笔记",
        content = content,
        max_tags = max_tags,
        vocabulary = vocabulary,
        style = pattern.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use memoclip_core::analyze_tag_patterns;

    #[test]
    fn test_prompt_embeds_content_and_cap() {
        let prompt = tag_prompt("Rust ownership notes", &[], 4, &TagPattern::default());
        assert!(prompt.contains("Content:\nRust ownership notes\n"));
        assert!(prompt.contains("1. Generate 1-4 relevant tags"));
    }

    #[test]
    fn test_prompt_lists_existing_vocabulary() {
        let existing = vec!["工作".to_string(), "学习".to_string()];
        let pattern = analyze_tag_patterns(&existing);
        let prompt = tag_prompt("x", &existing, 3, &pattern);
        assert!(prompt.contains("Prefer existing tags: 工作, 学习"));
        assert!(prompt.contains("existing convention: Chinese, average 2 characters"));
    }

    #[test]
    fn test_prompt_without_vocabulary() {
        let prompt = tag_prompt("x", &[], 3, &TagPattern::default());
        assert!(prompt.contains("Prefer existing tags: none"));
        assert!(prompt.contains("short Chinese words, 2-4 characters"));
    }

    #[test]
    fn test_prompt_asks_for_commas() {
        let prompt = tag_prompt("x", &[], 3, &TagPattern::default());
        assert!(prompt.contains("separated by commas"));
    }
}
