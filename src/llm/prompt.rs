//! Prompt construction for the completion service

use crate::types::{Category, Filters};

/// System instructions: uniqueness rules plus the JSON shape per category
pub fn system_prompt(category: Category, count: u32) -> String {
    let base = format!(
        "You are a creative name generator. Generate {} unique names that are:
1. Memorable and brandable
2. Unique from each other
3. Follow the specified format
Ensure each name is different from previous suggestions.",
        count
    );

    let requirements = match category {
        Category::Business => {
            "Additional requirements:
1. Available as domain names
2. Include description and SEO score
Format as JSON array with properties: name, description, seoScore (number 0-100), available (boolean), tags (array of strings)"
        }
        Category::Baby => {
            "Additional requirements:
1. Include meaning and origin
2. Include personality traits
Format as JSON array with properties: name, meaning, origin, personality (array of traits)"
        }
        Category::Hashtag => {
            "Additional requirements:
1. Trending and memorable
2. Easy to read and type
3. Each name starts with #
Format as JSON array with properties: name, description, tags (array of strings)"
        }
        Category::Pet => {
            "Additional requirements:
1. Match pet characteristics
2. Include personality traits
Format as JSON array with properties: name, description, personality (array of traits)"
        }
    };

    format!("{}\n{}\nReturn ONLY the JSON array.", base, requirements)
}

/// User instructions embedding the caller's filters
pub fn user_prompt(category: Category, filters: &Filters, batch_number: u32) -> String {
    let keywords = filters.keywords_text().unwrap_or("");

    let body = match category {
        Category::Business => format!(
            "Generate business names with these criteria:
Description: {}
Industry: {}
Style: {}",
            keywords,
            filters.industry().unwrap_or("any"),
            filters.style().unwrap_or("brandable"),
        ),
        Category::Baby => {
            let mut lines = vec![format!(
                "Generate {} baby names",
                filters.gender().unwrap_or("any gender")
            )];
            if let Some(start) = filters.starts_with() {
                lines.push(format!("Starting with: {}", start));
            }
            if let Some(end) = filters.ends_with() {
                lines.push(format!("Ending with: {}", end));
            }
            lines.push(format!("Style: {}", keywords));
            lines.join("\n")
        }
        Category::Hashtag => format!(
            "Create hashtag combinations using:
Primary keyword: {}
Secondary keyword: {}",
            filters.word1().unwrap_or(keywords),
            filters.word2().unwrap_or(""),
        ),
        Category::Pet => format!(
            "Generate {} names with these characteristics:
{}",
            filters.pet_type().unwrap_or("pet"),
            filters.trait_words().join(" "),
        ),
    };

    if batch_number > 1 {
        format!("{}\nThis is batch {}; avoid names from earlier batches.", body, batch_number)
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_lists_category_fields() {
        let prompt = system_prompt(Category::Business, 20);
        assert!(prompt.contains("Generate 20 unique names"));
        assert!(prompt.contains("seoScore"));
        assert!(system_prompt(Category::Baby, 20).contains("origin"));
        assert!(system_prompt(Category::Pet, 5).contains("personality"));
    }

    #[test]
    fn test_user_prompt_embeds_filters() {
        let filters = Filters {
            gender: Some("female".to_string()),
            starts_with: Some("Z".to_string()),
            ..Default::default()
        };
        let prompt = user_prompt(Category::Baby, &filters, 1);
        assert!(prompt.contains("Generate female baby names"));
        assert!(prompt.contains("Starting with: Z"));
        assert!(!prompt.contains("Ending with"));
    }

    #[test]
    fn test_later_batches_ask_for_new_names() {
        let filters = Filters {
            word1: Some("fitness".to_string()),
            ..Default::default()
        };
        assert!(!user_prompt(Category::Hashtag, &filters, 1).contains("batch"));
        assert!(user_prompt(Category::Hashtag, &filters, 3).contains("batch 3"));
    }
}
