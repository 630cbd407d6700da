//! Prompt templates forwarded to the LLM.
//!
//! Centralizing these strings makes it easy to tweak how questions and
//! comparisons are phrased without digging through the route handlers.

/// Wrap a free-form user question in the beverage-expert persona.
pub fn chat_prompt(message: &str, location: Option<&str>) -> String {
    let location_line = match location {
        Some(location) => format!(
            "\nThe user is shopping around {location}. Lean on prices typical for that area when quoting numbers.\n"
        ),
        None => String::new(),
    };

    format!(
        "You are a knowledgeable yet friendly beverage expert. You're here to help answer \
questions about drinks in a professional yet approachable way.\n\
\n\
User Question: {message}\n\
{location_line}\
\n\
Guidelines:\n\
- Answer the user's question directly and thoroughly\n\
- Be professional but conversational - like chatting with a knowledgeable friend\n\
- For drink prices: show common bottle sizes (750ml/350ml/180ml/90ml) with \u{20b9} prices and note that prices may vary\n\
- For comparisons: highlight key differences, taste profiles, alcohol content, and value\n\
- For recommendations: suggest based on the user's preferences or occasion\n\
- Keep responses clear and helpful without being too formal\n\
- Feel free to use emojis sparingly to keep it engaging \u{1f37b}\n\
\n\
Focus on giving practical, honest information that answers what they're asking."
    )
}

/// Ask for a pipe-separated attribute table plus strengths, weaknesses and a
/// verdict for the given drinks.
pub fn compare_prompt(beverages: &[String]) -> String {
    let count = beverages.len();
    let numbered = beverages
        .iter()
        .enumerate()
        .map(|(i, name)| format!("Beverage {}: {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n");
    let columns = beverages.join(" | ");

    format!(
        "You are a beverage comparison expert in India. Compare these {count} drinks:\n\
{numbered}\n\
\n\
Create a detailed comparison table. Format as a pipe-separated table with {count} beverage columns.\n\
\n\
Structure:\n\
\n\
Attribute | {columns}\n\
Type | [types for each]\n\
Price (750ml) | [prices in \u{20b9} for each]\n\
Price (350ml) | [prices in \u{20b9} for each]\n\
ABV | [alcohol content for each]\n\
Taste Profile | [taste descriptions for each]\n\
Origin | [country/region for each]\n\
Best For | [usage recommendations for each]\n\
Quality Tier | [quality level for each]\n\
Value for Money | [rating for each]\n\
\n\
FOLLOWED BY:\n\
\n\
KEY STRENGTHS:\n\
[List unique strengths of each beverage]\n\
\n\
WEAKNESSES:\n\
[List unique weaknesses of each beverage]\n\
\n\
OVERALL WINNER & RECOMMENDATIONS:\n\
[Based on price, taste, value - which is best and for what use case]\n\
\n\
Keep it concise, factual, and easy to compare. Use current India street prices."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_prompt_embeds_question() {
        let prompt = chat_prompt("How much is Old Monk?", None);
        assert!(prompt.contains("User Question: How much is Old Monk?"));
        assert!(!prompt.contains("shopping around"));
    }

    #[test]
    fn chat_prompt_mentions_location_when_given() {
        let prompt = chat_prompt("Price of Kingfisher?", Some("Mumbai"));
        assert!(prompt.contains("shopping around Mumbai"));
    }

    #[test]
    fn compare_prompt_lists_and_columns() {
        let drinks = vec!["Kingfisher".to_string(), "Old Monk".to_string()];
        let prompt = compare_prompt(&drinks);
        assert!(prompt.contains("Compare these 2 drinks:"));
        assert!(prompt.contains("Beverage 1: Kingfisher"));
        assert!(prompt.contains("Beverage 2: Old Monk"));
        assert!(prompt.contains("Attribute | Kingfisher | Old Monk"));
    }
}
