//! Prompt construction for LLM translation backends.

use super::style::style_or_default;

pub const SYSTEM_PROMPT: &str =
    "You are a professional translator specializing in software localization.";

/// Build the user prompt for one translation request.
///
/// The prompt names the target language, frames the text as part of a
/// chatbot interface, adds the entry's context when there is one, and
/// carries the style guidance plus the content-preservation rules.
pub fn build_prompt(text: &str, target_language: &str, style: &str, context: &str) -> String {
    let style = style_or_default(style);

    let mut prompt = format!(
        "Translate the following text to {}.\n\n\
         Context: This text is from a Microsoft Copilot Studio chatbot interface.\n",
        target_language
    );

    if !context.is_empty() {
        prompt.push_str(&format!("Specific context: {}\n", context));
    }

    prompt.push_str(&format!(
        "\nTranslation style: {}\n{}\n\n\
         Important guidelines:\n\
         1. Maintain the exact meaning and intent of the original text\n\
         2. Preserve any formatting, placeholders (like {{variables}}), or special characters\n\
         3. Keep emoji and Unicode characters as they are\n\
         4. Ensure the translation is culturally appropriate for the target language\n\
         5. For UI elements, use standard terminology for that language's software interfaces\n\
         6. For chatbot responses, maintain the conversational flow and tone\n\n\
         Text to translate:\n\"{}\"\n\n\
         Provide only the translated text without any explanations or additional content.",
        style.description, style.prompt_addition, text
    ));

    prompt
}

/// Remove one layer of matching surrounding quotes.
pub fn strip_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2
            && let Some(inner) = text
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}
