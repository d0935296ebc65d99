//! Prompt construction and request validation

use crate::core::errors::{Result, TranslationError};
use crate::core::languages;

/// Build the instruction sent as the user turn of the completion request.
///
/// Fails with [`TranslationError::EmptyInput`] when the text is empty after
/// trimming, and with [`TranslationError::SameLanguage`] when source and
/// target are identical and the source is not the auto-detect sentinel.
///
/// The user text is embedded verbatim between single quotes; quote characters
/// inside it are not escaped. Known limitation.
pub fn build_prompt(text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(TranslationError::EmptyInput);
    }

    if source_lang == target_lang && !languages::is_auto(source_lang) {
        return Err(TranslationError::SameLanguage {
            language: source_lang.to_string(),
        });
    }

    Ok(format!(
        "Translate the following text from {} to {}:\n\n'{}'",
        source_lang, target_lang, text
    ))
}
