//! Supported language catalog

/// Source-language sentinel meaning "let the model infer the source language"
pub const AUTO: &str = "auto";

/// Display label and canonical identifier for every selectable language
const LANGUAGES: &[(&str, &str)] = &[
    ("Auto-detect", AUTO),
    ("English", "English"),
    ("Spanish", "Spanish"),
    ("French", "French"),
    ("German", "German"),
    ("Italian", "Italian"),
    ("Portuguese", "Portuguese"),
    ("Chinese (Simplified)", "Chinese (Simplified)"),
    ("Japanese", "Japanese"),
    ("Korean", "Korean"),
    ("Arabic", "Arabic"),
    ("Hindi", "Hindi"),
    ("Urdu", "Urdu"),
    ("Russian", "Russian"),
];

/// All selectable entries as (label, canonical id) pairs
pub fn entries() -> &'static [(&'static str, &'static str)] {
    LANGUAGES
}

/// Resolve a display label or canonical identifier to the canonical id
pub fn resolve(input: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(label, code)| label.eq_ignore_ascii_case(input) || code.eq_ignore_ascii_case(input))
        .map(|(_, code)| *code)
}

/// Check whether a value is the auto-detect sentinel
pub fn is_auto(lang: &str) -> bool {
    lang == AUTO
}

/// Check whether a label or id is in the catalog
pub fn is_supported(input: &str) -> bool {
    resolve(input).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_display_label() {
        assert_eq!(resolve("Auto-detect"), Some(AUTO));
        assert_eq!(resolve("Spanish"), Some("Spanish"));
        assert_eq!(resolve("Chinese (Simplified)"), Some("Chinese (Simplified)"));
    }

    #[test]
    fn test_resolve_canonical_id() {
        assert_eq!(resolve("auto"), Some(AUTO));
        assert_eq!(resolve("English"), Some("English"));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve("spanish"), Some("Spanish"));
        assert_eq!(resolve("AUTO-DETECT"), Some(AUTO));
    }

    #[test]
    fn test_resolve_unknown_label() {
        assert_eq!(resolve("Klingon"), None);
        assert!(!is_supported("Klingon"));
    }

    #[test]
    fn test_auto_sentinel() {
        assert!(is_auto(AUTO));
        assert!(!is_auto("English"));
    }

    #[test]
    fn test_catalog_includes_auto_detect() {
        let labels: Vec<&str> = entries().iter().map(|(label, _)| *label).collect();
        assert!(labels.contains(&"Auto-detect"));
        assert_eq!(entries().len(), 14);
    }
}
