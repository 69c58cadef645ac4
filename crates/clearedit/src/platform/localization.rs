//! Locale detection and text direction.
//!
//! This module provides cross-platform locale detection and text direction
//! queries for bidirectional layout support.
//!
//! # System Locale Detection
//!
//! ```
//! use clearedit::platform::SystemLocale;
//!
//! // Get the system locale identifier
//! let locale = SystemLocale::current();
//! println!("System locale: {}", locale); // e.g., "en-US", "fr-FR"
//!
//! // Get the layout direction for the system locale
//! let direction = SystemLocale::direction();
//! ```
//!
//! # Text Direction
//!
//! ```
//! use clearedit::platform::TextDirection;
//!
//! assert_eq!(TextDirection::detect("Hello"), TextDirection::Ltr);
//! assert_eq!(TextDirection::detect("مرحبا"), TextDirection::Rtl);
//! ```

/// Text direction for bidirectional text support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    /// Left-to-right (e.g., English, French, German)
    #[default]
    Ltr,
    /// Right-to-left (e.g., Arabic, Hebrew)
    Rtl,
    /// Mixed or neutral direction
    Mixed,
}

impl TextDirection {
    /// Detect the text direction of a string.
    ///
    /// Scans for the first character with a strong bidirectional class and
    /// returns its direction. Strings without any strong character default
    /// to left-to-right.
    pub fn detect(text: &str) -> Self {
        use unicode_bidi::{bidi_class, BidiClass};

        if text.is_empty() {
            return TextDirection::Ltr;
        }

        for ch in text.chars() {
            match bidi_class(ch) {
                BidiClass::L => return TextDirection::Ltr,
                BidiClass::R | BidiClass::AL => return TextDirection::Rtl,
                _ => continue,
            }
        }

        TextDirection::Ltr
    }

    /// Detect if a locale typically uses RTL text.
    ///
    /// This checks if the language code is one of the common RTL languages.
    pub fn for_locale(locale: &str) -> Self {
        // Extract language code (before '-' or '_')
        let lang = locale.split(['-', '_']).next().unwrap_or(locale);

        match lang.to_lowercase().as_str() {
            "ar" | "he" | "fa" | "ur" | "yi" | "ps" | "sd" | "ug" | "ku" | "ckb" | "dv" | "arc"
            | "syr" => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// Returns true if this is left-to-right direction.
    pub fn is_ltr(&self) -> bool {
        matches!(self, TextDirection::Ltr)
    }

    /// Returns true if this is right-to-left direction.
    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

/// Detailed information about a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
    /// The full locale identifier (e.g., "en-US", "fr-FR").
    pub identifier: String,
    /// The language code (e.g., "en", "fr").
    pub language: String,
    /// The region/country code (e.g., "US", "FR"), if present.
    pub region: Option<String>,
    /// The script code (e.g., "Latn", "Cyrl"), if present.
    pub script: Option<String>,
    /// The text direction for this locale.
    pub direction: TextDirection,
}

impl LocaleInfo {
    /// Parse a locale identifier into its components.
    pub fn parse(identifier: &str) -> Self {
        let mut parts = identifier.split(['-', '_']);

        let language = parts.next().unwrap_or("en").to_lowercase();
        let direction = TextDirection::for_locale(&language);

        let mut region = None;
        let mut script = None;

        for part in parts {
            // Scripts are 4 characters, title case (e.g., "Latn")
            if part.len() == 4 && part.chars().next().is_some_and(|c| c.is_uppercase()) {
                script = Some(part.to_string());
            }
            // Regions are 2 characters uppercase (e.g., "US") or 3 digits
            else if (part.len() == 2 && part.chars().all(|c| c.is_ascii_uppercase()))
                || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
            {
                region = Some(part.to_uppercase());
            }
        }

        Self {
            identifier: identifier.to_string(),
            language,
            region,
            script,
            direction,
        }
    }
}

impl Default for LocaleInfo {
    fn default() -> Self {
        Self::parse("en-US")
    }
}

/// Static methods for detecting the system locale.
pub struct SystemLocale;

impl SystemLocale {
    /// Get the current system locale identifier.
    ///
    /// Returns a BCP 47 locale identifier (e.g., "en-US", "fr-FR"). Falls
    /// back to "en-US" when the platform query is unavailable, which also
    /// makes the layout direction default to left-to-right.
    pub fn current() -> String {
        sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string())
    }

    /// Get detailed information about the current system locale.
    pub fn info() -> LocaleInfo {
        LocaleInfo::parse(&Self::current())
    }

    /// Get the text direction for the current system locale.
    pub fn direction() -> TextDirection {
        Self::info().direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_direction_detect_ltr() {
        assert_eq!(TextDirection::detect("Hello"), TextDirection::Ltr);
        assert_eq!(TextDirection::detect("Bonjour"), TextDirection::Ltr);
        assert_eq!(TextDirection::detect("123"), TextDirection::Ltr); // Numbers are neutral
        assert_eq!(TextDirection::detect(""), TextDirection::Ltr);
    }

    #[test]
    fn test_text_direction_detect_rtl() {
        // Arabic
        assert_eq!(TextDirection::detect("مرحبا"), TextDirection::Rtl);
        // Hebrew
        assert_eq!(TextDirection::detect("שלום"), TextDirection::Rtl);
    }

    #[test]
    fn test_text_direction_for_locale() {
        assert_eq!(TextDirection::for_locale("en-US"), TextDirection::Ltr);
        assert_eq!(TextDirection::for_locale("fr-FR"), TextDirection::Ltr);
        assert_eq!(TextDirection::for_locale("ar"), TextDirection::Rtl);
        assert_eq!(TextDirection::for_locale("ar-SA"), TextDirection::Rtl);
        assert_eq!(TextDirection::for_locale("he"), TextDirection::Rtl);
        assert_eq!(TextDirection::for_locale("fa-IR"), TextDirection::Rtl);
    }

    #[test]
    fn test_locale_info_parse() {
        let info = LocaleInfo::parse("en-US");
        assert_eq!(info.language, "en");
        assert_eq!(info.region, Some("US".to_string()));
        assert_eq!(info.direction, TextDirection::Ltr);

        let info = LocaleInfo::parse("ar-SA");
        assert_eq!(info.language, "ar");
        assert_eq!(info.region, Some("SA".to_string()));
        assert_eq!(info.direction, TextDirection::Rtl);

        let info = LocaleInfo::parse("zh-Hant-TW");
        assert_eq!(info.language, "zh");
        assert_eq!(info.script, Some("Hant".to_string()));
        assert_eq!(info.region, Some("TW".to_string()));
    }

    #[test]
    fn test_system_locale_current() {
        let locale = SystemLocale::current();
        // Should return something (even if just the fallback)
        assert!(!locale.is_empty());
    }
}
