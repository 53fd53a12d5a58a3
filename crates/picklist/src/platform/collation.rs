//! Locale-aware string collation.
//!
//! With the `localization` feature, [`Collation`] wraps an ICU4X collator for
//! the requested locale (or the system locale). Without it, a deterministic
//! fallback compares case-folded text and breaks ties by code point.
//!
//! ```
//! use picklist::platform::Collation;
//! use std::cmp::Ordering;
//!
//! let collation = Collation::with_locale("en-US");
//! assert_eq!(collation.compare("Apple", "banana"), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Locale used when neither a configured nor a system locale is available.
pub const FALLBACK_LOCALE: &str = "en-US";

/// Detects the system locale identifier.
#[cfg(feature = "localization")]
pub fn system_locale() -> String {
    sys_locale::get_locale().unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// Detects the system locale identifier.
#[cfg(not(feature = "localization"))]
pub fn system_locale() -> String {
    FALLBACK_LOCALE.to_string()
}

/// Compares strings in collation order for a locale.
#[cfg(feature = "localization")]
pub struct Collation {
    locale: String,
    collator: Option<icu::collator::CollatorBorrowed<'static>>,
}

#[cfg(feature = "localization")]
impl Collation {
    /// Collation for the system locale.
    pub fn new() -> Self {
        Self::with_locale(&system_locale())
    }

    /// Collation for a specific BCP 47 locale (e.g. "en-US", "sv-SE").
    ///
    /// An unparsable locale falls back to the root collation.
    pub fn with_locale(locale: &str) -> Self {
        use icu::collator::options::CollatorOptions;
        use picklist_core::logging::targets;
        use icu::collator::Collator;
        use icu::locale::Locale;

        let parsed: Locale = match locale.parse() {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(target: targets::ORDERING, locale, %err, "unparsable locale, using root collation");
                Locale::UNKNOWN
            }
        };

        let collator = Collator::try_new(parsed.clone().into(), CollatorOptions::default())
            .or_else(|_| Collator::try_new(Default::default(), CollatorOptions::default()))
            .map_err(|err| {
                tracing::error!(target: targets::ORDERING, %err, "no collation data, using fallback ordering");
            })
            .ok();

        Self {
            locale: parsed.to_string(),
            collator,
        }
    }

    /// Compare two strings.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => fallback_compare(a, b),
        }
    }

    /// The locale identifier in use.
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

/// Compares strings in collation order for a locale.
#[cfg(not(feature = "localization"))]
pub struct Collation {
    locale: String,
}

#[cfg(not(feature = "localization"))]
impl Collation {
    /// Collation for the system locale.
    pub fn new() -> Self {
        Self::with_locale(&system_locale())
    }

    /// Collation for a specific locale.
    ///
    /// Without the `localization` feature the locale is recorded but every
    /// locale uses the same fallback ordering.
    pub fn with_locale(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }

    /// Compare two strings.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        fallback_compare(a, b)
    }

    /// The locale identifier in use.
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Default for Collation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation")
            .field("locale", &self.locale())
            .finish()
    }
}

/// Case-folded comparison, ties broken by code point.
fn fallback_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_does_not_dominate() {
        let collation = Collation::with_locale("en-US");
        assert_eq!(collation.compare("Apple", "banana"), Ordering::Less);
        assert_eq!(collation.compare("banana", "Cherry"), Ordering::Less);
        assert_eq!(collation.compare("cherry", "Apple"), Ordering::Greater);
    }

    #[test]
    fn test_equal_strings() {
        let collation = Collation::with_locale("en-US");
        assert_eq!(collation.compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_bad_locale_still_orders() {
        let collation = Collation::with_locale("not a locale!!");
        assert_eq!(collation.compare("a", "b"), Ordering::Less);
    }

    #[test]
    fn test_fallback_compare() {
        assert_eq!(fallback_compare("Zebra", "apple"), Ordering::Greater);
        assert_eq!(fallback_compare("A", "a"), Ordering::Less);
    }
}
