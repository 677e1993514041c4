//! # Contributor Collation
//!
//! Contributor order is externally visible (it ends up in `package.json`), so
//! sorting must not depend on byte order. This module wraps the ICU collator
//! with CLDR data, so letters such as `Ł`, `Ø` or `ß` sort with their base
//! letters and locales apply their own tailoring (Swedish puts `Ö` after `Z`).
//!
//! [`Sensitivity`] maps onto ICU collation options:
//!
//! | Sensitivity | Strength  | Case level |
//! |-------------|-----------|------------|
//! | `Base`      | primary   | off        |
//! | `Accent`    | primary   | on         |
//! | `Variant`   | tertiary  | off        |

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{CaseLevel, CollatorOptions, Strength};
use icu_locid::Locale;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_LOCALE;
use crate::error::{Error, Result};

/// Which differences between two strings count when comparing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    /// Only base letters differ: `a = á = A`.
    Base,
    /// Base letters compare case-sensitively, diacritics are ignored:
    /// `a ≠ A`, `a = á`.
    #[default]
    Accent,
    /// Every difference counts: `a ≠ á ≠ A`.
    Variant,
}

impl Sensitivity {
    fn options(self) -> CollatorOptions {
        let mut options = CollatorOptions::new();
        match self {
            Self::Base => {
                options.strength = Some(Strength::Primary);
            }
            Self::Accent => {
                options.strength = Some(Strength::Primary);
                options.case_level = Some(CaseLevel::On);
            }
            Self::Variant => {
                options.strength = Some(Strength::Tertiary);
            }
        }
        options
    }
}

impl FromStr for Sensitivity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "accent" => Ok(Self::Accent),
            "variant" => Ok(Self::Variant),
            other => Err(format!(
                "unknown sensitivity '{}' (expected base, accent or variant)",
                other
            )),
        }
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::Accent => "accent",
            Self::Variant => "variant",
        };
        f.write_str(name)
    }
}

/// Locale-aware string comparator for contributor identities.
pub struct Collator {
    locale: Locale,
    sensitivity: Sensitivity,
    inner: icu_collator::Collator,
}

impl Collator {
    /// Create a collator for `locale` (a BCP 47 tag such as `en` or `sv-SE`)
    /// at the given sensitivity.
    ///
    /// Locales without CLDR tailoring use the root order.
    pub fn new(locale: &str, sensitivity: Sensitivity) -> Result<Self> {
        let parsed: Locale = locale.parse().map_err(|e| Error::Locale {
            locale: locale.to_string(),
            message: format!("{}", e),
        })?;
        let inner = icu_collator::Collator::try_new(&(&parsed).into(), sensitivity.options())
            .map_err(|e| Error::Locale {
                locale: locale.to_string(),
                message: format!("{}", e),
            })?;
        debug!("collating as {} with {} sensitivity", parsed, sensitivity);

        Ok(Self {
            locale: parsed,
            sensitivity,
            inner,
        })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    /// Compare two strings under this collator's sensitivity.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self.inner.compare(a, b) {
            Ordering::Equal if self.sensitivity == Sensitivity::Variant => a.cmp(b),
            ordering => ordering,
        }
    }

    /// Sort `items` in place. Items that compare equal keep their order.
    pub fn sort(&self, items: &mut [String]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Debug for Collator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collator")
            .field("locale", &self.locale.to_string())
            .field("sensitivity", &self.sensitivity)
            .finish()
    }
}

impl Default for Collator {
    fn default() -> Self {
        // the default locale ships with the compiled CLDR data
        Self::new(DEFAULT_LOCALE, Sensitivity::default())
            .expect("built-in collation data for the default locale")
    }
}
