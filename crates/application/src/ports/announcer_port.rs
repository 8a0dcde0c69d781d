//! Screen-reader announcements
//!
//! Components that report progress to assistive technology receive an
//! announcer explicitly instead of reaching for a page-wide function.

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// How urgently an announcement interrupts the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    /// Read when the reader is idle
    #[default]
    Polite,
    /// Read immediately
    Assertive,
}

impl Politeness {
    /// Value of the `aria-live` attribute
    #[must_use]
    pub const fn aria_live(&self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

/// Port for live-region announcements
#[cfg_attr(test, automock)]
pub trait AnnouncerPort: Send + Sync {
    /// Announce a message
    fn announce(&self, message: &str, politeness: Politeness);
}
