//! UV index estimate port
//!
//! No upstream service publishes a UV reading for the panel, so the value is
//! synthesized behind this port until a real source is wired in.

use domain::UvIndex;
#[cfg(test)]
use mockall::automock;

/// Port for obtaining the current UV index
#[cfg_attr(test, automock)]
pub trait UvEstimatePort: Send + Sync {
    /// Current UV index
    fn estimate(&self) -> UvIndex;
}
