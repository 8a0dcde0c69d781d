//! Announcer that writes announcements to the log

use application::ports::{AnnouncerPort, Politeness};
use tracing::{info, warn};

/// Logs announcements instead of speaking them
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnnouncer;

impl AnnouncerPort for TracingAnnouncer {
    fn announce(&self, message: &str, politeness: Politeness) {
        match politeness {
            Politeness::Polite => info!(announcement = %message, "Live-region announcement"),
            Politeness::Assertive => warn!(announcement = %message, "Live-region announcement"),
        }
    }
}

/// Forwards every announcement to each inner announcer in order
#[derive(Default)]
pub struct FanoutAnnouncer {
    targets: Vec<std::sync::Arc<dyn AnnouncerPort>>,
}

impl std::fmt::Debug for FanoutAnnouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanoutAnnouncer")
            .field("targets", &self.targets.len())
            .finish()
    }
}

impl FanoutAnnouncer {
    /// Create from a list of announcers
    #[must_use]
    pub fn new(targets: Vec<std::sync::Arc<dyn AnnouncerPort>>) -> Self {
        Self { targets }
    }
}

impl AnnouncerPort for FanoutAnnouncer {
    fn announce(&self, message: &str, politeness: Politeness) {
        for target in &self.targets {
            target.announce(message, politeness);
        }
    }
}
