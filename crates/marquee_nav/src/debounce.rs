//! Resize-refresh debouncing
//!
//! Trigger bands are measured against layout, so a resize invalidates
//! them — but resizes arrive in bursts while the user drags the window
//! edge. The debouncer coalesces a burst into one engine recompute, timed
//! from the burst's last signal. Page-load completion bypasses the quiet
//! period entirely: late-loading content has already shifted layout and
//! the bands are stale right now.

use std::sync::Arc;
use std::time::Duration;

use marquee_core::{TimerHost, TimerId};

/// Default quiet period before a coalesced refresh fires
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(250);

/// Callback invoking the engine's layout recompute
pub type RefreshCallback = Arc<dyn Fn() + Send + Sync>;

/// Coalesces resize signals into a single delayed refresh
pub struct RefreshDebouncer {
    host: Arc<dyn TimerHost + Send + Sync>,
    refresh: RefreshCallback,
    quiet_period: Duration,
    /// Timer armed for the current burst, replaced on every new signal
    pending: Option<TimerId>,
}

impl RefreshDebouncer {
    pub fn new(host: Arc<dyn TimerHost + Send + Sync>, refresh: RefreshCallback) -> Self {
        Self::with_quiet_period(host, refresh, DEFAULT_QUIET_PERIOD)
    }

    pub fn with_quiet_period(
        host: Arc<dyn TimerHost + Send + Sync>,
        refresh: RefreshCallback,
        quiet_period: Duration,
    ) -> Self {
        Self {
            host,
            refresh,
            quiet_period,
            pending: None,
        }
    }

    /// Handle a raw resize signal
    ///
    /// Cancels any pending refresh and re-arms the timer, so a burst of
    /// signals closer together than the quiet period produces exactly one
    /// refresh, `quiet_period` after the last signal.
    pub fn on_resize(&mut self) {
        if let Some(id) = self.pending.take() {
            self.host.cancel(id);
        }

        let refresh = Arc::clone(&self.refresh);
        let id = self
            .host
            .schedule(self.quiet_period, Arc::new(move || refresh()));
        self.pending = Some(id);
    }

    /// Handle page-load completion: refresh immediately
    ///
    /// Not subject to debouncing. A pending resize-driven refresh is left
    /// armed; recompute is idempotent in the engine, so firing both is
    /// harmless.
    pub fn on_load(&self) {
        tracing::debug!("page load complete, refreshing trigger layout");
        (self.refresh)();
    }

    /// Whether a debounced refresh is currently armed
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
