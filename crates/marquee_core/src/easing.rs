//! Easing curve declarations
//!
//! Named curves passed through to the external engine. Marquee never
//! evaluates these; the engine maps them onto its own interpolators.

use serde::{Deserialize, Serialize};

/// Easing curve for a tween or timeline default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// No easing (used for scroll-scrubbed tweens)
    Linear,
    /// Quadratic ease-out
    Power2Out,
    /// Quadratic ease-in-out
    Power2InOut,
    /// Cubic ease-out
    #[default]
    Power3Out,
    /// Cubic ease-in-out
    Power3InOut,
}
