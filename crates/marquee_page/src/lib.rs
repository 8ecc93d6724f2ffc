//! Marquee page assembly
//!
//! Puts the pieces together for one long-form animated page:
//!
//! - [`PageConfig`] - element references, thresholds, trigger bands
//! - [`Choreography`] - the declarative entrance/parallax registration set
//! - [`PageRuntime`] - constructed once at startup; registers triggers and
//!   choreography, then routes browser signals for the page session

pub mod choreography;
pub mod config;
pub mod runtime;

pub use choreography::Choreography;
pub use config::PageConfig;
pub use runtime::{ChromeCallback, PageRuntime};
