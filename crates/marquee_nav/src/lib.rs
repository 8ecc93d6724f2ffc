//! Marquee navigation glue
//!
//! The stateful pieces that connect scroll-trigger crossings and browser
//! signals to navigation state:
//!
//! - [`ActiveSectionTracker`] - which nav link is marked active
//! - [`NavChrome`] - scrolled-state toggle for the nav bar
//! - [`RefreshDebouncer`] - coalesces resize bursts into one layout refresh
//! - [`NavScroller`] - nav click to smooth-scroll command
//!
//! All state lives on the main event thread; the only suspension anywhere
//! is the debouncer's scheduled timer.

pub mod active;
pub mod chrome;
pub mod debounce;
pub mod scroll_to;

pub use active::{reduce, ActiveSectionTracker, NavLinks};
pub use chrome::NavChrome;
pub use debounce::{RefreshCallback, RefreshDebouncer};
pub use scroll_to::NavScroller;
