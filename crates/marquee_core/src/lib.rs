//! Marquee core vocabulary
//!
//! Shared types for scroll-driven page choreography.
//!
//! # Features
//!
//! - **Scroll Geometry**: Viewport metrics, element bounds, trigger band math
//! - **Animation Declarations**: Tween, timeline, and trigger parameter objects
//! - **Engine Traits**: Seams for the external tween and scroll-trigger engines
//! - **Element Query**: Id-based element lookup with silent degradation
//!
//! Marquee never interpolates a tween or evaluates a viewport crossing
//! itself. Everything in this crate is either geometry, a declaration
//! handed to an engine, or the trait the engine is reached through.

pub mod easing;
pub mod element;
pub mod engine;
pub mod error;
pub mod events;
pub mod geometry;
pub mod spec;
pub mod testing;

pub use easing::Easing;
pub use element::{ElementQuery, ElementRef};
pub use engine::{
    TimerCallback, TimerHost, TimerId, TriggerCallback, TriggerEngine, TriggerId, TriggerSpec,
    TriggerThrottle, TweenEngine,
};
pub use error::{EngineError, Result};
pub use events::{PageSignal, SectionEvent};
pub use geometry::{EdgePosition, ElementEdge, Rect, ScrollMetrics, ViewportAnchor};
pub use spec::{
    Property, PropertyValue, ScrollCommand, TimelineEntry, TimelinePosition, TimelineSpec,
    ToggleActions, TriggerAction, TriggerBinding, TweenDirection, TweenSpec,
};
