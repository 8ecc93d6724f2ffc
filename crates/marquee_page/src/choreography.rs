//! Page choreography declarations
//!
//! The full registration set for a long-form page: hero entrance
//! timeline, per-section entrances and number scrubs, grouped staggers,
//! reveals, and the hero parallax. Everything here is declarative — the
//! specs are built once and submitted to the tween engine, which owns
//! playback.
//!
//! Selector-style targets (`"highlight-box"`, `"pillar"`) may match
//! several elements; the engine instantiates the declaration per match,
//! applying `stagger_ms` across them.

use marquee_core::{
    EdgePosition, Easing, ElementRef, Property, TimelineSpec, ToggleActions, TriggerBinding,
    TweenEngine, TweenSpec,
};

use crate::config::PageConfig;

/// The declarative animation set for one page
#[derive(Debug, Clone, Default)]
pub struct Choreography {
    timelines: Vec<TimelineSpec>,
    tweens: Vec<TweenSpec>,
}

impl Choreography {
    /// Build the standard choreography for a page
    pub fn for_page(config: &PageConfig) -> Self {
        let mut choreo = Self::default();

        choreo.timelines.push(hero_timeline());
        choreo.timelines.push(pillar_timeline());

        for section in &config.sections {
            choreo.tweens.push(section_number_scrub(section));
            choreo.tweens.push(section_title(section));
            choreo.tweens.push(section_subtitle(section));
            choreo.tweens.push(section_content(section));
        }

        choreo.tweens.push(highlight_boxes());
        choreo.tweens.push(key_points());
        choreo.tweens.push(strategy_grid());
        choreo.tweens.push(closing_text());
        choreo.tweens.push(footer_reveal());
        choreo.tweens.push(hero_parallax(&config.hero));
        choreo.tweens.push(emblem_spin(&config.hero));

        choreo
    }

    /// Submit every declaration to the engine
    pub fn register(&self, engine: &dyn TweenEngine) -> marquee_core::Result<()> {
        for timeline in &self.timelines {
            engine.timeline(timeline.clone())?;
        }
        for tween in &self.tweens {
            engine.tween(tween.clone())?;
        }
        tracing::debug!(
            timelines = self.timelines.len(),
            tweens = self.tweens.len(),
            "choreography registered"
        );
        Ok(())
    }

    pub fn timeline_count(&self) -> usize {
        self.timelines.len()
    }

    pub fn tween_count(&self) -> usize {
        self.tweens.len()
    }

    pub fn timelines(&self) -> &[TimelineSpec] {
        &self.timelines
    }

    pub fn tweens(&self) -> &[TweenSpec] {
        &self.tweens
    }
}

// ============================================================================
// Hero
// ============================================================================

/// Hero entrance: title lines, subtitle, visual, emblem draw-on, scroll cue
fn hero_timeline() -> TimelineSpec {
    TimelineSpec::new()
        .default_easing(Easing::Power3Out)
        .entry(
            TweenSpec::from_values("hero-title-line")
                .prop(Property::TranslateY, 100.0)
                .prop(Property::Opacity, 0.0)
                .duration(1000)
                .stagger(200),
        )
        .entry_at(
            TweenSpec::from_values("hero-subtitle")
                .prop(Property::TranslateY, 30.0)
                .prop(Property::Opacity, 0.0)
                .duration(800),
            -400,
        )
        .entry_at(
            TweenSpec::from_values("hero-visual")
                .prop(Property::Scale, 0.8)
                .prop(Property::Opacity, 0.0)
                .duration(1000),
            -600,
        )
        .entry_at(
            TweenSpec::to_values("hero-emblem")
                .prop(Property::StrokeDashoffset, 0.0)
                .duration(1500)
                .easing(Easing::Power2InOut),
            -800,
        )
        .entry_at(
            TweenSpec::from_values("scroll-indicator")
                .prop(Property::TranslateY, -20.0)
                .prop(Property::Opacity, 0.0)
                .duration(800),
            -500,
        )
}

/// Hero visual drifts down and fades as the hero scrolls out
fn hero_parallax(hero: &ElementRef) -> TweenSpec {
    TweenSpec::to_values("hero-visual")
        .prop(Property::TranslateY, 200.0)
        .prop(Property::Opacity, 0.0)
        .easing(Easing::Linear)
        .trigger(
            TriggerBinding::new(hero.clone(), EdgePosition::top_top())
                .end(EdgePosition::bottom_top())
                .scrub(1.0),
        )
}

/// Hero emblem rotates with scroll over the same band as the parallax
fn emblem_spin(hero: &ElementRef) -> TweenSpec {
    TweenSpec::to_values("hero-emblem")
        .prop(Property::Rotation, 120.0)
        .easing(Easing::Linear)
        .trigger(
            TriggerBinding::new(hero.clone(), EdgePosition::top_top())
                .end(EdgePosition::bottom_top())
                .scrub(1.0),
        )
}

// ============================================================================
// Sections
// ============================================================================

/// Section number drifts and dims, scrubbed to the section's own scroll
fn section_number_scrub(section: &ElementRef) -> TweenSpec {
    TweenSpec::to_values(section.suffixed("number"))
        .prop(Property::TranslateY, 100.0)
        .prop(Property::Opacity, 0.3)
        .easing(Easing::Linear)
        .trigger(
            TriggerBinding::new(section.clone(), EdgePosition::top_top())
                .end(EdgePosition::bottom_top())
                .scrub(1.0),
        )
}

fn section_title(section: &ElementRef) -> TweenSpec {
    TweenSpec::from_values(section.suffixed("title"))
        .prop(Property::TranslateX, -50.0)
        .prop(Property::Opacity, 0.0)
        .duration(1000)
        .easing(Easing::Power3Out)
        .trigger(
            TriggerBinding::new(section.clone(), EdgePosition::top_fraction(0.7))
                .end(EdgePosition::top_fraction(0.3))
                .toggle(ToggleActions::play_reverse()),
        )
}

fn section_subtitle(section: &ElementRef) -> TweenSpec {
    TweenSpec::from_values(section.suffixed("subtitle"))
        .prop(Property::TranslateX, -30.0)
        .prop(Property::Opacity, 0.0)
        .duration(800)
        .delay(200)
        .easing(Easing::Power3Out)
        .trigger(
            TriggerBinding::new(section.clone(), EdgePosition::top_fraction(0.7))
                .end(EdgePosition::top_fraction(0.3))
                .toggle(ToggleActions::play_reverse()),
        )
}

/// Section body copy rises in, staggered per block
fn section_content(section: &ElementRef) -> TweenSpec {
    TweenSpec::from_values(section.suffixed("content"))
        .prop(Property::TranslateY, 30.0)
        .prop(Property::Opacity, 0.0)
        .duration(800)
        .stagger(150)
        .easing(Easing::Power2Out)
        .trigger(
            TriggerBinding::new(section.clone(), EdgePosition::top_fraction(0.6))
                .toggle(ToggleActions::play_reverse()),
        )
}

// ============================================================================
// Grouped Content
// ============================================================================

fn highlight_boxes() -> TweenSpec {
    TweenSpec::from_values("highlight-box")
        .prop(Property::TranslateX, -100.0)
        .prop(Property::Opacity, 0.0)
        .duration(1000)
        .easing(Easing::Power3Out)
        .trigger(
            TriggerBinding::new("highlight-box", EdgePosition::top_fraction(0.8))
                .toggle(ToggleActions::play_reverse()),
        )
}

/// Pillar entrance: title slides in, body rises behind it
fn pillar_timeline() -> TimelineSpec {
    TimelineSpec::new()
        .trigger(
            TriggerBinding::new("pillar", EdgePosition::top_fraction(0.75))
                .toggle(ToggleActions::play_reverse()),
        )
        .entry(
            TweenSpec::from_values("pillar-title")
                .prop(Property::TranslateX, -30.0)
                .prop(Property::Opacity, 0.0)
                .duration(800)
                .easing(Easing::Power2Out),
        )
        .entry_at(
            TweenSpec::from_values("pillar-body")
                .prop(Property::TranslateY, 20.0)
                .prop(Property::Opacity, 0.0)
                .duration(600)
                .stagger(100)
                .easing(Easing::Power2Out),
            -400,
        )
}

fn key_points() -> TweenSpec {
    TweenSpec::from_values("key-point")
        .prop(Property::TranslateX, -50.0)
        .prop(Property::Opacity, 0.0)
        .duration(800)
        .stagger(150)
        .easing(Easing::Power2Out)
        .trigger(
            TriggerBinding::new("key-points", EdgePosition::top_fraction(0.75))
                .toggle(ToggleActions::play_reverse()),
        )
}

fn strategy_grid() -> TweenSpec {
    TweenSpec::from_values("strategy-item")
        .prop(Property::TranslateY, 50.0)
        .prop(Property::Opacity, 0.0)
        .duration(800)
        .stagger(100)
        .easing(Easing::Power2Out)
        .trigger(
            TriggerBinding::new("strategy-grid", EdgePosition::top_fraction(0.7))
                .toggle(ToggleActions::play_reverse()),
        )
}

fn closing_text() -> TweenSpec {
    TweenSpec::from_values("closing-text")
        .prop(Property::Scale, 0.95)
        .prop(Property::Opacity, 0.0)
        .duration(1000)
        .easing(Easing::Power3Out)
        .trigger(
            TriggerBinding::new("closing-text", EdgePosition::top_fraction(0.8))
                .toggle(ToggleActions::play_reverse()),
        )
}

fn footer_reveal() -> TweenSpec {
    TweenSpec::from_values("footer-content")
        .prop(Property::TranslateY, 50.0)
        .prop(Property::Opacity, 0.0)
        .duration(1000)
        .easing(Easing::Power3Out)
        .trigger(
            TriggerBinding::new("footer", EdgePosition::top_fraction(0.8))
                .toggle(ToggleActions::play_reverse()),
        )
}
