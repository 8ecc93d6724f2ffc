//! Page runtime
//!
//! One `PageRuntime` is constructed at startup. Mounting registers the
//! hero and section watch triggers (in document order), submits the
//! choreography, and applies engine throttling; after that the runtime
//! only reacts to signals. Everything runs on the host's event thread —
//! the lock on the tracker exists because trigger callbacks arrive
//! through `Arc` handles, not because of cross-thread contention.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use marquee_core::{
    ElementQuery, PageSignal, Result, SectionEvent, TimerHost, TriggerEngine, TriggerSpec,
    TweenEngine,
};
use marquee_nav::{ActiveSectionTracker, NavChrome, NavLinks, NavScroller, RefreshDebouncer};

use crate::choreography::Choreography;
use crate::config::PageConfig;

/// Callback applying the nav bar's scrolled-state marker
pub type ChromeCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// The assembled page: trackers, debouncer, and engine handles
pub struct PageRuntime<L: NavLinks + Send + 'static> {
    tracker: Arc<Mutex<ActiveSectionTracker<L>>>,
    chrome: NavChrome,
    chrome_callback: Option<ChromeCallback>,
    scroller: NavScroller,
    debouncer: RefreshDebouncer,
    tweens: Arc<dyn TweenEngine + Send + Sync>,
    query: Arc<dyn ElementQuery + Send + Sync>,
}

impl<L: NavLinks + Send + 'static> PageRuntime<L> {
    /// Mount the page: register triggers and choreography, arm the glue
    ///
    /// Triggers register in document order (hero, then each section), so
    /// the engine's callback order matches the page. Registration errors
    /// propagate; per-element gaps inside the engine do not.
    pub fn mount(
        config: PageConfig,
        links: L,
        triggers: Arc<dyn TriggerEngine + Send + Sync>,
        tweens: Arc<dyn TweenEngine + Send + Sync>,
        query: Arc<dyn ElementQuery + Send + Sync>,
        timers: Arc<dyn TimerHost + Send + Sync>,
    ) -> Result<Self> {
        let tracker = Arc::new(Mutex::new(ActiveSectionTracker::new(links)));

        triggers.configure(config.throttle)?;

        // Hero region: both crossing directions clear the selection
        triggers.register(
            TriggerSpec::new(config.hero.clone())
                .start(config.hero_start)
                .end(config.hero_end)
                .on_enter(on_event(&tracker, SectionEvent::HeroEnter))
                .on_enter_back(on_event(&tracker, SectionEvent::HeroEnterBack)),
        )?;

        // One center-band trigger per section, in document order
        for (index, section) in config.sections.iter().enumerate() {
            triggers.register(
                TriggerSpec::new(section.clone())
                    .start(config.section_start)
                    .end(config.section_end)
                    .on_enter(on_event(&tracker, SectionEvent::SectionEnter(index)))
                    .on_enter_back(on_event(&tracker, SectionEvent::SectionEnterBack(index))),
            )?;
        }

        Choreography::for_page(&config).register(tweens.as_ref())?;

        let debouncer = RefreshDebouncer::with_quiet_period(
            timers,
            {
                let triggers = Arc::clone(&triggers);
                Arc::new(move || {
                    if let Err(err) = triggers.recompute() {
                        tracing::debug!(%err, "trigger recompute failed");
                    }
                })
            },
            Duration::from_millis(config.quiet_period_ms),
        );

        tracing::debug!(
            sections = config.sections.len(),
            "page mounted, watch triggers registered"
        );

        Ok(Self {
            tracker,
            chrome: NavChrome::new(config.scrolled_threshold),
            chrome_callback: None,
            scroller: NavScroller::new(config.sections),
            debouncer,
            tweens,
            query,
        })
    }

    /// Set the callback that applies the nav bar's scrolled marker
    pub fn on_chrome_change(&mut self, callback: ChromeCallback) {
        self.chrome_callback = Some(callback);
    }

    /// Route one browser signal
    pub fn handle(&mut self, signal: PageSignal) -> Result<()> {
        match signal {
            PageSignal::Scroll { y } => {
                if let Some(scrolled) = self.chrome.on_scroll(y) {
                    if let Some(callback) = &self.chrome_callback {
                        callback(scrolled);
                    }
                }
                Ok(())
            }
            PageSignal::Resize => {
                self.debouncer.on_resize();
                Ok(())
            }
            PageSignal::Loaded => {
                self.debouncer.on_load();
                Ok(())
            }
            PageSignal::NavClick { index } => {
                self.scroller.on_click(index, self.query.as_ref());
                if let Some(command) = self.scroller.take_pending() {
                    self.tweens.scroll_to(command)?;
                }
                Ok(())
            }
        }
    }

    /// Current active selection (None = above all sections)
    pub fn selection(&self) -> Option<usize> {
        self.tracker.lock().unwrap().selection()
    }

    /// Current nav scrolled-state
    pub fn is_scrolled(&self) -> bool {
        self.chrome.is_scrolled()
    }
}

/// Build a trigger callback that feeds one event into the tracker
fn on_event<L: NavLinks + Send + 'static>(
    tracker: &Arc<Mutex<ActiveSectionTracker<L>>>,
    event: SectionEvent,
) -> impl Fn() + Send + Sync + 'static {
    let tracker = Arc::clone(tracker);
    move || {
        tracker.lock().unwrap().on_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::testing::{
        ManualTimerHost, RecordingTriggerEngine, RecordingTweenEngine, StaticElements,
    };
    use marquee_core::{Rect, ScrollCommand};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Plain marker-vector sink, as a host would wire over its nav row
    struct VecLinks(Vec<bool>);

    impl NavLinks for VecLinks {
        fn link_count(&self) -> usize {
            self.0.len()
        }
        fn clear_active(&mut self) {
            self.0.fill(false);
        }
        fn mark_active(&mut self, index: usize) {
            self.0[index] = true;
        }
    }

    struct Fixture {
        triggers: Arc<RecordingTriggerEngine>,
        tweens: Arc<RecordingTweenEngine>,
        timers: Arc<ManualTimerHost>,
        runtime: PageRuntime<VecLinks>,
    }

    fn mount(sections: usize) -> Fixture {
        let triggers = Arc::new(RecordingTriggerEngine::new());
        let tweens = Arc::new(RecordingTweenEngine::new());
        let timers = Arc::new(ManualTimerHost::new());

        let mut elements = StaticElements::new().with("hero", Rect::new(0.0, 0.0, 800.0, 900.0));
        for i in 0..sections {
            elements = elements.with(
                format!("section-{i}"),
                Rect::new(0.0, 900.0 + 700.0 * i as f32, 800.0, 700.0),
            );
        }

        let runtime = PageRuntime::mount(
            PageConfig::new().numbered_sections(sections),
            VecLinks(vec![false; sections]),
            Arc::clone(&triggers) as _,
            Arc::clone(&tweens) as _,
            Arc::new(elements) as _,
            Arc::clone(&timers) as _,
        )
        .unwrap();

        Fixture {
            triggers,
            tweens,
            timers,
            runtime,
        }
    }

    #[test]
    fn test_mount_registers_in_document_order() {
        let f = mount(3);

        // Hero + one trigger per section
        assert_eq!(f.triggers.trigger_count(), 4);
        let regs = f.triggers.registrations();
        assert_eq!(regs[0].trigger.as_ref().unwrap().id(), "hero");
        assert_eq!(regs[1].trigger.as_ref().unwrap().id(), "section-0");
        assert_eq!(regs[3].trigger.as_ref().unwrap().id(), "section-2");

        // Throttle applied, choreography submitted
        assert!(f.triggers.throttle().is_some());
        assert!(!f.tweens.tweens().is_empty());
    }

    #[test]
    fn test_crossings_drive_selection() {
        let f = mount(3);
        assert_eq!(f.runtime.selection(), None);

        // Trigger 0 is the hero; sections are 1..=3
        f.triggers.fire_enter(1);
        assert_eq!(f.runtime.selection(), Some(0));

        f.triggers.fire_enter(2);
        assert_eq!(f.runtime.selection(), Some(1));

        f.triggers.fire_enter_back(1);
        assert_eq!(f.runtime.selection(), Some(0));

        // Back up into the hero clears everything
        f.triggers.fire_enter_back(0);
        assert_eq!(f.runtime.selection(), None);
    }

    #[test]
    fn test_scroll_signal_toggles_chrome() {
        let mut f = mount(2);
        let toggles = Arc::new(AtomicUsize::new(0));

        f.runtime.on_chrome_change({
            let toggles = Arc::clone(&toggles);
            Arc::new(move |_| {
                toggles.fetch_add(1, Ordering::SeqCst);
            })
        });

        f.runtime.handle(PageSignal::Scroll { y: 150.0 }).unwrap();
        assert!(f.runtime.is_scrolled());
        f.runtime.handle(PageSignal::Scroll { y: 200.0 }).unwrap();
        f.runtime.handle(PageSignal::Scroll { y: 50.0 }).unwrap();
        assert!(!f.runtime.is_scrolled());

        // Two transitions: on at 150, off at 50
        assert_eq!(toggles.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_resize_debounces_to_one_recompute() {
        let mut f = mount(2);

        f.runtime.handle(PageSignal::Resize).unwrap();
        f.timers.advance(100);
        f.runtime.handle(PageSignal::Resize).unwrap();
        f.timers.advance(100);
        f.runtime.handle(PageSignal::Resize).unwrap();

        assert_eq!(f.triggers.recompute_count(), 0);
        f.timers.advance_to(450);
        assert_eq!(f.triggers.recompute_count(), 1);
    }

    #[test]
    fn test_load_recomputes_immediately() {
        let mut f = mount(2);
        f.runtime.handle(PageSignal::Loaded).unwrap();
        assert_eq!(f.triggers.recompute_count(), 1);
    }

    #[test]
    fn test_nav_click_issues_smooth_scroll() {
        let mut f = mount(2);

        f.runtime.handle(PageSignal::NavClick { index: 1 }).unwrap();
        assert_eq!(
            f.tweens.scrolls(),
            vec![ScrollCommand::ToOffset {
                y: 1600.0,
                smooth: true
            }]
        );
    }

    #[test]
    fn test_nav_click_out_of_range_is_noop() {
        let mut f = mount(2);
        f.runtime.handle(PageSignal::NavClick { index: 9 }).unwrap();
        assert!(f.tweens.scrolls().is_empty());
    }
}
