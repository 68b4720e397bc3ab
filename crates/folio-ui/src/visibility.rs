//! Viewport visibility: converts a continuous intersection ratio into a
//! one-shot reveal event.
//!
//! The latch itself is pure; [`use_reveal`] wires it to the webview's
//! `IntersectionObserver` through the eval channel. When the host offers
//! no intersection capability the section is treated as immediately
//! visible, so content is never permanently hidden.

use dioxus::prelude::*;

/// Fraction of a section that must be on screen before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.3;

/// Per-section reveal state. `Visible` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// The only transition. Calling it again is a no-op.
    pub fn mark_visible(&mut self) {
        *self = RevealState::Visible;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, RevealState::Visible)
    }

    /// CSS class selecting the pre-reveal or revealed presentation.
    pub fn css_class(&self) -> &'static str {
        match self {
            RevealState::Hidden => "reveal-hidden",
            RevealState::Visible => "reveal-visible",
        }
    }
}

/// Converts observed intersection ratios into discrete visibility events.
///
/// With `fire_once` set (the default usage) the latch emits `true` exactly
/// once, the first time the ratio reaches the threshold, and ignores
/// everything afterwards. Without it, an event is emitted on every
/// threshold crossing in either direction.
#[derive(Debug)]
pub struct VisibilityLatch {
    threshold: f64,
    fire_once: bool,
    latched: bool,
    above: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64, fire_once: bool) -> Self {
        Self {
            // A zero threshold would fire on fully off-screen sections.
            threshold: threshold.clamp(f64::MIN_POSITIVE, 1.0),
            fire_once,
            latched: false,
            above: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feeds one observed ratio. Returns the visibility event to deliver,
    /// if any.
    pub fn observe(&mut self, ratio: f64) -> Option<bool> {
        if self.fire_once {
            if self.latched || ratio < self.threshold {
                return None;
            }
            self.latched = true;
            return Some(true);
        }

        let above = ratio >= self.threshold;
        if above == self.above {
            return None;
        }
        self.above = above;
        Some(above)
    }

    /// True once a `fire_once` latch has fired: observation can stop.
    pub fn is_spent(&self) -> bool {
        self.fire_once && self.latched
    }
}

/// Registers an `IntersectionObserver` for `element_id` and streams the
/// observed ratios back over the eval channel. If the element or the
/// observer capability is missing, full visibility is reported at once.
fn observer_js(element_id: &str, threshold: f64) -> String {
    format!(
        r#"(function() {{
            var el = document.getElementById('{element_id}');
            if (!el || typeof IntersectionObserver === 'undefined') {{
                dioxus.send(1.0);
                return;
            }}
            window.__folio_observers = window.__folio_observers || {{}};
            var prev = window.__folio_observers['{element_id}'];
            if (prev) {{ prev.disconnect(); }}
            var obs = new IntersectionObserver(function(entries) {{
                for (var i = 0; i < entries.length; i++) {{
                    dioxus.send(entries[i].intersectionRatio);
                }}
            }}, {{ threshold: [{threshold}] }});
            obs.observe(el);
            window.__folio_observers['{element_id}'] = obs;
        }})();"#
    )
}

/// Disconnects and forgets the observer for `element_id`. Idempotent.
fn detach_observer(element_id: &str) {
    let js = format!(
        r#"(function() {{
            var obs = window.__folio_observers && window.__folio_observers['{element_id}'];
            if (obs) {{ obs.disconnect(); delete window.__folio_observers['{element_id}']; }}
        }})();"#
    );
    document::eval(&js);
}

/// One-shot reveal hook for a section rooted at `element_id`.
///
/// The returned signal starts `Hidden` and flips to `Visible` the first
/// time at least `threshold` of the element is on screen. The host-side
/// observer is detached as soon as the latch fires, and on unmount.
pub fn use_reveal(element_id: &'static str, threshold: f64) -> Signal<RevealState> {
    let mut state = use_signal(RevealState::default);

    use_future(move || async move {
        let mut latch = VisibilityLatch::new(threshold, true);
        let mut eval = document::eval(&observer_js(element_id, latch.threshold()));

        loop {
            match eval.recv::<f64>().await {
                Ok(ratio) => {
                    if latch.observe(ratio) == Some(true) {
                        state.write().mark_visible();
                    }
                    if latch.is_spent() {
                        detach_observer(element_id);
                        break;
                    }
                }
                Err(err) => {
                    // No intersection capability: never leave content hidden.
                    tracing::debug!("viewport observation unavailable for #{element_id}: {err:?}");
                    state.write().mark_visible();
                    break;
                }
            }
        }
    });

    use_drop(move || detach_observer(element_id));

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_state_is_monotonic() {
        let mut state = RevealState::default();
        assert!(!state.is_visible());
        assert_eq!(state.css_class(), "reveal-hidden");

        state.mark_visible();
        assert!(state.is_visible());
        state.mark_visible();
        assert!(state.is_visible());
        assert_eq!(state.css_class(), "reveal-visible");
    }

    #[test]
    fn test_latch_threshold_scenario() {
        // Threshold 0.3: 0.1 is ignored, 0.35 fires once, 0.0 is ignored.
        let mut latch = VisibilityLatch::new(0.3, true);
        assert_eq!(latch.observe(0.1), None);
        assert!(!latch.is_spent());
        assert_eq!(latch.observe(0.35), Some(true));
        assert!(latch.is_spent());
        assert_eq!(latch.observe(0.0), None);
        assert_eq!(latch.observe(0.9), None);
    }

    #[test]
    fn test_fire_once_emits_at_most_once() {
        let mut latch = VisibilityLatch::new(0.5, true);
        let events: Vec<_> = [0.6, 0.7, 0.2, 1.0, 0.5]
            .iter()
            .filter_map(|r| latch.observe(*r))
            .collect();
        assert_eq!(events, vec![true]);
    }

    #[test]
    fn test_exact_threshold_fires() {
        let mut latch = VisibilityLatch::new(0.3, true);
        assert_eq!(latch.observe(0.3), Some(true));
    }

    #[test]
    fn test_repeated_mode_emits_on_each_crossing() {
        let mut latch = VisibilityLatch::new(0.5, false);
        // Starts below; staying below emits nothing.
        assert_eq!(latch.observe(0.1), None);
        assert_eq!(latch.observe(0.6), Some(true));
        assert_eq!(latch.observe(0.8), None);
        assert_eq!(latch.observe(0.2), Some(false));
        assert_eq!(latch.observe(0.2), None);
        assert_eq!(latch.observe(0.5), Some(true));
        assert!(!latch.is_spent());
    }

    #[test]
    fn test_threshold_is_clamped() {
        let mut high = VisibilityLatch::new(2.0, true);
        assert_eq!(high.threshold(), 1.0);
        assert_eq!(high.observe(1.0), Some(true));

        // Non-positive thresholds still require some visibility.
        let mut low = VisibilityLatch::new(0.0, true);
        assert_eq!(low.observe(0.0), None);
        assert_eq!(low.observe(0.01), Some(true));
    }
}
