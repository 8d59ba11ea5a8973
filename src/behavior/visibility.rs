/// Tolerance for ratios reported right at a threshold.
const RATIO_EPSILON: f64 = 1e-3;

/// Where the highlight sweep starts, as a fraction of viewport height.
pub const SWEEP_TRIGGER: f64 = 0.8;
/// Where the highlight sweep is complete.
pub const SWEEP_END: f64 = 0.2;

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Intersection settings for one observed region.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivationOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl ActivationOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin: "0px".to_string(),
        }
    }

    pub fn with_margin(mut self, root_margin: &str) -> Self {
        self.root_margin = root_margin.to_string();
        self
    }
}

/// Visibility of a region. `entered` latches on the first crossing and never
/// reverts; `in_view` follows every crossing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    entered: bool,
    in_view: bool,
}

impl VisibilityState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Used when the browser has no intersection observer.
    pub fn always_visible() -> Self {
        Self {
            entered: true,
            in_view: true,
        }
    }

    pub fn entered(&self) -> bool {
        self.entered
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// Feeds one observer entry. Returns whether anything changed.
    ///
    /// Observers report `is_intersecting` for any overlap, also when the ratio
    /// has just dropped below the threshold, so the ratio decides.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
        let before = *self;
        self.in_view = is_intersecting && ratio + RATIO_EPSILON >= threshold;
        if self.in_view {
            self.entered = true;
        }
        before != *self
    }
}

/// Highlight progress for a region whose top edge sits `top` pixels below the
/// viewport top, given the viewport height.
pub fn sweep_progress(top: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    let trigger = viewport_height * SWEEP_TRIGGER;
    let end = viewport_height * SWEEP_END;

    if top < end {
        1.0
    } else if top <= trigger {
        ease_out_cubic((trigger - top) / (trigger - end))
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_never_reverts() {
        let mut state = VisibilityState::new();
        assert!(!state.entered());

        assert!(state.observe(true, 0.4, 0.3));
        assert!(state.entered());
        assert!(state.in_view());

        assert!(state.observe(false, 0.0, 0.3));
        assert!(state.entered());
        assert!(!state.in_view());

        state.observe(true, 0.9, 0.3);
        state.observe(false, 0.0, 0.3);
        assert!(state.entered());
    }

    #[test]
    fn ratio_below_threshold_is_not_in_view() {
        let mut state = VisibilityState::new();
        assert!(!state.observe(true, 0.1, 0.3));
        assert!(!state.entered());

        state.observe(true, 0.5, 0.3);
        state.observe(true, 0.29, 0.3);
        assert!(!state.in_view());
        assert!(state.entered());
    }

    #[test]
    fn ratio_at_threshold_counts() {
        let mut state = VisibilityState::new();
        state.observe(true, 0.2999, 0.3);
        assert!(state.in_view());
    }

    #[test]
    fn fallback_is_visible() {
        let state = VisibilityState::always_visible();
        assert!(state.entered() && state.in_view());
    }

    #[test]
    fn sweep_stays_in_unit_range() {
        let height = 1000.0;
        assert_eq!(sweep_progress(900.0, height), 0.0);
        assert_eq!(sweep_progress(800.0, height), 0.0);
        assert_eq!(sweep_progress(199.0, height), 1.0);
        assert_eq!(sweep_progress(-5000.0, height), 1.0);

        let mid = sweep_progress(500.0, height);
        assert!((mid - 0.875).abs() < 1e-9);

        for top in (-2000..2000).step_by(37) {
            let p = sweep_progress(top as f64, height);
            assert!((0.0..=1.0).contains(&p), "progress {p} at top {top}");
        }
    }

    #[test]
    fn sweep_with_no_viewport() {
        assert_eq!(sweep_progress(10.0, 0.0), 0.0);
    }

    #[test]
    fn options_clamp_threshold() {
        assert_eq!(ActivationOptions::threshold(1.7).threshold, 1.0);
        let opts = ActivationOptions::threshold(0.1).with_margin("150px 0px -50px 0px");
        assert_eq!(opts.root_margin, "150px 0px -50px 0px");
    }
}
