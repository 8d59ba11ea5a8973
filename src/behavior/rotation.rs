/// Timing of a rotating selection, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationTiming {
    pub period_ms: u64,
    pub cooldown_ms: u64,
    /// Jump back to the first item whenever the region becomes visible again.
    pub restart_on_enter: bool,
}

impl RotationTiming {
    pub fn every(period_ms: u64) -> Self {
        Self {
            period_ms,
            cooldown_ms: 0,
            restart_on_enter: false,
        }
    }

    pub fn with_cooldown(mut self, cooldown_ms: u64) -> Self {
        self.cooldown_ms = cooldown_ms;
        self
    }

    pub fn restarting(mut self) -> Self {
        self.restart_on_enter = true;
        self
    }
}

/// Autoplaying selection over `len` items, driven by explicit timestamps.
///
/// The caller arms one timer for `next_deadline()` and calls `advance_to`
/// when it fires; nothing is due while the region is hidden.
#[derive(Clone, Debug)]
pub struct RotatingSelection {
    len: usize,
    active: usize,
    timing: RotationTiming,
    visible: bool,
    next_advance: Option<u64>,
    resume_at: Option<u64>,
}

impl RotatingSelection {
    pub fn new(len: usize, timing: RotationTiming) -> Self {
        Self {
            len,
            active: 0,
            timing,
            visible: false,
            next_advance: None,
            resume_at: None,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn is_suspended(&self) -> bool {
        self.resume_at.is_some()
    }

    fn can_autoplay(&self) -> bool {
        self.len > 1 && self.timing.period_ms > 0
    }

    pub fn show(&mut self, now: u64) {
        if self.visible {
            return;
        }
        self.visible = true;
        // A pick made before entering keeps its index and cool-down.
        if self.resume_at.is_some() {
            return;
        }
        if self.timing.restart_on_enter {
            self.active = 0;
        }
        if self.can_autoplay() {
            self.next_advance = Some(now + self.timing.period_ms);
        }
    }

    /// Hiding drops every pending deadline, including a running cool-down.
    pub fn hide(&mut self) {
        self.visible = false;
        self.next_advance = None;
        self.resume_at = None;
    }

    /// Manual pick. Out-of-range indices are ignored.
    pub fn select(&mut self, now: u64, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        self.next_advance = None;
        self.resume_at = if self.timing.cooldown_ms > 0 {
            Some(now + self.timing.cooldown_ms)
        } else {
            None
        };
        if self.resume_at.is_none() && self.visible && self.can_autoplay() {
            self.next_advance = Some(now + self.timing.period_ms);
        }
        true
    }

    /// Applies every deadline up to `now`. Returns whether the index moved.
    pub fn advance_to(&mut self, now: u64) -> bool {
        let before = self.active;

        if let Some(resume_at) = self.resume_at {
            if resume_at <= now {
                self.resume_at = None;
                if self.visible && self.can_autoplay() {
                    self.next_advance = Some(resume_at + self.timing.period_ms);
                }
            }
        }

        while let Some(at) = self.next_advance {
            if at > now {
                break;
            }
            self.active = (self.active + 1) % self.len;
            self.next_advance = Some(at + self.timing.period_ms);
        }

        before != self.active
    }

    pub fn next_deadline(&self) -> Option<u64> {
        match (self.resume_at, self.next_advance) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showcase() -> RotatingSelection {
        RotatingSelection::new(4, RotationTiming::every(4000).with_cooldown(8000))
    }

    #[test]
    fn autoplay_cycles_through_items() {
        let mut rotation = showcase();
        rotation.show(0);

        let mut seen = vec![rotation.active()];
        for t in [4000, 8000, 12000, 16000, 20000] {
            assert_eq!(rotation.next_deadline(), Some(t));
            assert!(rotation.advance_to(t));
            seen.push(rotation.active());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn nothing_moves_before_the_period() {
        let mut rotation = showcase();
        rotation.show(0);
        assert!(!rotation.advance_to(3999));
        assert_eq!(rotation.active(), 0);
    }

    #[test]
    fn manual_selection_suspends_autoplay() {
        let mut rotation = showcase();
        rotation.show(0);

        assert!(rotation.select(1000, 2));
        assert_eq!(rotation.active(), 2);
        assert!(rotation.is_suspended());
        assert_eq!(rotation.next_deadline(), Some(9000));

        for t in (1000..9000).step_by(500) {
            rotation.advance_to(t);
            assert_eq!(rotation.active(), 2, "moved during cool-down at {t}");
        }

        rotation.advance_to(9000);
        assert!(!rotation.is_suspended());
        assert_eq!(rotation.active(), 2);
        assert_eq!(rotation.next_deadline(), Some(13000));

        rotation.advance_to(13000);
        assert_eq!(rotation.active(), 3);
    }

    #[test]
    fn newer_selection_supersedes_cooldown() {
        let mut rotation = showcase();
        rotation.show(0);
        rotation.select(1000, 2);
        rotation.select(5000, 1);

        rotation.advance_to(9000);
        assert_eq!(rotation.active(), 1);
        assert!(rotation.is_suspended());
        assert_eq!(rotation.next_deadline(), Some(13000));
    }

    #[test]
    fn hidden_region_has_no_deadlines() {
        let mut rotation = showcase();
        assert_eq!(rotation.next_deadline(), None);

        rotation.show(0);
        rotation.select(1000, 3);
        rotation.hide();
        assert_eq!(rotation.next_deadline(), None);
        assert!(!rotation.advance_to(100_000));
        assert_eq!(rotation.active(), 3);
    }

    #[test]
    fn selection_while_hidden_does_not_start_autoplay() {
        let mut rotation = showcase();
        rotation.select(0, 1);
        rotation.advance_to(8000);
        assert_eq!(rotation.next_deadline(), None);
        assert_eq!(rotation.active(), 1);
    }

    #[test]
    fn restart_on_enter_resets_index() {
        let mut rotation =
            RotatingSelection::new(4, RotationTiming::every(4000).with_cooldown(8000).restarting());
        rotation.show(0);
        rotation.advance_to(8000);
        assert_eq!(rotation.active(), 2);

        rotation.hide();
        rotation.show(20_000);
        assert_eq!(rotation.active(), 0);
        assert_eq!(rotation.next_deadline(), Some(24_000));
    }

    #[test]
    fn selection_before_entering_keeps_its_cooldown() {
        let mut rotation = showcase();
        rotation.select(1000, 2);
        rotation.show(2000);
        assert_eq!(rotation.next_deadline(), Some(9000));

        for t in (2000..9000).step_by(250) {
            rotation.advance_to(t);
            assert_eq!(rotation.active(), 2, "moved during cool-down at {t}");
        }

        rotation.advance_to(9000);
        assert_eq!(rotation.next_deadline(), Some(13000));
        rotation.advance_to(13000);
        assert_eq!(rotation.active(), 3);
    }

    #[test]
    fn restart_on_enter_keeps_a_pending_pick() {
        let mut rotation =
            RotatingSelection::new(4, RotationTiming::every(4000).with_cooldown(8000).restarting());
        rotation.select(1000, 2);
        rotation.show(2000);
        assert_eq!(rotation.active(), 2);
        assert!(rotation.is_suspended());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut rotation = showcase();
        rotation.show(0);
        assert!(!rotation.select(10, 4));
        assert_eq!(rotation.active(), 0);
        assert!(!rotation.is_suspended());
    }

    #[test]
    fn index_stays_in_range_after_late_timer() {
        let mut rotation = showcase();
        rotation.show(0);
        rotation.advance_to(4000 * 13 + 17);
        assert!(rotation.active() < rotation.len());
        assert_eq!(rotation.active(), 1);
    }

    #[test]
    fn single_item_never_schedules() {
        let mut rotation = RotatingSelection::new(1, RotationTiming::every(3000));
        rotation.show(0);
        assert_eq!(rotation.next_deadline(), None);

        let mut empty = RotatingSelection::new(0, RotationTiming::every(3000));
        empty.show(0);
        assert!(!empty.select(0, 0));
        assert_eq!(empty.next_deadline(), None);
    }

    #[test]
    fn selection_without_cooldown_keeps_playing() {
        let mut rotation = RotatingSelection::new(3, RotationTiming::every(1000));
        rotation.show(0);
        rotation.select(500, 2);
        assert_eq!(rotation.next_deadline(), Some(1500));
        rotation.advance_to(1500);
        assert_eq!(rotation.active(), 0);
    }
}
