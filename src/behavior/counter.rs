use super::visibility::ease_out_cubic;

/// Value shown by a count-up animation `elapsed_ms` after it started.
pub fn eased_count(end: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    let progress = if duration_ms <= 0.0 {
        1.0
    } else {
        (elapsed_ms / duration_ms).clamp(0.0, 1.0)
    };
    (ease_out_cubic(progress) * end as f64).floor() as u32
}

pub fn is_finished(elapsed_ms: f64, duration_ms: f64) -> bool {
    elapsed_ms >= duration_ms
}

/// Count-up that holds at zero for `delay_ms` before easing to its end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl CountUp {
    /// Value `since_ms` after the counter came into view.
    pub fn value(&self, end: u32, since_ms: f64) -> u32 {
        eased_count(end, (since_ms - self.delay_ms).max(0.0), self.duration_ms)
    }

    pub fn is_finished(&self, since_ms: f64) -> bool {
        since_ms >= self.delay_ms && is_finished(since_ms - self.delay_ms, self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_zero_to_end() {
        assert_eq!(eased_count(80, 0.0, 2000.0), 0);
        assert_eq!(eased_count(80, 2000.0, 2000.0), 80);
        assert_eq!(eased_count(80, 9000.0, 2000.0), 80);
    }

    #[test]
    fn eases_out() {
        // Half the time covers seven eighths of the distance.
        assert_eq!(eased_count(80, 1000.0, 2000.0), 70);
    }

    #[test]
    fn never_decreases() {
        let mut last = 0;
        for ms in (0..=2100).step_by(16) {
            let value = eased_count(247, ms as f64, 2000.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 247);
    }

    #[test]
    fn holds_at_zero_through_the_delay() {
        let count_up = CountUp { delay_ms: 500.0, duration_ms: 2000.0 };
        assert_eq!(count_up.value(80, 0.0), 0);
        assert_eq!(count_up.value(80, 499.0), 0);
        assert!(count_up.value(80, 600.0) > 0);
        assert_eq!(count_up.value(80, 1500.0), 70);
        assert!(!count_up.is_finished(2000.0));
        assert!(count_up.is_finished(2500.0));
        assert_eq!(count_up.value(80, 2500.0), 80);
    }

    #[test]
    fn zero_delay_starts_immediately() {
        let count_up = CountUp { delay_ms: 0.0, duration_ms: 2000.0 };
        assert_eq!(count_up.value(80, 1000.0), eased_count(80, 1000.0, 2000.0));
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        assert_eq!(eased_count(28, 0.0, 0.0), 28);
        assert!(is_finished(0.0, 0.0));
    }
}
