/// Vertical extent of an element in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// How a list of items picks its active entry from scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpyRule {
    /// The item containing the viewport midpoint. When spans overlap the last
    /// one wins; when none contains it the previous choice is kept.
    ContainsMidpoint,
    /// The item whose center is nearest to the viewport center.
    NearestCenter,
}

pub fn containing(probe: f64, spans: &[Option<Span>]) -> Option<usize> {
    spans
        .iter()
        .enumerate()
        .filter_map(|(i, span)| span.map(|s| (i, s)))
        .filter(|(_, s)| probe >= s.top && probe <= s.bottom())
        .map(|(i, _)| i)
        .last()
}

pub fn nearest(center: f64, spans: &[Option<Span>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, span) in spans.iter().enumerate() {
        let Some(span) = span else { continue };
        let distance = (span.center() - center).abs();
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}

/// Resolves the active index. `probe` is the viewport midpoint in the same
/// coordinate space as the spans.
pub fn resolve(rule: SpyRule, probe: f64, spans: &[Option<Span>], current: Option<usize>) -> Option<usize> {
    match rule {
        SpyRule::ContainsMidpoint => containing(probe, spans).or(current),
        SpyRule::NearestCenter => nearest(probe, spans),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked() -> Vec<Option<Span>> {
        vec![
            Some(Span::new(0.0, 500.0)),
            Some(Span::new(600.0, 500.0)),
            Some(Span::new(1200.0, 500.0)),
        ]
    }

    #[test]
    fn midpoint_picks_the_containing_item() {
        assert_eq!(containing(700.0, &stacked()), Some(1));
        assert_eq!(containing(550.0, &stacked()), None);
        assert_eq!(containing(1700.0, &stacked()), Some(2));
    }

    #[test]
    fn gaps_keep_the_previous_choice() {
        let spans = stacked();
        assert_eq!(resolve(SpyRule::ContainsMidpoint, 550.0, &spans, Some(0)), Some(0));
        assert_eq!(resolve(SpyRule::ContainsMidpoint, 1300.0, &spans, Some(0)), Some(2));
    }

    #[test]
    fn overlap_prefers_later_item() {
        let spans = vec![Some(Span::new(0.0, 1000.0)), Some(Span::new(400.0, 200.0))];
        assert_eq!(containing(500.0, &spans), Some(1));
    }

    #[test]
    fn nearest_center_ignores_missing_nodes() {
        let spans = vec![None, Some(Span::new(-400.0, 300.0)), Some(Span::new(350.0, 300.0))];
        assert_eq!(nearest(400.0, &spans), Some(2));
        assert_eq!(nearest(-300.0, &spans), Some(1));
        assert_eq!(nearest(0.0, &[None, None]), None);
    }
}
