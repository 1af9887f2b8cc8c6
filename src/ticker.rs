use crate::motion::Ease;

/// Seconds each label spends crossing the strip.
pub const SECONDS_PER_LABEL: f64 = 2.0;

/// The labels twice over, so the strip can wrap without a visible seam.
pub fn ticker_sequence(labels: &[String]) -> Vec<&str> {
    labels
        .iter()
        .chain(labels.iter())
        .map(String::as_str)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickerLoop {
    distance: f64,
    period: f64,
}

impl TickerLoop {
    /// `track_width` is the full width of the doubled strip.
    pub fn new(label_count: usize, track_width: f64) -> Self {
        Self {
            distance: (track_width / 2.0).max(0.0),
            period: label_count as f64 * SECONDS_PER_LABEL,
        }
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Horizontal translation in pixels at `elapsed` seconds.
    pub fn offset(&self, elapsed: f64) -> f64 {
        if self.period <= 0.0 || self.distance == 0.0 {
            return 0.0;
        }

        let cycle = (elapsed / self.period).rem_euclid(1.0);
        -self.distance * Ease::Linear.apply(cycle)
    }

    pub fn transform(&self, elapsed: f64) -> String {
        format!("translate3d({:.2}px, 0, 0)", self.offset(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        ["Java", "Python", "Docker"]
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn sequence_is_twice_the_labels() {
        let labels = labels();
        let sequence = ticker_sequence(&labels);

        assert_eq!(sequence.len(), labels.len() * 2);
        assert_eq!(sequence[..3], sequence[3..]);
    }

    #[test]
    fn empty_labels_give_empty_sequence() {
        assert!(ticker_sequence(&[]).is_empty());
    }

    #[test]
    fn offset_moves_linearly_and_wraps() {
        let ticker = TickerLoop::new(3, 600.0);
        assert_eq!(ticker.period(), 6.0);
        assert_eq!(ticker.offset(0.0), 0.0);
        assert_eq!(ticker.offset(3.0), -150.0);
        assert_eq!(ticker.offset(6.0), 0.0);
        assert_eq!(ticker.offset(9.0), -150.0);
    }

    #[test]
    fn unmeasured_track_stays_put() {
        let ticker = TickerLoop::new(3, 0.0);
        assert_eq!(ticker.offset(4.2), 0.0);
        assert_eq!(ticker.transform(4.2), "translate3d(0.00px, 0, 0)");
    }
}
