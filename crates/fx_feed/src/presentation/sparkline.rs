//! Bounded bid history and its polyline projection.

use std::collections::VecDeque;

/// Padding around the plot, in pixels.
pub const SPARKLINE_PADDING: f64 = 2.0;

/// Most recent values of one series, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    capacity: usize,
    values: VecDeque<f64>,
}

impl Sparkline {
    /// Create an empty sparkline holding at most `capacity` values.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            values: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a value, evicting the oldest when full.
    pub fn push(&mut self, value: f64) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Stored values, oldest first.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Project the series into a `width` x `height` box.
    ///
    /// Higher values sit closer to `y = 0`. A flat series uses a unit range,
    /// so it lies on the bottom edge of the plot area.
    ///
    /// ```
    /// use fx_feed::presentation::Sparkline;
    ///
    /// let mut line = Sparkline::new(8);
    /// line.push(1.0);
    /// assert!(line.points(64.0, 20.0).is_empty());
    /// line.push(2.0);
    /// assert_eq!(line.points(64.0, 20.0), vec![(2.0, 18.0), (62.0, 2.0)]);
    /// ```
    pub fn points(&self, width: f64, height: f64) -> Vec<(f64, f64)> {
        let n = self.values.len();
        if n < 2 {
            return Vec::new();
        }

        let (min, max) = self
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let range = if max - min == 0.0 { 1.0 } else { max - min };

        let plot_w = width - 2.0 * SPARKLINE_PADDING;
        let plot_h = height - 2.0 * SPARKLINE_PADDING;
        let last = (n - 1) as f64;

        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = SPARKLINE_PADDING + i as f64 / last * plot_w;
                let y = SPARKLINE_PADDING + plot_h - (v - min) / range * plot_h;
                (x, y)
            })
            .collect()
    }

    /// Direction of the whole window: last value versus first.
    pub fn trend_up(&self) -> Option<bool> {
        match (self.values.front(), self.values.back()) {
            (Some(first), Some(last)) if self.values.len() >= 2 => Some(last >= first),
            _ => None,
        }
    }
}
