//! Technical indicators and buy/sell signals over daily candles.
//!
//! ## Indicators
//!
//! | Indicator | Parameters | Buy | Sell |
//! |---|---|---|---|
//! | SMA | 7, 30, 90, 200 | rate above SMA by more than 0.1% | rate below SMA by more than 0.1% |
//! | RSI (Wilder) | 14 | below 35 | above 65 |
//! | MACD histogram, % of rate | 12, 26, 9 | above 0.003 | below -0.003 |
//! | Stochastic %K | 14 | below 25 | above 75 |
//!
//! Every indicator returns `None` when the series is too short for it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::math::round_dp;

/// Moving-average lookbacks shown on the technicals panel.
pub const MOVING_AVERAGE_PERIODS: [usize; 4] = [7, 30, 90, 200];

/// Neutral band around a moving average, as a fraction of the current rate.
pub const MOVING_AVERAGE_THRESHOLD: f64 = 0.001;

/// RSI lookback.
pub const RSI_PERIOD: usize = 14;
/// RSI level above which the pair is overbought.
pub const RSI_OVERBOUGHT: f64 = 65.0;
/// RSI level below which the pair is oversold.
pub const RSI_OVERSOLD: f64 = 35.0;

/// MACD fast EMA span.
pub const MACD_FAST: usize = 12;
/// MACD slow EMA span.
pub const MACD_SLOW: usize = 26;
/// MACD signal EMA span.
pub const MACD_SIGNAL: usize = 9;
/// Histogram magnitude, in percent of rate, beyond which MACD signals.
pub const MACD_THRESHOLD: f64 = 0.003;

/// Stochastic %K lookback.
pub const STOCHASTIC_PERIOD: usize = 14;
/// %K level above which the pair is overbought.
pub const STOCHASTIC_OVERBOUGHT: f64 = 75.0;
/// %K level below which the pair is oversold.
pub const STOCHASTIC_OVERSOLD: f64 = 25.0;

/// One daily OHLC bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Trading date.
    pub date: NaiveDate,
    /// Opening rate.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing rate.
    pub close: f64,
}

/// Trading recommendation derived from an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// Bullish
    Buy,
    /// Bearish
    Sell,
    /// No edge
    #[default]
    Neutral,
}

impl Signal {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Buy => "Buy",
            Signal::Sell => "Sell",
            Signal::Neutral => "Neutral",
        }
    }

    /// Maps an oscillator reading onto a signal: overbought sells, oversold buys.
    fn from_oscillator(value: f64, oversold: f64, overbought: f64) -> Self {
        if value > overbought {
            Signal::Sell
        } else if value < oversold {
            Signal::Buy
        } else {
            Signal::Neutral
        }
    }

    /// Maps a momentum reading onto a signal: positive buys, negative sells.
    fn from_momentum(value: f64, threshold: f64) -> Self {
        if value > threshold {
            Signal::Buy
        } else if value < -threshold {
            Signal::Sell
        } else {
            Signal::Neutral
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Simple moving average of a given lookback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAverage {
    /// Lookback in candles.
    pub period: usize,
    /// Average close, rounded to 4 dp.
    pub value: f64,
    /// Current rate relative to the average.
    pub signal: Signal,
}

/// A named oscillator reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSignal {
    /// Indicator label, e.g. `RSI(14)`.
    pub indicator: String,
    /// Rounded indicator value.
    pub value: f64,
    /// Derived signal.
    pub signal: Signal,
}

/// Mean close of the last `period` candles.
///
/// Uses every candle when fewer than `period` exist. `None` for an empty
/// series or a zero period.
pub fn sma(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.is_empty() {
        return None;
    }
    let window = &candles[candles.len().saturating_sub(period)..];
    let sum: f64 = window.iter().map(|c| c.close).sum();
    Some(sum / window.len() as f64)
}

/// Compares `current_rate` against `average` with the 0.1% neutral band.
pub fn moving_average_signal(current_rate: f64, average: f64) -> Signal {
    Signal::from_momentum(current_rate - average, current_rate * MOVING_AVERAGE_THRESHOLD)
}

/// SMAs for every period in [`MOVING_AVERAGE_PERIODS`].
pub fn moving_averages(candles: &[Candle], current_rate: f64) -> Vec<MovingAverage> {
    MOVING_AVERAGE_PERIODS
        .iter()
        .filter_map(|&period| {
            let value = round_dp(sma(candles, period)?, 4);
            Some(MovingAverage {
                period,
                value,
                signal: moving_average_signal(current_rate, value),
            })
        })
        .collect()
}

/// Relative strength index with Wilder smoothing.
///
/// Seeds the average gain and loss with the simple mean of the first
/// `period` changes, then smooths. Needs at least `period + 1` closes.
pub fn rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() <= period {
        return None;
    }

    let w = period as f64;
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for (i, pair) in closes.windows(2).enumerate() {
        let change = pair[1] - pair[0];
        let gain = change.max(0.0);
        let loss = (-change).max(0.0);
        if i < period {
            avg_gain += gain / w;
            avg_loss += loss / w;
        } else {
            avg_gain = (avg_gain * (w - 1.0) + gain) / w;
            avg_loss = (avg_loss * (w - 1.0) + loss) / w;
        }
    }

    if avg_loss == 0.0 {
        return Some(if avg_gain == 0.0 { 50.0 } else { 100.0 });
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// Exponential moving average series, `alpha = 2 / (period + 1)`, seeded
/// with the first observation.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &v in values {
        let next = match prev {
            None => v,
            Some(p) => alpha * v + (1.0 - alpha) * p,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Final MACD values for a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdReading {
    /// Fast EMA minus slow EMA.
    pub line: f64,
    /// EMA of the MACD line.
    pub signal: f64,
    /// `line - signal`.
    pub histogram: f64,
}

/// MACD over `closes`. Needs at least `slow` closes.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> Option<MacdReading> {
    if fast == 0 || slow == 0 || signal == 0 || closes.len() < slow {
        return None;
    }
    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);
    let line: Vec<f64> = fast_ema.iter().zip(&slow_ema).map(|(f, s)| f - s).collect();
    let signal_ema = ema(&line, signal);

    let line = *line.last()?;
    let signal = *signal_ema.last()?;
    Some(MacdReading {
        line,
        signal,
        histogram: line - signal,
    })
}

/// Stochastic %K: where the last close sits in the high/low range of the
/// last `period` candles, 0 to 100. A flat range reads 50.
pub fn stochastic_k(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period {
        return None;
    }
    let window = &candles[candles.len() - period..];
    let highest = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let lowest = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    let close = window[window.len() - 1].close;

    let range = highest - lowest;
    if range <= 0.0 {
        return Some(50.0);
    }
    Some((close - lowest) / range * 100.0)
}

/// RSI, MACD and stochastic readings for the technicals panel.
///
/// The MACD value is the histogram as a percentage of `current_rate`.
/// Indicators without enough history are omitted.
pub fn technical_signals(candles: &[Candle], current_rate: f64) -> Vec<TechnicalSignal> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let mut signals = Vec::with_capacity(3);

    if let Some(value) = rsi(&closes, RSI_PERIOD) {
        signals.push(TechnicalSignal {
            indicator: format!("RSI({})", RSI_PERIOD),
            value: round_dp(value, 2),
            signal: Signal::from_oscillator(value, RSI_OVERSOLD, RSI_OVERBOUGHT),
        });
    }

    if current_rate > 0.0 {
        if let Some(reading) = macd(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL) {
            let pct = reading.histogram / current_rate * 100.0;
            signals.push(TechnicalSignal {
                indicator: "MACD".to_string(),
                value: round_dp(pct, 4),
                signal: Signal::from_momentum(pct, MACD_THRESHOLD),
            });
        }
    }

    if let Some(value) = stochastic_k(candles, STOCHASTIC_PERIOD) {
        signals.push(TechnicalSignal {
            indicator: "Stoch %K".to_string(),
            value: round_dp(value, 2),
            signal: Signal::from_oscillator(value, STOCHASTIC_OVERSOLD, STOCHASTIC_OVERBOUGHT),
        });
    }

    signals
}

/// Classic floor-trader pivot levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotPoints {
    /// Third resistance
    pub r3: f64,
    /// Second resistance
    pub r2: f64,
    /// First resistance
    pub r1: f64,
    /// Pivot
    pub pivot: f64,
    /// First support
    pub s1: f64,
    /// Second support
    pub s2: f64,
    /// Third support
    pub s3: f64,
}

impl PivotPoints {
    /// Levels from a session's high, low and close, rounded to 4 dp.
    pub fn classic(high: f64, low: f64, close: f64) -> Self {
        let p = (high + low + close) / 3.0;
        let range = high - low;
        Self {
            r3: round_dp(p + 2.0 * range, 4),
            r2: round_dp(p + range, 4),
            r1: round_dp(2.0 * p - low, 4),
            pivot: round_dp(p, 4),
            s1: round_dp(2.0 * p - high, 4),
            s2: round_dp(p - range, 4),
            s3: round_dp(p - 2.0 * range, 4),
        }
    }

    /// Levels from the last candle of a series.
    pub fn from_last(candles: &[Candle]) -> Option<Self> {
        candles.last().map(|c| Self::classic(c.high, c.low, c.close))
    }

    /// `(label, level)` from R3 down to S3.
    pub fn levels(&self) -> [(&'static str, f64); 7] {
        [
            ("R3", self.r3),
            ("R2", self.r2),
            ("R1", self.r1),
            ("P", self.pivot),
            ("S1", self.s1),
            ("S2", self.s2),
            ("S3", self.s3),
        ]
    }
}

/// Buy/sell/neutral counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignalTally {
    /// Buy count
    pub buy: usize,
    /// Sell count
    pub sell: usize,
    /// Neutral count
    pub neutral: usize,
}

impl SignalTally {
    /// Counts a sequence of signals.
    pub fn count<I: IntoIterator<Item = Signal>>(signals: I) -> Self {
        signals.into_iter().fold(Self::default(), |mut tally, s| {
            match s {
                Signal::Buy => tally.buy += 1,
                Signal::Sell => tally.sell += 1,
                Signal::Neutral => tally.neutral += 1,
            }
            tally
        })
    }

    /// Total number of signals.
    pub fn total(&self) -> usize {
        self.buy + self.sell + self.neutral
    }

    /// Share of buys in percent, 0 when empty.
    pub fn buy_pct(&self) -> f64 {
        self.share(self.buy)
    }

    /// Share of sells in percent, 0 when empty.
    pub fn sell_pct(&self) -> f64 {
        self.share(self.sell)
    }

    /// Share of neutrals in percent, 0 when empty.
    pub fn neutral_pct(&self) -> f64 {
        self.share(self.neutral)
    }

    /// Buy or sell when it strictly outnumbers both other outcomes.
    pub fn verdict(&self) -> Signal {
        if self.buy > self.sell && self.buy > self.neutral {
            Signal::Buy
        } else if self.sell > self.buy && self.sell > self.neutral {
            Signal::Sell
        } else {
            Signal::Neutral
        }
    }

    fn share(&self, n: usize) -> f64 {
        match self.total() {
            0 => 0.0,
            total => n as f64 / total as f64 * 100.0,
        }
    }
}

impl std::ops::Add for SignalTally {
    type Output = SignalTally;

    fn add(self, rhs: SignalTally) -> SignalTally {
        SignalTally {
            buy: self.buy + rhs.buy,
            sell: self.sell + rhs.sell,
            neutral: self.neutral + rhs.neutral,
        }
    }
}

/// Aggregated technical view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSummary {
    /// Tally over moving averages.
    pub moving_averages: SignalTally,
    /// Tally over oscillators.
    pub oscillators: SignalTally,
    /// Verdict over both tallies combined.
    pub overall: Signal,
}

impl TechnicalSummary {
    /// Summarises moving-average and oscillator signals.
    pub fn new(moving_averages: &[MovingAverage], signals: &[TechnicalSignal]) -> Self {
        let ma = SignalTally::count(moving_averages.iter().map(|m| m.signal));
        let osc = SignalTally::count(signals.iter().map(|s| s.signal));
        Self {
            moving_averages: ma,
            oscillators: osc,
            overall: (ma + osc).verdict(),
        }
    }

    /// Both tallies combined.
    pub fn combined(&self) -> SignalTally {
        self.moving_averages + self.oscillators
    }
}

/// Everything the technicals panel shows for one pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalReport {
    /// SMA rows.
    pub moving_averages: Vec<MovingAverage>,
    /// Oscillator rows.
    pub signals: Vec<TechnicalSignal>,
    /// Pivots from the last candle, if any.
    pub pivot_points: Option<PivotPoints>,
    /// Aggregated verdict.
    pub summary: TechnicalSummary,
}

impl TechnicalReport {
    /// Builds the report from history and the live rate.
    pub fn from_candles(candles: &[Candle], current_rate: f64) -> Self {
        let moving_averages = moving_averages(candles, current_rate);
        let signals = technical_signals(candles, current_rate);
        let summary = TechnicalSummary::new(&moving_averages, &signals);
        Self {
            pivot_points: PivotPoints::from_last(candles),
            moving_averages,
            signals,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Candle {
                date: start + chrono::Days::new(i as u64),
                open: c,
                high: c + 0.5,
                low: c - 0.5,
                close: c,
            })
            .collect()
    }

    // ================================================================
    // SMA
    // ================================================================

    #[test]
    fn test_sma_uses_last_n_closes() {
        let candles = candles_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        assert_abs_diff_eq!(sma(&candles, 3).unwrap(), 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sma(&candles, 50).unwrap(), 5.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sma_empty_is_none() {
        assert!(sma(&[], 7).is_none());
        assert!(sma(&candles_from_closes(&[1.0]), 0).is_none());
    }

    #[test]
    fn test_moving_average_signal_threshold() {
        // band is 0.1 around 100
        assert_eq!(moving_average_signal(100.0, 99.8), Signal::Buy);
        assert_eq!(moving_average_signal(100.0, 100.2), Signal::Sell);
        assert_eq!(moving_average_signal(100.0, 99.95), Signal::Neutral);
        assert_eq!(moving_average_signal(100.0, 100.05), Signal::Neutral);
    }

    #[test]
    fn test_moving_averages_cover_all_periods() {
        let closes: Vec<f64> = (0..250).map(|i| 90.0 + i as f64 * 0.01).collect();
        let candles = candles_from_closes(&closes);
        let mas = moving_averages(&candles, 93.0);
        let periods: Vec<usize> = mas.iter().map(|m| m.period).collect();
        assert_eq!(periods, MOVING_AVERAGE_PERIODS.to_vec());
        // Rising series: every average sits below the latest rate
        assert!(mas.iter().all(|m| m.signal == Signal::Buy));
    }

    #[test]
    fn test_moving_averages_empty_history() {
        assert!(moving_averages(&[], 1.0).is_empty());
    }

    // ================================================================
    // RSI / EMA / MACD / Stochastic
    // ================================================================

    #[test]
    fn test_rsi_extremes() {
        let up: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let down: Vec<f64> = up.iter().rev().copied().collect();
        assert_abs_diff_eq!(rsi(&up, 14).unwrap(), 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rsi(&down, 14).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rsi_balanced_moves_is_fifty() {
        let closes: Vec<f64> = (0..15).map(|i| if i % 2 == 0 { 100.0 } else { 101.0 }).collect();
        assert_abs_diff_eq!(rsi(&closes, 14).unwrap(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rsi_flat_series_is_fifty() {
        assert_eq!(rsi(&[5.0; 20], 14), Some(50.0));
    }

    #[test]
    fn test_rsi_needs_period_plus_one() {
        assert!(rsi(&[1.0; 14], 14).is_none());
        assert!(rsi(&[1.0; 15], 14).is_some());
    }

    #[test]
    fn test_ema_seeded_with_first_value() {
        let out = ema(&[10.0, 11.0, 12.0, 13.0], 3);
        assert_eq!(out.len(), 4);
        assert_abs_diff_eq!(out[0], 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1], 10.5, epsilon = 1e-12);
        assert_abs_diff_eq!(out[2], 11.25, epsilon = 1e-12);
        assert_abs_diff_eq!(out[3], 12.125, epsilon = 1e-12);
    }

    #[test]
    fn test_macd_flat_series_is_zero() {
        let reading = macd(&[90.0; 40], 12, 26, 9).unwrap();
        assert_abs_diff_eq!(reading.line, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(reading.histogram, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_macd_rising_series_has_positive_line() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 0.1).collect();
        let reading = macd(&closes, 12, 26, 9).unwrap();
        assert!(reading.line > 0.0);
        assert_abs_diff_eq!(reading.histogram, reading.line - reading.signal, epsilon = 1e-12);
    }

    #[test]
    fn test_macd_needs_slow_span() {
        assert!(macd(&[1.0; 25], 12, 26, 9).is_none());
    }

    #[test]
    fn test_stochastic_k_bounds() {
        let mut candles = candles_from_closes(&[100.0; 14]);
        // close at the window high
        candles[13].close = 100.5;
        assert_abs_diff_eq!(stochastic_k(&candles, 14).unwrap(), 100.0, epsilon = 1e-12);
        candles[13].close = 99.5;
        assert_abs_diff_eq!(stochastic_k(&candles, 14).unwrap(), 0.0, epsilon = 1e-12);
        candles[13].close = 100.0;
        assert_abs_diff_eq!(stochastic_k(&candles, 14).unwrap(), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_stochastic_k_flat_range() {
        let candles: Vec<Candle> = candles_from_closes(&[1.0; 14])
            .into_iter()
            .map(|c| Candle { high: 1.0, low: 1.0, ..c })
            .collect();
        assert_eq!(stochastic_k(&candles, 14), Some(50.0));
    }

    #[test]
    fn test_technical_signals_skip_short_history() {
        let candles = candles_from_closes(&[1.0; 10]);
        assert!(technical_signals(&candles, 1.0).is_empty());

        let candles = candles_from_closes(&[1.0; 30]);
        let labels: Vec<String> = technical_signals(&candles, 1.0)
            .into_iter()
            .map(|s| s.indicator)
            .collect();
        assert_eq!(labels, vec!["RSI(14)", "MACD", "Stoch %K"]);
    }

    #[test]
    fn test_oscillator_mapping() {
        assert_eq!(Signal::from_oscillator(70.0, 35.0, 65.0), Signal::Sell);
        assert_eq!(Signal::from_oscillator(30.0, 35.0, 65.0), Signal::Buy);
        assert_eq!(Signal::from_oscillator(65.0, 35.0, 65.0), Signal::Neutral);
        assert_eq!(Signal::from_momentum(0.004, 0.003), Signal::Buy);
        assert_eq!(Signal::from_momentum(-0.004, 0.003), Signal::Sell);
        assert_eq!(Signal::from_momentum(0.003, 0.003), Signal::Neutral);
    }

    // ================================================================
    // Pivots and summary
    // ================================================================

    #[test]
    fn test_classic_pivots() {
        let p = PivotPoints::classic(110.0, 90.0, 100.0);
        assert_eq!(p.pivot, 100.0);
        assert_eq!(p.r1, 110.0);
        assert_eq!(p.s1, 90.0);
        assert_eq!(p.r2, 120.0);
        assert_eq!(p.s2, 80.0);
        assert_eq!(p.r3, 140.0);
        assert_eq!(p.s3, 60.0);
        assert_eq!(p.levels()[3], ("P", 100.0));
    }

    #[test]
    fn test_pivots_from_empty_history() {
        assert!(PivotPoints::from_last(&[]).is_none());
    }

    #[test]
    fn test_verdict_requires_strict_plurality() {
        let t = |buy, sell, neutral| SignalTally { buy, sell, neutral };
        assert_eq!(t(3, 2, 2).verdict(), Signal::Buy);
        assert_eq!(t(1, 4, 2).verdict(), Signal::Sell);
        assert_eq!(t(2, 2, 3).verdict(), Signal::Neutral);
        assert_eq!(t(3, 1, 3).verdict(), Signal::Neutral);
        assert_eq!(t(0, 0, 0).verdict(), Signal::Neutral);
    }

    #[test]
    fn test_tally_percentages() {
        let tally = SignalTally::count([Signal::Buy, Signal::Buy, Signal::Sell, Signal::Neutral]);
        assert_eq!(tally.total(), 4);
        assert_abs_diff_eq!(tally.buy_pct(), 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tally.sell_pct(), 25.0, epsilon = 1e-12);
        assert_eq!(SignalTally::default().buy_pct(), 0.0);
    }

    #[test]
    fn test_summary_combines_tallies() {
        let mas = vec![
            MovingAverage { period: 7, value: 1.0, signal: Signal::Buy },
            MovingAverage { period: 30, value: 1.0, signal: Signal::Buy },
        ];
        let sigs = vec![TechnicalSignal {
            indicator: "RSI(14)".to_string(),
            value: 40.0,
            signal: Signal::Neutral,
        }];
        let summary = TechnicalSummary::new(&mas, &sigs);
        assert_eq!(summary.moving_averages.buy, 2);
        assert_eq!(summary.oscillators.neutral, 1);
        assert_eq!(summary.overall, Signal::Buy);
        assert_eq!(summary.combined().total(), 3);
    }

    #[test]
    fn test_signal_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"buy\"");
    }
}
