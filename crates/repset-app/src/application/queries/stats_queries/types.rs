pub struct StreakComputation {
    pub current: u32,
    pub longest: u32,
}

/// Nearest-integer per-day average, ties rounding away from zero.
///
/// A non-positive span means no history; the average is defined as 0 rather
/// than an error.
pub fn per_day_average(total: u32, span_days: i64) -> u32 {
    if span_days <= 0 {
        return 0;
    }
    (f64::from(total) / span_days as f64).round() as u32
}
