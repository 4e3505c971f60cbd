/// Centralized defaults for the statistics queries.
///
/// Trailing-window length used when a request omits `days` or supplies a
/// non-positive value.
pub const DEFAULT_PERIOD_DAYS: u32 = 7;
