use chrono::NaiveDate;
use std::collections::BTreeSet;

use repset_domain::shared::calendar::{day_key, span_days_inclusive};
use repset_domain::workout::LogEntry;

use crate::application::dtos::{OverallStatsDto, VolumeDto};

use super::types::{per_day_average, StreakComputation};

/// Account-wide summary for the period.
///
/// `all_time_logs` carries the same category filter as the request; streaks
/// are computed separately over the unfiltered history and passed in.
pub fn compose(
    period_logs: &[LogEntry],
    all_time_logs: &[LogEntry],
    streaks: &StreakComputation,
    days_in_period: u32,
) -> OverallStatsDto {
    let mut period_total = VolumeDto::default();
    let mut period_days: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut period_exercises: BTreeSet<&str> = BTreeSet::new();

    for log in period_logs {
        period_total.reps += log.reps();
        period_total.count += log.count();
        period_days.insert(day_key(log.date()));
        period_exercises.insert(log.exercise_name());
    }

    let lifetime_average = combined_lifetime_average(all_time_logs);

    // Reps and count are summed into one scalar on purpose; downstream
    // consumers depend on this exact number.
    let expected_total = (lifetime_average.reps + lifetime_average.count) * days_in_period;
    let actual_total = period_total.reps + period_total.count;
    let comparison_percent = if expected_total > 0 {
        let diff = f64::from(actual_total) - f64::from(expected_total);
        ((diff / f64::from(expected_total)) * 100.0).round() as i32
    } else {
        0
    };

    OverallStatsDto {
        current_streak: streaks.current,
        longest_streak: streaks.longest,
        total_workout_days: period_days.len() as u32,
        total_exercises: period_exercises.len() as u32,
        period_total,
        lifetime_average,
        comparison_percent,
    }
}

fn combined_lifetime_average(all_time_logs: &[LogEntry]) -> VolumeDto {
    let mut bounds: Option<(NaiveDate, NaiveDate)> = None;
    let mut total = VolumeDto::default();

    for log in all_time_logs {
        let day = day_key(log.date());
        bounds = Some(match bounds {
            None => (day, day),
            Some((first, last)) => (first.min(day), last.max(day)),
        });
        total.reps += log.reps();
        total.count += log.count();
    }

    match bounds {
        Some((first, last)) => {
            let span = span_days_inclusive(first, last);
            VolumeDto {
                reps: per_day_average(total.reps, span),
                count: per_day_average(total.count, span),
            }
        }
        None => VolumeDto::default(),
    }
}
