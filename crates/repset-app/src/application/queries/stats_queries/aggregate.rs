use chrono::NaiveDate;
use std::collections::HashMap;

use repset_domain::shared::calendar::{day_key, format_day, span_days_inclusive};
use repset_domain::workout::LogEntry;

use crate::application::dtos::{ExerciseStatsDto, VolumeDto};

use super::types::per_day_average;

/// Group period logs by exercise and attach lifetime baselines.
///
/// Only exercises active in the period appear; history is consulted solely to
/// compute their baselines. Output order is first appearance in the period
/// logs, kept with an explicit index map rather than map iteration order.
pub fn aggregate(
    period_logs: &[LogEntry],
    all_time_logs: &[LogEntry],
    days_in_period: u32,
) -> Vec<ExerciseStatsDto> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut exercises: Vec<ExerciseStatsDto> = Vec::new();

    for log in period_logs {
        let slot = match index.get(log.exercise_name()) {
            Some(&slot) => slot,
            None => {
                index.insert(log.exercise_name().to_string(), exercises.len());
                exercises.push(ExerciseStatsDto::empty(
                    log.exercise_name().to_string(),
                    days_in_period,
                ));
                exercises.len() - 1
            }
        };

        let stats = &mut exercises[slot];
        let day = format_day(day_key(log.date()));
        let daily = stats.daily_data.entry(day).or_default();
        daily.reps += log.reps();
        daily.count += log.count();
        stats.totals.reps += log.reps();
        stats.totals.count += log.count();
    }

    for stats in &mut exercises {
        let (span, lifetime_total) =
            history_span_and_total(all_time_logs, &stats.exercise_name);
        let Some(span) = span else {
            // No history for a period exercise; baselines stay 0.
            continue;
        };

        stats.lifetime_average = VolumeDto {
            reps: per_day_average(lifetime_total.reps, span),
            count: per_day_average(lifetime_total.count, span),
        };
        stats.expected_from_average = VolumeDto {
            reps: stats.lifetime_average.reps * days_in_period,
            count: stats.lifetime_average.count * days_in_period,
        };
    }

    exercises
}

/// Inclusive first-to-last day span and summed volume of one exercise's
/// complete history. `None` span when the exercise never appears.
fn history_span_and_total(
    all_time_logs: &[LogEntry],
    exercise_name: &str,
) -> (Option<i64>, VolumeDto) {
    let mut bounds: Option<(NaiveDate, NaiveDate)> = None;
    let mut total = VolumeDto::default();

    for log in all_time_logs
        .iter()
        .filter(|log| log.exercise_name() == exercise_name)
    {
        let day = day_key(log.date());
        bounds = Some(match bounds {
            None => (day, day),
            Some((first, last)) => (first.min(day), last.max(day)),
        });
        total.reps += log.reps();
        total.count += log.count();
    }

    (
        bounds.map(|(first, last)| span_days_inclusive(first, last)),
        total,
    )
}
