use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

use repset_domain::shared::calendar::day_key;
use repset_domain::workout::LogEntry;

use super::types::StreakComputation;

/// Current and longest consecutive-day streaks.
///
/// Operates on the user's complete, category-unfiltered history: a streak is
/// account-wide activity, not per-exercise. Multiple entries on one calendar
/// day collapse to a single day before counting.
pub fn calculate_streaks(logs: &[LogEntry], today: NaiveDate) -> StreakComputation {
    let day_set: BTreeSet<NaiveDate> = logs.iter().map(|log| day_key(log.date())).collect();

    if day_set.is_empty() {
        return StreakComputation {
            current: 0,
            longest: 0,
        };
    }

    // Newest first
    let days: Vec<NaiveDate> = day_set.iter().rev().copied().collect();

    let yesterday = today - Duration::days(1);
    let anchor = if day_set.contains(&today) {
        Some(today)
    } else if day_set.contains(&yesterday) {
        Some(yesterday)
    } else {
        None
    };

    // Walk backward from the anchor; the first missing day ends the streak.
    let mut current = 0u32;
    if let Some(mut check) = anchor {
        for &day in &days {
            if day == check {
                current += 1;
                check = check - Duration::days(1);
            } else if day < check {
                break;
            }
        }
    }

    // Every logged day is a candidate run start; count consecutive
    // predecessors from there.
    let mut longest = 0u32;
    for start in 0..days.len() {
        let mut run = 1u32;
        for next in (start + 1)..days.len() {
            if (days[next - 1] - days[next]).num_days() == 1 {
                run += 1;
            } else {
                break;
            }
        }
        longest = longest.max(run);
    }

    StreakComputation { current, longest }
}
