use chrono::{Duration, Utc};
use log::info;
use std::sync::Arc;

use repset_domain::shared::{DomainError, UserId};
use repset_domain::workout::{Category, LogRepository};

use crate::application::config::DEFAULT_PERIOD_DAYS;
use crate::application::dtos::EnhancedStatsDto;

mod aggregate;
mod overall;
mod streak;
mod types;


pub struct StatsQueries {
    log_repo: Arc<dyn LogRepository>,
}

impl StatsQueries {
    pub fn new(log_repo: Arc<dyn LogRepository>) -> Self {
        Self { log_repo }
    }

    /// Per-exercise and account-wide statistics for a trailing window of
    /// `days` calendar days ending today.
    ///
    /// Missing or non-positive `days` falls back to the default period
    /// length. Every request recomputes from a fresh store snapshot.
    pub async fn enhanced_stats(
        &self,
        user_id: &UserId,
        days: Option<i64>,
        category: Option<Category>,
    ) -> Result<EnhancedStatsDto, DomainError> {
        let days = normalize_days(days);
        let today = Utc::now().date_naive();
        let period_start = today - Duration::days(i64::from(days) - 1);

        // The period window, the filtered history and the unfiltered streak
        // input have no ordering dependency; fetch them concurrently.
        let (period_logs, all_time_logs, streak_logs) = tokio::try_join!(
            self.log_repo
                .list_in_range(user_id, period_start, today, category),
            self.log_repo.list_all(user_id, category),
            self.log_repo.list_all(user_id, None),
        )?;

        let streaks = streak::calculate_streaks(&streak_logs, today);
        let exercises = aggregate::aggregate(&period_logs, &all_time_logs, days);
        let overall = overall::compose(&period_logs, &all_time_logs, &streaks, days);

        info!(
            "[stats] enhanced_stats user_id={} days={} category={:?} exercises={} current={} longest={}",
            user_id,
            days,
            category.map(|c| c.as_str()),
            exercises.len(),
            overall.current_streak,
            overall.longest_streak
        );

        Ok(EnhancedStatsDto { exercises, overall })
    }
}

fn normalize_days(days: Option<i64>) -> u32 {
    match days {
        Some(d) if d > 0 => u32::try_from(d).unwrap_or(DEFAULT_PERIOD_DAYS),
        _ => DEFAULT_PERIOD_DAYS,
    }
}
