use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A reps/count pair. The two quantities are tracked side by side and never
/// normalized into each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeDto {
    pub reps: u32,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseStatsDto {
    pub exercise_name: String,
    /// Per-day totals keyed by `YYYY-MM-DD`; only days with activity appear.
    pub daily_data: BTreeMap<String, VolumeDto>,
    pub totals: VolumeDto,
    pub lifetime_average: VolumeDto,
    pub days_in_period: u32,
    pub expected_from_average: VolumeDto,
}

impl ExerciseStatsDto {
    pub(crate) fn empty(exercise_name: String, days_in_period: u32) -> Self {
        Self {
            exercise_name,
            daily_data: BTreeMap::new(),
            totals: VolumeDto::default(),
            lifetime_average: VolumeDto::default(),
            days_in_period,
            expected_from_average: VolumeDto::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStatsDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_workout_days: u32,
    pub total_exercises: u32,
    pub period_total: VolumeDto,
    pub lifetime_average: VolumeDto,
    pub comparison_percent: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedStatsDto {
    /// Ordered by first appearance in the period, not alphabetically.
    pub exercises: Vec<ExerciseStatsDto>,
    pub overall: OverallStatsDto,
}
