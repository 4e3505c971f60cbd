mod stats_dto;

pub use stats_dto::{EnhancedStatsDto, ExerciseStatsDto, OverallStatsDto, VolumeDto};
