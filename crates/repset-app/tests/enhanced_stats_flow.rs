use std::sync::Arc;

use chrono::{Duration, Utc};

use repset_app::application::queries::StatsQueries;
use repset_domain::shared::{CategoryId, ExerciseId, UserId};
use repset_domain::workout::{Category, LogEntry, LogRepository};
use repset_infrastructure::persistence::InMemoryLogRepository;

async fn seed(
    store: &InMemoryLogRepository,
    user: &UserId,
    name: &str,
    category: Category,
    days_ago: i64,
    reps: Option<u32>,
    count: Option<u32>,
) {
    let entry = LogEntry::new(
        user.clone(),
        ExerciseId::new(),
        CategoryId::new(),
        name.to_string(),
        category,
        Utc::now() - Duration::days(days_ago),
        reps,
        count,
    )
    .unwrap();
    store.save(&entry).await.unwrap();
}

#[tokio::test]
async fn test_enhanced_stats_end_to_end_json_shape() {
    let store = Arc::new(InMemoryLogRepository::new());
    let user = UserId::new();

    // Three-day streak up to today, two exercises, older history for the
    // baseline.
    seed(&store, &user, "Push-ups", Category::Arms, 0, Some(20), None).await;
    seed(&store, &user, "Push-ups", Category::Arms, 1, Some(10), None).await;
    seed(&store, &user, "Plank", Category::Core, 2, None, Some(3)).await;
    seed(&store, &user, "Push-ups", Category::Arms, 13, Some(30), None).await;

    let queries = StatsQueries::new(store);
    let response = queries.enhanced_stats(&user, Some(7), None).await.unwrap();

    assert_eq!(response.overall.current_streak, 3);
    assert_eq!(response.overall.longest_streak, 3);
    assert_eq!(response.overall.total_workout_days, 3);
    assert_eq!(response.overall.total_exercises, 2);
    assert_eq!(response.overall.period_total.reps, 30);
    assert_eq!(response.overall.period_total.count, 3);

    // Push-ups history: 60 reps over a 14-day span, average 4/day.
    let pushups = response
        .exercises
        .iter()
        .find(|e| e.exercise_name == "Push-ups")
        .unwrap();
    assert_eq!(pushups.totals.reps, 30);
    assert_eq!(pushups.lifetime_average.reps, 4);
    assert_eq!(pushups.expected_from_average.reps, 28);
    assert_eq!(pushups.daily_data.len(), 2);

    // The serialized response carries the wire field names.
    let json = serde_json::to_value(&response).unwrap();
    let overall = &json["overall"];
    for key in [
        "currentStreak",
        "longestStreak",
        "totalWorkoutDays",
        "totalExercises",
        "periodTotal",
        "lifetimeAverage",
        "comparisonPercent",
    ] {
        assert!(overall.get(key).is_some(), "missing overall key {key}");
    }

    let exercise = &json["exercises"][0];
    for key in [
        "exerciseName",
        "dailyData",
        "totals",
        "lifetimeAverage",
        "daysInPeriod",
        "expectedFromAverage",
    ] {
        assert!(exercise.get(key).is_some(), "missing exercise key {key}");
    }
}
