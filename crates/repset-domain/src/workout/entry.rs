use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{CategoryId, DomainError, ExerciseId, LogId, UserId};

/// Fixed body-area categories an exercise can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Arms,
    Core,
    Thighs,
    Back,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Arms => "arms",
            Category::Core => "core",
            Category::Thighs => "thighs",
            Category::Back => "back",
        }
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "arms" => Ok(Category::Arms),
            "core" => Ok(Category::Core),
            "thighs" => Ok(Category::Thighs),
            "back" => Ok(Category::Back),
            other => Err(DomainError::InvalidInput(format!(
                "Unknown category: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single logged exercise event.
///
/// `date` carries a full timestamp but only its calendar day is meaningful;
/// `created_at` is the insertion time and is used purely as an ordering
/// tiebreak, never for streak logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    id: LogId,
    user_id: UserId,
    exercise_id: ExerciseId,
    category_id: CategoryId,
    exercise_name: String,
    category: Category,
    date: DateTime<Utc>,
    reps: u32,
    count: u32,
    created_at: DateTime<Utc>,
}

impl LogEntry {
    /// Missing reps/count default to 0 rather than failing the entry.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: UserId,
        exercise_id: ExerciseId,
        category_id: CategoryId,
        exercise_name: String,
        category: Category,
        date: DateTime<Utc>,
        reps: Option<u32>,
        count: Option<u32>,
    ) -> Result<Self, DomainError> {
        if exercise_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Exercise name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: LogId::new(),
            user_id,
            exercise_id,
            category_id,
            exercise_name: exercise_name.trim().to_string(),
            category,
            date,
            reps: reps.unwrap_or(0),
            count: count.unwrap_or(0),
            created_at: Utc::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: LogId,
        user_id: UserId,
        exercise_id: ExerciseId,
        category_id: CategoryId,
        exercise_name: String,
        category: Category,
        date: DateTime<Utc>,
        reps: u32,
        count: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            exercise_id,
            category_id,
            exercise_name,
            category,
            date,
            reps,
            count,
            created_at,
        }
    }

    pub fn id(&self) -> &LogId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn exercise_id(&self) -> &ExerciseId {
        &self.exercise_id
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn exercise_name(&self) -> &str {
        &self.exercise_name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
