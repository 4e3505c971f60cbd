use async_trait::async_trait;
use chrono::NaiveDate;

use super::{Category, LogEntry};
use crate::shared::{DomainError, UserId};

/// The log store the statistics engine collaborates with.
///
/// Implementations return entries ordered by `date`, then `created_at`; the
/// engine itself does not depend on that order.
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Save a log entry.
    async fn save(&self, entry: &LogEntry) -> Result<(), DomainError>;

    /// List a user's entries whose calendar day falls in `[start, end]`
    /// (inclusive), optionally restricted to one category.
    async fn list_in_range(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
        category: Option<Category>,
    ) -> Result<Vec<LogEntry>, DomainError>;

    /// List a user's complete history, optionally restricted to one category.
    async fn list_all(
        &self,
        user_id: &UserId,
        category: Option<Category>,
    ) -> Result<Vec<LogEntry>, DomainError>;
}
