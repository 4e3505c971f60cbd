use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use repset_domain::shared::calendar::day_key;
use repset_domain::shared::{DomainError, UserId};
use repset_domain::workout::{Category, LogEntry, LogRepository};

/// Reference log store backed by process memory.
///
/// Entries come back ordered by `date`, then `created_at`. Range bounds are
/// compared at calendar-day granularity, so an entry logged late in the
/// evening of the end day is still inside the range.
#[derive(Default)]
pub struct InMemoryLogRepository {
    entries: RwLock<Vec<LogEntry>>,
}

impl InMemoryLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut entries: Vec<LogEntry>) -> Vec<LogEntry> {
        entries.sort_by_key(|e| (e.date(), e.created_at()));
        entries
    }

    fn matches(entry: &LogEntry, user_id: &UserId, category: Option<Category>) -> bool {
        entry.user_id() == user_id && category.is_none_or(|c| entry.category() == c)
    }
}

#[async_trait]
impl LogRepository for InMemoryLogRepository {
    async fn save(&self, entry: &LogEntry) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.push(entry.clone());
        Ok(())
    }

    async fn list_in_range(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
        category: Option<Category>,
    ) -> Result<Vec<LogEntry>, DomainError> {
        let entries = self.entries.read().await;
        let matching = entries
            .iter()
            .filter(|e| {
                let day = day_key(e.date());
                Self::matches(e, user_id, category) && day >= start && day <= end
            })
            .cloned()
            .collect();

        Ok(Self::sorted(matching))
    }

    async fn list_all(
        &self,
        user_id: &UserId,
        category: Option<Category>,
    ) -> Result<Vec<LogEntry>, DomainError> {
        let entries = self.entries.read().await;
        let matching = entries
            .iter()
            .filter(|e| Self::matches(e, user_id, category))
            .cloned()
            .collect();

        Ok(Self::sorted(matching))
    }
}
