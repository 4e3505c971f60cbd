mod memory_log_repo;

pub use memory_log_repo::InMemoryLogRepository;
