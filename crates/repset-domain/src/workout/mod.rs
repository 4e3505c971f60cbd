mod entry;
mod repository;


pub use entry::{Category, LogEntry};
pub use repository::LogRepository;
