pub mod stats_queries;

pub use stats_queries::StatsQueries;
