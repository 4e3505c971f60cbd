// Application layer - the statistics engine over the workout log store

pub mod application;

pub use application::queries::StatsQueries;
