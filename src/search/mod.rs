pub mod difficulty;
pub mod pipeline;
pub mod query;
