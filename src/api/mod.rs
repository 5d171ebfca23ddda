pub mod filters;
pub mod issues;
