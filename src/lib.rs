pub mod cache;
pub mod cli;
pub mod error;
pub mod export;
pub mod github;
pub mod log;
pub mod model;
pub mod report;
pub mod stats;
