pub mod analytics;
pub mod application;
pub mod interview;
pub mod job;
pub mod message;
pub mod user;
