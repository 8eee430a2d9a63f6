pub mod classify;
pub mod config;
pub mod fetch;
pub mod pipeline;
pub mod reconcile;
pub mod report;
pub mod sanitize;
pub mod teamcity;
pub mod youtrack;
