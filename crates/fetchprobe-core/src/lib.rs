pub mod config;
pub mod logging;

pub mod fetch;
pub mod har;
pub mod profiles;
pub mod report;
pub mod runner;
pub mod summary;
pub mod url_model;
