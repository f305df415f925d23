//! Daily scheduled job.
//!
//! One cron entry, registered only in production: post the site to the
//! configured social platform once a day.

pub mod config;
pub mod cron;
