/// Cron expression for the daily share job
/// Runs once per day at 01:35 server-local time
pub const SHARE_CRON_EXPRESSION: &str = "0 35 1 * * *";
