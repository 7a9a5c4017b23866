pub mod daily_summary;
pub mod station;
