pub mod calendar_config;
pub mod economic_release;
pub mod fed_meeting;
