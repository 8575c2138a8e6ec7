pub mod dashboard_summary;
pub mod observation;
pub mod observation_row;
pub mod rendered_chart;
pub mod upcoming_meeting;
pub mod yield_point;
pub mod yield_spread;
