pub mod rules;
pub mod schedule;
pub mod work_day_state;
pub mod work_status;
