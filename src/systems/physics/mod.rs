mod stepper;

pub use stepper::{flight_step_system, reset_request_system};
