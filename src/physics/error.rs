use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("Non-finite state: {0}")]
    NonFiniteState(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
