use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimError {
    #[error("invalid angle: {0} is not a finite number of degrees")]
    InvalidAngle(f64),
}
