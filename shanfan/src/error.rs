use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShanFanError {
    #[error("no entries to partition")]
    EmptyInput,
    #[error("entry counts sum to zero")]
    ZeroTotal,
}
