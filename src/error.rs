use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("empty key string: the Bellaso cipher needs at least one key character")]
    EmptyKey,

    #[error("character {ch:?} at position {position} is outside the legal range")]
    OutOfRange { ch: char, position: usize },
}

pub type Result<T> = std::result::Result<T, CipherError>;
