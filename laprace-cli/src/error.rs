use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("input ended before a valid answer was given")]
    EndOfInput,

    #[error("gave up after {attempts} invalid answer(s)")]
    RetriesExhausted { attempts: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
