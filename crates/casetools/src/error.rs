#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] casetools_core::Error),

    #[error("Failed to read stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("No input given: pass INPUT or pipe text on stdin")]
    MissingInput,
}
