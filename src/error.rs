#[derive(Debug, thiserror::Error)]
pub enum Error {
    //
    // System error
    //
    #[error("Failed to write to standard output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
