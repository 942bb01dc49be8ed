#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(#[from] clap::Error),
    #[error("result is too large to fit in buffer")]
    FormatOverflow { digits: usize, capacity: usize },
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
