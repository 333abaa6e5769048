use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A declarative attribute could not be parsed.
    #[error("parse: {0}")]
    Parse(String),

    /// An invalid value was supplied in a configuration overlay.
    #[error("config: {0}")]
    Config(String),
}
