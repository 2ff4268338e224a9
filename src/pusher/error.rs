use crate::{cache::storage, client, config, precheck, sync};
use std::{error::Error as StdError, fmt, result::Result as StdResult};

/// Anything that ends a run.
#[derive(Debug)]
pub enum Error {
    Config(config::Error),
    Precheck(precheck::Error),
    Client(client::Error),
    Sync(sync::Error),
    Storage(storage::Error),
}
pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration: {}", e),
            Self::Precheck(e) => write!(f, "Precheck: {}", e),
            Self::Client(e) => write!(f, "Client: {}", e),
            Self::Sync(e) => write!(f, "Sync: {}", e),
            Self::Storage(e) => write!(f, "Cache: {}", e),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Precheck(e) => Some(e),
            Self::Client(e) => Some(e),
            Self::Sync(e) => Some(e),
            Self::Storage(e) => Some(e),
        }
    }
}

macro_rules! from_error {
    ($($variant:ident($typ:ty)),*) => {
        $(impl From<$typ> for Error {
            fn from(e: $typ) -> Self {
                Self::$variant(e)
            }
        })*
    };
}
from_error!(
    Config(config::Error),
    Precheck(precheck::Error),
    Client(client::Error),
    Sync(sync::Error),
    Storage(storage::Error)
);
