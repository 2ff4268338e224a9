extern crate reqwest;

use std::{error::Error as StdError, fmt, result::Result as StdResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operate {
    BuildClient,
    Login,
    LookupProblem,
    CreateSolution,
    UpdateSolution,
}
#[derive(Debug)]
pub enum Kind {
    Network(reqwest::Error),
    Unauthenticated,
}
#[derive(Debug)]
pub struct Error {
    operate: Operate,
    kind: Kind,
}
pub type Result<T> = StdResult<T, Error>;

impl Error {
    pub fn new(operate: Operate, kind: Kind) -> Self {
        Self { operate, kind }
    }
    pub fn operate(&self) -> Operate {
        self.operate
    }
    pub fn kind(&self) -> &Kind {
        &self.kind
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Network(err) => write!(f, "Error while {}: {}", self.operate, err),
            Kind::Unauthenticated => write!(f, "Error while {}: not logged in", self.operate),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            Kind::Network(err) => Some(err),
            Kind::Unauthenticated => None,
        }
    }
}
impl fmt::Display for Operate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuildClient => f.write_str("building client"),
            Self::Login => f.write_str("logging in"),
            Self::LookupProblem => f.write_str("looking up problem"),
            Self::CreateSolution => f.write_str("creating solution"),
            Self::UpdateSolution => f.write_str("updating solution"),
        }
    }
}

pub(super) fn network_error(operate: Operate) -> impl Fn(reqwest::Error) -> Error {
    move |err| Error::new(operate, Kind::Network(err))
}
