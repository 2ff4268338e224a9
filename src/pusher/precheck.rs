extern crate ignore;
extern crate log;

use crate::{
    metadata::{language, Parser, AUTHOR, CO_AUTHOR, LINK},
    tree::SolutionTree,
};
use log::debug;
use std::{error::Error as StdError, fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum Error {
    Walk(ignore::Error),
    Read(PathBuf, io::Error),
    Malformed(Vec<PathBuf>),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Walk(e) => write!(f, "Error listing solutions: {}", e),
            Self::Read(path, e) => write!(f, "Error reading {}: {}", path.display(), e),
            Self::Malformed(files) => write!(
                f,
                "{} solution file(s) lack exactly one each of {}, {} and {} or use an unknown language",
                files.len(),
                AUTHOR,
                CO_AUTHOR,
                LINK
            ),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Walk(e) => Some(e),
            Self::Read(_, e) => Some(e),
            Self::Malformed(_) => None,
        }
    }
}
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Walk(e.into())
    }
}

/// Every malformed file in the tree, in walk order.
pub fn malformed_files(tree: &SolutionTree, parser: &Parser) -> Result<Vec<PathBuf>, Error> {
    let mut ret = Vec::new();
    for judge in tree.judges()? {
        for file in tree.files(&judge).map_err(Error::Walk)? {
            let lines = file
                .read_lines()
                .map_err(|e| Error::Read(file.path.clone(), e))?;
            let meta = parser.parse(&lines);
            if !meta.is_complete() || language(&file.extension).is_none() {
                debug!("Malformed {} ({} entries)", file.path.display(), meta.len());
                ret.push(file.path);
            }
        }
    }
    Ok(ret)
}

/// Fails the run if any file is malformed.
pub fn precheck(tree: &SolutionTree, parser: &Parser) -> Result<(), Error> {
    let files = malformed_files(tree, parser)?;
    if files.is_empty() {
        Ok(())
    } else {
        Err(Error::Malformed(files))
    }
}
