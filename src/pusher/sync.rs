extern crate ignore;
extern crate log;

use crate::{
    cache::{Cache, Key},
    client::{self, Api, Payload, Receipt},
    hash::content_hash,
    metadata::{language, Parser},
    solution::{render, split_description},
    tree::{SolutionPath, SolutionTree},
};
use log::{debug, info};
use std::{collections::HashMap, error::Error as StdError, fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum Error {
    Walk(ignore::Error),
    Read(PathBuf, io::Error),
    UnknownLanguage(PathBuf),
    MissingAuthor(PathBuf),
    Api(PathBuf, client::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Walk(e) => write!(f, "Error listing solutions: {}", e),
            Self::Read(path, e) => write!(f, "Error reading {}: {}", path.display(), e),
            Self::UnknownLanguage(path) => {
                write!(f, "No language known for {}", path.display())
            }
            Self::MissingAuthor(path) => write!(f, "No author in {}", path.display()),
            Self::Api(path, e) => write!(f, "Error pushing {}: {}", path.display(), e),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Walk(e) => Some(e),
            Self::Read(_, e) => Some(e),
            Self::Api(_, e) => Some(e),
            Self::UnknownLanguage(_) | Self::MissingAuthor(_) => None,
        }
    }
}
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Walk(e.into())
    }
}
impl From<ignore::Error> for Error {
    fn from(e: ignore::Error) -> Self {
        Self::Walk(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Created(i64),
    Updated(i64),
}

pub enum Progress<'a> {
    Skipped(Key<'a>),
    Uploaded { key: Key<'a>, receipt: &'a Receipt },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub skipped: usize,
    pub created: usize,
    pub updated: usize,
}
impl Summary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            Outcome::Created(_) => self.created += 1,
            Outcome::Updated(_) => self.updated += 1,
        }
    }
}
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} updated, {} unchanged",
            self.created, self.updated, self.skipped
        )
    }
}

/// One sequential pass over the solution tree.
///
/// Problem ids are memoized for the lifetime of the pusher only; the cache is
/// updated after every successful write so an aborted pass resumes cleanly.
pub struct Pusher<'a, A: Api> {
    api: &'a A,
    cache: &'a mut Cache,
    parser: &'a Parser,
    problems: HashMap<(String, String), i64>,
}

impl<'a, A: Api> Pusher<'a, A> {
    pub fn new(api: &'a A, cache: &'a mut Cache, parser: &'a Parser) -> Self {
        Pusher {
            api,
            cache,
            parser,
            problems: HashMap::new(),
        }
    }

    pub async fn push_tree<F>(
        &mut self,
        tree: &SolutionTree,
        mut report: F,
    ) -> Result<Summary, Error>
    where
        F: FnMut(Progress<'_>),
    {
        let mut summary = Summary::default();
        for judge in tree.judges()? {
            let files = tree.files(&judge)?;
            info!("Pushing {} solutions of {}", files.len(), judge);
            for file in files {
                summary.record(self.push_file(&file, &mut report).await?);
            }
        }
        Ok(summary)
    }

    pub async fn push_file<F>(
        &mut self,
        file: &SolutionPath,
        mut report: F,
    ) -> Result<Outcome, Error>
    where
        F: FnMut(Progress<'_>),
    {
        let lines = file
            .read_lines()
            .map_err(|e| Error::Read(file.path.clone(), e))?;
        let hash = content_hash(&lines);
        let key = Key {
            judge: &file.judge,
            pid: &file.pid,
            filename: &file.filename,
        };
        let lang = language(&file.extension)
            .ok_or_else(|| Error::UnknownLanguage(file.path.clone()))?;
        if self.cache.check_uploaded(key, &hash) {
            debug!("{} unchanged", key);
            report(Progress::Skipped(key));
            return Ok(Outcome::Skipped);
        }
        let sequence = self.cache.get_sequence(key);

        let author = self
            .parser
            .parse(&lines)
            .author()
            .ok_or_else(|| Error::MissingAuthor(file.path.clone()))?
            .to_string();
        let payload = Payload {
            language: lang.name.to_string(),
            author,
            description: render(lang, &split_description(&lines)),
        };

        let api_err = |e| Error::Api(file.path.clone(), e);
        let problem_id = self
            .problem_id(&file.judge, &file.pid)
            .await
            .map_err(api_err)?;
        let receipt = match sequence {
            Some(seq) => self.api.update_solution(problem_id, seq, &payload).await,
            None => self.api.create_solution(problem_id, &payload).await,
        }
        .map_err(api_err)?;
        info!("{} {} {}", receipt.method, receipt.url, receipt.status);

        self.cache.update(key, hash, receipt.id);
        report(Progress::Uploaded {
            key,
            receipt: &receipt,
        });
        Ok(match sequence {
            Some(_) => Outcome::Updated(receipt.id),
            None => Outcome::Created(receipt.id),
        })
    }

    async fn problem_id(&mut self, judge: &str, pid: &str) -> client::Result<i64> {
        let key = (judge.to_string(), pid.to_string());
        if let Some(id) = self.problems.get(&key) {
            return Ok(*id);
        }
        let id = self.api.lookup_problem_id(judge, pid).await?;
        self.problems.insert(key, id);
        Ok(id)
    }
}
