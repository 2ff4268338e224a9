extern crate serde;

use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub hash: String,
    pub sequence: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key<'a> {
    pub judge: &'a str,
    pub pid: &'a str,
    pub filename: &'a str,
}
impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.judge, self.pid, self.filename)
    }
}

pub(crate) type Content = BTreeMap<String, BTreeMap<String, BTreeMap<String, Entry>>>;

/// Last uploaded hash and remote sequence per solution file.
pub struct Cache {
    path: PathBuf,
    content: Content,
}

impl Cache {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Cache {
            path: path.into(),
            content: Content::new(),
        }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn len(&self) -> usize {
        self.content
            .values()
            .flat_map(|pids| pids.values())
            .map(|files| files.len())
            .sum()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: Key<'_>) -> Option<&Entry> {
        self.content.get(key.judge)?.get(key.pid)?.get(key.filename)
    }
    pub fn get_sequence(&self, key: Key<'_>) -> Option<i64> {
        self.get(key)?.sequence
    }
    pub fn check_uploaded(&self, key: Key<'_>, hash: &str) -> bool {
        self.get(key).map_or(false, |e| e.hash == hash)
    }
    pub fn update(&mut self, key: Key<'_>, hash: String, sequence: i64) {
        self.content
            .entry(key.judge.to_string())
            .or_default()
            .entry(key.pid.to_string())
            .or_default()
            .insert(
                key.filename.to_string(),
                Entry {
                    hash,
                    sequence: Some(sequence),
                },
            );
    }
}

pub mod storage;
