extern crate log;
extern crate serde_yaml;

use super::{Cache, Content};
use log::{debug, warn};
use serde_yaml::{from_reader, to_writer};
use std::{
    error::Error as StdError,
    fmt,
    fs::{self, File},
    io::{self, BufReader, BufWriter, Read, Write},
    path::PathBuf,
};

#[derive(Debug)]
pub enum Error {
    Io(PathBuf, io::Error),
    Yaml(serde_yaml::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "Error accessing cache {}: {}", path.display(), e),
            Self::Yaml(e) => write!(f, "Error processing cache: {}", e),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Yaml(e) => Some(e),
        }
    }
}

impl Cache {
    pub fn load_from<R: Read>(&mut self, rdr: R) -> Result<(), Error> {
        let content: Option<Content> = from_reader(rdr).map_err(Error::Yaml)?;
        self.content = content.unwrap_or_default();
        Ok(())
    }
    pub fn save_to<W: Write>(&self, wr: W) -> Result<(), Error> {
        to_writer(wr, &self.content).map_err(Error::Yaml)
    }

    /// Missing or unreadable files give an empty cache.
    pub fn load<P: Into<PathBuf>>(path: P) -> Self {
        let mut ret = Cache::new(path);
        let loaded = File::open(&ret.path)
            .map_err(|e| Error::Io(ret.path.clone(), e))
            .and_then(|f| ret.load_from(BufReader::new(f)));
        match loaded {
            Ok(_) => debug!("Loaded {} cache entries from {}", ret.len(), ret.path.display()),
            Err(Error::Io(_, e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No cache at {}, starting empty", ret.path.display())
            }
            Err(e) => {
                warn!("Ignoring cache {}: {}", ret.path.display(), e);
                ret.content.clear();
            }
        }
        ret
    }

    /// Writes a sibling temp file and renames it over the cache.
    pub fn save(&self) -> Result<(), Error> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        let io_err = |e| Error::Io(self.path.clone(), e);
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        {
            let mut wr = BufWriter::new(File::create(&tmp).map_err(io_err)?);
            self.save_to(&mut wr)?;
            wr.flush().map_err(io_err)?;
        }
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        debug!("Saved {} cache entries to {}", self.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Key;
    use super::*;
    use tempfile::TempDir;

    const KEY: Key<'static> = Key {
        judge: "boj",
        pid: "1000",
        filename: "a.py",
    };

    #[test]
    fn round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/cache.yaml");
        let mut cache = Cache::load(&path);
        assert!(cache.is_empty());
        cache.update(KEY, "abc".to_string(), 7);
        cache.save().unwrap();
        cache.save().unwrap();

        let loaded = Cache::load(&path);
        assert_eq!(loaded.len(), 1);
        assert!(loaded.check_uploaded(KEY, "abc"));
        assert_eq!(loaded.get_sequence(KEY), Some(7));
        assert!(!dir.path().join("nested/cache.yaml.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.yaml");
        fs::write(&path, "boj: [not, a, map").unwrap();
        assert!(Cache::load(&path).is_empty());
    }

    #[test]
    fn empty_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.yaml");
        fs::write(&path, "").unwrap();
        assert!(Cache::load(&path).is_empty());
    }

    #[test]
    fn nested_layout() {
        let mut cache = Cache::new("unused.yaml");
        cache.update(KEY, "abc".to_string(), 7);
        let mut buf = Vec::new();
        cache.save_to(&mut buf).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_slice(&buf).unwrap();
        assert_eq!(value["boj"]["1000"]["a.py"]["sequence"].as_i64(), Some(7));
        assert_eq!(value["boj"]["1000"]["a.py"]["hash"].as_str(), Some("abc"));
    }
}
