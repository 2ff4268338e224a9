extern crate ignore;

use ignore::WalkBuilder;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// `<root>/<judge>/.../<pid>/<filename>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPath {
    pub judge: String,
    pub pid: String,
    pub filename: String,
    pub extension: String,
    pub path: PathBuf,
}
impl SolutionPath {
    fn new(judge: &str, path: PathBuf) -> Option<Self> {
        let filename = path.file_name()?.to_str()?.to_string();
        let extension = path.extension()?.to_str()?.to_string();
        let pid = path.parent()?.file_name()?.to_str()?.to_string();
        Some(SolutionPath {
            judge: judge.to_string(),
            pid,
            filename,
            extension,
            path,
        })
    }
    pub fn read_lines(&self) -> io::Result<Vec<String>> {
        Ok(fs::read_to_string(&self.path)?
            .split_inclusive('\n')
            .map(str::to_string)
            .collect())
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

pub struct SolutionTree {
    root: PathBuf,
}
impl SolutionTree {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        SolutionTree { root: root.into() }
    }
    pub fn root(&self) -> &Path {
        &self.root
    }
    pub fn judges(&self) -> io::Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(v) => v,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let mut ret = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !is_hidden(name) {
                    ret.push(name.to_string());
                }
            }
        }
        ret.sort();
        Ok(ret)
    }
    /// Every `*.*` file below the judge directory, in name order.
    pub fn files(&self, judge: &str) -> Result<Vec<SolutionPath>, ignore::Error> {
        let base = self.root.join(judge);
        let mut ret = Vec::new();
        for entry in WalkBuilder::new(&base)
            .standard_filters(false)
            .hidden(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
        {
            let entry = entry?;
            if !entry.file_type().map_or(false, |t| t.is_file()) || entry.path() == base {
                continue;
            }
            if let Some(v) = SolutionPath::new(judge, entry.into_path()) {
                ret.push(v);
            }
        }
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x\n").unwrap();
    }

    #[test]
    fn lists_judges_and_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "boj/1000/a.py");
        touch(dir.path(), "boj/1000/b.cpp");
        touch(dir.path(), "boj/1001/README");
        touch(dir.path(), "boj/1001/.hidden.py");
        touch(dir.path(), "programmers/42576/sol.java");
        touch(dir.path(), ".git/config.txt");
        fs::write(dir.path().join("notes.md"), "").unwrap();

        let tree = SolutionTree::new(dir.path());
        assert_eq!(tree.judges().unwrap(), vec!["boj", "programmers"]);

        let files = tree.files("boj").unwrap();
        let names: Vec<_> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["a.py", "b.cpp"]);
        assert_eq!(files[0].pid, "1000");
        assert_eq!(files[0].extension, "py");
        assert_eq!(files[0].judge, "boj");
    }

    #[test]
    fn missing_root_has_no_judges() {
        let dir = TempDir::new().unwrap();
        let tree = SolutionTree::new(dir.path().join("nope"));
        assert!(tree.judges().unwrap().is_empty());
    }

    #[test]
    fn keeps_line_endings() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("boj/1")).unwrap();
        fs::write(dir.path().join("boj/1/a.py"), "a\n\nb").unwrap();
        let file = &SolutionTree::new(dir.path()).files("boj").unwrap()[0];
        assert_eq!(file.read_lines().unwrap(), vec!["a\n", "\n", "b"]);
    }
}
