extern crate regex;

use regex::Regex;

pub const AUTHOR: &str = "Authored by";
pub const CO_AUTHOR: &str = "Co-authored by";
pub const LINK: &str = "Link";
pub const DESCRIPTION_MARKER: &str = "Solution Description";
pub const REQUIRED_ENTRIES: usize = 3;

#[derive(Debug, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub fence: &'static str,
}

const LANGUAGES: &[(&str, Language)] = &[
    ("c", Language { name: "C", fence: "c" }),
    ("cc", Language { name: "C++", fence: "cpp" }),
    ("cpp", Language { name: "C++", fence: "cpp" }),
    ("cs", Language { name: "C#", fence: "csharp" }),
    ("go", Language { name: "Go", fence: "go" }),
    ("java", Language { name: "Java", fence: "java" }),
    ("js", Language { name: "JavaScript", fence: "javascript" }),
    ("kt", Language { name: "Kotlin", fence: "kotlin" }),
    ("py", Language { name: "Python", fence: "python" }),
    ("rb", Language { name: "Ruby", fence: "ruby" }),
    ("rs", Language { name: "Rust", fence: "rust" }),
    ("swift", Language { name: "Swift", fence: "swift" }),
    ("ts", Language { name: "TypeScript", fence: "typescript" }),
];

pub fn language(extension: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, lang)| lang)
}

/// Marker entries in the order they appear. Repeated keys are kept, so a
/// duplicated marker shows up as a surplus entry.
///
/// Complete means each of `AUTHOR`, `CO_AUTHOR` and `LINK` exactly once.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}
impl Metadata {
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn is_complete(&self) -> bool {
        self.len() == REQUIRED_ENTRIES
            && [AUTHOR, CO_AUTHOR, LINK]
                .iter()
                .all(|key| self.count(key) == 1)
    }
    pub fn count(&self, key: &str) -> usize {
        self.entries.iter().filter(|(k, _)| k == key).count()
    }
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
    pub fn author(&self) -> Option<&str> {
        self.get(AUTHOR)
    }
}

pub struct Parser {
    marker: Regex,
}
impl Parser {
    pub fn new() -> Self {
        Parser {
            marker: Regex::new(
                r"^\s*(?:#+|//+|--+|/\*+|\*+)\s*(Authored by|Co-authored by|Link)\s*:\s*(.*?)\s*(?:\*/)?\s*$",
            )
            .unwrap(),
        }
    }
    /// Never fails; missing markers just leave the result short.
    ///
    /// Lines from the last description marker on are description text, the
    /// same boundary `solution::split_description` uses.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Metadata {
        let mut ret = Metadata::default();
        let cut = lines
            .iter()
            .rposition(|l| l.as_ref().contains(DESCRIPTION_MARKER))
            .unwrap_or(lines.len());
        for line in lines[..cut].iter().map(AsRef::as_ref) {
            if let Some(cap) = self.marker.captures(line) {
                ret.entries.push((cap[1].to_string(), cap[2].to_string()));
            }
        }
        ret
    }
}
impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.split_inclusive('\n').collect()
    }

    #[test]
    fn python_header() {
        let meta = Parser::new().parse(&lines(
            "# Authored by : tony9402\n# Co-authored by : -\n# Link : http://boj.kr/abc\nprint(1)\n",
        ));
        assert!(meta.is_complete());
        assert_eq!(meta.author(), Some("tony9402"));
        assert_eq!(meta.get(CO_AUTHOR), Some("-"));
        assert_eq!(meta.get(LINK), Some("http://boj.kr/abc"));
    }

    #[test]
    fn cpp_block_comment() {
        let meta = Parser::new().parse(&lines(
            "/* Authored by : alice */\n// Co-authored by : bob\n * Link : https://x\nint main(){}\n",
        ));
        assert_eq!(meta.len(), 3);
        assert_eq!(meta.author(), Some("alice"));
        assert_eq!(meta.get(CO_AUTHOR), Some("bob"));
    }

    #[test]
    fn missing_markers_are_short() {
        let parser = Parser::new();
        assert!(parser.parse(&lines("print(1)\n")).is_empty());
        let meta = parser.parse(&lines("# Authored by : a\n# Link : b\n"));
        assert_eq!(meta.len(), 2);
        assert!(!meta.is_complete());
    }

    #[test]
    fn repeated_marker_is_surplus() {
        let meta = Parser::new().parse(&lines(
            "# Authored by : a\n# Authored by : b\n# Co-authored by : -\n# Link : c\n",
        ));
        assert_eq!(meta.len(), 4);
        assert_eq!(meta.author(), Some("a"));
    }

    #[test]
    fn ignores_markers_in_description() {
        let meta = Parser::new().parse(&lines(
            "# Authored by : a\n# Co-authored by : -\n# Link : c\n# Solution Description\n# Link : d\n",
        ));
        assert_eq!(meta.len(), 3);
    }

    #[test]
    fn three_entries_need_three_keys() {
        let parser = Parser::new();
        let links = parser.parse(&lines("# Link : a\n# Link : b\n# Link : c\n"));
        assert_eq!(links.len(), 3);
        assert!(!links.is_complete());

        let meta = parser.parse(&lines("# Authored by : a\n# Authored by : b\n# Link : c\n"));
        assert_eq!(meta.count(AUTHOR), 2);
        assert!(!meta.is_complete());
    }

    #[test]
    fn marker_phrase_in_code_above_header() {
        let meta = Parser::new().parse(&lines(
            "TITLE = 'Solution Description'\n# Authored by : a\n# Co-authored by : -\n# Link : c\nprint(TITLE)\n\n# Solution Description\n# Link : d\n",
        ));
        assert!(meta.is_complete());
        assert_eq!(meta.get(LINK), Some("c"));
    }

    #[test]
    fn code_is_not_metadata() {
        let meta = Parser::new().parse(&lines("link = 'Link : x'\n"));
        assert!(meta.is_empty());
    }

    #[test]
    fn language_table() {
        assert_eq!(language("py").map(|l| l.name), Some("Python"));
        assert_eq!(language("CPP").map(|l| l.fence), Some("cpp"));
        assert_eq!(language("txt"), None);
    }
}
