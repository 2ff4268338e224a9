use crate::metadata::{Language, DESCRIPTION_MARKER};

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A solution file split into its code and the trailing free-text description.
#[derive(Debug, PartialEq, Eq)]
pub struct Sections {
    pub code: String,
    pub description: String,
}

/// Scans from the end: `end` is the last non-blank line, `start` the closest
/// line above it (or equal to it) carrying the description marker.
pub fn split_description<S: AsRef<str>>(lines: &[S]) -> Sections {
    let mut end = None;
    let mut start = None;
    for (idx, line) in lines.iter().map(AsRef::as_ref).enumerate().rev() {
        if end.is_none() && !is_blank(line) {
            end = Some(idx);
        }
        if line.contains(DESCRIPTION_MARKER) {
            start = Some(idx);
            break;
        }
    }
    match (start, end) {
        (Some(start), Some(end)) => {
            let mut code = &lines[..start];
            while let Some((last, rest)) = code.split_last() {
                if !is_blank(last.as_ref()) {
                    break;
                }
                code = rest;
            }
            Sections {
                code: join(code),
                description: join(&lines[start + 1..=end]),
            }
        }
        _ => Sections {
            code: join(lines),
            description: String::new(),
        },
    }
}

fn join<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(AsRef::as_ref).collect()
}

/// Markdown body sent to the tracker: fenced code, then the description.
pub fn render(language: &Language, sections: &Sections) -> String {
    format!(
        "```{}\n{}\n```\n\n{}",
        language.fence, sections.code, sections.description
    )
}
