use crate::error::Error;
use regex::Regex;

/// Filename predicate built from the extension and name prompts.
///
/// Each list is a set of regex fragments joined with `|`; the whole filename
/// must match `(names)[A-Za-z0-9_]*\.(extensions)`.
#[derive(Debug, Clone)]
pub struct FileFilter {
    pattern: Regex,
    extensions: String,
    file_names: String,
}

impl FileFilter {
    pub fn new<S: AsRef<str>>(extensions: &[S], file_names: &[S]) -> Result<Self, Error> {
        let extensions = join_alternatives(extensions);
        let file_names = join_alternatives(file_names);
        let pattern = Regex::new(&format!(
            r"^(?:({})[A-Za-z0-9_]*\.({}))$",
            file_names, extensions
        ))?;
        Ok(Self {
            pattern,
            extensions,
            file_names,
        })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }

    /// Extension alternatives as shown in the summary, e.g. `txt|java`.
    pub fn extensions(&self) -> &str {
        &self.extensions
    }

    pub fn file_names(&self) -> &str {
        &self.file_names
    }
}

fn join_alternatives<S: AsRef<str>>(parts: &[S]) -> String {
    if parts.is_empty() {
        return ".*".to_string();
    }
    parts
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join("|")
}
