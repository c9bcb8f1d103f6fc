use std::{
    fmt,
    fs,
    path::Path,
    str::FromStr,
};

use anyhow::Context;
use derive_more::Deref;
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Dump a directory tree into a single IDM expression.
///
/// Subdirectories and the stems of `.idm` files become section headlines
/// and file contents are indented under them. Other files are skipped.
pub fn directory_to_idm(path: impl AsRef<Path>) -> anyhow::Result<String> {
    use std::fmt::Write;

    let path = path.as_ref();

    // If pointed at a file, just read the file.
    if path.is_file() {
        return fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }

    let mut ret = String::new();
    for e in walkdir::WalkDir::new(path).sort_by_file_name() {
        let e = e.with_context(|| format!("walking {}", path.display()))?;
        let depth = e.depth();
        if depth == 0 {
            // The root element, do not print out.
            continue;
        }
        let indent = "  ".repeat(depth - 1);

        if e.file_type().is_dir() {
            writeln!(ret, "{indent}{}", e.file_name().to_string_lossy())?;
            continue;
        }

        let file = Path::new(e.file_name());
        if file.extension().and_then(|a| a.to_str()) != Some("idm") {
            continue;
        }
        let Some(stem) = file.file_stem() else { continue };
        writeln!(ret, "{indent}{}", stem.to_string_lossy())?;

        let body = fs::read_to_string(e.path())
            .with_context(|| format!("reading {}", e.path().display()))?;
        for line in body.lines() {
            // Tabs count as one level of indentation each.
            let tabs = line.chars().take_while(|&c| c == '\t').count();
            let line = &line[tabs..];
            if line.trim().is_empty() {
                writeln!(ret)?;
            } else {
                writeln!(ret, "{indent}  {}{line}", "  ".repeat(tabs))?;
            }
        }
    }

    Ok(ret)
}

/// String that is written with underscores in place of spaces in IDM data.
///
/// IDM map keys are single words, so names like `Old_Mill` in a data file
/// become `Old Mill` in the program.
#[derive(
    Clone,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Deref,
    DeserializeFromStr,
    SerializeDisplay,
)]
pub struct _String(pub String);

impl fmt::Display for _String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.replace(' ', "_"))
    }
}

impl FromStr for _String {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(_String(s.replace('_', " ")))
    }
}

impl From<&str> for _String {
    fn from(value: &str) -> Self {
        _String(value.to_owned())
    }
}

impl From<_String> for String {
    fn from(value: _String) -> Self {
        value.0
    }
}
