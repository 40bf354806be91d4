//! Compile options recognized by front-ends.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::ParseError;

/// Supported language standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    /// C++98 / C++03.
    Cpp98,
    /// C++11.
    Cpp11,
    /// C++14.
    Cpp14,
    /// C++17.
    Cpp17,
}

impl Standard {
    /// Command-line spelling of the standard.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Standard::Cpp98 => "c++98",
            Standard::Cpp11 => "c++11",
            Standard::Cpp14 => "c++14",
            Standard::Cpp17 => "c++17",
        }
    }

    /// Whether `enum class` declarations are available.
    pub const fn supports_scoped_enums(&self) -> bool {
        !matches!(self, Standard::Cpp98)
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Standard {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c++98" | "c++03" => Ok(Standard::Cpp98),
            "c++11" => Ok(Standard::Cpp11),
            "c++14" => Ok(Standard::Cpp14),
            "c++17" => Ok(Standard::Cpp17),
            other => Err(ParseError::unsupported(format!(
                "unknown language standard `{other}`"
            ))),
        }
    }
}

/// Options configuring one ingestion.
///
/// Built in the fluent style:
///
/// ```rust
/// use synwalk_frontend::{CompileOptions, Standard};
///
/// let options = CompileOptions::new()
///     .include_dir("/usr/include")
///     .include_dir("vendor/include")
///     .std(Standard::Cpp14);
///
/// assert_eq!(options.include_dirs().len(), 2);
/// assert_eq!(options.standard(), Standard::Cpp14);
/// ```
#[derive(Debug, Clone)]
pub struct CompileOptions {
    include_dirs: Vec<PathBuf>,
    standard: Standard,
}

impl CompileOptions {
    /// Default options: no include directories, C++11.
    pub fn new() -> Self {
        Self {
            include_dirs: Vec::new(),
            standard: Standard::Cpp11,
        }
    }

    /// Appends an include-search directory. Order is preserved.
    pub fn include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_dirs.push(dir.into());
        self
    }

    /// Selects the language standard.
    pub fn std(mut self, standard: Standard) -> Self {
        self.standard = standard;
        self
    }

    /// The include-search directories, in the order they were added.
    pub fn include_dirs(&self) -> &[PathBuf] {
        &self.include_dirs
    }

    /// The selected language standard.
    pub fn standard(&self) -> Standard {
        self.standard
    }

    /// Returns true if `dir` is among the include-search directories.
    pub fn has_include_dir(&self, dir: impl AsRef<Path>) -> bool {
        self.include_dirs.iter().any(|d| d == dir.as_ref())
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new()
    }
}
