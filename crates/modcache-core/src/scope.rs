use std::borrow::Borrow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

/// Identity of a configuration scope: the configuration file's path.
///
/// Two scopes are the same only if their paths are byte-identical; no path
/// normalization happens here. The original OS string is kept, so
/// [`ConfigScope::config_path`] returns exactly the path the scope was built
/// from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigScope(OsString);

impl ConfigScope {
    #[must_use]
    pub fn new(id: impl Into<OsString>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        Self(path.as_os_str().to_os_string())
    }

    #[must_use]
    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    /// Path of the configuration file this scope stands for.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.config_path().display())
    }
}

impl Borrow<OsStr> for ConfigScope {
    fn borrow(&self) -> &OsStr {
        &self.0
    }
}

impl AsRef<Path> for ConfigScope {
    fn as_ref(&self) -> &Path {
        self.config_path()
    }
}

impl From<&str> for ConfigScope {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<&Path> for ConfigScope {
    fn from(path: &Path) -> Self {
        Self::from_path(path)
    }
}
