//! Host-supplied collaborators.
//!
//! The session never touches the filesystem, parses configuration, or runs a
//! resolution algorithm itself. Those capabilities come from the embedding
//! toolchain through the traits below.

use crate::error::Result;
use modcache_util::fs::is_file;
use std::path::{Path, PathBuf};

/// Filesystem view shared by the locator and the resolution algorithm.
pub trait CompilerHost: Send + Sync {
    /// Directory relative paths are anchored at.
    fn current_directory(&self) -> PathBuf;

    /// Canonical form of a file name, used as a cache key by the algorithm.
    fn canonical_file_name(&self, path: &str) -> String;

    /// Whether a regular file exists at `path`.
    fn file_exists(&self, path: &Path) -> bool;
}

/// Turns a configuration file into compiler options.
///
/// Implemented for any `Fn(&Path) -> Result<O>`.
pub trait ConfigLoader<O>: Send + Sync {
    /// Parse the options declared by `config_path`.
    ///
    /// A malformed file should surface as [`crate::Error::ConfigParse`].
    fn parse_options(&self, config_path: &Path) -> Result<O>;
}

impl<O, F> ConfigLoader<O> for F
where
    F: Fn(&Path) -> Result<O> + Send + Sync,
{
    fn parse_options(&self, config_path: &Path) -> Result<O> {
        self(config_path)
    }
}

/// The underlying specifier resolution primitive.
///
/// `Cache` is the algorithm's own persistent resolution cache. One instance
/// is created per configuration scope and handed back on every call for that
/// scope; it is only ever borrowed shared, so implementations that record
/// state must use interior mutability.
pub trait ResolutionAlgorithm: Send + Sync {
    /// Compiler options produced by a [`ConfigLoader`].
    type Options: Send + Sync;
    /// Opaque resolved module record.
    type Module: Send + Sync;
    /// Persistent per-scope resolution cache.
    type Cache: Send + Sync;

    /// Allocate an empty cache for a new scope.
    fn create_cache(&self, current_directory: &Path, host: &dyn CompilerHost) -> Self::Cache;

    /// Resolve `name` as imported from `containing_file`.
    ///
    /// Returns `None` when no module can be found.
    fn resolve(
        &self,
        name: &str,
        containing_file: &str,
        options: &Self::Options,
        host: &dyn CompilerHost,
        cache: &Self::Cache,
    ) -> Option<Self::Module>;
}

/// [`CompilerHost`] backed by the real filesystem.
#[derive(Debug, Clone)]
pub struct SystemHost {
    cwd: PathBuf,
    case_sensitive: bool,
}

impl SystemHost {
    /// Create a host with an explicit working directory.
    #[must_use]
    pub fn new(cwd: PathBuf, case_sensitive: bool) -> Self {
        Self {
            cwd,
            case_sensitive,
        }
    }

    /// Create a host rooted at the process working directory.
    #[must_use]
    pub fn from_env(case_sensitive: bool) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(cwd, case_sensitive)
    }
}

impl CompilerHost for SystemHost {
    fn current_directory(&self) -> PathBuf {
        self.cwd.clone()
    }

    fn canonical_file_name(&self, path: &str) -> String {
        if self.case_sensitive {
            path.to_string()
        } else {
            path.to_lowercase()
        }
    }

    fn file_exists(&self, path: &Path) -> bool {
        is_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_system_host_file_exists() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("tsconfig.json");
        fs::write(&file, "{}").unwrap();

        let host = SystemHost::new(dir.path().to_path_buf(), true);
        assert!(host.file_exists(&file));
        assert!(!host.file_exists(dir.path()));
        assert_eq!(host.current_directory(), dir.path());
    }

    #[test]
    fn test_canonical_file_name_case_folding() {
        let sensitive = SystemHost::new(PathBuf::from("/"), true);
        let insensitive = SystemHost::new(PathBuf::from("/"), false);

        assert_eq!(sensitive.canonical_file_name("/Src/App.ts"), "/Src/App.ts");
        assert_eq!(insensitive.canonical_file_name("/Src/App.ts"), "/src/app.ts");
    }

    #[test]
    fn test_closure_config_loader() {
        let loader = |path: &Path| -> Result<String> { Ok(path.display().to_string()) };
        let options = loader.parse_options(Path::new("/repo/tsconfig.json")).unwrap();
        assert_eq!(options, "/repo/tsconfig.json");
    }
}
