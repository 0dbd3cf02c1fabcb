//! Nearest-configuration lookup.

use crate::cache::ExistenceCache;
use crate::host::CompilerHost;
use crate::scope::ConfigScope;
use modcache_util::fs::{anchor, candidates_upward};
use std::path::Path;
use tracing::trace;

/// Finds the configuration scope that governs a source file.
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    config_file_name: String,
    default_scope: ConfigScope,
}

impl ConfigLocator {
    #[must_use]
    pub fn new(config_file_name: impl Into<String>, default_scope: ConfigScope) -> Self {
        Self {
            config_file_name: config_file_name.into(),
            default_scope,
        }
    }

    #[must_use]
    pub fn default_scope(&self) -> &ConfigScope {
        &self.default_scope
    }

    #[must_use]
    pub fn config_file_name(&self) -> &str {
        &self.config_file_name
    }

    /// Nearest configuration file enclosing `containing_file`.
    ///
    /// Walks from the file's directory up to the root, probing through
    /// `existence`. Falls back to the default scope; never fails.
    pub fn locate(
        &self,
        containing_file: &str,
        host: &dyn CompilerHost,
        existence: &ExistenceCache,
    ) -> ConfigScope {
        let file = anchor(Path::new(containing_file), &host.current_directory());

        let found = candidates_upward(&file, &self.config_file_name)
            .find(|candidate| existence.exists(candidate, |p| host.file_exists(p)));

        match found {
            Some(config) => {
                let scope = ConfigScope::from_path(&config);
                trace!(file = containing_file, scope = %scope, "Located configuration");
                scope
            }
            None => {
                trace!(
                    file = containing_file,
                    scope = %self.default_scope,
                    "No enclosing configuration, using default scope"
                );
                self.default_scope.clone()
            }
        }
    }
}
