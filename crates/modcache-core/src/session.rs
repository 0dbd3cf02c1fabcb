//! Resolve session: the entry point handed to a compiler host.
//!
//! A session is built once per project and host. For every request it finds
//! the configuration that owns the importing file, fetches (or builds) the
//! resolver for that configuration, and lets it resolve the batch. All caches
//! live on the session itself and die with it.

use crate::cache::ExistenceCache;
use crate::config::SessionConfig;
use crate::error::Result;
use crate::host::{CompilerHost, ConfigLoader, ResolutionAlgorithm, SystemHost};
use crate::locate::ConfigLocator;
use crate::resolver::{require_resolved, Resolution, ResolverRegistry, ScopedResolver};
use crate::scope::ConfigScope;
use modcache_util::fs::anchor;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Cache statistics for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Configuration scopes with a built resolver.
    pub scope_count: usize,
    /// Paths whose existence has been recorded.
    pub existence_entries: usize,
}

/// Scope-aware, cached module resolution for one project.
pub struct ResolveSession<L, A: ResolutionAlgorithm> {
    host: Arc<dyn CompilerHost>,
    loader: L,
    algorithm: Arc<A>,
    locator: ConfigLocator,
    existence: ExistenceCache,
    registry: ResolverRegistry<A>,
}

impl<L, A> ResolveSession<L, A>
where
    L: ConfigLoader<A::Options>,
    A: ResolutionAlgorithm,
{
    /// Create a session whose default scope is `config.project_config`.
    ///
    /// A relative project config is anchored at the host's current directory,
    /// the same way containing files are.
    pub fn new(
        config: &SessionConfig,
        host: Arc<dyn CompilerHost>,
        loader: L,
        algorithm: A,
    ) -> Self {
        let project_config = anchor(&config.project_config, &host.current_directory());
        let locator = ConfigLocator::new(
            config.config_file_name.clone(),
            ConfigScope::from_path(&project_config),
        );
        Self {
            host,
            loader,
            algorithm: Arc::new(algorithm),
            locator,
            existence: ExistenceCache::new(),
            registry: ResolverRegistry::new(),
        }
    }

    /// Create a session over the real filesystem.
    pub fn with_system_host(config: &SessionConfig, loader: L, algorithm: A) -> Self {
        let host = Arc::new(SystemHost::from_env(config.case_sensitive));
        Self::new(config, host, loader, algorithm)
    }

    #[must_use]
    pub fn host(&self) -> &Arc<dyn CompilerHost> {
        &self.host
    }

    #[must_use]
    pub fn default_scope(&self) -> &ConfigScope {
        self.locator.default_scope()
    }

    /// Configuration scope that governs `containing_file`.
    pub fn locate(&self, containing_file: &str) -> ConfigScope {
        self.locator
            .locate(containing_file, self.host.as_ref(), &self.existence)
    }

    /// Resolver for `scope`, parsing its options on first use.
    ///
    /// # Errors
    /// Returns the loader's error if the scope's configuration cannot be parsed.
    pub fn resolver_for(&self, scope: &ConfigScope) -> Result<Arc<ScopedResolver<A>>> {
        self.registry.get_or_create(scope, |scope| {
            let options = self
                .loader
                .parse_options(scope.config_path())
                .map_err(|err| {
                    warn!(scope = %scope, error = %err, "Failed to load configuration");
                    err
                })?;

            debug!(scope = %scope, "Building resolver for configuration scope");
            Ok(ScopedResolver::new(
                scope.clone(),
                options,
                Arc::clone(&self.algorithm),
                Arc::clone(&self.host),
            ))
        })
    }

    /// Resolve `names` as imported from `containing_file`.
    ///
    /// The result has one entry per name, in order. Specifiers the algorithm
    /// cannot find come back as [`Resolution::Unresolved`].
    ///
    /// # Errors
    /// Fails only when the owning configuration cannot be loaded.
    pub fn resolve_module_names<S: AsRef<str>>(
        &self,
        names: &[S],
        containing_file: &str,
    ) -> Result<Vec<Resolution<A::Module>>> {
        let scope = self.locate(containing_file);
        let resolver = self.resolver_for(&scope)?;
        Ok(resolver.resolve(names, containing_file))
    }

    /// Like [`Self::resolve_module_names`], but every name must resolve.
    ///
    /// # Errors
    /// Returns [`crate::Error::Unresolved`] for the first specifier that
    /// could not be resolved, or the loader's error.
    pub fn resolve_module_names_strict<S: AsRef<str>>(
        &self,
        names: &[S],
        containing_file: &str,
    ) -> Result<Vec<Arc<A::Module>>> {
        let resolutions = self.resolve_module_names(names, containing_file)?;
        require_resolved(names, resolutions, containing_file)
    }

    /// Batch resolution hook in the `(names, containing_file)` shape.
    pub fn as_hook<S: AsRef<str>>(
        &self,
    ) -> impl Fn(&[S], &str) -> Result<Vec<Resolution<A::Module>>> + '_ {
        move |names: &[S], containing_file: &str| {
            self.resolve_module_names(names, containing_file)
        }
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            scope_count: self.registry.len(),
            existence_entries: self.existence.len(),
        }
    }
}

impl<L, A: ResolutionAlgorithm> fmt::Debug for ResolveSession<L, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveSession")
            .field("locator", &self.locator)
            .field("existence", &self.existence)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
