use super::batch::load_with_local_cache;
use super::Resolution;
use crate::host::{CompilerHost, ResolutionAlgorithm};
use crate::scope::ConfigScope;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Resolver bound to one configuration scope.
///
/// Owns the scope's compiler options and its persistent resolution cache.
/// The cache lives as long as the resolver, so every batch routed here
/// builds on what earlier batches recorded.
pub struct ScopedResolver<A: ResolutionAlgorithm> {
    scope: ConfigScope,
    options: A::Options,
    cache: A::Cache,
    algorithm: Arc<A>,
    host: Arc<dyn CompilerHost>,
}

impl<A: ResolutionAlgorithm> ScopedResolver<A> {
    /// Bind `options` to `algorithm` with a fresh persistent cache.
    pub fn new(
        scope: ConfigScope,
        options: A::Options,
        algorithm: Arc<A>,
        host: Arc<dyn CompilerHost>,
    ) -> Self {
        let cache = algorithm.create_cache(&host.current_directory(), host.as_ref());
        Self {
            scope,
            options,
            cache,
            algorithm,
            host,
        }
    }

    #[must_use]
    pub fn scope(&self) -> &ConfigScope {
        &self.scope
    }

    #[must_use]
    pub fn options(&self) -> &A::Options {
        &self.options
    }

    /// The persistent resolution cache shared by every call for this scope.
    #[must_use]
    pub fn cache(&self) -> &A::Cache {
        &self.cache
    }

    /// Resolve a batch of specifiers imported from `containing_file`.
    ///
    /// Returns one entry per input name, in input order.
    pub fn resolve<S: AsRef<str>>(
        &self,
        names: &[S],
        containing_file: &str,
    ) -> Vec<Resolution<A::Module>> {
        let mut loads = 0usize;
        let resolutions: Vec<Resolution<A::Module>> =
            load_with_local_cache(names, containing_file, |name, file| {
                loads += 1;
                Resolution::from(self.algorithm.resolve(
                    name,
                    file,
                    &self.options,
                    self.host.as_ref(),
                    &self.cache,
                ))
            });

        trace!(
            scope = %self.scope,
            file = containing_file,
            names = names.len(),
            loads,
            "Resolved module batch"
        );
        resolutions
    }
}

impl<A: ResolutionAlgorithm> fmt::Debug for ScopedResolver<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedResolver")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
