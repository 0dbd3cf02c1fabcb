use super::scoped::ScopedResolver;
use crate::error::Result;
use crate::host::ResolutionAlgorithm;
use crate::scope::ConfigScope;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Scope-keyed store of resolvers.
///
/// Keys are compared as exact OS strings. Entries are never evicted.
pub struct ResolverRegistry<A: ResolutionAlgorithm> {
    resolvers: RwLock<HashMap<ConfigScope, Arc<ScopedResolver<A>>>>,
}

impl<A: ResolutionAlgorithm> Default for ResolverRegistry<A> {
    fn default() -> Self {
        Self {
            resolvers: RwLock::new(HashMap::new()),
        }
    }
}

impl<A: ResolutionAlgorithm> ResolverRegistry<A> {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver already built for `scope`, if any.
    #[must_use]
    pub fn get(&self, scope: &ConfigScope) -> Option<Arc<ScopedResolver<A>>> {
        let resolvers = self.resolvers.read().unwrap_or_else(PoisonError::into_inner);
        resolvers.get(scope).cloned()
    }

    /// Return the resolver for `scope`, building it with `build` on first use.
    ///
    /// A failed build stores nothing, so the next request for the same scope
    /// tries again. If two builds race, the first one stored is kept and
    /// returned to both callers.
    pub fn get_or_create<F>(
        &self,
        scope: &ConfigScope,
        build: F,
    ) -> Result<Arc<ScopedResolver<A>>>
    where
        F: FnOnce(&ConfigScope) -> Result<ScopedResolver<A>>,
    {
        if let Some(resolver) = self.get(scope) {
            return Ok(resolver);
        }

        let built = Arc::new(build(scope)?);
        let mut resolvers = self.resolvers.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(resolvers.entry(scope.clone()).or_insert(built)))
    }

    /// Number of scopes with a resolver.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scopes with a resolver, sorted.
    #[must_use]
    pub fn scopes(&self) -> Vec<ConfigScope> {
        let resolvers = self.resolvers.read().unwrap_or_else(PoisonError::into_inner);
        let mut scopes: Vec<ConfigScope> = resolvers.keys().cloned().collect();
        scopes.sort();
        scopes
    }
}

impl<A: ResolutionAlgorithm> fmt::Debug for ResolverRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverRegistry")
            .field("scopes", &self.scopes())
            .finish()
    }
}
