//! Per-scope resolvers and the registry that owns them.
//!
//! A [`ScopedResolver`] binds one configuration's options and persistent
//! cache to the host's resolution algorithm. [`ResolverRegistry`] keeps one
//! per scope for the lifetime of a session. Within a single request,
//! [`load_with_local_cache`] makes sure each distinct specifier is resolved
//! once.

mod batch;
mod registry;
mod scoped;

pub use batch::load_with_local_cache;
pub use registry::ResolverRegistry;
pub use scoped::ScopedResolver;

use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Resolution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStatus {
    Resolved,
    Unresolved,
}

impl fmt::Display for ResolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Resolved => "resolved",
            Self::Unresolved => "unresolved",
        };
        write!(f, "{s}")
    }
}

/// Outcome of resolving one specifier.
///
/// Resolved modules are shared: every position of a batch that names the
/// same specifier holds the same `Arc`.
#[derive(Debug)]
pub enum Resolution<M> {
    Resolved(Arc<M>),
    Unresolved,
}

impl<M> Clone for Resolution<M> {
    fn clone(&self) -> Self {
        match self {
            Self::Resolved(module) => Self::Resolved(Arc::clone(module)),
            Self::Unresolved => Self::Unresolved,
        }
    }
}

impl<M> From<Option<M>> for Resolution<M> {
    fn from(module: Option<M>) -> Self {
        module.map_or(Self::Unresolved, |m| Self::Resolved(Arc::new(m)))
    }
}

impl<M> Resolution<M> {
    #[must_use]
    pub fn status(&self) -> ResolveStatus {
        match self {
            Self::Resolved(_) => ResolveStatus::Resolved,
            Self::Unresolved => ResolveStatus::Unresolved,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The resolved module, if any.
    #[must_use]
    pub fn module(&self) -> Option<&M> {
        self.shared().map(|module| &**module)
    }

    /// The shared handle to the resolved module, if any.
    #[must_use]
    pub fn shared(&self) -> Option<&Arc<M>> {
        match self {
            Self::Resolved(module) => Some(module),
            Self::Unresolved => None,
        }
    }

    #[must_use]
    pub fn into_shared(self) -> Option<Arc<M>> {
        match self {
            Self::Resolved(module) => Some(module),
            Self::Unresolved => None,
        }
    }
}

/// Require every specifier of a batch to have resolved.
///
/// `names` and `resolutions` are paired by position. The first unresolved
/// position is reported as [`Error::Unresolved`].
pub fn require_resolved<S, M>(
    names: &[S],
    resolutions: Vec<Resolution<M>>,
    containing_file: &str,
) -> Result<Vec<Arc<M>>>
where
    S: AsRef<str>,
{
    names
        .iter()
        .zip(resolutions)
        .map(|(name, resolution)| {
            resolution.into_shared().ok_or_else(|| Error::Unresolved {
                specifier: name.as_ref().to_string(),
                containing_file: containing_file.to_string(),
            })
        })
        .collect()
}
