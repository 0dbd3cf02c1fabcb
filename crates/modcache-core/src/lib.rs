#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::return_self_not_must_use)]

//! Scope-aware module resolution caching.
//!
//! Routes each batch of import specifiers to the resolver built for the
//! nearest enclosing configuration, reusing that resolver's persistent cache
//! across calls and resolving every distinct specifier of a batch once.

pub mod cache;
pub mod config;
pub mod error;
pub mod host;
pub mod locate;
pub mod resolver;
pub mod scope;
pub mod session;

pub use cache::ExistenceCache;
pub use config::{SessionConfig, DEFAULT_CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use host::{CompilerHost, ConfigLoader, ResolutionAlgorithm, SystemHost};
pub use locate::ConfigLocator;
pub use resolver::{
    load_with_local_cache, require_resolved, Resolution, ResolveStatus, ResolverRegistry,
    ScopedResolver,
};
pub use scope::ConfigScope;
pub use session::{ResolveSession, SessionStats};
