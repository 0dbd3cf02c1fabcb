//! Config location against a real directory tree.

use modcache_core::{
    CompilerHost, Error, ResolutionAlgorithm, ResolveSession, SessionConfig, SystemHost,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::tempdir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("modcache_core=trace")
        .with_test_writer()
        .try_init();
}

/// Resolves relative specifiers next to the importing file when they exist.
struct ProbeAlgorithm;

impl ResolutionAlgorithm for ProbeAlgorithm {
    type Options = PathBuf;
    type Module = PathBuf;
    type Cache = ();

    fn create_cache(&self, _current_directory: &Path, _host: &dyn CompilerHost) {}

    fn resolve(
        &self,
        name: &str,
        containing_file: &str,
        _options: &PathBuf,
        host: &dyn CompilerHost,
        _cache: &(),
    ) -> Option<PathBuf> {
        let dir = Path::new(containing_file).parent()?;
        let candidate = dir.join(format!("{}.ts", name.trim_start_matches("./")));
        host.file_exists(&candidate).then_some(candidate)
    }
}

fn read_options(path: &Path) -> modcache_core::Result<PathBuf> {
    let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        return Err(Error::config_parse(path, "empty configuration"));
    }
    Ok(path.to_path_buf())
}

#[test]
fn test_nested_configs_on_disk() {
    init_tracing();
    let dir = tempdir().unwrap();
    let root = dir.path();
    let pkg = root.join("packages").join("core");
    fs::create_dir_all(pkg.join("src")).unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("tsconfig.json"), "{}").unwrap();
    fs::write(pkg.join("tsconfig.json"), "{}").unwrap();
    fs::write(pkg.join("src").join("dep.ts"), "export {}").unwrap();

    let host = Arc::new(SystemHost::new(root.to_path_buf(), true));
    let config = SessionConfig::new(root.join("tsconfig.json"));
    let session = ResolveSession::new(&config, host, read_options, ProbeAlgorithm);

    let containing = pkg.join("src").join("index.ts");
    let containing = containing.to_string_lossy();
    assert_eq!(
        session.locate(&containing).config_path(),
        pkg.join("tsconfig.json")
    );
    assert_eq!(
        session.locate(&root.join("src").join("main.ts").to_string_lossy()),
        *session.default_scope()
    );

    let out = session
        .resolve_module_names(&["./dep", "./nope"], &containing)
        .unwrap();
    assert_eq!(out[0].module(), Some(&pkg.join("src").join("dep.ts")));
    assert!(!out[1].is_resolved());

    let resolver = session.resolver_for(&session.locate(&containing)).unwrap();
    assert_eq!(resolver.options(), &pkg.join("tsconfig.json"));
}

#[test]
fn test_empty_config_is_a_parse_error() {
    init_tracing();
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("tsconfig.json"), "  \n").unwrap();

    let session = ResolveSession::new(
        &SessionConfig::new(root.join("tsconfig.json")),
        Arc::new(SystemHost::new(root.to_path_buf(), true)),
        read_options,
        ProbeAlgorithm,
    );

    let file = root.join("index.ts");
    let err = session
        .resolve_module_names(&["./x"], &file.to_string_lossy())
        .unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
}

#[test]
fn test_missing_default_config_is_a_read_error() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let session = ResolveSession::new(
        &SessionConfig::new(root.join("tsconfig.json")),
        Arc::new(SystemHost::new(root.to_path_buf(), true)),
        read_options,
        ProbeAlgorithm,
    );

    let file = root.join("index.ts");
    let err = session
        .resolve_module_names(&["./x"], &file.to_string_lossy())
        .unwrap_err();
    assert!(matches!(err, Error::ConfigRead { .. }));
}
