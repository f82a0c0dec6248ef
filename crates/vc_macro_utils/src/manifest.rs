use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for another crate as seen from the
/// caller's Cargo.toml.
///
/// Generated code must name crates the way the invoking crate can see them.
/// A user depending on the `memorypack` façade reaches the reflection crate
/// as `::memorypack::reflect`, while a workspace member depending on it
/// directly uses `::vc_reflect`.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_reflect"));
/// ```
///
/// The cost of this operation is not low, and the caller should store the
/// result and call it once per proc-macro invocation.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `vc_` and the target depends on
///    a façade crate (`memorypack`, then `vc_pack`), return
///    `::facade::short_name` (e.g. `vc_reflect` -> `::memorypack::reflect`).
/// 3. Repeat steps 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
/// When a crate needs to reference itself, library code should use
/// `crate::...`, while doctests and other external code typically use the
/// absolute path `::crate_name`.
///
/// To support both cases adding an alias such as
/// `extern crate self as vc_reflect;` in the crate root can resolve the conflict.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

// Crates re-exporting the `vc_*` crates under their short names.
const FACADE_NAMES: [&str; 2] = ["memorypack", "vc_pack"];
const CRATE_PREFIX: &str = "vc_";

impl Manifest {
    /// The Cargo.toml of the crate being compiled, with its modification time.
    fn locate() -> (PathBuf, SystemTime) {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = Path::new(&dir).join("Cargo.toml");
        let modified_time = fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .unwrap_or_else(|err| panic!("Unable to stat {}: {err}", path.display()));
        (path, modified_time)
    }

    fn parse(path: &Path) -> Document<Box<str>> {
        let source = fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("Unable to read {}: {err}", path.display()));
        Document::parse(source.into_boxed_str())
            .unwrap_or_else(|err| panic!("Failed to parse {}: {err}", path.display()))
    }

    // Crate names and façade paths always parse.
    fn absolute_path(segments: &[&str]) -> syn::Path {
        let source = format!("::{}", segments.join("::"));
        syn::parse_str(&source).unwrap_or_else(|_| panic!("`{source}` is not a valid path"))
    }

    fn resolve_in(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute_path(&[name]));
        }
        let short_name = name.strip_prefix(CRATE_PREFIX)?;
        let facade = FACADE_NAMES
            .into_iter()
            .find(|facade| *facade != name && deps.contains_key(facade))?;
        Some(Self::absolute_path(&[facade, short_name]))
    }

    /// Returns the path under which generated code reaches the crate `name`.
    ///
    /// See the type documentation for the resolution order.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Some(deps),
                _ => None,
            })
            .find_map(|deps| Self::resolve_in(deps, name))
            .unwrap_or_else(|| Self::absolute_path(&[name]))
    }

    /// Runs `func` on the manifest of the crate being compiled.
    ///
    /// Parsed manifests are cached per path and re-read when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static CACHE: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let (path, modified_time) = Self::locate();

        let cache = CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.get(&path)
            && cached.modified_time == modified_time
        {
            return func(cached);
        }
        drop(cache);

        let manifest = Manifest {
            manifest: Self::parse(&path),
            modified_time,
        };
        let result = func(&manifest);
        CACHE
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use std::time::SystemTime;
    use toml_edit::Document;

    fn manifest(source: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(source.to_owned().into_boxed_str()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<_> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        segments.join("::")
    }

    #[test]
    fn direct_dependency_wins() {
        let m = manifest("[dependencies]\nvc_reflect = \"0\"\nmemorypack = \"0\"\n");
        assert_eq!(path_string(&m.get_crate_path("vc_reflect")), "vc_reflect");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest("[dependencies]\nmemorypack = \"0\"\n");
        assert_eq!(path_string(&m.get_crate_path("vc_reflect")), "memorypack::reflect");

        let m = manifest("[dev-dependencies]\nvc_pack = \"0\"\n");
        assert_eq!(path_string(&m.get_crate_path("vc_reflect")), "vc_pack::reflect");
    }

    #[test]
    fn fallback_is_absolute() {
        let m = manifest("[package]\nname = \"x\"\n");
        let path = m.get_crate_path("vc_reflect");
        assert!(path.leading_colon.is_some());
        assert_eq!(path_string(&path), "vc_reflect");
    }
}
