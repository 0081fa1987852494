//! Namespace registry for XMP keys
//!
//! This module maps namespace prefixes (the middle segment of `Xmp.dc.title`)
//! to namespace URIs. Registrations are added and removed at runtime, either on
//! an explicit [`NamespaceRegistry`] instance or on the process-wide registry
//! returned by [`NamespaceRegistry::global`].
//!
//! The registry starts empty. Seeding it with well-known schemas is left to the
//! caller.
//!
//! Re-registration overwrites: binding a prefix that is already registered
//! replaces its URI, and binding a URI that is already registered moves it to
//! the new prefix. Each URI has at most one prefix and each prefix at most one URI.

use crate::core::error::{XmpError, XmpResult};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

// Process-wide registry shared by every key constructed without an explicit registry
static GLOBAL_REGISTRY: OnceLock<NamespaceRegistry> = OnceLock::new();

/// A registered namespace: a prefix bound to a namespace URI
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamespaceEntry {
    /// The namespace prefix (e.g. `dc`)
    pub prefix: String,
    /// The namespace URI (e.g. `http://purl.org/dc/elements/1.1/`)
    pub uri: String,
}

impl NamespaceEntry {
    /// Create a new namespace entry
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }
}

/// Bidirectional prefix/URI map guarded by the registry lock
#[derive(Debug, Default)]
struct NamespaceMap {
    uri_to_prefix: HashMap<String, String>,
    prefix_to_uri: HashMap<String, String>,
}

impl NamespaceMap {
    fn register(&mut self, uri: String, prefix: &str) {
        if self.prefix_to_uri.get(prefix) == Some(&uri) {
            return;
        }

        if let Some(old_uri) = self.prefix_to_uri.remove(prefix) {
            debug!(prefix, old_uri = %old_uri, new_uri = %uri, "replacing namespace for prefix");
            self.uri_to_prefix.remove(&old_uri);
        }
        if let Some(old_prefix) = self.uri_to_prefix.remove(&uri) {
            debug!(uri = %uri, old_prefix = %old_prefix, new_prefix = prefix, "moving namespace to new prefix");
            self.prefix_to_uri.remove(&old_prefix);
        }

        debug!(prefix, uri = %uri, "registered namespace");
        self.prefix_to_uri.insert(prefix.to_string(), uri.clone());
        self.uri_to_prefix.insert(uri, prefix.to_string());
    }

    fn unregister(&mut self, uri: &str) -> bool {
        match self.uri_to_prefix.remove(uri) {
            Some(prefix) => {
                self.prefix_to_uri.remove(&prefix);
                debug!(prefix = %prefix, uri, "unregistered namespace");
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        debug!(count = self.prefix_to_uri.len(), "cleared namespace registry");
        self.uri_to_prefix.clear();
        self.prefix_to_uri.clear();
    }
}

/// Normalize a namespace URI so it ends with a separator
///
/// URIs ending in `/` or `#` are kept as-is, anything else gets a trailing `/`,
/// so `"Xmp"` is stored as `"Xmp/"`.
pub fn normalize_uri(uri: &str) -> String {
    if uri.ends_with('/') || uri.ends_with('#') {
        uri.to_string()
    } else {
        format!("{}/", uri)
    }
}

/// Registry of namespace prefixes and URIs
///
/// All methods take `&self`; lookups share a read lock and mutations take the
/// write lock, so a registry can be shared between threads (e.g. behind an `Arc`).
#[derive(Debug, Default)]
pub struct NamespaceRegistry {
    map: RwLock<NamespaceMap>,
}

impl NamespaceRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide registry
    ///
    /// The registry is created empty on first use and lives for the rest of the process.
    pub fn global() -> &'static NamespaceRegistry {
        GLOBAL_REGISTRY.get_or_init(NamespaceRegistry::new)
    }

    fn read(&self) -> XmpResult<RwLockReadGuard<'_, NamespaceMap>> {
        self.map
            .read()
            .map_err(|_| XmpError::InternalError("Namespace registry lock poisoned".to_string()))
    }

    fn write(&self) -> XmpResult<RwLockWriteGuard<'_, NamespaceMap>> {
        self.map
            .write()
            .map_err(|_| XmpError::InternalError("Namespace registry lock poisoned".to_string()))
    }

    /// Register a namespace URI with a prefix
    ///
    /// # Arguments
    ///
    /// * `uri` - The namespace URI, normalized with [`normalize_uri`]
    /// * `prefix` - The namespace prefix
    ///
    /// # Returns
    ///
    /// Returns an error if the URI or prefix is empty, or if the prefix contains `.`
    pub fn register_ns(&self, uri: &str, prefix: &str) -> XmpResult<()> {
        if uri.is_empty() {
            return Err(XmpError::BadParam("URI cannot be empty".to_string()));
        }
        if prefix.is_empty() {
            return Err(XmpError::BadParam("Prefix cannot be empty".to_string()));
        }
        if prefix.contains('.') {
            return Err(XmpError::BadParam(format!(
                "Prefix '{}' cannot contain '.'",
                prefix
            )));
        }

        let uri = normalize_uri(uri);
        self.write()?.register(uri, prefix);
        Ok(())
    }

    /// Remove the registration for a namespace URI
    ///
    /// Returns `true` if the URI was registered. Other registrations are left untouched.
    pub fn unregister_ns(&self, uri: &str) -> XmpResult<bool> {
        let uri = normalize_uri(uri);
        Ok(self.write()?.unregister(&uri))
    }

    /// Remove every registration
    pub fn unregister_all(&self) -> XmpResult<()> {
        self.write()?.clear();
        Ok(())
    }

    /// Resolve a prefix to its namespace URI
    pub fn resolve(&self, prefix: &str) -> XmpResult<String> {
        self.read()?
            .prefix_to_uri
            .get(prefix)
            .cloned()
            .ok_or_else(|| XmpError::UnknownPrefix(prefix.to_string()))
    }

    /// Get the prefix registered for a namespace URI
    pub fn prefix(&self, uri: &str) -> XmpResult<Option<String>> {
        let uri = normalize_uri(uri);
        Ok(self.read()?.uri_to_prefix.get(&uri).cloned())
    }

    /// Check if a prefix is registered
    pub fn has_prefix(&self, prefix: &str) -> XmpResult<bool> {
        Ok(self.read()?.prefix_to_uri.contains_key(prefix))
    }

    /// Get all registered namespaces, sorted by prefix
    pub fn registered_namespaces(&self) -> XmpResult<Vec<NamespaceEntry>> {
        let mut entries: Vec<NamespaceEntry> = self
            .read()?
            .prefix_to_uri
            .iter()
            .map(|(prefix, uri)| NamespaceEntry::new(prefix.clone(), uri.clone()))
            .collect();
        entries.sort_by(|a, b| a.prefix.cmp(&b.prefix));
        Ok(entries)
    }
}

/// Register a namespace URI with a prefix in the process-wide registry
///
/// See [`NamespaceRegistry::register_ns`].
pub fn register_ns(uri: &str, prefix: &str) -> XmpResult<()> {
    NamespaceRegistry::global().register_ns(uri, prefix)
}

/// Remove a namespace URI from the process-wide registry
pub fn unregister_ns(uri: &str) -> XmpResult<bool> {
    NamespaceRegistry::global().unregister_ns(uri)
}

/// Remove every registration from the process-wide registry
pub fn unregister_all_ns() -> XmpResult<()> {
    NamespaceRegistry::global().unregister_all()
}

/// Get the URI for a namespace prefix from the process-wide registry
pub fn ns_uri(prefix: &str) -> XmpResult<String> {
    NamespaceRegistry::global().resolve(prefix)
}

/// Get the prefix for a namespace URI from the process-wide registry
pub fn ns_prefix(uri: &str) -> XmpResult<Option<String>> {
    NamespaceRegistry::global().prefix(uri)
}

/// Get all namespaces registered in the process-wide registry
pub fn registered_namespaces() -> XmpResult<Vec<NamespaceEntry>> {
    NamespaceRegistry::global().registered_namespaces()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uri() {
        assert_eq!(normalize_uri("Xmp"), "Xmp/");
        assert_eq!(
            normalize_uri("http://purl.org/dc/elements/1.1/"),
            "http://purl.org/dc/elements/1.1/"
        );
        assert_eq!(
            normalize_uri("http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#"
        );
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = NamespaceRegistry::new();
        assert!(registry.registered_namespaces().unwrap().is_empty());
        assert!(!registry.has_prefix("dc").unwrap());
    }

    #[test]
    fn test_register_and_resolve() {
        let registry = NamespaceRegistry::new();
        registry.register_ns("Xmp", "prefix").unwrap();
        assert_eq!(registry.resolve("prefix").unwrap(), "Xmp/");
        assert_eq!(registry.prefix("Xmp/").unwrap(), Some("prefix".to_string()));
        assert_eq!(registry.prefix("Xmp").unwrap(), Some("prefix".to_string()));
    }

    #[test]
    fn test_resolve_unknown_prefix() {
        let registry = NamespaceRegistry::new();
        assert_eq!(
            registry.resolve("noregistered"),
            Err(XmpError::UnknownPrefix("noregistered".to_string()))
        );
    }

    #[test]
    fn test_register_rejects_bad_params() {
        let registry = NamespaceRegistry::new();
        assert!(matches!(registry.register_ns("", "ex"), Err(XmpError::BadParam(_))));
        assert!(matches!(
            registry.register_ns("http://example.com/ns/", ""),
            Err(XmpError::BadParam(_))
        ));
        assert!(matches!(
            registry.register_ns("http://example.com/ns/", "ex.bad"),
            Err(XmpError::BadParam(_))
        ));
        assert!(registry.registered_namespaces().unwrap().is_empty());
    }

    #[test]
    fn test_register_is_idempotent() {
        let registry = NamespaceRegistry::new();
        registry.register_ns("http://example.com/ns/", "ex").unwrap();
        registry.register_ns("http://example.com/ns/", "ex").unwrap();
        assert_eq!(
            registry.registered_namespaces().unwrap(),
            vec![NamespaceEntry::new("ex", "http://example.com/ns/")]
        );
    }

    #[test]
    fn test_reregister_prefix_overwrites() {
        let registry = NamespaceRegistry::new();
        registry.register_ns("http://example.com/ns1/", "ex").unwrap();
        registry.register_ns("http://example.com/ns2/", "ex").unwrap();
        assert_eq!(registry.resolve("ex").unwrap(), "http://example.com/ns2/");
        assert_eq!(registry.prefix("http://example.com/ns1/").unwrap(), None);
    }

    #[test]
    fn test_reregister_uri_moves_prefix() {
        let registry = NamespaceRegistry::new();
        registry.register_ns("http://example.com/ns/", "old").unwrap();
        registry.register_ns("http://example.com/ns/", "new").unwrap();
        assert!(!registry.has_prefix("old").unwrap());
        assert_eq!(registry.resolve("new").unwrap(), "http://example.com/ns/");
    }

    #[test]
    fn test_unregister_leaves_other_entries() {
        let registry = NamespaceRegistry::new();
        registry.register_ns("http://example.com/a/", "a").unwrap();
        registry.register_ns("http://example.com/b/", "b").unwrap();

        assert!(registry.unregister_ns("http://example.com/a/").unwrap());
        assert!(!registry.unregister_ns("http://example.com/a/").unwrap());
        assert!(!registry.has_prefix("a").unwrap());
        assert_eq!(registry.resolve("b").unwrap(), "http://example.com/b/");
    }

    #[test]
    fn test_unregister_all() {
        let registry = NamespaceRegistry::new();
        registry.register_ns("Xmp", "prefix").unwrap();
        registry.register_ns("http://example.com/b/", "b").unwrap();
        registry.unregister_all().unwrap();
        assert!(registry.registered_namespaces().unwrap().is_empty());
        assert!(matches!(registry.resolve("prefix"), Err(XmpError::UnknownPrefix(_))));
    }

    #[test]
    fn test_registered_namespaces_sorted() {
        let registry = NamespaceRegistry::new();
        registry.register_ns("http://example.com/z/", "z").unwrap();
        registry.register_ns("http://example.com/a/", "a").unwrap();
        let prefixes: Vec<String> = registry
            .registered_namespaces()
            .unwrap()
            .into_iter()
            .map(|e| e.prefix)
            .collect();
        assert_eq!(prefixes, vec!["a".to_string(), "z".to_string()]);
    }
}
