//! # xmpkey
//!
//! Namespace-qualified keys for XMP properties.
//!
//! A key such as `Xmp.dc.title` names a property by family, namespace prefix
//! and property name. Prefixes are resolved against a [`NamespaceRegistry`],
//! either one owned by the caller or the process-wide registry used by
//! [`XmpKey::new`] and [`XmpKey::from_parts`].
//!
//! ## Example
//!
//! ```rust
//! use xmpkey::{NamespaceRegistry, XmpError, XmpKey};
//!
//! let registry = NamespaceRegistry::new();
//! registry.register_ns("http://purl.org/dc/elements/1.1/", "dc").unwrap();
//!
//! let key = XmpKey::parse_in(&registry, "Xmp.dc.title").unwrap();
//! assert_eq!(key.group_name(), "dc");
//! assert_eq!(key.tag_name(), "title");
//! assert_eq!(key.ns(), "http://purl.org/dc/elements/1.1/");
//!
//! let err = XmpKey::parse_in(&registry, "Xmp.unknown.title").unwrap_err();
//! assert!(matches!(err, XmpError::UnknownPrefix(_)));
//! ```

pub mod core;

pub use crate::core::{
    normalize_uri, ns_prefix, ns_uri, register_ns, registered_namespaces, unregister_all_ns,
    unregister_ns, Key, NamespaceEntry, NamespaceRegistry, XmpError, XmpKey, XmpResult,
};
