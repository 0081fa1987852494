//! XMP key core module
//!
//! This module contains the namespace registry and the key parser built on it.

pub mod error;
pub mod key;
pub mod namespace;

pub use error::{XmpError, XmpResult};
pub use key::{Key, XmpKey};
pub use namespace::{
    normalize_uri, ns_prefix, ns_uri, register_ns, registered_namespaces, unregister_all_ns,
    unregister_ns, NamespaceEntry, NamespaceRegistry,
};
