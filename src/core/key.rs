//! XMP property keys
//!
//! An XMP key addresses a single property as `Xmp.<prefix>.<property>`, for
//! example `Xmp.dc.title`. The prefix must be registered in a
//! [`NamespaceRegistry`] when the key is built; the resolved namespace URI is
//! stored in the key, so later registry changes do not affect existing keys.

use crate::core::error::{XmpError, XmpResult};
use crate::core::namespace::NamespaceRegistry;
use std::fmt;
use std::str::FromStr;

/// Common interface of metadata keys
///
/// The trait is object safe so keys can be handled through `Box<dyn Key>`;
/// [`Key::clone_box`] gives such handles a detached copy.
pub trait Key: fmt::Debug + Send + Sync {
    /// Canonical key string (`family.group.tag`)
    fn key(&self) -> &str;
    /// Leading family segment
    fn family_name(&self) -> &str;
    /// Group segment
    fn group_name(&self) -> &str;
    /// Tag segment
    fn tag_name(&self) -> &str;
    /// Human-readable label of the tag
    fn tag_label(&self) -> &str;
    /// Description of the tag
    fn tag_desc(&self) -> &str;
    /// Numeric tag identifier
    fn tag(&self) -> u16;
    /// Namespace URI of the group
    fn ns(&self) -> &str;
    /// Return an independently owned copy of this key
    fn clone_box(&self) -> Box<dyn Key>;
}

impl Clone for Box<dyn Key> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Key for an XMP property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XmpKey {
    /// Namespace prefix
    prefix: String,
    /// Property name
    property: String,
    /// Namespace URI resolved when the key was built
    ns: String,
    /// Canonical `Xmp.prefix.property` form
    key: String,
}

impl XmpKey {
    /// Family name shared by every XMP key
    pub const FAMILY: &'static str = "Xmp";

    /// Parse a key string against the process-wide registry
    ///
    /// # Errors
    ///
    /// * [`XmpError::MalformedKey`] - the string is not `Xmp.<prefix>.<property>`
    /// * [`XmpError::UnknownPrefix`] - the prefix is not registered
    ///
    /// # Example
    ///
    /// ```rust
    /// use xmpkey::{register_ns, XmpKey};
    ///
    /// register_ns("http://purl.org/dc/elements/1.1/", "dc").unwrap();
    /// let key = XmpKey::new("Xmp.dc.title").unwrap();
    /// assert_eq!(key.ns(), "http://purl.org/dc/elements/1.1/");
    /// ```
    pub fn new(key: &str) -> XmpResult<Self> {
        Self::parse_in(NamespaceRegistry::global(), key)
    }

    /// Build a key from a prefix and property against the process-wide registry
    pub fn from_parts(prefix: &str, property: &str) -> XmpResult<Self> {
        Self::from_parts_in(NamespaceRegistry::global(), prefix, property)
    }

    /// Parse a key string against the given registry
    pub fn parse_in(registry: &NamespaceRegistry, key: &str) -> XmpResult<Self> {
        let segments: Vec<&str> = key.split('.').collect();
        let (family, prefix, property) = match segments.as_slice() {
            [family, prefix, property]
                if !family.is_empty() && !prefix.is_empty() && !property.is_empty() =>
            {
                (*family, *prefix, *property)
            }
            _ => {
                return Err(XmpError::MalformedKey(format!(
                    "'{}' is not of the form family.prefix.property",
                    key
                )))
            }
        };

        if family != Self::FAMILY {
            return Err(XmpError::MalformedKey(format!(
                "'{}' has family '{}', expected '{}'",
                key,
                family,
                Self::FAMILY
            )));
        }

        Self::build(registry, prefix, property)
    }

    /// Build a key from a prefix and property against the given registry
    pub fn from_parts_in(
        registry: &NamespaceRegistry,
        prefix: &str,
        property: &str,
    ) -> XmpResult<Self> {
        if property.is_empty() {
            return Err(XmpError::MalformedKey(
                "Property name cannot be empty".to_string(),
            ));
        }
        if property.contains('.') {
            return Err(XmpError::MalformedKey(format!(
                "Property name '{}' cannot contain '.'",
                property
            )));
        }

        Self::build(registry, prefix, property)
    }

    fn build(registry: &NamespaceRegistry, prefix: &str, property: &str) -> XmpResult<Self> {
        let ns = registry.resolve(prefix)?;
        Ok(Self {
            prefix: prefix.to_string(),
            property: property.to_string(),
            ns,
            key: format!("{}.{}.{}", Self::FAMILY, prefix, property),
        })
    }

    /// Canonical key string
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Family name, always `Xmp`
    pub fn family_name(&self) -> &str {
        Self::FAMILY
    }

    /// Namespace prefix
    pub fn group_name(&self) -> &str {
        &self.prefix
    }

    /// Property name
    pub fn tag_name(&self) -> &str {
        &self.property
    }

    /// Property label
    ///
    /// Without a schema dictionary the label is the property name.
    pub fn tag_label(&self) -> &str {
        &self.property
    }

    /// Property description, empty without a schema dictionary
    pub fn tag_desc(&self) -> &str {
        ""
    }

    /// Numeric tag, always 0 for XMP properties
    pub fn tag(&self) -> u16 {
        0
    }

    /// Namespace URI of the prefix, as resolved when the key was built
    pub fn ns(&self) -> &str {
        &self.ns
    }
}

impl Key for XmpKey {
    fn key(&self) -> &str {
        XmpKey::key(self)
    }

    fn family_name(&self) -> &str {
        XmpKey::family_name(self)
    }

    fn group_name(&self) -> &str {
        XmpKey::group_name(self)
    }

    fn tag_name(&self) -> &str {
        XmpKey::tag_name(self)
    }

    fn tag_label(&self) -> &str {
        XmpKey::tag_label(self)
    }

    fn tag_desc(&self) -> &str {
        XmpKey::tag_desc(self)
    }

    fn tag(&self) -> u16 {
        XmpKey::tag(self)
    }

    fn ns(&self) -> &str {
        XmpKey::ns(self)
    }

    fn clone_box(&self) -> Box<dyn Key> {
        Box::new(self.clone())
    }
}

impl fmt::Display for XmpKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl FromStr for XmpKey {
    type Err = XmpError;

    fn from_str(s: &str) -> XmpResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for XmpKey {
    type Error = XmpError;

    fn try_from(s: &str) -> XmpResult<Self> {
        Self::new(s)
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Serialize for XmpKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.key)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::de::Deserialize<'de> for XmpKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        XmpKey::new(&s).map_err(serde::de::Error::custom)
    }
}
