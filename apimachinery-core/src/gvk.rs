//! Type information structs naming api groups, versions, kinds and resources.
use std::{fmt, str::FromStr};

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unexpected GroupVersion string: {0}")]
/// Failed to parse group version.
pub struct ParseGroupVersionError(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("illegal GroupVersion {0}: contains more than one /")]
/// A group version whose string form would not parse back into the same value.
pub struct FormatGroupVersionError(pub String);

/// Core information about a family of API Resources
///
/// Serializes as a single string scalar (`"apps/v1"`, `"v1"` or `""`),
/// never as a struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersion {
    /// API group
    pub group: String,
    /// Version
    pub version: String,
}

impl GroupVersion {
    /// Construct from explicit group and version
    pub fn gv(group_: &str, version_: &str) -> Self {
        let version = version_.to_string();
        let group = group_.to_string();
        Self { group, version }
    }

    /// Parse a group version literal that is known to be valid
    ///
    /// ```
    /// use apimachinery_core::GroupVersion;
    /// let apps = GroupVersion::from_static("apps/v1");
    /// assert_eq!(apps.group, "apps");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `gv` is not a valid group version. Only use this for hardcoded values;
    /// parse anything else with [`str::parse`].
    #[track_caller]
    pub fn from_static(gv: &'static str) -> Self {
        match gv.parse() {
            Ok(gv) => gv,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns true if both group and version are empty
    ///
    /// The empty value marks an internal (unversioned) group version, which is
    /// not the same thing as a group version whose string form happens to be empty.
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.version.is_empty()
    }

    /// Generate the apiVersion string used in a kind's yaml
    pub fn api_version(&self) -> String {
        self.to_string()
    }

    /// Generate the apiVersion string, refusing values that would not parse back
    ///
    /// A group containing a `/` produces a string with more than one separator.
    pub fn checked_api_version(&self) -> Result<String, FormatGroupVersionError> {
        let gv = self.to_string();
        if gv.matches('/').count() > 1 {
            return Err(FormatGroupVersionError(gv));
        }
        Ok(gv)
    }

    /// Attach a kind to this group version
    ///
    /// The kind is not validated; an empty kind yields a partially filled identity.
    pub fn with_kind(&self, kind: &str) -> GroupVersionKind {
        GroupVersionKind::gvk(&self.group, &self.version, kind)
    }

    /// Attach a plural resource name to this group version
    pub fn with_resource(&self, resource: &str) -> GroupVersionResource {
        GroupVersionResource::gvr(&self.group, &self.version, resource)
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        // the core group keeps its bare "v1" form
        if self.group.is_empty() && self.version == "v1" {
            return f.write_str(&self.version);
        }
        write!(f, "{}/{}", self.group, self.version)
    }
}

impl FromStr for GroupVersion {
    type Err = ParseGroupVersionError;

    fn from_str(gv: &str) -> Result<Self, Self::Err> {
        // both denote the internal version of the legacy core types
        if gv.is_empty() || gv == "/" {
            return Ok(Self::default());
        }
        match *gv.split('/').collect::<Vec<_>>().as_slice() {
            ["v1"] => Ok(Self::gv("", "v1")), // core v1 case
            [group, version] => Ok(Self::gv(group, version)),
            _ => Err(ParseGroupVersionError(gv.into())),
        }
    }
}

impl Serialize for GroupVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let gv = self.checked_api_version().map_err(ser::Error::custom)?;
        serializer.serialize_str(&gv)
    }
}

impl<'de> Deserialize<'de> for GroupVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let gv = String::deserialize(deserializer)?;
        gv.parse().map_err(de::Error::custom)
    }
}

/// A group and a kind, without a version
///
/// Useful for lookups where a version would only be partially valid.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKind {
    /// API group
    pub group: String,
    /// Kind
    pub kind: String,
}

impl GroupKind {
    /// Construct from explicit group and kind
    pub fn gk(group: &str, kind: &str) -> Self {
        Self {
            group: group.to_string(),
            kind: kind.to_string(),
        }
    }

    /// Attach a version
    pub fn with_version(&self, version: &str) -> GroupVersionKind {
        GroupVersionKind::gvk(&self.group, version, &self.kind)
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Kind={}", self.group, self.kind)
    }
}

/// Core information about an API Resource.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersionKind {
    /// API group
    pub group: String,
    /// Version
    pub version: String,
    /// Kind
    pub kind: String,
}

impl GroupVersionKind {
    /// Construct from explicit group, version, and kind
    pub fn gvk(group_: &str, version_: &str, kind_: &str) -> Self {
        let version = version_.to_string();
        let group = group_.to_string();
        let kind = kind_.to_string();

        Self { group, version, kind }
    }

    /// Returns true if group, version and kind are all empty
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.version.is_empty() && self.kind.is_empty()
    }

    /// Drop the version
    pub fn group_kind(&self) -> GroupKind {
        GroupKind::gk(&self.group, &self.kind)
    }

    /// Drop the kind
    pub fn group_version(&self) -> GroupVersion {
        GroupVersion::gv(&self.group, &self.version)
    }

    /// Generate the apiVersion string used in a kind's yaml
    pub fn api_version(&self) -> String {
        self.group_version().api_version()
    }

    /// Split into the flat `(apiVersion, kind)` pair stored by envelopes like [`TypeMeta`](crate::TypeMeta)
    pub fn to_api_version_and_kind(&self) -> (String, String) {
        (self.api_version(), self.kind.clone())
    }

    /// Rebuild an identity from a flat `(apiVersion, kind)` pair
    ///
    /// An unparseable `api_version` is not an error: the result then only carries the kind,
    /// with group and version left empty. Older serializations rely on this leniency.
    ///
    /// ```
    /// use apimachinery_core::GroupVersionKind;
    /// let gvk = GroupVersionKind::from_api_version_and_kind("a/b/c", "Foo");
    /// assert_eq!(gvk, GroupVersionKind::gvk("", "", "Foo"));
    /// ```
    pub fn from_api_version_and_kind(api_version: &str, kind: &str) -> Self {
        match api_version.parse::<GroupVersion>() {
            Ok(gv) => gv.with_kind(kind),
            Err(_) => Self::gvk("", "", kind),
        }
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
    }
}

/// A group and a resource, without a version
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupResource {
    /// API group
    pub group: String,
    /// Resource
    pub resource: String,
}

impl GroupResource {
    /// Construct from explicit group and plural resource name
    pub fn gr(group: &str, resource: &str) -> Self {
        Self {
            group: group.to_string(),
            resource: resource.to_string(),
        }
    }

    /// Attach a version
    pub fn with_version(&self, version: &str) -> GroupVersionResource {
        GroupVersionResource::gvr(&self.group, version, &self.resource)
    }
}

impl fmt::Display for GroupResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Resource={}", self.group, self.resource)
    }
}

/// Represents a type-erased object resource.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersionResource {
    /// API group
    pub group: String,
    /// Version
    pub version: String,
    /// Resource
    pub resource: String,
}

impl GroupVersionResource {
    /// Set the api group, version, and the plural resource name.
    pub fn gvr(group_: &str, version_: &str, resource_: &str) -> Self {
        let version = version_.to_string();
        let group = group_.to_string();
        let resource = resource_.to_string();

        Self {
            group,
            version,
            resource,
        }
    }

    /// Drop the version
    pub fn group_resource(&self) -> GroupResource {
        GroupResource::gr(&self.group, &self.resource)
    }

    /// Drop the resource
    pub fn group_version(&self) -> GroupVersion {
        GroupVersion::gv(&self.group, &self.version)
    }

    /// Generate the apiVersion string for this resource's group version
    pub fn api_version(&self) -> String {
        self.group_version().api_version()
    }
}

impl fmt::Display for GroupVersionResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, Resource={}", self.group, self.version, self.resource)
    }
}
