//! A registry mapping api identities to the Rust types that represent them.
//!
//! A [`Scheme`] has two phases. It is populated through `&mut Scheme`, usually once at startup
//! via a [`SchemeBuilder`], and is then shared read-only (`&Scheme`, `Arc<Scheme>` or a static).
//! Nothing is ever removed from a scheme, and no lookup takes a lock.
use crate::{
    gvk::{GroupVersion, GroupVersionKind},
    metadata::TypeMeta,
    object::Object,
};
use std::{
    any::{type_name, TypeId},
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
};
use thiserror::Error;

/// Failures when populating or querying a [`Scheme`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// Two different types claimed the same group, version and kind
    #[error("double registration of different types for {gvk}: old={existing}, new={new}")]
    DuplicateKind {
        /// The contested identity
        gvk: GroupVersionKind,
        /// Type registered first
        existing: &'static str,
        /// Type that tried to take over
        new: &'static str,
    },

    /// A type was registered without a kind name
    #[error("kind is required to register {type_name} in group version {group_version:?}")]
    MissingKind {
        /// The group version the registration targeted
        group_version: String,
        /// The type being registered
        type_name: &'static str,
    },

    /// The type has no registered identity
    #[error("no kind is registered for the type {type_name}")]
    NotRegistered {
        /// The type that was looked up
        type_name: &'static str,
    },

    /// No type is registered for the identity
    #[error("no type is registered for {0}")]
    UnknownKind(GroupVersionKind),
}

#[derive(Clone, Copy)]
struct TypeEntry {
    type_id: TypeId,
    type_name: &'static str,
    construct: fn() -> Box<dyn Object>,
}

impl TypeEntry {
    fn of<T: Object + Default + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            construct: construct::<T>,
        }
    }
}

impl fmt::Debug for TypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

fn construct<T: Object + Default + 'static>() -> Box<dyn Object> {
    Box::new(T::default())
}

/// A type paired with the kind name it is registered under
///
/// ```
/// use apimachinery_core::{KnownType, PartialObjectMeta};
/// let known = KnownType::of::<PartialObjectMeta>("PartialObjectMetadata");
/// assert_eq!(known.kind(), "PartialObjectMetadata");
/// ```
#[derive(Clone, Debug)]
pub struct KnownType {
    kind: String,
    entry: TypeEntry,
}

impl KnownType {
    /// Register `T` under `kind`
    ///
    /// The kind is given explicitly rather than derived from the Rust type name.
    pub fn of<T: Object + Default + 'static>(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            entry: TypeEntry::of::<T>(),
        }
    }

    /// The kind name
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The Rust type name, for diagnostics
    pub fn type_name(&self) -> &'static str {
        self.entry.type_name
    }
}

/// Registry between [`GroupVersionKind`]s and concrete [`Object`] types
///
/// A type may be registered under several identities; the first registration is its
/// preferred identity. An identity maps to exactly one type.
#[derive(Clone, Debug, Default)]
pub struct Scheme {
    gvk_to_type: HashMap<GroupVersionKind, TypeEntry>,
    type_to_gvk: HashMap<TypeId, Vec<GroupVersionKind>>,
}

impl Scheme {
    /// An empty scheme
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every type in `types` under `gv` with its kind name
    ///
    /// Stops at the first conflicting registration.
    pub fn add_known_types<I>(&mut self, gv: &GroupVersion, types: I) -> Result<(), SchemeError>
    where
        I: IntoIterator<Item = KnownType>,
    {
        for known in types {
            self.register(gv.with_kind(&known.kind), known.entry)?;
        }
        Ok(())
    }

    /// Register `T` under an explicit identity
    pub fn add_known_type_with_name<T: Object + Default + 'static>(
        &mut self,
        gvk: GroupVersionKind,
    ) -> Result<(), SchemeError> {
        self.register(gvk, TypeEntry::of::<T>())
    }

    fn register(&mut self, gvk: GroupVersionKind, entry: TypeEntry) -> Result<(), SchemeError> {
        if gvk.kind.is_empty() {
            return Err(SchemeError::MissingKind {
                group_version: gvk.group_version().to_string(),
                type_name: entry.type_name,
            });
        }
        if let Some(existing) = self.gvk_to_type.get(&gvk) {
            if existing.type_id == entry.type_id {
                tracing::trace!(%gvk, type_name = entry.type_name, "type already registered");
                return Ok(());
            }
            tracing::warn!(%gvk, existing = existing.type_name, new = entry.type_name, "conflicting registration");
            return Err(SchemeError::DuplicateKind {
                existing: existing.type_name,
                new: entry.type_name,
                gvk,
            });
        }
        tracing::debug!(%gvk, type_name = entry.type_name, "registered type");
        self.type_to_gvk.entry(entry.type_id).or_default().push(gvk.clone());
        self.gvk_to_type.insert(gvk, entry);
        Ok(())
    }

    /// All identities `T` is registered under, preferred identity first
    pub fn object_kinds<T: 'static>(&self) -> Result<&[GroupVersionKind], SchemeError> {
        self.type_to_gvk
            .get(&TypeId::of::<T>())
            .map(Vec::as_slice)
            .ok_or(SchemeError::NotRegistered {
                type_name: type_name::<T>(),
            })
    }

    /// All identities the concrete type of `obj` is registered under, preferred identity first
    ///
    /// Works on type-erased objects, such as the ones returned by [`Scheme::new_object`].
    pub fn object_kinds_of(&self, obj: &dyn Object) -> Result<&[GroupVersionKind], SchemeError> {
        self.type_to_gvk
            .get(&obj.as_any().type_id())
            .map(Vec::as_slice)
            .ok_or(SchemeError::NotRegistered {
                type_name: obj.type_name(),
            })
    }

    /// The preferred identity of the concrete type of `obj`
    ///
    /// This looks at the registration of the type, not at the envelope of the instance.
    pub fn object_kind(&self, obj: &dyn Object) -> Result<GroupVersionKind, SchemeError> {
        self.object_kinds_of(obj)?
            .first()
            .cloned()
            .ok_or(SchemeError::NotRegistered {
                type_name: obj.type_name(),
            })
    }

    /// Whether a type is registered for `gvk`
    pub fn recognizes(&self, gvk: &GroupVersionKind) -> bool {
        self.gvk_to_type.contains_key(gvk)
    }

    /// Whether `T` is registered under any identity
    pub fn is_registered<T: 'static>(&self) -> bool {
        self.type_to_gvk.contains_key(&TypeId::of::<T>())
    }

    /// Construct a default instance of the type registered for `gvk`
    ///
    /// The envelope of the new instance is left as its `Default` impl makes it;
    /// use [`Scheme::set_object_kind`] to stamp it, and `downcast_ref` to reach the concrete type.
    pub fn new_object(&self, gvk: &GroupVersionKind) -> Result<Box<dyn Object>, SchemeError> {
        self.gvk_to_type
            .get(gvk)
            .map(|entry| (entry.construct)())
            .ok_or_else(|| SchemeError::UnknownKind(gvk.clone()))
    }

    /// Construct a default instance for the envelope of a decoded document
    ///
    /// Unlike [`GroupVersionKind::from_api_version_and_kind`], a malformed `apiVersion`
    /// is an error here.
    pub fn new_object_from_type_meta(&self, types: &TypeMeta) -> crate::Result<Box<dyn Object>> {
        let gv: GroupVersion = types.api_version.parse()?;
        let mut obj = self.new_object(&gv.with_kind(&types.kind))?;
        obj.object_kind_mut()
            .set_group_version_kind(Some(gv.with_kind(&types.kind)));
        Ok(obj)
    }

    /// Write the preferred identity of the concrete type of `obj` into its envelope
    pub fn set_object_kind(&self, obj: &mut dyn Object) -> Result<GroupVersionKind, SchemeError> {
        let gvk = self.object_kind(&*obj)?;
        obj.object_kind_mut().set_group_version_kind(Some(gvk.clone()));
        Ok(gvk)
    }

    /// Kind names registered in `gv`, mapped to their Rust type names
    pub fn known_types(&self, gv: &GroupVersion) -> BTreeMap<&str, &'static str> {
        self.gvk_to_type
            .iter()
            .filter(|(gvk, _)| gvk.group == gv.group && gvk.version == gv.version)
            .map(|(gvk, entry)| (gvk.kind.as_str(), entry.type_name))
            .collect()
    }

    /// Every registered identity, mapped to its Rust type name
    pub fn all_known_types(&self) -> BTreeMap<&GroupVersionKind, &'static str> {
        self.gvk_to_type
            .iter()
            .map(|(gvk, entry)| (gvk, entry.type_name))
            .collect()
    }

    /// Every group version with at least one registered kind, sorted
    pub fn group_versions(&self) -> Vec<GroupVersion> {
        self.gvk_to_type
            .keys()
            .map(GroupVersionKind::group_version)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// A registration function that can be collected into a [`SchemeBuilder`]
pub type AddToScheme = fn(&mut Scheme) -> Result<(), SchemeError>;

/// Collects registration functions from several api groups and applies them in order
///
/// ```
/// use apimachinery_core::{GroupVersion, KnownType, PartialObjectMeta, Scheme, SchemeBuilder, SchemeError};
///
/// fn add_to_scheme(scheme: &mut Scheme) -> Result<(), SchemeError> {
///     let gv = GroupVersion::gv("meta.k8s.io", "v1");
///     scheme.add_known_types(&gv, [KnownType::of::<PartialObjectMeta>("PartialObjectMetadata")])
/// }
///
/// let scheme = SchemeBuilder::new().register(add_to_scheme).build().unwrap();
/// assert!(scheme.is_registered::<PartialObjectMeta>());
/// ```
#[derive(Clone, Default)]
pub struct SchemeBuilder {
    fns: Vec<AddToScheme>,
}

impl SchemeBuilder {
    /// An empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a registration function
    #[must_use]
    pub fn register(mut self, add: AddToScheme) -> Self {
        self.fns.push(add);
        self
    }

    /// Run every registration function against `scheme`, stopping at the first error
    pub fn add_to_scheme(&self, scheme: &mut Scheme) -> Result<(), SchemeError> {
        for add in &self.fns {
            add(scheme)?;
        }
        Ok(())
    }

    /// Populate a fresh scheme
    pub fn build(&self) -> Result<Scheme, SchemeError> {
        let mut scheme = Scheme::new();
        self.add_to_scheme(&mut scheme)?;
        Ok(scheme)
    }
}

impl fmt::Debug for SchemeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeBuilder").field("fns", &self.fns.len()).finish()
    }
}
