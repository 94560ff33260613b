//! The kind envelope protocol shared by every registrable object.
use crate::{gvk::GroupVersionKind, metadata::ObjectMeta};
use k8s_openapi::api::core::v1::ObjectReference;
use std::{any::Any, collections::BTreeMap};

/// Access to the identity an object instance declares for itself
///
/// Every object serialized through a [`Scheme`](crate::Scheme) carries its type information.
/// Serializers use this to stamp the registered identity onto an instance before encoding it.
/// For objects that cannot be serialized standalone this may be a no-op, see [`EmptyObjectKind`].
///
/// Mutating the envelope of one instance from several threads needs external synchronization,
/// like any other field of that instance.
pub trait ObjectKind {
    /// Sets or clears the intended serialized kind of an object
    ///
    /// Passing `None` clears the current setting.
    fn set_group_version_kind(&mut self, gvk: Option<GroupVersionKind>);

    /// Returns the stored identity, or `None` if the object does not expose or provide one
    fn group_version_kind(&self) -> Option<GroupVersionKind>;
}

/// An [`ObjectKind`] that never tracks anything
///
/// Setting a kind is discarded and reading it always returns `None`.
/// Types without an envelope field implement [`ObjectKind`] by delegating here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EmptyObjectKind;

impl ObjectKind for EmptyObjectKind {
    fn set_group_version_kind(&mut self, _gvk: Option<GroupVersionKind>) {}

    fn group_version_kind(&self) -> Option<GroupVersionKind> {
        None
    }
}

/// Runtime type access for [`Object`] trait objects
///
/// Implemented for every `'static` type, so it never needs a manual impl.
pub trait AsAny: Any {
    /// The instance as [`Any`]
    fn as_any(&self) -> &dyn Any;
    /// The instance as mutable [`Any`]
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// The name of the concrete type, for diagnostics
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// An object that can be registered in a [`Scheme`](crate::Scheme)
///
/// Types embedding an envelope such as [`TypeMeta`](crate::TypeMeta) hand out that field.
/// Types that carry their own identity (like [`ObjectReference`]) hand out themselves.
///
/// This is normally implemented through `#[derive(Object)]`.
pub trait Object: AsAny {
    /// The kind envelope of this instance
    fn object_kind(&self) -> &dyn ObjectKind;

    /// Mutable access to the kind envelope of this instance
    fn object_kind_mut(&mut self) -> &mut dyn ObjectKind;
}

impl dyn Object {
    /// Whether the concrete type of this object is `T`
    pub fn is<T: Object>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// The object as its concrete type, if that is `T`
    ///
    /// ```
    /// use apimachinery_core::{Object, PartialObjectMeta};
    /// let obj: Box<dyn Object> = Box::new(PartialObjectMeta::default());
    /// assert!(obj.downcast_ref::<PartialObjectMeta>().is_some());
    /// ```
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// The object as its mutable concrete type, if that is `T`
    pub fn downcast_mut<T: Object>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

/// An [`Object`] with persistent identity metadata
///
/// Lists and option wrappers only carry a kind envelope and do not implement this.
pub trait HasObjectMeta: Object {
    /// Metadata that all persisted objects must have
    fn meta(&self) -> &ObjectMeta;
    /// Metadata that all persisted objects must have
    fn meta_mut(&mut self) -> &mut ObjectMeta;
}

static EMPTY_MAP: BTreeMap<String, String> = BTreeMap::new();

/// Helper methods for objects with metadata.
pub trait ObjectMetaExt: HasObjectMeta {
    /// Returns the most useful name identifier available
    ///
    /// This tries `name`, then `generateName`, and falls back on an empty string when neither is set.
    fn name_any(&self) -> String;
    /// The namespace the object is in
    fn namespace(&self) -> Option<String>;
    /// The resource version
    fn resource_version(&self) -> Option<String>;
    /// Unique ID
    fn uid(&self) -> Option<String>;
    /// Returns object labels
    fn labels(&self) -> &BTreeMap<String, String>;
    /// Provides mutable access to the labels
    fn labels_mut(&mut self) -> &mut BTreeMap<String, String>;
    /// Returns object annotations
    fn annotations(&self) -> &BTreeMap<String, String>;
    /// Provides mutable access to the annotations
    fn annotations_mut(&mut self) -> &mut BTreeMap<String, String>;
}

impl<K: HasObjectMeta + ?Sized> ObjectMetaExt for K {
    fn name_any(&self) -> String {
        self.meta()
            .name
            .clone()
            .or_else(|| self.meta().generate_name.clone())
            .unwrap_or_default()
    }

    fn namespace(&self) -> Option<String> {
        self.meta().namespace.clone()
    }

    fn resource_version(&self) -> Option<String> {
        self.meta().resource_version.clone()
    }

    fn uid(&self) -> Option<String> {
        self.meta().uid.clone()
    }

    fn labels(&self) -> &BTreeMap<String, String> {
        self.meta().labels.as_ref().unwrap_or(&EMPTY_MAP)
    }

    fn labels_mut(&mut self) -> &mut BTreeMap<String, String> {
        self.meta_mut().labels.get_or_insert_with(BTreeMap::new)
    }

    fn annotations(&self) -> &BTreeMap<String, String> {
        self.meta().annotations.as_ref().unwrap_or(&EMPTY_MAP)
    }

    fn annotations_mut(&mut self) -> &mut BTreeMap<String, String> {
        self.meta_mut().annotations.get_or_insert_with(BTreeMap::new)
    }
}

// A reference is its own envelope: its apiVersion and kind fields name the referent.
impl ObjectKind for ObjectReference {
    fn set_group_version_kind(&mut self, gvk: Option<GroupVersionKind>) {
        let (api_version, kind) = gvk.map(|gvk| gvk.to_api_version_and_kind()).unwrap_or_default();
        self.api_version = Some(api_version).filter(|s| !s.is_empty());
        self.kind = Some(kind).filter(|s| !s.is_empty());
    }

    fn group_version_kind(&self) -> Option<GroupVersionKind> {
        let api_version = self.api_version.as_deref().unwrap_or_default();
        let kind = self.kind.as_deref().unwrap_or_default();
        if api_version.is_empty() && kind.is_empty() {
            return None;
        }
        Some(GroupVersionKind::from_api_version_and_kind(api_version, kind))
    }
}

impl Object for ObjectReference {
    fn object_kind(&self) -> &dyn ObjectKind {
        self
    }

    fn object_kind_mut(&mut self) -> &mut dyn ObjectKind {
        self
    }
}
