//! Crate with the types and traits naming api objects and mapping them to Rust types
//!
//! This crate holds the group/version/kind identity model, the kind envelope protocol
//! and the [`Scheme`] registry. The same information is re-exported from `apimachinery`
//! under `apimachinery::core`.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod gvk;
pub use gvk::{GroupKind, GroupResource, GroupVersion, GroupVersionKind, GroupVersionResource};

pub mod metadata;
pub use metadata::{ListMeta, ObjectMeta, PartialObjectMeta, TypeMeta};

pub mod object;
pub use object::{AsAny, EmptyObjectKind, HasObjectMeta, Object, ObjectKind, ObjectMetaExt};

pub mod scheme;
pub use scheme::{AddToScheme, KnownType, Scheme, SchemeBuilder, SchemeError};

mod error;
pub use error::Error;

/// Convient alias for `Result<T, Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;
