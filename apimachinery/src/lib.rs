//! Apimachinery is an umbrella-crate for naming api objects and mapping them to Rust types.
//!
//! # Overview
//!
//! The main modules are:
//!
//! - [`core`](crate::core) with the group/version/kind identity model, the kind envelope
//!   protocol and the [`Scheme`] registry
//! - [`derive`](apimachinery_derive) with the [`Object`](macro@crate::Object) derive for envelope types
//! - [`api`](crate::api) with the legacy core group and its process-wide [`SCHEME`](crate::api::SCHEME)
//!
//! # Naming api objects
//! ```
//! use apimachinery::{GroupVersion, GroupVersionKind};
//!
//! let apps: GroupVersion = "apps/v1".parse()?;
//! assert_eq!(apps.with_kind("Deployment"), GroupVersionKind::gvk("apps", "v1", "Deployment"));
//!
//! // the core group keeps its bare version
//! let core: GroupVersion = "v1".parse()?;
//! assert_eq!(core.to_string(), "v1");
//! # Ok::<(), apimachinery::core::gvk::ParseGroupVersionError>(())
//! ```
//!
//! # Registering types
//! ```
//! use apimachinery::{
//!     core::{KnownType, ObjectMeta, SchemeBuilder, SchemeError, TypeMeta},
//!     GroupVersion, Object, Scheme,
//! };
//!
//! #[derive(Object, Default)]
//! struct Widget {
//!     #[object(kind)]
//!     types: TypeMeta,
//!     #[object(meta)]
//!     metadata: ObjectMeta,
//! }
//!
//! fn add_to_scheme(scheme: &mut Scheme) -> Result<(), SchemeError> {
//!     let gv = GroupVersion::gv("shop.dev", "v1");
//!     scheme.add_known_types(&gv, [KnownType::of::<Widget>("Widget")])
//! }
//!
//! let scheme = SchemeBuilder::new()
//!     .register(apimachinery::api::add_to_scheme)
//!     .register(add_to_scheme)
//!     .build()?;
//!
//! let mut widget = Widget::default();
//! scheme.set_object_kind(&mut widget)?;
//! assert_eq!(widget.types.api_version, "shop.dev/v1");
//! # Ok::<(), SchemeError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(feature = "api")]
#[cfg_attr(docsrs, doc(cfg(feature = "api")))]
pub mod api;

/// Re-exports from [`apimachinery-derive`](apimachinery_derive)
#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use apimachinery_derive::Object;

pub use crate::core::{
    Error, GroupVersion, GroupVersionKind, GroupVersionResource, HasObjectMeta, Object, ObjectKind,
    ObjectMetaExt, Result, Scheme,
};
/// Re-exports from [`apimachinery_core`](apimachinery_core)
#[doc(inline)]
pub use apimachinery_core as core;
