//! A crate for apimachinery's derive macros.
#![deny(unsafe_code)]
#![deny(missing_docs)]
extern crate proc_macro;
#[macro_use] extern crate quote;

mod object;

/// A custom derive implementing the kind envelope protocol.
///
/// This generates an `Object` impl for a struct with named fields, and optionally
/// a `HasObjectMeta` impl, so the struct can be registered in a `Scheme`.
///
/// # Example
///
/// ```rust
/// use apimachinery::{
///     core::{GroupVersionKind, ObjectKind, ObjectMeta, TypeMeta},
///     HasObjectMeta, Object,
/// };
///
/// #[derive(Object, Default)]
/// struct Widget {
///     #[object(kind)]
///     types: TypeMeta,
///     #[object(meta)]
///     metadata: ObjectMeta,
/// }
///
/// let mut widget = Widget::default();
/// let gvk = GroupVersionKind::gvk("shop.dev", "v1", "Widget");
/// widget.object_kind_mut().set_group_version_kind(Some(gvk.clone()));
/// assert_eq!(widget.types.api_version, "shop.dev/v1");
/// assert_eq!(widget.object_kind().group_version_kind(), Some(gvk));
/// assert!(widget.meta().name.is_none());
/// ```
///
/// ## Field attributes
///
/// ### `#[object(kind)]`
/// Marks the envelope field, usually a `TypeMeta`. Its type must implement `ObjectKind`.
///
/// Without it the struct itself implements `ObjectKind` by delegating to `EmptyObjectKind`:
/// setting a kind is discarded and reading one returns `None`.
/// Use this for types that are never serialized standalone.
///
/// ### `#[object(meta)]`
/// Marks an `ObjectMeta` field and adds a `HasObjectMeta` impl returning it.
/// Leave it out for lists and option wrappers.
///
/// ## Optional `#[object]` attributes
///
/// ### `#[object(crates(apimachinery_core = "::apimachinery_core"))]`
/// Path to the core crate used in generated code. Defaults to `::apimachinery::core`,
/// which works with the facade crate.
///
/// Each marker may appear on at most one field.
#[proc_macro_derive(Object, attributes(object))]
pub fn derive_object(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    object::derive(proc_macro2::TokenStream::from(input)).into()
}
