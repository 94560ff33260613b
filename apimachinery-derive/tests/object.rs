//! Integration tests for the `Object` derive macro.
use apimachinery::{
    core::{
        GroupVersion, GroupVersionKind, KnownType, ListMeta, ObjectKind, ObjectMeta, Scheme, TypeMeta,
    },
    HasObjectMeta, Object, ObjectMetaExt,
};
use assert_json_diff::assert_json_eq;
use k8s_openapi::api::core::v1::ObjectReference;
use serde::{Deserialize, Serialize};

#[derive(Object, Serialize, Deserialize, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Widget {
    #[serde(flatten)]
    #[object(kind)]
    types: TypeMeta,
    #[serde(default)]
    #[object(meta)]
    metadata: ObjectMeta,
    #[serde(default)]
    spec: WidgetSpec,
}

#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
struct WidgetSpec {
    size: u32,
}

#[derive(Object, Default)]
struct WidgetList {
    #[object(kind)]
    types: TypeMeta,
    metadata: ListMeta,
    items: Vec<Widget>,
}

// never serialized standalone, so no envelope
#[derive(Object, Default)]
struct WidgetScratch {
    counter: u32,
}

// a reference that is its own envelope
#[derive(Object, Default)]
struct WidgetRef {
    #[object(kind)]
    target: ObjectReference,
}

#[derive(Object, Default)]
#[object(crates(apimachinery_core = "::apimachinery::core"))]
struct Generic<T: Default> {
    #[object(kind)]
    types: TypeMeta,
    value: T,
}

fn shop() -> GroupVersion {
    GroupVersion::gv("shop.dev", "v1")
}

#[test]
fn envelope_field_is_the_object_kind() {
    let mut widget = Widget::default();
    assert_eq!(widget.object_kind().group_version_kind(), None);

    widget
        .object_kind_mut()
        .set_group_version_kind(Some(shop().with_kind("Widget")));
    assert_eq!(widget.types.api_version, "shop.dev/v1");
    assert_eq!(widget.types.kind, "Widget");

    widget.object_kind_mut().set_group_version_kind(None);
    assert_eq!(widget.types, TypeMeta::default());
}

#[test]
fn meta_field_gives_object_metadata() {
    let mut widget = Widget::default();
    widget.meta_mut().name = Some("blue".into());
    widget.labels_mut().insert("color".into(), "blue".into());
    assert_eq!(widget.name_any(), "blue");
    assert_eq!(widget.metadata.labels.as_ref().map(|l| l.len()), Some(1));
}

#[test]
fn types_without_envelope_ignore_kinds() {
    let mut scratch = WidgetScratch { counter: 3 };
    scratch
        .object_kind_mut()
        .set_group_version_kind(Some(shop().with_kind("WidgetScratch")));
    assert_eq!(scratch.object_kind().group_version_kind(), None);
    assert_eq!(scratch.group_version_kind(), None);
    assert_eq!(scratch.counter, 3);
}

#[test]
fn foreign_envelopes_can_be_delegated_to() {
    let mut reference = WidgetRef::default();
    reference
        .object_kind_mut()
        .set_group_version_kind(Some(GroupVersionKind::gvk("", "v1", "Pod")));
    assert_eq!(reference.target.api_version.as_deref(), Some("v1"));
    assert_eq!(reference.target.kind.as_deref(), Some("Pod"));
}

#[test]
fn generic_types_are_supported() {
    let mut generic = Generic::<String> {
        value: "x".into(),
        ..Generic::default()
    };
    generic
        .object_kind_mut()
        .set_group_version_kind(Some(shop().with_kind("Generic")));
    assert_eq!(generic.types.kind, "Generic");
    assert_eq!(generic.value, "x");
}

#[test]
fn derived_types_register_in_a_scheme() {
    let mut scheme = Scheme::new();
    scheme
        .add_known_types(&shop(), [
            KnownType::of::<Widget>("Widget"),
            KnownType::of::<WidgetList>("WidgetList"),
            KnownType::of::<WidgetScratch>("WidgetScratch"),
        ])
        .unwrap();

    let mut list = WidgetList::default();
    list.items.push(Widget::default());
    scheme.set_object_kind(&mut list).unwrap();
    for item in &mut list.items {
        scheme.set_object_kind(item).unwrap();
    }
    assert_eq!(list.types.kind, "WidgetList");
    assert_eq!(list.items[0].types.kind, "Widget");
    assert!(list.metadata.resource_version.is_none());

    let obj = scheme.new_object(&shop().with_kind("WidgetScratch")).unwrap();
    assert_eq!(obj.object_kind().group_version_kind(), None);
    assert_eq!(scheme.object_kind(&*obj).unwrap(), shop().with_kind("WidgetScratch"));
}

#[test]
fn constructed_objects_downcast_to_derived_types() {
    let mut scheme = Scheme::new();
    scheme
        .add_known_types(&shop(), [KnownType::of::<Widget>("Widget")])
        .unwrap();

    let mut obj = scheme.new_object(&shop().with_kind("Widget")).unwrap();
    scheme.set_object_kind(&mut *obj).unwrap();
    let widget = obj.downcast_mut::<Widget>().unwrap();
    widget.spec.size = 4;
    assert_eq!(widget.types.kind, "Widget");
    assert!(obj.downcast_ref::<WidgetScratch>().is_none());
    assert_eq!(obj.downcast_ref::<Widget>().map(|w| w.spec.size), Some(4));
}

#[test]
fn derived_types_serialize_with_flat_envelope() {
    let mut widget = Widget {
        spec: WidgetSpec { size: 2 },
        ..Widget::default()
    };
    widget.meta_mut().name = Some("blue".into());
    widget
        .object_kind_mut()
        .set_group_version_kind(Some(shop().with_kind("Widget")));

    let value = serde_json::to_value(&widget).unwrap();
    assert_json_eq!(
        value,
        serde_json::json!({
            "apiVersion": "shop.dev/v1",
            "kind": "Widget",
            "metadata": { "name": "blue" },
            "spec": { "size": 2 }
        })
    );
    let parsed: Widget = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, widget);
}
