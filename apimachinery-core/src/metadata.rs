//! Metadata structs used in envelopes, lists, and partially typed objects.
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta};
use serde::{Deserialize, Serialize};

use crate::{
    gvk::GroupVersionKind,
    object::{HasObjectMeta, Object, ObjectKind},
};

/// Type information that is flattened into every serializable object
///
/// This is the flat `apiVersion` + `kind` form of a [`GroupVersionKind`].
/// Empty fields are left out when serializing.
#[derive(Deserialize, Serialize, Clone, Default, Debug, Eq, PartialEq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    /// The version of the API
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    /// The name of the API
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

impl TypeMeta {
    /// Build the envelope for an identity
    pub fn from_gvk(gvk: &GroupVersionKind) -> Self {
        let (api_version, kind) = gvk.to_api_version_and_kind();
        Self { api_version, kind }
    }
}

impl ObjectKind for TypeMeta {
    fn set_group_version_kind(&mut self, gvk: Option<GroupVersionKind>) {
        *self = gvk.as_ref().map(TypeMeta::from_gvk).unwrap_or_default();
    }

    fn group_version_kind(&self) -> Option<GroupVersionKind> {
        if self.api_version.is_empty() && self.kind.is_empty() {
            return None;
        }
        Some(GroupVersionKind::from_api_version_and_kind(
            &self.api_version,
            &self.kind,
        ))
    }
}

/// PartialObjectMeta is a generic representation of any object with
/// ObjectMeta. It allows reading the identity and metadata of a document
/// without knowing the concrete type registered for its kind.
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartialObjectMeta {
    /// The type fields, not always present
    #[serde(flatten, default)]
    pub types: TypeMeta,
    /// Standard object's metadata
    #[serde(default)]
    pub metadata: ObjectMeta,
}

impl From<PartialObjectMeta> for ObjectMeta {
    fn from(obj: PartialObjectMeta) -> Self {
        ObjectMeta { ..obj.metadata }
    }
}

impl Object for PartialObjectMeta {
    fn object_kind(&self) -> &dyn ObjectKind {
        &self.types
    }

    fn object_kind_mut(&mut self) -> &mut dyn ObjectKind {
        &mut self.types
    }
}

impl HasObjectMeta for PartialObjectMeta {
    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectMetaExt;
    use assert_json_diff::assert_json_eq;

    #[test]
    fn type_meta_envelope() {
        let mut types = TypeMeta::default();
        assert_eq!(types.group_version_kind(), None);

        let deploy = GroupVersionKind::gvk("apps", "v1", "Deployment");
        types.set_group_version_kind(Some(deploy.clone()));
        assert_eq!(types.api_version, "apps/v1");
        assert_eq!(types.kind, "Deployment");
        assert_eq!(types.group_version_kind(), Some(deploy));

        types.set_group_version_kind(None);
        assert_eq!(types, TypeMeta::default());
        assert_eq!(types.group_version_kind(), None);
    }

    #[test]
    fn type_meta_core_group() {
        let pod = GroupVersionKind::gvk("", "v1", "Pod");
        let types = TypeMeta::from_gvk(&pod);
        assert_eq!(types.api_version, "v1");
        assert_eq!(types.group_version_kind(), Some(pod));
    }

    #[test]
    fn type_meta_with_unparseable_api_version_keeps_kind() {
        let types = TypeMeta {
            api_version: "a/b/c".into(),
            kind: "Foo".into(),
        };
        assert_eq!(
            types.group_version_kind(),
            Some(GroupVersionKind::gvk("", "", "Foo"))
        );
    }

    #[test]
    fn type_meta_serialization_omits_empty_fields() {
        let types = TypeMeta::from_gvk(&GroupVersionKind::gvk("batch", "v1", "Job"));
        assert_json_eq!(
            serde_json::to_value(&types).unwrap(),
            serde_json::json!({ "apiVersion": "batch/v1", "kind": "Job" })
        );
        assert_json_eq!(
            serde_json::to_value(TypeMeta::default()).unwrap(),
            serde_json::json!({})
        );
        let parsed: TypeMeta = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TypeMeta::default());
    }

    #[test]
    fn partial_object_meta_reads_any_document() {
        let obj: PartialObjectMeta = serde_json::from_value(serde_json::json!({
            "apiVersion": "apps/v1",
            "kind": "Deployment",
            "metadata": { "name": "web", "namespace": "prod", "resourceVersion": "42" },
            "spec": { "replicas": 3 }
        }))
        .unwrap();
        assert_eq!(
            obj.object_kind().group_version_kind(),
            Some(GroupVersionKind::gvk("apps", "v1", "Deployment"))
        );
        assert_eq!(obj.name_any(), "web");
        assert_eq!(obj.namespace().as_deref(), Some("prod"));
        assert_eq!(obj.resource_version().as_deref(), Some("42"));

        let meta: ObjectMeta = obj.into();
        assert_eq!(meta.name.as_deref(), Some("web"));
    }
}
