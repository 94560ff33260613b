//! The legacy core api group and its registered types
//!
//! Everything here is registered under the empty group and the empty (internal) version.
//! Use [`SCHEME`] for the process-wide registry, or [`add_to_scheme`] to populate your own.
use std::sync::LazyLock;

use crate::core::{GroupKind, GroupResource, GroupVersion, KnownType, Scheme, SchemeBuilder, SchemeError};

mod types;
pub use k8s_openapi::api::core::v1::ObjectReference;
pub use types::*;

/// The group name used in this module
pub const GROUP_NAME: &str = "";

/// Group version used to register these objects
pub const SCHEME_GROUP_VERSION: GroupVersion = GroupVersion {
    group: String::new(),
    version: String::new(),
};

/// Qualify a bare kind name with this module's group
///
/// ```
/// use apimachinery::api;
/// assert_eq!(api::kind("Pod").to_string(), ", Kind=Pod");
/// ```
pub fn kind(kind: &str) -> GroupKind {
    SCHEME_GROUP_VERSION.with_kind(kind).group_kind()
}

/// Qualify a bare resource name with this module's group
pub fn resource(resource: &str) -> GroupResource {
    SCHEME_GROUP_VERSION.with_resource(resource).group_resource()
}

/// Register every core group type in `scheme`
pub fn add_to_scheme(scheme: &mut Scheme) -> Result<(), SchemeError> {
    scheme.add_known_types(&SCHEME_GROUP_VERSION, [
        KnownType::of::<Pod>("Pod"),
        KnownType::of::<PodList>("PodList"),
        KnownType::of::<PodStatusResult>("PodStatusResult"),
        KnownType::of::<PodTemplate>("PodTemplate"),
        KnownType::of::<PodTemplateList>("PodTemplateList"),
        KnownType::of::<ReplicationControllerList>("ReplicationControllerList"),
        KnownType::of::<ReplicationController>("ReplicationController"),
        KnownType::of::<ServiceList>("ServiceList"),
        KnownType::of::<Service>("Service"),
        KnownType::of::<NodeList>("NodeList"),
        KnownType::of::<Node>("Node"),
        KnownType::of::<Endpoints>("Endpoints"),
        KnownType::of::<EndpointsList>("EndpointsList"),
        KnownType::of::<Binding>("Binding"),
        KnownType::of::<Event>("Event"),
        KnownType::of::<EventList>("EventList"),
        KnownType::of::<List>("List"),
        KnownType::of::<LimitRange>("LimitRange"),
        KnownType::of::<LimitRangeList>("LimitRangeList"),
        KnownType::of::<ResourceQuota>("ResourceQuota"),
        KnownType::of::<ResourceQuotaList>("ResourceQuotaList"),
        KnownType::of::<Namespace>("Namespace"),
        KnownType::of::<NamespaceList>("NamespaceList"),
        KnownType::of::<ServiceAccount>("ServiceAccount"),
        KnownType::of::<ServiceAccountList>("ServiceAccountList"),
        KnownType::of::<Secret>("Secret"),
        KnownType::of::<SecretList>("SecretList"),
        KnownType::of::<PersistentVolume>("PersistentVolume"),
        KnownType::of::<PersistentVolumeList>("PersistentVolumeList"),
        KnownType::of::<PersistentVolumeClaim>("PersistentVolumeClaim"),
        KnownType::of::<PersistentVolumeClaimList>("PersistentVolumeClaimList"),
        KnownType::of::<DeleteOptions>("DeleteOptions"),
        KnownType::of::<ListOptions>("ListOptions"),
        KnownType::of::<PodAttachOptions>("PodAttachOptions"),
        KnownType::of::<PodLogOptions>("PodLogOptions"),
        KnownType::of::<PodExecOptions>("PodExecOptions"),
        KnownType::of::<PodProxyOptions>("PodProxyOptions"),
        KnownType::of::<ComponentStatus>("ComponentStatus"),
        KnownType::of::<ComponentStatusList>("ComponentStatusList"),
        KnownType::of::<SerializedReference>("SerializedReference"),
        KnownType::of::<RangeAllocation>("RangeAllocation"),
    ])?;

    // unversioned types served alongside every group
    // TODO: move these into a meta group once one exists
    scheme.add_known_types(&SCHEME_GROUP_VERSION, [
        KnownType::of::<Status>("Status"),
        KnownType::of::<ApiVersions>("APIVersions"),
        KnownType::of::<ApiGroupList>("APIGroupList"),
        KnownType::of::<ApiGroup>("APIGroup"),
        KnownType::of::<ApiResourceList>("APIResourceList"),
    ])
}

/// Registration functions for this module, for composing into larger schemes
pub static SCHEME_BUILDER: LazyLock<SchemeBuilder> =
    LazyLock::new(|| SchemeBuilder::new().register(add_to_scheme));

/// The process-wide scheme holding the core group types
///
/// Populated on first access and read-only afterwards.
///
/// # Panics
///
/// Access panics if the core registrations conflict, which can only be a programming error.
pub static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
    match SCHEME_BUILDER.build() {
        Ok(scheme) => {
            tracing::debug!(kinds = scheme.all_known_types().len(), "populated core scheme");
            scheme
        }
        Err(err) => panic!("registering core api types: {err}"),
    }
});
