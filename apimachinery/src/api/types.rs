//! Envelope-level representations of the core group types.
//!
//! Only the kind envelope, object metadata and list items are modelled here.
//! The bodies of these types belong to the serialization layer.
use crate::{
    core::{ListMeta, ObjectMeta, TypeMeta},
    Object,
};
use k8s_openapi::{api::core::v1::ObjectReference, apimachinery::pkg::runtime::RawExtension};
use serde::{Deserialize, Serialize};

// Types with persistent identity: envelope plus metadata
macro_rules! persisted {
    ($($(#[$attr:meta])* $name:ident;)*) => {$(
        $(#[$attr])*
        #[derive(Object, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
        #[object(crates(apimachinery_core = "crate::core"))]
        pub struct $name {
            /// The type fields
            #[serde(flatten)]
            #[object(kind)]
            pub types: TypeMeta,
            /// Standard object's metadata
            #[serde(default)]
            #[object(meta)]
            pub metadata: ObjectMeta,
        }
    )*};
}

// Collections: envelope, list metadata and items
macro_rules! lists {
    ($($(#[$attr:meta])* $name:ident => $item:ty;)*) => {$(
        $(#[$attr])*
        #[derive(Object, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
        #[object(crates(apimachinery_core = "crate::core"))]
        pub struct $name {
            /// The type fields
            #[serde(flatten)]
            #[object(kind)]
            pub types: TypeMeta,
            /// Standard list metadata
            #[serde(default)]
            pub metadata: ListMeta,
            /// The items in the list
            #[serde(default)]
            pub items: Vec<$item>,
        }
    )*};
}

// Options and status wrappers that only carry an envelope
macro_rules! envelopes {
    ($($(#[$attr:meta])* $name:ident;)*) => {$(
        $(#[$attr])*
        #[derive(Object, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
        #[object(crates(apimachinery_core = "crate::core"))]
        pub struct $name {
            /// The type fields
            #[serde(flatten)]
            #[object(kind)]
            pub types: TypeMeta,
        }
    )*};
}

persisted! {
    /// A group of containers scheduled together
    Pod;
    /// The status section of a pod, posted on its own
    PodStatusResult;
    /// A template for creating pods
    PodTemplate;
    /// Keeps a number of pod replicas running
    ReplicationController;
    /// A named abstraction over a set of pods
    Service;
    /// A worker machine
    Node;
    /// The addresses implementing a service
    Endpoints;
    /// Binds a pod to a node
    Binding;
    /// A report of something that happened in the cluster
    Event;
    /// Resource limits per kind in a namespace
    LimitRange;
    /// Aggregate resource quota per namespace
    ResourceQuota;
    /// A scope for names
    Namespace;
    /// An identity for processes running in pods
    ServiceAccount;
    /// Sensitive data
    Secret;
    /// A piece of provisioned storage
    PersistentVolume;
    /// A request for storage
    PersistentVolumeClaim;
    /// The health of a cluster component
    ComponentStatus;
    /// A range allocation snapshot
    RangeAllocation;
}

lists! {
    /// A list of pods
    PodList => Pod;
    /// A list of pod templates
    PodTemplateList => PodTemplate;
    /// A list of replication controllers
    ReplicationControllerList => ReplicationController;
    /// A list of services
    ServiceList => Service;
    /// A list of nodes
    NodeList => Node;
    /// A list of endpoints
    EndpointsList => Endpoints;
    /// A list of events
    EventList => Event;
    /// A list of objects of mixed kinds, kept undecoded
    List => RawExtension;
    /// A list of limit ranges
    LimitRangeList => LimitRange;
    /// A list of resource quotas
    ResourceQuotaList => ResourceQuota;
    /// A list of namespaces
    NamespaceList => Namespace;
    /// A list of service accounts
    ServiceAccountList => ServiceAccount;
    /// A list of secrets
    SecretList => Secret;
    /// A list of persistent volumes
    PersistentVolumeList => PersistentVolume;
    /// A list of persistent volume claims
    PersistentVolumeClaimList => PersistentVolumeClaim;
    /// A list of component statuses
    ComponentStatusList => ComponentStatus;
}

envelopes! {
    /// Options for deleting an object
    DeleteOptions;
    /// Options for listing objects
    ListOptions;
    /// Options for attaching to a pod
    PodAttachOptions;
    /// Options for reading pod logs
    PodLogOptions;
    /// Options for executing a command in a pod
    PodExecOptions;
    /// Options for proxying to a pod
    PodProxyOptions;
    /// The result of an operation that returns no object
    Status;
    /// The api versions served by the legacy api path
    ApiVersions;
    /// The api groups served by the server
    ApiGroupList;
    /// A single api group and its versions
    ApiGroup;
    /// The resources served in a group version
    ApiResourceList;
}

/// A reference to an object, serialized as a standalone document
#[derive(Object, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[object(crates(apimachinery_core = "crate::core"))]
pub struct SerializedReference {
    /// The type fields
    #[serde(flatten)]
    #[object(kind)]
    pub types: TypeMeta,
    /// The object referred to
    #[serde(default)]
    pub reference: ObjectReference,
}
