//! Resource model types for the SiteWhere REST API.
//!
//! Each resource has a stored form (with server-assigned identity and
//! audit fields in [`PersistentEntity`]) and a `...CreateRequest` carrying
//! only the caller-settable fields. Field names are camelCase on the wire.

pub mod area;
pub mod asset;
pub mod batch;
pub mod command;
pub mod common;
pub mod customer;
pub mod device;
pub mod event;
pub mod group;
pub mod state;
pub mod stream;
pub mod system;

pub use area::{Area, AreaCreateRequest, AreaType, AreaTypeCreateRequest, Zone, ZoneCreateRequest};
pub use asset::{Asset, AssetCategory, AssetCreateRequest, AssetType, AssetTypeCreateRequest};
pub use batch::{
    BatchCommandInvocationRequest, BatchElement, BatchOperation, BatchOperationStatus,
    BatchOperationType, ElementProcessingStatus,
};
pub use command::{CommandParameter, DeviceCommand, DeviceCommandCreateRequest, ParameterType};
pub use common::{BrandingContent, Location, Metadata, MetadataProvider, PersistentEntity};
pub use customer::{Customer, CustomerCreateRequest, CustomerType, CustomerTypeCreateRequest};
pub use device::{
    Device, DeviceAssignment, DeviceAssignmentCreateRequest, DeviceAssignmentStatus,
    DeviceContainerPolicy, DeviceCreateRequest, DeviceElementMapping, DeviceType,
    DeviceTypeCreateRequest,
};
pub use event::{
    AlertContent, AlertLevel, AlertSource, CommandInitiator, CommandTarget, DeviceAlert,
    DeviceAlertCreateRequest, DeviceCommandInvocation, DeviceCommandInvocationCreateRequest,
    DeviceEvent, DeviceEventBatch, DeviceEventBatchResponse, DeviceEventType, DeviceLocation,
    DeviceLocationCreateRequest, DeviceMeasurement, DeviceMeasurementCreateRequest,
    EventCreateContent, InvocationContent, LocationContent, MeasurementContent,
};
pub use group::{
    DeviceGroup, DeviceGroupCreateRequest, DeviceGroupElement, DeviceGroupElementCreateRequest,
    GroupElementTarget,
};
pub use state::{RecentLocationEventCreateRequest, RecentStateEventCreateRequest};
pub use stream::{DeviceStream, DeviceStreamCreateRequest};
pub use system::Version;
