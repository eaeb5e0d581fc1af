// REST client for the SiteWhere platform API.
//
// `client` owns transport mechanics; every other file adds one endpoint
// group to `SiteWhereClient` as inherent methods.

mod areas;
mod assets;
mod assignments;
mod auth;
mod batch;
pub mod client;
mod customers;
mod device_types;
mod devices;
mod events;
mod groups;
mod streams;
mod system;

pub use client::SiteWhereClient;
