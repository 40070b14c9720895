//! Device transport: reqwest-backed implementation of the DeviceClient port

mod http_client;

pub use http_client::ReqwestDeviceClient;
