pub mod client;
pub mod connection;
pub mod response;
pub mod service_call;

pub use client::HaClient;
pub use connection::Connection;
pub use service_call::{ServiceCall, ServiceData};
