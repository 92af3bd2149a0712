//! Portfolio backend access
//!
//! - [`resource`]: the fixed set of REST resources and their failure texts
//! - [`transport`]: the HTTP seam (reqwest in the app, mocks in tests)
//! - [`client`]: one request per call, cancellable
//! - [`models`]: typed records with defaults for missing fields

pub mod client;
pub mod models;
pub mod resource;
pub mod transport;

pub use client::{parse_base_url, PortfolioClient, ProjectFilter};
pub use resource::Resource;
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportError};
