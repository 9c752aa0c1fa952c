//! PetPals Request Routing
//!
//! This crate decides what an inbound request is *for*, before any handler
//! runs:
//! - Hostname → tenant resolution (subdomain, custom domain, or main app)
//! - Path classification (API, app-reserved, or public tenant-site path)
//!
//! Both pieces are pure and synchronous; the ingress middleware composes
//! them into the actual request pipeline.

pub mod host;
pub mod path_classifier;

pub use host::HostResolver;
pub use path_classifier::{PathClass, PathClassifier};
