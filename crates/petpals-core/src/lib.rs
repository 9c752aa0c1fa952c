//! PetPals Core Types and Traits
//!
//! This crate provides the fundamental types and traits used throughout the
//! kennel-sites service:
//! - Tenant resolution and site record types
//! - Dog and litter domain records
//! - Store trait abstractions
//! - Core error types

pub mod error;
pub mod kennel;
pub mod site;
pub mod store;
pub mod tenant;

pub use error::{Error, Result};
pub use kennel::{DogRecord, LitterRecord};
pub use site::{TemplateKind, TenantSite};
pub use store::{KennelStore, SiteStore};
pub use tenant::ResolvedTenant;
