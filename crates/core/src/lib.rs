//! `domainforge-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** vocabulary (no infrastructure
//! concerns): the [`Entity`] / [`EntityId`] identity model, a UUID-backed
//! identifier value, and the [`Repository`] persistence contract that
//! backend adapters implement.

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{EntityId, UuidId};
pub use repository::Repository;
pub use value_object::ValueObject;
