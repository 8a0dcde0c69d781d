//! Domain layer for Shorecast
//!
//! Contains the weather panel's value objects and the pure rules that act on
//! them: icon classification, station selection and UV banding.
//! This layer performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
