//! Chart value objects shared by the controller, adapters and hosts.

pub mod value_objects;

pub use value_objects::*;
