//! Chart aggregate: layout value objects, projected geometry and the
//! projector service.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
