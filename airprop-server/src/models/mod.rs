//! Domain input models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic. Referential checks
//! (does the property exist?) belong to the repositories, not here.

pub mod property;
pub mod tenant;
pub mod validation;

pub use property::{NewProperty, PropertyPatch};
pub use tenant::{NewTenant, TenantPatch};
pub use validation::ValidationError;
