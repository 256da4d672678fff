//! Business services for the seller screens.
//!
//! Each service mediates between a screen's request payloads and the
//! repositories, owning the validation that must run before any database
//! work and the mapping from repository errors to screen-level errors.

pub mod auth;
pub mod catalog;
pub mod inventory;
pub mod notifications;
pub mod orders;
pub mod profile;

pub use auth::{AuthError, AuthService};
pub use catalog::CatalogService;
pub use inventory::{InventoryError, InventoryService};
pub use notifications::{NotificationError, NotificationService};
pub use orders::{OrderError, OrderService};
pub use profile::{NextRoute, ProfileError, ProfileService, next_route};
