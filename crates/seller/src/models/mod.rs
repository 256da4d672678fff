//! Domain models for the seller service.
//!
//! These types represent validated domain objects separate from database
//! row types; conversions live in the repositories.

pub mod account;
pub mod notification;
pub mod order;
pub mod product;
pub mod seller;
pub mod session;

pub use account::AuthAccount;
pub use notification::Notification;
pub use order::{Order, OrderDetail, OrderItem};
pub use product::{CatalogEntry, InventoryItem, MasterProduct, SellerProduct};
pub use seller::Seller;
pub use session::{CurrentSeller, keys as session_keys};
