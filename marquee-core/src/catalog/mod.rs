//! Item catalog: ordered items where position doubles as the matrix index.

pub mod item;
pub mod table;

pub use item::{Item, ItemId};
pub use table::Catalog;
