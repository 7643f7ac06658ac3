//! Common types for all directory records

pub mod identifier;
pub mod resource_item;

// Re-exports
pub use identifier::Identifier;
pub use resource_item::ResourceItem;
