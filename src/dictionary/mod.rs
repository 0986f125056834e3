pub mod entry;
pub mod loader;
pub mod lookup;

// Re-export common types
pub use entry::WordEntry;
pub use loader::parse_entries;
pub use lookup::Dictionary;
