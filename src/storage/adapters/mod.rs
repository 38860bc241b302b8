//! Key-value storage adapters.

mod atomic_io;
pub mod directory;
pub mod memory;

pub use directory::DirectoryKeyValueStore;
pub use memory::InMemoryKeyValueStore;
