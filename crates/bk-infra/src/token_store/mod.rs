//! Token store adapters.

mod file;
mod memory;

pub use file::FileTokenStore;
pub use memory::InMemoryTokenStore;
