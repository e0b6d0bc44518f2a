//! Infrastructure adapters implementing the `bk-core` ports.

pub mod app_dirs;
pub mod http;
pub mod navigator;
pub mod token_store;

pub use app_dirs::DirsAppDirsAdapter;
pub use http::HttpApiClient;
pub use navigator::InMemoryNavigator;
pub use token_store::{FileTokenStore, InMemoryTokenStore};
