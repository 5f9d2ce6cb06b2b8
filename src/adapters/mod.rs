// Adapters layer: concrete implementations of the domain ports.

pub mod file;
pub mod http;
pub mod storage;

pub use file::FileDogSource;
pub use http::HttpDogSource;
pub use storage::LocalStorage;
