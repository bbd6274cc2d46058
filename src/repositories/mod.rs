mod in_memory_repository;
mod json_file_repository;
pub mod snapshot;
mod traits;

pub use in_memory_repository::InMemoryRepository;
pub use json_file_repository::JsonFileRepository;
pub use snapshot::{parse_book, BookSnapshot, ContactSnapshot, SNAPSHOT_VERSION};
pub use traits::BookRepository;
