pub mod in_memory_store;
pub mod toml_file_store;

pub use in_memory_store::InMemoryStore;
pub use toml_file_store::TomlFileStore;
