//! Infrastructure layer: storage adapters for the catalog.

pub mod json_file;

pub use json_file::JsonFileProductRepository;
