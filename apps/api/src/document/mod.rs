pub mod handlers;
pub mod store;

pub use store::{load_initial_document, DocumentStore, PreviewSurface};
