//! Blog content: document model, front matter and collection loading.

mod document;
mod error;
mod frontmatter;
mod loader;
mod toc;

pub use document::{ContentDocument, ReadingTime};
pub use error::ContentError;
pub use loader::load_documents;
pub use toc::TocHeading;
