//! Static name catalog: dataset parsing and the immutable lookup index.

mod index;
mod loader;

pub use index::{NameIndex, name_order};
pub use loader::{DatasetLoadError, RawDataset, load_embedded, load_from_path};
