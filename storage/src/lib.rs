pub mod dataset;

pub use dataset::{LoadError, Source, filename_from_path, load_text, load_texts};
