use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read text file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Text file {} is not valid UTF-8 (first invalid byte at offset {valid_up_to})", path.display())]
    Encoding { path: PathBuf, valid_up_to: usize },
    #[error("Missing filename for path {}", path.display())]
    MissingName { path: PathBuf },
}

/// A fully loaded, decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub name: String,
    pub text: String,
}

pub fn load_text(path: &Path) -> Result<Source, LoadError> {
    let (name, raw_bytes) = if path.as_os_str() == STDIN_PATH {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        ("stdin".to_string(), buf)
    } else {
        let raw_bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        (filename_from_path(path)?, raw_bytes)
    };

    let text = String::from_utf8(raw_bytes).map_err(|e| LoadError::Encoding {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;

    log::debug!("loaded {} ({} bytes)", path.display(), text.len());

    Ok(Source {
        path: path.to_path_buf(),
        name,
        text,
    })
}

/// Load every path in order, stopping at the first failure.
pub fn load_texts(paths: &[PathBuf]) -> Result<Vec<Source>, LoadError> {
    paths.iter().map(|path| load_text(path)).collect()
}

pub fn filename_from_path(path: &Path) -> Result<String, LoadError> {
    path.file_name()
        .ok_or_else(|| LoadError::MissingName {
            path: path.to_path_buf(),
        })
        .map(|name| name.to_string_lossy().to_string())
}
