//! Catalog errors.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed catalog entry '{entry}': {reason}")]
    MalformedEntry { entry: String, reason: &'static str },

    #[error("Unknown refrigerant designation '{designation}' in entry '{entry}'")]
    UnknownRefrigerant { entry: String, designation: String },

    #[error("Unknown line type '{value}' in entry '{entry}'")]
    UnknownLineType { entry: String, value: String },

    #[error("Unknown component category '{value}'")]
    UnknownCategory { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::MalformedEntry {
            entry: "CMP-12".into(),
            reason: "envelope needs at least 3 vertices",
        };
        let msg = err.to_string();
        assert!(msg.contains("CMP-12"));
        assert!(msg.contains("3 vertices"));
    }
}
