use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read vegetable data {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vegetable data {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Vegetable price data as found on disk. The schema is not interpreted.
#[derive(Debug, Clone)]
pub struct VegetableData {
    pub path: PathBuf,
    pub content: Value,
}

impl VegetableData {
    /// Number of top-level entries: array length or object key count.
    pub fn record_count(&self) -> usize {
        match &self.content {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }
}

/// Read and parse the whole data file.
pub fn load_data(path: &Path) -> Result<VegetableData, DataError> {
    let raw = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = serde_json::from_str(&raw).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(VegetableData {
        path: path.to_path_buf(),
        content,
    })
}

/// Like [`load_data`], but a failure is logged and swallowed.
pub fn try_load_data(path: &Path) -> Option<VegetableData> {
    match load_data(path) {
        Ok(data) => {
            log::info!(
                "Loaded {} vegetable records from {}",
                data.record_count(),
                path.display()
            );
            Some(data)
        }
        Err(e) => {
            log::warn!("Vegetable data unavailable: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_temp(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("veg_data_{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_array() {
        let path = write_temp(r#"[{"name": "Tomato"}, {"name": "Cabbage"}]"#);

        let data = load_data(&path).unwrap();

        assert_eq!(data.path, path);
        assert_eq!(data.record_count(), 2);
        assert_eq!(data.content[0]["name"], "Tomato");
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_valid_object_with_thai_keys() {
        let path = write_temp(r#"{"มะเขือเทศ": [10.5, 11.0], "กะหล่ำปลี": [], "พริก": []}"#);

        let data = load_data(&path).unwrap();

        assert_eq!(data.record_count(), 3);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join(format!("missing_{}.json", uuid::Uuid::new_v4()));

        let result = load_data(&path);

        assert!(matches!(result, Err(DataError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let path = write_temp("{ not json");

        let result = load_data(&path);

        assert!(matches!(result, Err(DataError::Parse { .. })));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_try_load_swallows_errors() {
        let missing = std::env::temp_dir().join(format!("missing_{}.json", uuid::Uuid::new_v4()));
        assert!(try_load_data(&missing).is_none());

        let broken = write_temp("[1, 2,");
        assert!(try_load_data(&broken).is_none());
        fs::remove_file(broken).ok();
    }

    #[test]
    fn test_record_count_scalar() {
        let data = VegetableData {
            path: PathBuf::from("x.json"),
            content: json!(42),
        };
        assert_eq!(data.record_count(), 0);
    }

    #[test]
    fn test_data_error_display_mentions_path() {
        let missing = PathBuf::from("nowhere/vegetables.json");
        let err = load_data(&missing).unwrap_err();
        assert!(err.to_string().contains("nowhere/vegetables.json"));
    }
}
