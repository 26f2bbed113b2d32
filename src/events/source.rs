use super::EVENT_TYPE;
use crate::content::model::RawRecord;
use crate::content::store::NodeStore;
use crate::content::NodeError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, trace};
use walkdir::WalkDir;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DataFormat {
    Yaml,
    Json,
}

impl DataFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "yml" | "yaml" => Some(DataFormat::Yaml),
            "json" => Some(DataFormat::Json),
            _ => None,
        }
    }
}

/**
   Creates one `Event` node per record found in the data files under `content_path`.

   Files are visited in file name order. A file holds either a list of records
   or a single one; files of other kinds are ignored. Returns how many events were created.
*/
#[instrument(skip(store, content_path), fields(content_path = %content_path.display()))]
pub fn load_content_dir(store: &mut NodeStore, content_path: &Path) -> Result<usize, SourceError> {
    let mut created = 0;

    for entry in WalkDir::new(content_path).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(format) = DataFormat::from_path(path) else {
            trace!("Ignoring {}", path.display());
            continue;
        };

        created += load_data_file(store, path, format)?;
    }

    info!("Sourced {} events", created);

    Ok(created)
}

fn load_data_file(
    store: &mut NodeStore,
    path: &Path,
    format: DataFormat,
) -> Result<usize, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&content, format).map_err(|reason| SourceError::Parse {
        path: path.to_path_buf(),
        reason,
    })?;

    let count = records.len();

    debug!("Found {} records in {}", count, path.display());

    for (index, record) in records.into_iter().enumerate() {
        store
            .create_node(EVENT_TYPE, record)
            .map_err(|source| SourceError::InvalidEvent {
                path: path.to_path_buf(),
                index,
                source,
            })?;
    }

    Ok(count)
}

fn parse_records(content: &str, format: DataFormat) -> Result<Vec<RawRecord>, String> {
    let value: Value = match format {
        DataFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
        DataFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
    };

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(record) => Ok(vec![record]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                _ => Err(format!("Entry {} is not a record", index)),
            })
            .collect(),
        _ => Err("Expected a record or a list of records".to_string()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to walk the content directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
    #[error("Invalid event #{index} in {path}: {source}")]
    InvalidEvent {
        path: PathBuf,
        index: usize,
        source: NodeError,
    },
}
