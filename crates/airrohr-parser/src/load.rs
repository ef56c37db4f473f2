use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::errors::LoadError;
use crate::model::SensorRecord;

pub const DEFAULT_DATA_FILE: &str = "sensor_data.json";

/// Reads a JSON array of records from `path`. The file handle lives only for
/// the duration of this call.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<SensorRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| LoadError::from_io(path.to_path_buf(), err))?;
    let reader = BufReader::new(file);

    let records: Vec<SensorRecord> = serde_json::from_reader(reader).map_err(|source| {
        if source.is_io() {
            LoadError::Io {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            LoadError::Json {
                path: Some(path.to_path_buf()),
                source,
            }
        }
    })?;

    debug!(path = %path.display(), records = records.len(), "loaded sensor records");
    Ok(records)
}

pub fn parse_records(content: &str) -> Result<Vec<SensorRecord>, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Json { path: None, source })
}
