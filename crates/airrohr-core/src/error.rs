// crates/airrohr-core/src/error.rs

use airrohr_parser::LoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl AnalyzeError {
    pub fn is_file_access(&self) -> bool {
        matches!(self, AnalyzeError::Load(err) if err.is_file_access())
    }
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
