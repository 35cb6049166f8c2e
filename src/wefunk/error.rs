use crate::cue::error::CueError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WefunkError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    RequestError(#[from] reqwest::Error),

    #[error(transparent)]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Request to {0} failed with status code {1}: {2}")]
    NoSuccessStatusCode(String, reqwest::StatusCode, String),

    #[error("Invalid show item on listing page: {0}")]
    InvalidShowItem(String),

    #[error("Invalid show date in show item id {id:?}: {source}")]
    InvalidShowDate {
        id: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Could not find script variable `{0}` on show page")]
    MissingScriptVariable(&'static str),

    #[error("Script variable `{name}` does not contain valid JSON: {source}")]
    InvalidScriptJson {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Track metadata lists {metadata} tracks but the timing data lists {timings}")]
    TrackCountMismatch { metadata: usize, timings: usize },

    #[error("Output directory does not exist: {0}")]
    OutputDirNotFound(PathBuf),

    #[error(transparent)]
    CueError(#[from] CueError),
}

pub type WefunkResult<T> = Result<T, WefunkError>;
