use crate::cue::models::Msf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Track out of order: expected track {expected:02}, got {found:02}")]
    TrackOutOfOrder { expected: u32, found: u32 },

    #[error("Track {track:02} starts at {found} which is before the previous track at {previous}")]
    StartOffsetDecreased {
        track: u32,
        previous: Msf,
        found: Msf,
    },
}

pub type CueResult<T> = Result<T, CueError>;
