use std::fmt::Display;
use std::time::Duration;

pub const FRAMES_PER_SECOND: u128 = 75;

const MILLIS_PER_SECOND: u128 = 1000;
const MILLIS_PER_MINUTE: u128 = 60 * MILLIS_PER_SECOND;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub number: u32,
    pub artist: String,
    pub title: String,
    pub starts_at: Duration,
}

impl Track {
    pub fn new(
        number: u32,
        artist: impl Into<String>,
        title: impl Into<String>,
        starts_at: Duration,
    ) -> Self {
        Self {
            number,
            artist: artist.into(),
            title: title.into(),
            starts_at,
        }
    }
}

/// Cue sheet timecode (minutes, seconds, frames at 75 frames per second).
///
/// Minutes are not capped at 99, long shows render with three digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Msf {
    pub minutes: u64,
    pub seconds: u8,
    pub frames: u8,
}

impl Msf {
    /// Truncates to the containing frame, anything below 1/75s is dropped.
    pub fn from_duration(duration: Duration) -> Self {
        let total_ms = duration.as_millis();
        let sub_second_ms = total_ms % MILLIS_PER_SECOND;

        Self {
            minutes: (total_ms / MILLIS_PER_MINUTE) as u64,
            seconds: ((total_ms % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u8,
            frames: (sub_second_ms * FRAMES_PER_SECOND / MILLIS_PER_SECOND) as u8,
        }
    }
}

impl Display for Msf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.minutes, self.seconds, self.frames)
    }
}
