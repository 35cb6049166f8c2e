use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{Msf, Track};
use log::debug;
use std::fmt::Display;
use std::path::Path;

pub mod error;
pub mod models;

#[derive(Debug, Clone)]
pub struct CueSheet {
    pub genre: String,
    pub year: i32,
    pub performer: String,
    pub title: String,
    pub file_name: String,
    tracks: Vec<Track>,
}

impl CueSheet {
    pub fn new(
        genre: impl Into<String>,
        year: i32,
        performer: impl Into<String>,
        title: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            genre: genre.into(),
            year,
            performer: performer.into(),
            title: title.into(),
            file_name: file_name.into(),
            tracks: Vec::new(),
        }
    }

    /// Appends a track, which has to directly follow the previous one and must not start before it.
    pub fn add_track(&mut self, track: Track) -> CueResult<()> {
        let expected = self.tracks.last().map_or(1, |last| last.number + 1);

        if track.number != expected {
            return Err(CueError::TrackOutOfOrder {
                expected,
                found: track.number,
            });
        }

        if let Some(last) = self.tracks.last() {
            if track.starts_at < last.starts_at {
                return Err(CueError::StartOffsetDecreased {
                    track: track.number,
                    previous: Msf::from_duration(last.starts_at),
                    found: Msf::from_duration(track.starts_at),
                });
            }
        }

        self.tracks.push(track);

        Ok(())
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Writes the whole sheet in one go, replacing an existing file.
    pub async fn save_to_file(&self, path: impl AsRef<Path>) -> CueResult<()> {
        let path = path.as_ref();

        debug!("Writing cue sheet with {} tracks to {path:?}", self.tracks().len());
        tokio::fs::write(path, self.to_string()).await?;

        Ok(())
    }
}

impl Display for CueSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TITLE \"{}\"", self.title)?;
        write!(f, "\nPERFORMER \"{}\"", self.performer)?;
        write!(f, "\nREM Year  : {}", self.year)?;
        write!(f, "\nREM Genre : {}", self.genre)?;
        write!(f, "\nFILE \"{}\" MP3", self.file_name)?;

        for track in &self.tracks {
            write!(f, "\n\tTRACK {:02} AUDIO", track.number)?;
            write!(f, "\n\t\tTITLE \"{}\"", track.title)?;
            write!(f, "\n\t\tPERFORMER \"{}\"", track.artist)?;
            write!(f, "\n\t\tINDEX 01 {}", Msf::from_duration(track.starts_at))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sheet() -> CueSheet {
        CueSheet::new(
            "HipHop",
            2015,
            "WEFUNK RADIO",
            "WEFUNK SHOW #809",
            "WeFunk_Show_809_2015-02-26.mp3",
        )
    }

    #[test]
    fn renders_header_without_tracks() {
        assert_eq!(
            sheet().to_string(),
            "TITLE \"WEFUNK SHOW #809\"\n\
             PERFORMER \"WEFUNK RADIO\"\n\
             REM Year  : 2015\n\
             REM Genre : HipHop\n\
             FILE \"WeFunk_Show_809_2015-02-26.mp3\" MP3"
        );
    }

    #[test]
    fn renders_tab_indented_track_blocks() {
        let mut cue = sheet();
        cue.add_track(Track::new(1, "WEFUNK RADIO", "intro", Duration::ZERO))
            .unwrap();
        cue.add_track(Track::new(
            2,
            "Slum Village",
            "Fall In Love",
            Duration::from_millis(125_400),
        ))
        .unwrap();

        let rendered = cue.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5 + 2 * 4);
        assert_eq!(
            &lines[5..],
            &[
                "\tTRACK 01 AUDIO",
                "\t\tTITLE \"intro\"",
                "\t\tPERFORMER \"WEFUNK RADIO\"",
                "\t\tINDEX 01 00:00:00",
                "\tTRACK 02 AUDIO",
                "\t\tTITLE \"Fall In Love\"",
                "\t\tPERFORMER \"Slum Village\"",
                "\t\tINDEX 01 02:05:30",
            ]
        );
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn first_track_must_be_number_one() {
        let mut cue = sheet();
        let err = cue
            .add_track(Track::new(2, "a", "b", Duration::ZERO))
            .unwrap_err();

        assert!(matches!(
            err,
            CueError::TrackOutOfOrder {
                expected: 1,
                found: 2
            }
        ));
        assert!(cue.tracks().is_empty());
    }

    #[test]
    fn rejects_skipped_track_numbers() {
        let mut cue = sheet();
        cue.add_track(Track::new(1, "a", "b", Duration::ZERO)).unwrap();

        let err = cue
            .add_track(Track::new(3, "c", "d", Duration::from_secs(10)))
            .unwrap_err();

        assert!(matches!(
            err,
            CueError::TrackOutOfOrder {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn rejects_decreasing_start_offsets() {
        let mut cue = sheet();
        cue.add_track(Track::new(1, "a", "b", Duration::from_secs(10)))
            .unwrap();

        let err = cue
            .add_track(Track::new(2, "c", "d", Duration::from_secs(9)))
            .unwrap_err();

        assert!(matches!(err, CueError::StartOffsetDecreased { track: 2, .. }));
        assert_eq!(cue.tracks().len(), 1);
    }

    #[test]
    fn allows_tracks_starting_at_the_same_offset() {
        let mut cue = sheet();
        cue.add_track(Track::new(1, "a", "b", Duration::from_secs(10)))
            .unwrap();
        cue.add_track(Track::new(2, "c", "d", Duration::from_secs(10)))
            .unwrap();

        assert_eq!(cue.tracks().len(), 2);
    }

    #[tokio::test]
    async fn save_to_file_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("show.cue");
        tokio::fs::write(&path, "stale").await.unwrap();

        let mut cue = sheet();
        cue.add_track(Track::new(1, "WEFUNK RADIO", "intro", Duration::ZERO))
            .unwrap();
        cue.save_to_file(&path).await.unwrap();

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, cue.to_string());
    }
}
