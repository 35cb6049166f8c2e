use crate::cue::models::Track;
use crate::wefunk::api::PageSource;
use crate::wefunk::constants::{INTRO_TRACK_TITLE, WEFUNK_STATION_NAME};
use crate::wefunk::embedded::{ScriptVariable, extract_script_json};
use crate::wefunk::error::{WefunkError, WefunkResult};
use crate::wefunk::models::payload::{TrackExtraPayload, TracksPayload};
use crate::wefunk::models::show::ShowInfo;
use crate::wefunk::playlist::extract_playlist_items;
use log::debug;
use scraper::Html;
use std::time::Duration;

pub async fn extract_track_list<S: PageSource>(
    source: &mut S,
    show: &ShowInfo,
    show_base_url: &str,
) -> WefunkResult<Vec<Track>> {
    let url = show.show_url(show_base_url);

    debug!("Loading track list for show #{} from {url}", show.number);

    let page = source.fetch_page(&url).await?;

    parse_track_list(&page)
}

/// Builds the track timeline of a show page.
///
/// Metadata and timing payloads are matched by position and must have the
/// same length. The first track is always the station intro.
pub fn parse_track_list(page: &str) -> WefunkResult<Vec<Track>> {
    let track_extra: TrackExtraPayload = extract_script_json(page, ScriptVariable::TrackExtra)?;
    let timings: TracksPayload = extract_script_json(page, ScriptVariable::Tracks)?;

    if track_extra.0.len() != timings.tracks.len() {
        return Err(WefunkError::TrackCountMismatch {
            metadata: track_extra.0.len(),
            timings: timings.tracks.len(),
        });
    }

    let playlist = extract_playlist_items(&Html::parse_document(page));

    if playlist.len() != timings.tracks.len() {
        debug!(
            "Playlist has {} items for {} tracks, missing items are treated as regular tracks",
            playlist.len(),
            timings.tracks.len()
        );
    }

    let tracks = timings
        .tracks
        .iter()
        .enumerate()
        .map(|(index, position)| {
            let number = index as u32 + 1;
            let starts_at = Duration::from_millis(position.mspos);

            if index == 0 {
                return Track::new(number, WEFUNK_STATION_NAME, INTRO_TRACK_TITLE, starts_at);
            }

            let (artist, title) = track_extra.artist_and_title(index);

            let talk_item = playlist.get(index).filter(|item| item.is_talk());

            if let Some(item) = talk_item {
                debug!("Track {number:02} is a talk segment: {}", item.text);
                let title = format!("talk (over {artist} - {title})");
                Track::new(number, artist, title, starts_at)
            } else {
                Track::new(number, artist, title, starts_at)
            }
        })
        .collect();

    Ok(tracks)
}
