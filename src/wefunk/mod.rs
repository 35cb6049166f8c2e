use crate::config::GrabberConfig;
use crate::cue::CueSheet;
use crate::cue::models::Track;
use crate::wefunk::api::PageSource;
use crate::wefunk::constants::{
    WEFUNK_GENRE, WEFUNK_OLDER_SHOWS_EXAMPLE_URL, WEFUNK_SHOW_TITLE_PREFIX, WEFUNK_STATION_NAME,
};
use crate::wefunk::error::{WefunkError, WefunkResult};
use crate::wefunk::listing::parse_show_listing;
use crate::wefunk::models::show::ShowInfo;
use crate::wefunk::tracks::extract_track_list;
use indicatif::{MultiProgress, ProgressBar};
use log::{debug, info};
use std::path::PathBuf;

pub mod api;
pub mod constants;
mod embedded;
pub mod error;
mod listing;
pub mod models;
mod playlist;
mod tracks;

/// Writes a cue sheet for every show on the configured listing page and
/// returns the written paths in listing order.
pub async fn grab_cue_sheets<S: PageSource>(
    source: &mut S,
    config: &GrabberConfig,
    pb: &MultiProgress,
) -> WefunkResult<Vec<PathBuf>> {
    if !tokio::fs::try_exists(&config.output_dir).await? {
        return Err(WefunkError::OutputDirNotFound(config.output_dir.clone()));
    }

    info!(
        "Searching for shows on \"{}\", use the --url parameter for older shows, e.g. \"--url {WEFUNK_OLDER_SHOWS_EXAMPLE_URL}\"",
        config.listing_url
    );

    let listing = source.fetch_page(&config.listing_url).await?;
    let shows = parse_show_listing(&listing)?;

    info!("Found {} shows on page", shows.len());
    info!("Saving cue sheets to {:?}", config.output_dir);

    let progress = pb.add(ProgressBar::new(shows.len() as u64));
    let mut written = Vec::with_capacity(shows.len());

    for show in &shows {
        progress.set_message(format!("#{}", show.number));

        let tracks = extract_track_list(source, show, &config.show_base_url).await?;
        let cue = create_cue_sheet(show, tracks)?;

        let path = config.output_dir.join(show.cue_filename());
        cue.save_to_file(&path).await?;

        debug!("Saved {path:?}");
        info!("Created cue sheet for #{}", show.number);

        progress.inc(1);
        written.push(path);
    }

    progress.finish_and_clear();
    pb.remove(&progress);

    info!("Finished");

    Ok(written)
}

pub fn create_cue_sheet(show: &ShowInfo, tracks: Vec<Track>) -> WefunkResult<CueSheet> {
    let mut cue = CueSheet::new(
        WEFUNK_GENRE,
        show.year(),
        WEFUNK_STATION_NAME,
        format!("{WEFUNK_SHOW_TITLE_PREFIX}{}", show.number),
        show.mp3_lq_filename(),
    );

    for track in tracks {
        cue.add_track(track)?;
    }

    Ok(cue)
}
