use std::path::PathBuf;

/// Everything a cue sheet grabbing run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrabberConfig {
    /// Shows index page to collect shows from.
    pub listing_url: String,
    /// Prefix a show date is appended to for the show page url.
    pub show_base_url: String,
    pub output_dir: PathBuf,
    pub requests_per_second: u64,
}
