use crate::config::GrabberConfig;
use crate::wefunk::constants::{DEFAULT_REQUESTS_PER_SECOND, WEFUNK_SHOW_BASE_URL, WEFUNK_SHOWS_URL};
use clap::Parser;
use std::path::PathBuf;

/// Downloads show information for WEFUNK RADIO shows and saves a cue sheet per show.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Downloads show information for WEFUNK RADIO shows and saves a cue sheet per show\n\nNote: existing cue sheets are overwritten"
)]
pub struct Cli {
    /// Url where to load the shows from, defaults to the newest shows page
    #[arg(
        long,
        short = 'u',
        value_name = "URL",
        env = "WEFUNK_URL",
        default_value = WEFUNK_SHOWS_URL
    )]
    pub url: String,

    /// Output directory for cue sheets, defaults to the working directory
    #[arg(long, short = 'o', value_name = "OUTPUT_DIR", env = "WEFUNK_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Url prefix of a single show page, the show date gets appended to it
    #[arg(
        long,
        value_name = "URL",
        env = "WEFUNK_SHOW_BASE_URL",
        default_value = WEFUNK_SHOW_BASE_URL
    )]
    pub show_base_url: String,

    /// Maximum number of pages requested per second
    #[arg(
        long,
        value_name = "REQUESTS",
        env = "WEFUNK_REQUESTS_PER_SECOND",
        default_value_t = DEFAULT_REQUESTS_PER_SECOND,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub requests_per_second: u64,
}

impl TryFrom<Cli> for GrabberConfig {
    type Error = std::io::Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let output_dir = match cli.output_dir {
            Some(output_dir) => output_dir,
            None => std::env::current_dir()?,
        };

        Ok(GrabberConfig {
            listing_url: cli.url,
            show_base_url: cli.show_base_url,
            output_dir,
            requests_per_second: cli.requests_per_second,
        })
    }
}
