use crate::commands::Cli;
use crate::config::GrabberConfig;
use crate::wefunk::api::WefunkApi;
use crate::wefunk::grab_cue_sheets;
use anyhow::Result;
use clap::Parser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::debug;

mod commands;
mod config;
mod cue;
mod util;
mod wefunk;

pub mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    debug!(
        "{} {} ({})",
        built_info::PKG_NAME,
        built_info::PKG_VERSION,
        built_info::TARGET
    );

    let cli = Cli::parse();
    let config = GrabberConfig::try_from(cli)?;

    let mut api = WefunkApi::new(config.requests_per_second)?;

    grab_cue_sheets(&mut api, &config, &pb).await?;

    Ok(())
}
