use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::model::{Algorithm, ChannelId};
use crate::runtime::RenderParameters;

#[derive(Debug, Parser)]
#[command(
    name = "threshold-viewer",
    version,
    about = "Interactive binarization viewer: global, adaptive and Otsu thresholds on any channel"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Opens the viewer window, optionally with an image already loaded.
    View {
        input: Option<PathBuf>,
        #[arg(long)]
        preset: Option<PathBuf>,
    },
    /// Prints per-channel statistics of an image as JSON.
    Info { input: PathBuf },
    /// Binarizes one image and writes the result.
    Render(RenderArgs),
}

#[derive(Debug, Args)]
pub(super) struct RenderArgs {
    #[arg(long)]
    pub(super) input: PathBuf,
    #[arg(long)]
    pub(super) output: PathBuf,
    #[arg(long)]
    pub(super) preset: Option<PathBuf>,
    #[arg(long)]
    pub(super) channel: Option<String>,
    #[arg(long)]
    pub(super) algorithm: Option<String>,
    #[arg(long)]
    pub(super) threshold: Option<i32>,
    #[arg(long)]
    pub(super) block_size: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    pub(super) constant_c: Option<i32>,
    #[arg(long)]
    pub(super) blur_radius: Option<i32>,
    /// Smooths the channel before thresholding.
    #[arg(long)]
    pub(super) blur: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct ChannelSummary {
    pub(super) channel: ChannelId,
    pub(super) min: u8,
    pub(super) max: u8,
    pub(super) mean: f64,
    pub(super) otsu_level: u8,
}

#[derive(Debug, Serialize)]
pub(super) struct ImageInfo {
    pub(super) source: String,
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) channels: Vec<ChannelSummary>,
}

#[derive(Debug, Serialize)]
pub(super) struct RenderSummary {
    pub(super) input: String,
    pub(super) output: String,
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) channel: ChannelId,
    pub(super) algorithm: Algorithm,
    pub(super) parameters: RenderParameters,
    pub(super) otsu_level: Option<u8>,
    pub(super) foreground_pixels: usize,
    pub(super) blur_cache_hit: Option<bool>,
    pub(super) duration_ms: u128,
}
