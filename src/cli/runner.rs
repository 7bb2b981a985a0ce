use std::path::Path;

use clap::Parser;
use image::GrayImage;

use crate::commands::otsu_level;
use crate::formats::write_plane;
use crate::model::ChannelId;
use crate::preset::load_preset;
use crate::runtime::{self, ImageDerivationStore, RenderParameters, RenderSession};

use super::types::{ChannelSummary, Cli, Commands, ImageInfo, RenderArgs, RenderSummary};

pub fn run_cli() -> Result<(), String> {
    execute(Cli::parse())
}

pub(super) fn execute(cli: Cli) -> Result<(), String> {
    match cli.command {
        None => crate::ui::run(None, RenderParameters::default()),
        Some(Commands::View { input, preset }) => {
            let params = preset_parameters(preset.as_deref())?;
            crate::ui::run(input, params)
        }
        Some(Commands::Info { input }) => {
            let info = image_info(&input)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&info).map_err(|error| error.to_string())?
            );
            Ok(())
        }
        Some(Commands::Render(args)) => {
            let summary = render_to_file(&args)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).map_err(|error| error.to_string())?
            );
            Ok(())
        }
    }
}

fn preset_parameters(preset: Option<&Path>) -> Result<RenderParameters, String> {
    match preset {
        Some(path) => load_preset(path)
            .and_then(|preset| preset.into_parameters())
            .map_err(|error| error.to_string()),
        None => Ok(RenderParameters::default()),
    }
}

pub(super) fn image_info(input: &Path) -> Result<ImageInfo, String> {
    let mut store = ImageDerivationStore::new();
    store.load(input).map_err(|error| error.to_string())?;
    let source = store.source().ok_or("no image loaded")?;
    let (width, height) = source.dimensions();
    let channels = store
        .channels()
        .ok_or("no image loaded")?
        .iter()
        .map(|(channel, plane)| summarize(channel, plane))
        .collect();
    Ok(ImageInfo {
        source: source.path().display().to_string(),
        width,
        height,
        channels,
    })
}

fn summarize(channel: ChannelId, plane: &GrayImage) -> ChannelSummary {
    let values = plane.as_raw();
    let min = values.iter().copied().min().unwrap_or(0);
    let max = values.iter().copied().max().unwrap_or(0);
    let mean = if values.is_empty() {
        0.0
    } else {
        values.iter().map(|value| f64::from(*value)).sum::<f64>() / values.len() as f64
    };
    ChannelSummary {
        channel,
        min,
        max,
        mean,
        otsu_level: otsu_level(plane),
    }
}

/// Flags on the command line override the preset, which overrides the defaults.
pub(super) fn resolve_parameters(args: &RenderArgs) -> Result<RenderParameters, String> {
    let mut params = preset_parameters(args.preset.as_deref())?;
    let apply = |result: runtime::Result<()>| result.map_err(|error| error.to_string());
    if let Some(channel) = &args.channel {
        apply(params.set_channel_by_name(channel))?;
    }
    if let Some(algorithm) = &args.algorithm {
        apply(params.set_algorithm_by_tag(algorithm))?;
    }
    if let Some(threshold) = args.threshold {
        apply(params.set_threshold(threshold))?;
    }
    if let Some(block_size) = args.block_size {
        apply(params.set_block_size(block_size))?;
    }
    if let Some(constant_c) = args.constant_c {
        apply(params.set_constant_c(constant_c))?;
    }
    if let Some(blur_radius) = args.blur_radius {
        apply(params.set_blur_radius(blur_radius))?;
    }
    if args.blur {
        params.set_blur_enabled(true);
    }
    Ok(params)
}

pub(super) fn render_to_file(args: &RenderArgs) -> Result<RenderSummary, String> {
    let params = resolve_parameters(args)?;
    let mut session = RenderSession::with_parameters(params);
    session
        .load(&args.input)
        .map_err(|error| error.to_string())?;
    let output = session.render_report().map_err(|error| error.to_string())?;
    write_plane(&args.output, &output.image).map_err(|error| error.to_string())?;

    let (width, height) = output.image.dimensions();
    Ok(RenderSummary {
        input: args.input.display().to_string(),
        output: args.output.display().to_string(),
        width,
        height,
        channel: output.channel,
        algorithm: output.algorithm,
        parameters: session.params().clone(),
        otsu_level: output.otsu_level,
        foreground_pixels: output.foreground_pixels(),
        blur_cache_hit: output.blur_cache_hit,
        duration_ms: output.elapsed.as_millis(),
    })
}
