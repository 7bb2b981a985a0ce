use std::fs;

use clap::Parser;
use image::{Luma, Rgb, RgbImage};
use tempfile::tempdir;

use crate::model::{Algorithm, ChannelId};

use super::runner::{image_info, render_to_file, resolve_parameters};
use super::types::{Cli, Commands, RenderArgs};

fn render_args(cli: Cli) -> RenderArgs {
    match cli.command {
        Some(Commands::Render(args)) => args,
        other => panic!("expected render command, got {other:?}"),
    }
}

#[test]
fn no_arguments_means_no_subcommand() {
    let cli = Cli::try_parse_from(["threshold-viewer"]).expect("parse");
    assert!(cli.command.is_none());
}

#[test]
fn render_flags_accept_negative_constant() {
    let cli = Cli::try_parse_from([
        "threshold-viewer",
        "render",
        "--input",
        "in.png",
        "--output",
        "out.png",
        "--algorithm",
        "ADAPTIVE_THRESH_MEAN_C",
        "--constant-c",
        "-3",
        "--blur",
    ])
    .expect("parse");
    let args = render_args(cli);
    assert_eq!(args.constant_c, Some(-3));
    assert!(args.blur);

    let params = resolve_parameters(&args).expect("params");
    assert_eq!(params.algorithm(), Algorithm::AdaptiveMean);
    assert_eq!(params.constant_c(), -3);
    assert!(params.blur_enabled());
}

#[test]
fn flags_override_preset_values() {
    let dir = tempdir().expect("tempdir");
    let preset = dir.path().join("preset.yaml");
    fs::write(&preset, "channel: blue\nthreshold: 10\n").expect("write");

    let cli = Cli::try_parse_from([
        "threshold-viewer",
        "render",
        "--input",
        "in.png",
        "--output",
        "out.png",
        "--preset",
        preset.to_str().expect("utf8 path"),
        "--threshold",
        "200",
    ])
    .expect("parse");
    let params = resolve_parameters(&render_args(cli)).expect("params");
    assert_eq!(params.channel(), ChannelId::Blue);
    assert_eq!(params.threshold(), 200);
}

#[test]
fn invalid_flag_values_are_reported() {
    let cli = Cli::try_parse_from([
        "threshold-viewer",
        "render",
        "--input",
        "in.png",
        "--output",
        "out.png",
        "--block-size",
        "10",
    ])
    .expect("parse");
    let error = resolve_parameters(&render_args(cli)).expect_err("even block size");
    assert!(error.contains("block size"));
}

#[test]
fn render_writes_binary_png() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("square.png");
    let output = dir.path().join("binary.png");
    RgbImage::from_fn(20, 10, |x, _| {
        if x < 10 { Rgb([0, 0, 0]) } else { Rgb([250, 250, 250]) }
    })
    .save(&input)
    .expect("fixture");

    let cli = Cli::try_parse_from([
        "threshold-viewer",
        "render",
        "--input",
        input.to_str().expect("utf8 path"),
        "--output",
        output.to_str().expect("utf8 path"),
    ])
    .expect("parse");
    let summary = render_to_file(&render_args(cli)).expect("render");
    assert_eq!(summary.foreground_pixels, 100);
    assert_eq!((summary.width, summary.height), (20, 10));

    let written = image::open(&output).expect("output").to_luma8();
    assert_eq!(written.get_pixel(15, 5), &Luma([255]));
    assert_eq!(written.get_pixel(2, 5), &Luma([0]));
}

#[test]
fn info_summarizes_every_channel() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("red.png");
    RgbImage::from_pixel(4, 4, Rgb([200, 0, 0]))
        .save(&input)
        .expect("fixture");

    let info = image_info(&input).expect("info");
    assert_eq!((info.width, info.height), (4, 4));
    assert_eq!(info.channels.len(), ChannelId::COUNT);
    let red = info
        .channels
        .iter()
        .find(|summary| summary.channel == ChannelId::Red)
        .expect("red");
    assert_eq!((red.min, red.max), (200, 200));
    assert!((red.mean - 200.0).abs() < 1e-9);
}

#[test]
fn info_reports_missing_file() {
    let dir = tempdir().expect("tempdir");
    let error = image_info(&dir.path().join("nope.png")).expect_err("missing");
    assert!(error.contains("nope.png"));
}
