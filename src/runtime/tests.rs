use std::collections::BTreeSet;
use std::path::PathBuf;

use image::{Rgb, RgbImage};
use tempfile::{TempDir, tempdir};

use crate::commands::derive_channel;
use crate::model::{Algorithm, ChannelId, SourceImage};

use super::{
    ChannelSet, DEFAULT_BLOCK_SIZE, ImageDerivationStore, RenderParameters, RenderSession,
    ViewerError,
};

/// 100x100 black image with a centered 50x50 white square.
fn square_image() -> RgbImage {
    RgbImage::from_fn(100, 100, |x, y| {
        if (25..75).contains(&x) && (25..75).contains(&y) {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    })
}

/// Horizontal ramp with a bright one-pixel vertical line at column 10.
fn line_on_ramp() -> RgbImage {
    RgbImage::from_fn(32, 16, |x, _| {
        if x == 10 {
            Rgb([200, 200, 200])
        } else {
            let ramp = (x * 2) as u8;
            Rgb([ramp, ramp, ramp])
        }
    })
}

fn saved(image: &RgbImage, name: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(name);
    image.save(&path).expect("save fixture");
    (dir, path)
}

fn session_with(image: RgbImage) -> RenderSession {
    let mut session = RenderSession::new();
    session
        .store_mut()
        .replace_source(SourceImage::new("fixture.png", image))
        .expect("install fixture");
    session
}

fn distinct(values: &[u8]) -> BTreeSet<u8> {
    values.iter().copied().collect()
}

#[test]
fn defaults_match_documented_values() {
    let params = RenderParameters::default();
    assert_eq!(params.threshold(), 127);
    assert_eq!(params.block_size(), 11);
    assert_eq!(params.constant_c(), 1);
    assert_eq!(params.algorithm(), Algorithm::GlobalThresh);
    assert_eq!(params.channel(), ChannelId::Grayscale);
    assert!(!params.blur_enabled());
}

#[test]
fn every_channel_matches_source_dimensions_after_load() {
    let (_dir, path) = saved(&square_image(), "square.png");
    let mut store = ImageDerivationStore::new();
    store.load(&path).expect("load");
    for channel in ChannelId::ALL {
        let plane = store.get_channel(channel).expect("channel");
        assert_eq!(plane.dimensions(), (100, 100), "{channel}");
    }
    assert_eq!(store.dimensions(), Some((100, 100)));
}

#[test]
fn channel_set_matches_per_channel_derivation() {
    let image = line_on_ramp();
    let source = SourceImage::new("ramp.png", image.clone());
    let channels = ChannelSet::derive(&source).expect("derive");
    for (channel, plane) in channels.iter() {
        assert_eq!(plane, &derive_channel(&image, channel).expect("plane"), "{channel}");
    }
}

#[test]
fn channel_lookup_fails_before_load_and_for_unknown_names() {
    let store = ImageDerivationStore::new();
    assert!(matches!(
        store.get_channel(ChannelId::Red),
        Err(ViewerError::UnknownChannel(_))
    ));

    let session = session_with(square_image());
    assert!(session.store().get_channel_by_name("red_channel").is_ok());
    assert!(matches!(
        session.store().get_channel_by_name("infrared"),
        Err(ViewerError::UnknownChannel(_))
    ));
}

#[test]
fn load_failure_keeps_previous_image() {
    let (dir, path) = saved(&square_image(), "square.png");
    let mut session = RenderSession::new();
    session.load(&path).expect("load");
    let generation = session.store().generation();

    let missing = dir.path().join("missing.png");
    let error = session.load(&missing).expect_err("missing file");
    assert!(matches!(error, ViewerError::ImageLoad { .. }));
    assert!(error.to_string().contains("missing.png"));
    assert_eq!(session.store().generation(), generation);
    assert!(session.render().is_ok());
}

#[test]
fn render_before_load_fails() {
    let mut session = RenderSession::new();
    assert!(matches!(session.render(), Err(ViewerError::NoImageLoaded)));
}

#[test]
fn global_threshold_on_square_counts_white_region() {
    let (_dir, path) = saved(&square_image(), "square.png");
    let mut session = RenderSession::new();
    session.load(&path).expect("load");
    session.set_threshold(127).expect("threshold");

    let output = session.render_report().expect("render");
    assert_eq!(output.image.dimensions(), (100, 100));
    assert_eq!(distinct(output.image.as_raw()), BTreeSet::from([0, 255]));
    assert_eq!(output.foreground_pixels(), 2500);
    assert_eq!(output.otsu_level, None);
}

#[test]
fn every_algorithm_produces_binary_output() {
    let mut session = session_with(line_on_ramp());
    for algorithm in Algorithm::ALL {
        session.set_algorithm(algorithm);
        for blur in [false, true] {
            session.set_blur_enabled(blur);
            let image = session.render().expect("render");
            assert_eq!(image.dimensions(), (32, 16));
            assert!(
                image.as_raw().iter().all(|value| *value == 0 || *value == 255),
                "{algorithm} blur={blur}"
            );
        }
    }
}

#[test]
fn uniform_image_yields_single_value() {
    let mut session = session_with(RgbImage::from_pixel(8, 8, Rgb([40, 40, 40])));
    let image = session.render().expect("render");
    assert_eq!(distinct(image.as_raw()), BTreeSet::from([0]));
}

#[test]
fn render_is_idempotent() {
    let mut session = session_with(line_on_ramp());
    session.set_algorithm(Algorithm::AdaptiveGaussian);
    session.set_blur_enabled(true);
    let first = session.render_report().expect("first");
    let second = session.render_report().expect("second");
    assert_eq!(first.image, second.image);
    assert_eq!(first.blur_cache_hit, Some(false));
    assert_eq!(second.blur_cache_hit, Some(true));
}

#[test]
fn blur_radius_change_is_never_served_from_cache() {
    let mut session = session_with(line_on_ramp());
    session.set_threshold(120).expect("threshold");
    session.set_blur_enabled(true);

    session.set_blur_radius(1).expect("radius 1");
    let sharp = session.render().expect("sharp");
    // The line survives an identity blur.
    assert_eq!(sharp.get_pixel(10, 8)[0], 255);

    session.set_blur_radius(3).expect("radius 3");
    let blurred = session.render_report().expect("blurred");
    assert_eq!(blurred.blur_cache_hit, Some(false));
    // 18 / 4 + 200 / 2 + 22 / 4 = 110 is no longer above the level.
    assert_eq!(blurred.image.get_pixel(10, 8)[0], 0);
    assert_ne!(sharp, blurred.image);
}

#[test]
fn blur_results_differ_between_radii() {
    let mut session = session_with(line_on_ramp());
    let small = session
        .store_mut()
        .apply_blur(ChannelId::Grayscale, 3)
        .expect("radius 3")
        .clone();
    let large = session
        .store_mut()
        .apply_blur(ChannelId::Grayscale, 9)
        .expect("radius 9")
        .clone();
    assert_ne!(small, large);
    assert!(session.store().cached_blur(ChannelId::Grayscale, 3).is_none());
    assert_eq!(
        session.store().cached_blur(ChannelId::Grayscale, 9),
        Some(&large)
    );
}

#[test]
fn apply_blur_rejects_even_and_non_positive_radius() {
    let mut session = session_with(line_on_ramp());
    for radius in [0, -3, 4] {
        assert!(matches!(
            session.store_mut().apply_blur(ChannelId::Grayscale, radius),
            Err(ViewerError::InvalidParameter(_))
        ));
    }
    assert!(session.store().blur_cache().is_empty());
}

#[test]
fn channel_change_invalidates_blur_cache() {
    let mut session = session_with(line_on_ramp());
    session.set_blur_enabled(true);
    session.render().expect("render");
    assert!(!session.store().blur_cache().is_empty());

    session.set_channel(ChannelId::Red);
    assert!(session.store().blur_cache().is_empty());
    let output = session.render_report().expect("render red");
    assert_eq!(output.blur_cache_hit, Some(false));
    assert_eq!(
        session.store().blur_cache().key().map(|key| key.channel),
        Some(ChannelId::Red)
    );
}

#[test]
fn reload_invalidates_blur_cache() {
    let mut session = session_with(line_on_ramp());
    session.set_blur_enabled(true);
    session.render().expect("render");
    let generation = session.store().generation();

    session
        .store_mut()
        .replace_source(SourceImage::new("other.png", square_image()))
        .expect("replace");
    assert!(session.store().blur_cache().is_empty());
    assert_eq!(session.store().generation(), generation + 1);
    let output = session.render_report().expect("render");
    assert_eq!(output.blur_cache_hit, Some(false));
    assert_eq!(output.image.dimensions(), (100, 100));
}

#[test]
fn clear_drops_image_and_cache() {
    let mut session = session_with(line_on_ramp());
    session.set_blur_enabled(true);
    session.render().expect("render");
    session.clear();
    assert!(!session.store().is_loaded());
    assert!(session.store().blur_cache().is_empty());
    assert!(matches!(session.render(), Err(ViewerError::NoImageLoaded)));
}

#[test]
fn otsu_ignores_threshold_level() {
    let mut session = session_with(line_on_ramp());
    session.set_algorithm(Algorithm::Otsu);
    session.set_threshold(10).expect("low");
    let low = session.render_report().expect("low render");
    session.set_threshold(240).expect("high");
    let high = session.render_report().expect("high render");
    assert_eq!(low.image, high.image);
    assert_eq!(low.otsu_level, high.otsu_level);
    assert!(low.otsu_level.is_some());
}

#[test]
fn even_block_size_is_rejected_without_side_effects() {
    let mut session = RenderSession::new();
    let error = session.set_block_size(4).expect_err("even");
    assert!(matches!(error, ViewerError::InvalidParameter(_)));
    assert_eq!(session.params().block_size(), DEFAULT_BLOCK_SIZE);

    session.set_block_size(15).expect("odd");
    assert!(session.set_block_size(1).is_err());
    assert_eq!(session.params().block_size(), 15);
}

#[test]
fn out_of_range_values_leave_state_unchanged() {
    let mut params = RenderParameters::default();
    assert!(params.set_threshold(256).is_err());
    assert!(params.set_threshold(-1).is_err());
    assert!(params.set_constant_c(300).is_err());
    assert!(params.set_blur_radius(2).is_err());
    assert!(params.set_blur_radius(0).is_err());
    assert!(params.set_algorithm_by_tag("CANNY").is_err());
    assert!(matches!(
        params.set_channel_by_name("alpha"),
        Err(ViewerError::UnknownChannel(_))
    ));
    assert_eq!(params, RenderParameters::default());

    params.set_constant_c(-7).expect("negative C");
    params.set_algorithm_by_tag("ADAPTIVE_THRESH_MEAN_C").expect("tag");
    assert_eq!(params.constant_c(), -7);
    assert_eq!(params.algorithm(), Algorithm::AdaptiveMean);
}

#[test]
fn replacing_parameters_invalidates_on_radius_change() {
    let mut session = session_with(line_on_ramp());
    session.set_blur_enabled(true);
    session.render().expect("render");

    let mut same = session.params().clone();
    same.set_threshold(30).expect("threshold");
    session.replace_parameters(same);
    assert!(!session.store().blur_cache().is_empty());

    let mut wider = session.params().clone();
    wider.set_blur_radius(7).expect("radius");
    session.replace_parameters(wider);
    assert!(session.store().blur_cache().is_empty());
}
