//! End-to-end generation, checked with an independent QR decoder.

use std::path::Path;

use image::{Rgba, RgbaImage};
use qrtool::{generate, Colour, PayloadMode, QrRequest, BRAND_PALETTE};
use tempfile::tempdir;

/// Decode every QR symbol found in the image at `path`.
fn decode(path: &Path) -> Vec<String> {
    let img = image::open(path).unwrap().to_rgba8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        img.width() as usize,
        img.height() as usize,
        |x, y| {
            // Transparent frame corners read as paper, not ink
            let [r, g, b, a] = img.get_pixel(x as u32, y as u32).0;
            if a < 128 {
                255
            } else {
                ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
            }
        },
    );
    prepared
        .detect_grids()
        .into_iter()
        .filter_map(|grid| grid.decode().ok())
        .map(|(_, content)| content)
        .collect()
}

#[test]
fn url_without_logo_decodes() {
    let dir = tempdir().unwrap();
    let mut request = QrRequest::new("https://example.com");
    request.mode = PayloadMode::Url;
    request.out = dir.path().join("plain.png");

    let generated = generate(&request).unwrap();
    assert!(request.out.exists());

    // Square: (modules + 2 * 4) * 10px, plus the frame padding on each side
    let img = image::open(&request.out).unwrap();
    assert_eq!(img.width(), img.height());
    let qr_side = (1..=img.width() / 10)
        .map(|m| m * 10)
        .find(|q| q + 2 * ((*q as f32 * 0.03).round() as u32) == img.width())
        .expect("output width is a framed whole-module QR");
    let modules = qr_side / 10 - 8;
    assert!(modules >= 21 && (modules - 21) % 4 == 0, "{} modules", modules);
    assert!(generated.rendered.warnings.is_empty());

    assert_eq!(decode(&request.out), vec!["https://example.com".to_string()]);
}

#[test]
fn bare_domain_gets_scheme() {
    let dir = tempdir().unwrap();
    let mut request = QrRequest::new("  example.com ");
    request.mode = PayloadMode::Url;
    request.frame = false;
    request.out = dir.path().join("scheme.png");

    generate(&request).unwrap();
    assert_eq!(decode(&request.out), vec!["https://example.com".to_string()]);
}

#[test]
fn logo_overlay_still_decodes() {
    let dir = tempdir().unwrap();
    let logo = dir.path().join("logo.png");
    RgbaImage::from_fn(120, 80, |x, _| {
        if x < 60 {
            Rgba([29, 78, 216, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
    .save(&logo)
    .unwrap();

    let mut request = QrRequest::new("https://example.com");
    request.logo = Some(logo);
    request.auto_style = true;
    request.out = dir.path().join("branded.png");

    let generated = generate(&request).unwrap();
    assert!(generated.rendered.warnings.is_empty());
    assert_eq!(generated.rendered.style.unwrap().fill.name, "royal_blue");

    assert_eq!(decode(&request.out), vec!["https://example.com".to_string()]);
}

#[test]
fn auto_style_with_white_logo_uses_fallback() {
    let dir = tempdir().unwrap();
    let logo = dir.path().join("white.png");
    RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]))
        .save(&logo)
        .unwrap();

    let mut request = QrRequest::new("https://example.com");
    request.mode = PayloadMode::Url;
    request.logo = Some(logo);
    request.auto_style = true;
    request.out = dir.path().join("fallback.png");

    let generated = generate(&request).unwrap();
    let rendered = &generated.rendered;
    assert_eq!(rendered.fill, BRAND_PALETTE.get("deep_accent").unwrap());
    assert_eq!(rendered.background, BRAND_PALETTE.get("bg_main").unwrap());

    // Quiet zone just inside the frame padding is bg_main
    let img = image::open(&request.out).unwrap().to_rgba8();
    let inside = img.width() / 2;
    assert_eq!(Colour::from(*img.get_pixel(inside, 12)), Colour::WHITE);

    assert_eq!(decode(&request.out), vec!["https://example.com".to_string()]);
}

#[test]
fn missing_logo_is_not_fatal() {
    let dir = tempdir().unwrap();
    let mut request = QrRequest::new("hello");
    request.logo = Some(dir.path().join("nowhere.png"));
    request.out = dir.path().join("degraded.png");

    let generated = generate(&request).unwrap();
    assert_eq!(generated.rendered.warnings.len(), 1);
    assert_eq!(decode(&request.out), vec!["hello".to_string()]);
}

#[test]
fn jpeg_output_decodes() {
    let dir = tempdir().unwrap();
    let mut request = QrRequest::new("tel-test");
    request.out = dir.path().join("code.jpg");

    generate(&request).unwrap();
    assert_eq!(decode(&request.out), vec!["tel-test".to_string()]);
}
