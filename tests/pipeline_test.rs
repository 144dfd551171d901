//! End-to-end pipeline tests: PNG decode -> dither -> PNG encode.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use palette_dither::{dither_in_place, Palette, Rgb};
use palettize::image_io;

fn write_png(path: &Path, width: u32, height: u32, color_type: png::ColorType, data: &[u8]) {
    let file = File::create(path).unwrap();
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
}

/// A 4x4 RGBA gradient with varied alpha.
fn gradient_rgba() -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..16u16 {
        let v = (i * 17) as u8;
        data.extend_from_slice(&[v, 255 - v, v / 2, (i * 13) as u8]);
    }
    data
}

#[test]
fn test_round_trip_output_is_palette_closed() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_png(&input, 4, 4, png::ColorType::Rgba, &gradient_rgba());

    let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#FF0000", "#0000FF"]).unwrap();
    let mut buffer = image_io::decode_png(&input).unwrap();
    dither_in_place(&mut buffer, &palette);
    image_io::encode_png(&output, &buffer).unwrap();

    let reread = image_io::decode_png(&output).unwrap();
    assert_eq!(reread.width(), 4);
    assert_eq!(reread.height(), 4);
    for px in reread.as_bytes().chunks_exact(4) {
        let color = Rgb::new(px[0], px[1], px[2]);
        assert!(
            palette.colors().contains(&color),
            "output pixel {:?} not in palette",
            color
        );
        assert_eq!(px[3], 255, "output alpha must be opaque");
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    write_png(&input, 4, 4, png::ColorType::Rgba, &gradient_rgba());

    let palette = Palette::from_hex(&["#000", "#FFF"]).unwrap();

    let mut first = image_io::decode_png(&input).unwrap();
    dither_in_place(&mut first, &palette);
    let mut second = image_io::decode_png(&input).unwrap();
    dither_in_place(&mut second, &palette);

    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_grayscale_input_is_expanded_to_rgba() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("gray.png");
    let data: Vec<u8> = (0..16u8).map(|i| i * 16).collect();
    write_png(&input, 4, 4, png::ColorType::Grayscale, &data);

    let buffer = image_io::decode_png(&input).unwrap();
    assert_eq!(buffer.width(), 4);
    assert_eq!(buffer.height(), 4);
    assert_eq!(buffer.as_bytes().len(), 4 * 4 * 4);
    for (i, px) in buffer.as_bytes().chunks_exact(4).enumerate() {
        let v = (i * 16) as u8;
        assert_eq!(&px[0..3], &[v, v, v], "gray value must replicate to RGB");
    }
}

#[test]
fn test_rgb_input_without_alpha_is_expanded() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("rgb.png");
    let mut data = Vec::new();
    for i in 0..16u16 {
        data.extend_from_slice(&[(i * 17) as u8, 0, 128]);
    }
    write_png(&input, 4, 4, png::ColorType::Rgb, &data);

    let buffer = image_io::decode_png(&input).unwrap();
    assert_eq!(buffer.as_bytes().len(), 4 * 4 * 4);
    assert_eq!(buffer.get(1, 0), Rgb::new(17, 0, 128));
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = image_io::decode_png(&dir.path().join("nope.png"));
    assert!(matches!(result, Err(image_io::ImageIoError::Io(_))));
}

#[test]
fn test_corrupt_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.png");
    std::fs::write(&input, b"definitely not a png").unwrap();
    let result = image_io::decode_png(&input);
    assert!(matches!(result, Err(image_io::ImageIoError::Decode(_))));
}

#[test]
fn test_two_by_two_reference_image_through_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let data = vec![
        10, 10, 10, 255, //
        250, 250, 250, 255, //
        10, 10, 10, 255, //
        250, 250, 250, 255,
    ];
    write_png(&input, 2, 2, png::ColorType::Rgba, &data);

    let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
    let mut buffer = image_io::decode_png(&input).unwrap();
    dither_in_place(&mut buffer, &palette);
    image_io::encode_png(&output, &buffer).unwrap();

    let reread = image_io::decode_png(&output).unwrap();
    assert_eq!(
        reread.as_bytes(),
        &[
            0, 0, 0, 255, //
            255, 255, 255, 255, //
            0, 0, 0, 255, //
            255, 255, 255, 255,
        ]
    );
}
