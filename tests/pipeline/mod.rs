use fontheader::{run, CollisionPolicy, ConvertError, ConverterConfig, EmitOptions};
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

const HEADER: &str = "/* Auto-generated */\n#pragma once\n#include \"core.h\"\n";

/// Fresh `fonts/` directory plus output path under the system temp dir.
fn workspace(tag: &str) -> (PathBuf, ConverterConfig) {
    let root = std::env::temp_dir().join(format!(
        "fontheader-pipeline-{tag}-{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(root.join("fonts")).unwrap();
    let config = ConverterConfig {
        input_dir: root.join("fonts"),
        output_path: root.join("assets.h"),
        ..Default::default()
    };
    (root, config)
}

fn save_gray(dir: &Path, name: &str, width: u32, height: u32, intensities: &[u8]) {
    let image = GrayImage::from_raw(width, height, intensities.to_vec()).unwrap();
    image.save(dir.join(name)).unwrap();
}

#[test]
fn empty_directory_writes_header_only() {
    let (root, config) = workspace("empty");
    let report = run(&config).unwrap();
    assert!(report.fonts.is_empty());
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), HEADER);
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn two_by_two_font_block() {
    let (root, config) = workspace("two-by-two");
    save_gray(&config.input_dir, "my-font 1.png", 2, 2, &[255, 0, 10, 255]);

    let report = run(&config).unwrap();
    assert_eq!(report.fonts.len(), 1);
    assert_eq!(report.fonts[0].name, "MY_FONT_1_PNG");
    assert_eq!((report.fonts[0].width, report.fonts[0].height), (2, 2));

    let expected = format!(
        "{HEADER}\n\
         const U32 FONT_MY_FONT_1_PNG_WIDTH = 2;\n\
         const U32 FONT_MY_FONT_1_PNG_HEIGHT = 2;\n\
         const U8 FONT_MY_FONT_1_PNG_BYTES[] = {{\n\
         \x20   0xff, 0x00, \n\
         \x20   0x00, 0xff, \n\
         \x20   0x00, 0xff, \n\
         }};\n"
    );
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), expected);
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn corrected_layout_drops_repeated_row() {
    let (root, mut config) = workspace("no-dup");
    config.emit = EmitOptions {
        duplicate_last_row: false,
        ..Default::default()
    };
    save_gray(&config.input_dir, "a.png", 1, 2, &[0, 255]);

    run(&config).unwrap();
    let text = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(text.matches("    0xff, \n").count(), 1);
    assert!(text.ends_with("    0x00, \n    0xff, \n};\n"));
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn blocks_follow_sorted_filename_order() {
    let (root, config) = workspace("sorted");
    for name in ["zeta.png", "Alpha.png", "beta.png", "alpha.png"] {
        save_gray(&config.input_dir, name, 1, 1, &[0]);
    }

    let report = run(&config).unwrap();
    let names: Vec<&str> = report.fonts.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, vec!["Alpha.png", "alpha.png", "beta.png", "zeta.png"]);

    let text = fs::read_to_string(&config.output_path).unwrap();
    let position = |decl: &str| text.find(decl).unwrap();
    assert!(position("FONT_ALPHA_PNG_WIDTH") < position("FONT_BETA_PNG_WIDTH"));
    assert!(position("FONT_BETA_PNG_WIDTH") < position("FONT_ZETA_PNG_WIDTH"));
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn reruns_are_byte_identical() {
    let (root, config) = workspace("rerun");
    save_gray(&config.input_dir, "a.png", 3, 1, &[255, 128, 0]);
    save_gray(&config.input_dir, "b.bmp", 1, 3, &[0, 255, 254]);

    run(&config).unwrap();
    let first = fs::read(&config.output_path).unwrap();
    run(&config).unwrap();
    let second = fs::read(&config.output_path).unwrap();
    assert_eq!(first, second);
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn decode_failure_keeps_previous_output() {
    let (root, config) = workspace("decode-failure");
    save_gray(&config.input_dir, "a.png", 1, 1, &[0]);
    run(&config).unwrap();
    let before = fs::read(&config.output_path).unwrap();

    fs::write(config.input_dir.join("broken.png"), b"not an image").unwrap();
    save_gray(&config.input_dir, "c.png", 1, 1, &[255]);

    let err = run(&config).unwrap_err();
    assert!(matches!(err, ConvertError::Decode { ref path, .. } if path.ends_with("broken.png")));
    assert_eq!(fs::read(&config.output_path).unwrap(), before);
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn non_image_entries_are_skipped_unless_filter_disabled() {
    let (root, mut config) = workspace("filter");
    save_gray(&config.input_dir, "a.png", 1, 1, &[0]);
    fs::write(config.input_dir.join("README.md"), b"fonts live here").unwrap();

    let report = run(&config).unwrap();
    assert_eq!(report.fonts.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].ends_with("README.md"));

    config.filter_extensions = false;
    let before = fs::read(&config.output_path).unwrap();
    let err = run(&config).unwrap_err();
    assert!(matches!(err, ConvertError::Decode { .. }));
    assert_eq!(fs::read(&config.output_path).unwrap(), before);
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn colliding_identifiers_follow_policy() {
    let (root, mut config) = workspace("collisions");
    save_gray(&config.input_dir, "a b.png", 1, 1, &[0]);
    save_gray(&config.input_dir, "a-b.png", 1, 1, &[255]);

    let report = run(&config).unwrap();
    assert_eq!(report.fonts.len(), 2);
    assert_eq!(report.collisions, vec!["A_B_PNG".to_string()]);
    let text = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(text.matches("const U32 FONT_A_B_PNG_WIDTH = 1;").count(), 2);

    config.collisions = CollisionPolicy::Error;
    let err = run(&config).unwrap_err();
    match err {
        ConvertError::NameCollision {
            name,
            first,
            second,
        } => {
            assert_eq!(name, "A_B_PNG");
            assert_eq!(first, "a b.png");
            assert_eq!(second, "a-b.png");
        }
        other => panic!("Expected NameCollision, got {other}"),
    }
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn color_images_are_reduced_to_luma() {
    let (root, config) = workspace("color");
    let mut rgb = RgbImage::new(3, 1);
    rgb.put_pixel(0, 0, Rgb([255, 255, 255]));
    rgb.put_pixel(1, 0, Rgb([254, 255, 255]));
    rgb.put_pixel(2, 0, Rgb([200, 255, 255]));
    rgb.save(config.input_dir.join("rgb.png")).unwrap();

    run(&config).unwrap();
    let text = fs::read_to_string(&config.output_path).unwrap();
    assert!(text.contains("    0xff, 0xff, 0x00, \n"));
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn sixteen_bit_gray_is_narrowed() {
    let (root, config) = workspace("gray16");
    let image = image::ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(2, 1, vec![65535, 65000])
        .unwrap();
    image.save(config.input_dir.join("deep.png")).unwrap();

    run(&config).unwrap();
    let text = fs::read_to_string(&config.output_path).unwrap();
    assert!(text.contains("    0xff, 0x00, \n"));
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn missing_input_directory_fails_without_output() {
    let (root, mut config) = workspace("missing");
    config.input_dir = root.join("does-not-exist");

    let err = run(&config).unwrap_err();
    assert!(matches!(err, ConvertError::ReadDir { .. }));
    assert!(!config.output_path.exists());
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn unwritable_output_reports_path() {
    let (root, mut config) = workspace("unwritable");
    config.output_path = root.join("no-such-dir").join("assets.h");

    let err = run(&config).unwrap_err();
    match &err {
        ConvertError::Write { path, .. } => assert_eq!(path, &config.output_path),
        other => panic!("Expected Write error, got {other}"),
    }
    assert!(err.to_string().contains("assets.h"));
    fs::remove_dir_all(&root).unwrap();
}
