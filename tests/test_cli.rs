//! # CLI Tests
//!
//! Drives the `mip-atlas` binary to check argument handling and exit codes.
//! A full 8192x8192 build needs about a gigabyte of memory, so that run is
//! `#[ignore]`d; use `cargo test --release -- --ignored` to include it.

mod common;

use common::{Fixture, load_rgba};
use image::GenericImageView;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mip-atlas"))
        .args(args)
        .output()
        .expect("spawn mip-atlas")
}

#[test]
fn test_missing_arguments_exit_non_zero() {
    let output = run(&[]);
    assert!(!output.status.success());

    let output = run(&["-i", "in.png"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--output"));
}

#[test]
fn test_missing_input_exits_non_zero_without_output() {
    let fixture = Fixture::square(4);
    let input = fixture.path("absent.png");
    let output_path = fixture.path("atlas.png");

    let output = run(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(!output_path.exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.png"));
}

#[test]
fn test_small_texture_reports_resolution_error() {
    let fixture = Fixture::square(16);
    let output_path = fixture.path("atlas.png");

    let output = run(&[
        "-i",
        fixture.input.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(!output_path.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input image is not 8K resolution (8192x8192)"));
}

#[test]
fn test_unknown_filter_is_rejected() {
    let fixture = Fixture::square(16);
    let output_path = fixture.path("atlas.png");

    let output = run(&[
        "-i",
        fixture.input.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "--filter",
        "sinc",
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid filter"));
    assert!(!output_path.exists());
}

#[test]
fn test_mitchell_with_image_backend_is_rejected() {
    let fixture = Fixture::square(16);
    let output_path = fixture.path("atlas.png");

    let output = run(&[
        "-i",
        fixture.input.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "--filter",
        "mitchell",
        "--backend",
        "image",
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("image backend"));
    assert!(!output_path.exists());
}

#[test]
#[ignore = "builds a full 8192x8192 atlas"]
fn test_eight_k_texture_builds_full_atlas() {
    let fixture = Fixture::square(8192);
    let output_path = fixture.path("out/atlas.png");
    let input = fixture.input.to_str().unwrap();
    let output_str = output_path.to_str().unwrap();

    let output = run(&["-i", input, "-o", output_str]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(input));
    assert!(stdout.contains(output_str));
    assert!(stdout.contains("Texture atlas with mipmaps saved at"));

    let atlas = load_rgba(&output_path);
    assert_eq!(atlas.dimensions(), (8192, 16384));
    assert!((0..8192).all(|x| atlas.get_pixel(x, 16383)[3] == 0));
    assert!(atlas.view(0, 0, 8192, 8192).to_image() == fixture.source);
}
