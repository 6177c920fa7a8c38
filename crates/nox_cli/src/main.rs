//! Nox command-line renderer.
//!
//! Renders one of the built-in scenes and writes the image to disk.
//! Run with: cargo run --release -- --output night.ppm

use anyhow::{bail, Context, Result};
use nox_renderer::{render, save_image, RenderConfig, SceneKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;

const USAGE: &str = "\
Usage: nox [OPTIONS]

Options:
  --config <FILE>    Load render settings from a JSON file
  --output <FILE>    Output image (default: image.ppm; non-.ppm uses the extension's format)
  --scene <NAME>     Scene to render: night | swirl
  --width <N>        Image width in pixels
  --samples <N>      Samples per pixel
  --depth <N>        Maximum bounce depth
  --seed <N>         Seed for scene layout and sampling
  -h, --help         Print this help";

/// Command-line arguments; every render setting overrides the config file.
#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    scene: Option<SceneKind>,
    width: Option<u32>,
    samples: Option<u32>,
    depth: Option<u32>,
    seed: Option<u64>,
    help: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            if flag == "-h" || flag == "--help" {
                parsed.help = true;
                continue;
            }

            let Some(value) = args.next() else {
                bail!("Missing value for {}", flag);
            };

            match flag.as_str() {
                "--config" => parsed.config = Some(PathBuf::from(value)),
                "--output" => parsed.output = Some(PathBuf::from(value)),
                "--scene" => parsed.scene = Some(value.parse()?),
                "--width" => parsed.width = Some(parse_number(&flag, &value)?),
                "--samples" => parsed.samples = Some(parse_number(&flag, &value)?),
                "--depth" => parsed.depth = Some(parse_number(&flag, &value)?),
                "--seed" => parsed.seed = Some(parse_number(&flag, &value)?),
                _ => bail!("Unknown argument: {}\n\n{}", flag, USAGE),
            }
        }

        Ok(parsed)
    }

    fn apply(&self, config: &mut RenderConfig) {
        if let Some(scene) = self.scene {
            config.scene = scene;
        }
        if let Some(width) = self.width {
            config.image_width = width;
        }
        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("Invalid value for {}: {}", flag, value))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse(env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    args.apply(&mut config);
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Starting Nox: {} scene, seed {}", config.scene, seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let world = config.scene.build(&mut rng);
    let camera = config.camera();
    let image = render(&camera, &world, &config, &mut rng);

    let output = args.output.unwrap_or_else(|| PathBuf::from("image.ppm"));
    save_image(&image, &output)
        .with_context(|| format!("Failed to save image to {}", output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&[
            "--config", "night.json", "--output", "out.png", "--scene", "swirl", "--width",
            "320", "--samples", "8", "--depth", "10", "--seed", "42",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("night.json")));
        assert_eq!(args.output, Some(PathBuf::from("out.png")));
        assert_eq!(args.scene, Some(SceneKind::Swirl));
        assert_eq!(args.width, Some(320));
        assert_eq!(args.samples, Some(8));
        assert_eq!(args.depth, Some(10));
        assert_eq!(args.seed, Some(42));
        assert!(!args.help);
    }

    #[test]
    fn test_help() {
        assert!(parse(&["--help"]).unwrap().help);
        assert!(parse(&["-h"]).unwrap().help);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse(&["--width"]).is_err());
        assert!(parse(&["--width", "wide"]).is_err());
        assert!(parse(&["--scene", "teapot"]).is_err());
        assert!(parse(&["--frobnicate", "1"]).is_err());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let args = parse(&["--width", "300", "--samples", "4", "--seed", "7"]).unwrap();
        let mut config = RenderConfig::default();
        args.apply(&mut config);

        assert_eq!(config.image_width, 300);
        assert_eq!(config.image_height(), 200);
        assert_eq!(config.samples_per_pixel, 4);
        assert_eq!(config.max_depth, 50);
        assert_eq!(config.seed, Some(7));
    }
}
