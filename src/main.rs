use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use log::info;

use spritewalk::{describe, run, Color, Config, Platform, ScaleQuality, SdlPlatform};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sprite sheet to animate.
    #[arg(long)]
    pub sprite_sheet: Option<PathBuf>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, value_enum)]
    pub scale_quality: Option<ScaleQuality>,

    /// Transparent colour in the sheet, as RRGGBB.
    #[arg(long)]
    pub color_key: Option<Color>,

    #[arg(long)]
    pub clear_color: Option<Color>,

    #[arg(long)]
    pub no_vsync: bool,

    /// Use the software renderer.
    #[arg(long)]
    pub software: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(path) = &self.sprite_sheet {
            config.assets = vec![path.clone()];
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(quality) = self.scale_quality {
            config.scale_quality = quality;
        }
        if let Some(color) = self.color_key {
            config.color_key = color;
        }
        if let Some(color) = self.clear_color {
            config.clear_color = color;
        }
        config.renderer.vsync = !self.no_vsync;
        config.renderer.accelerated = !self.software;
        config
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();

    let mut platform = SdlPlatform::new();
    let start_time = Instant::now();

    match run(&mut platform, &config) {
        Ok(finished) => {
            let duration = start_time.elapsed();
            let fps = finished.step_count as f64 / duration.as_secs_f64();
            info!(
                "{} fps: {} frames in {:?}",
                fps, finished.step_count, duration
            );
        }
        Err(e) => {
            eprintln!("{}", describe(&e, &platform.last_error()));
            process::exit(1);
        }
    }
}
