use gray_raster::buffer::pgm::{load_pgm, save_pgm};
use gray_raster::config;
use gray_raster::ImageOp;

use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: filter_demo <config.json>".to_string())?;
    let config = config::load_config(Path::new(&config_path))?;

    let mut image = load_pgm(&config.input_path)?;
    println!(
        "loaded {} ({}x{}, max sample {})",
        config.input_path.display(),
        image.width(),
        image.height(),
        image.max_sample()
    );

    for stage in &config.stages {
        image = stage.build().process(&image);
        println!("{}: {}x{}", stage.name(), image.width(), image.height());
    }

    if let Some(path) = &config.output.image_out {
        save_pgm(&image, path)?;
        println!("result written to {}", path.display());
    }
    Ok(())
}
