//! JSON-backed pipeline configuration for the demo binaries.

use crate::ops::convolution::{Convolution, Kernel, Scaling};
use crate::ops::point::{BrightnessContrast, Gamma};
use crate::ops::ImageOp;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub image_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    pub stages: Vec<StageConfig>,
}

/// One processing stage; the tag names the operator it builds.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StageConfig {
    MeanBlur,
    GaussianBlur,
    HorizontalSobel,
    VerticalSobel,
    BrightnessContrast { gain: f64, bias: f64 },
    Gamma { gamma: f64 },
}

impl StageConfig {
    /// Instantiate the operator this stage describes.
    pub fn build(&self) -> Box<dyn ImageOp> {
        match *self {
            StageConfig::MeanBlur => {
                Box::new(Convolution::new(Kernel::mean_blur_3x3(), Scaling::MeanBlur))
            }
            StageConfig::GaussianBlur => {
                Box::new(Convolution::new(Kernel::gaussian_3x3(), Scaling::GaussianBlur))
            }
            StageConfig::HorizontalSobel => Box::new(Convolution::new(
                Kernel::sobel_horizontal_3x3(),
                Scaling::HorizontalSobel,
            )),
            StageConfig::VerticalSobel => Box::new(Convolution::new(
                Kernel::sobel_vertical_3x3(),
                Scaling::VerticalSobel,
            )),
            StageConfig::BrightnessContrast { gain, bias } => {
                Box::new(BrightnessContrast::new(gain, bias))
            }
            StageConfig::Gamma { gamma } => Box::new(Gamma::new(gamma)),
        }
    }

    /// Stable name used in demo summaries.
    pub fn name(&self) -> &'static str {
        match self {
            StageConfig::MeanBlur => "mean_blur",
            StageConfig::GaussianBlur => "gaussian_blur",
            StageConfig::HorizontalSobel => "horizontal_sobel",
            StageConfig::VerticalSobel => "vertical_sobel",
            StageConfig::BrightnessContrast { .. } => "brightness_contrast",
            StageConfig::Gamma { .. } => "gamma",
        }
    }
}

pub fn load_config(path: &Path) -> Result<PipelineConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: PipelineConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelBuffer;

    #[test]
    fn full_pipeline_config_parses() {
        let json = r#"{
            "input_path": "in.pgm",
            "output": { "image_out": "out.pgm" },
            "stages": [
                { "op": "mean_blur" },
                { "op": "gaussian_blur" },
                { "op": "horizontal_sobel" },
                { "op": "vertical_sobel" },
                { "op": "brightness_contrast", "gain": 1.2, "bias": -5.0 },
                { "op": "gamma", "gamma": 0.5 }
            ]
        }"#;
        let config: PipelineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.input_path, PathBuf::from("in.pgm"));
        assert_eq!(config.output.image_out, Some(PathBuf::from("out.pgm")));
        assert_eq!(config.stages.len(), 6);
        assert_eq!(config.stages[0].name(), "mean_blur");
        assert_eq!(config.stages[5].name(), "gamma");
    }

    #[test]
    fn output_section_is_optional() {
        let json = r#"{ "input_path": "in.pgm", "stages": [] }"#;
        let config: PipelineConfig = serde_json::from_str(json).unwrap();
        assert!(config.output.image_out.is_none());
    }

    #[test]
    fn unknown_stage_tags_are_rejected() {
        let json = r#"[{ "op": "sharpen" }]"#;
        assert!(serde_json::from_str::<Vec<StageConfig>>(json).is_err());
    }

    #[test]
    fn built_stage_runs_as_an_operator() {
        let stage: StageConfig = serde_json::from_str(r#"{ "op": "mean_blur" }"#).unwrap();
        let mut src = PixelBuffer::new(6, 6);
        for row in 0..6 {
            for col in 0..6 {
                src.set_pixel(row, col, 90);
            }
        }
        let dst = stage.build().process(&src);
        assert_eq!((dst.width(), dst.height()), (6, 6));
        assert_eq!(dst.at(3, 3), 90);
    }

    #[test]
    fn missing_config_file_reports_the_path() {
        let err = load_config(Path::new("/nonexistent/pipeline.json")).unwrap_err();
        assert!(err.contains("/nonexistent/pipeline.json"));
    }
}
