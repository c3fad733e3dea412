use chrono::Offset;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub input_height: u32,
    pub input_width: u32,
    pub input_channels: usize,
    pub accepted_extensions: Vec<String>,
    pub logger_timezone: chrono::FixedOffset,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub preview_width: f32,
}

impl Config {
    /// Shape the classifier is fed with: batch, height, width, channels.
    pub fn input_shape(&self) -> [usize; 4] {
        [
            1,
            self.input_height as usize,
            self.input_width as usize,
            self.input_channels,
        ]
    }

    pub fn with_model_path(self, model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.onnx"),
            input_height: 50,
            input_width: 50,
            input_channels: 3,
            accepted_extensions: vec!["jpg".to_string(), "png".to_string(), "jpeg".to_string()],
            logger_timezone: utc(),
            window_title: "Risk Screen".to_string(),
            window_size: [1100.0, 720.0],
            preview_width: 320.0,
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
