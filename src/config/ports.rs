use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::models::conversion::{BatchInput, BatchReport, ConversionOptions};

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input_dir: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub scale: Option<f64>,
    pub timeout: Option<Duration>,
    pub no_progress: bool,
}

impl AppConfig {
    pub fn batch_input(&self) -> BatchInput {
        BatchInput {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            options: ConversionOptions {
                width: self.width,
                height: self.height,
                scale: self.scale,
                timeout: self.timeout,
            },
            no_progress: self.no_progress,
        }
    }
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> Result<BatchReport>;
}
