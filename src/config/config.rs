use clap::Parser;
use std::path::Path;

use crate::error::{ConvertError, Result};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "svg_to_png",
    about = "將資料夾中的 SVG 檔案批次轉換為 PNG",
    long_about = "將資料夾中的所有 SVG 檔案批次轉換為 PNG，轉換工作交由系統已安裝的 Inkscape 或 rsvg-convert 執行（優先使用 Inkscape）。\n不帶任何參數執行時進入互動模式。\n使用 `--help` 查看詳細用法。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// 含有 SVG 檔案的資料夾
    pub input: String,
    /// 輸出資料夾（預設與輸入資料夾相同）
    #[arg(short, long)]
    pub output: Option<String>,
    /// 輸出寬度（像素）
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,
    /// 輸出高度（像素）
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,
    /// 縮放比例；與寬高同時指定時會乘上寬高
    #[arg(short, long)]
    pub scale: Option<f64>,
    /// 單一檔案轉換的逾時秒數
    #[arg(long)]
    pub timeout: Option<u64>,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

pub fn validate_input_dir(input: &str) -> Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(ConvertError::InputDirectory {
            path: path.to_path_buf(),
            reason: "路徑不存在".to_string(),
        });
    }
    if !path.is_dir() {
        log::error!("輸入路徑不是目錄：{}", input);
        return Err(ConvertError::InputDirectory {
            path: path.to_path_buf(),
            reason: "不是目錄".to_string(),
        });
    }
    Ok(path)
}

pub fn validate_scale(scale: Option<f64>) -> Result<Option<f64>> {
    match scale {
        Some(s) if !s.is_finite() || s <= 0.0 => Err(ConvertError::InvalidConfig(format!(
            "縮放比例必須為正數，收到 {}",
            s
        ))),
        other => Ok(other),
    }
}

pub fn validate_timeout(timeout: Option<u64>) -> Result<Option<u64>> {
    match timeout {
        Some(0) => Err(ConvertError::InvalidConfig("逾時秒數必須大於 0".to_string())),
        other => Ok(other),
    }
}
