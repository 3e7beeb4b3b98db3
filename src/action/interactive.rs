use dialoguer::{Confirm, Input};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::config::{validate_input_dir, validate_scale};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::error::{ConvertError, Result};
use crate::models::conversion::BatchReport;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::ConversionAdapter;
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> Result<BatchReport> {
    setup_logging("info")?;
    println!("=== 歡迎使用互動模式 ===");
    let input = get_input_path()?;
    let output = get_output_path()?;
    let use_default_config = get_default_config_option()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("使用預設配置：原始尺寸輸出，無逾時限制");
        Box::new(DefaultConfigAdapter::new(input, output))
    } else {
        Box::new(InteractiveConfigAdapter::new(input, output))
    };

    let config = ConfigService::new(config_port).get_config()?;
    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config)
}

fn prompt_error(e: dialoguer::Error) -> ConvertError {
    ConvertError::Io(io::Error::new(io::ErrorKind::Other, format!("輸入失敗: {}", e)))
}

pub fn get_default_config_option() -> Result<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（原始尺寸輸出，僅需指定輸入和輸出路徑）")
        .default(true)
        .interact()
        .map_err(prompt_error)
}

pub fn get_input_path() -> Result<String> {
    Input::new()
        .with_prompt("請輸入含有 SVG 檔案的資料夾（例如：./icons）")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if Path::new(input).is_dir() {
                Ok(())
            } else {
                Err(format!("資料夾 '{}' 不存在", input))
            }
        })
        .interact_text()
        .map_err(prompt_error)
}

pub fn get_output_path() -> Result<Option<String>> {
    let output: String = Input::new()
        .with_prompt("輸入輸出資料夾（留空則與輸入資料夾相同）")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    Ok(non_empty(&output).map(str::to_string))
}

fn prompt_optional<T: std::str::FromStr>(prompt: &str) -> Result<Option<T>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            match non_empty(input) {
                None => Ok(()),
                Some(v) => v.parse::<T>().map(|_| ()).map_err(|_| format!("無效的數值：{}", v)),
            }
        })
        .interact_text()
        .map_err(prompt_error)?;
    match non_empty(&value) {
        None => Ok(None),
        Some(v) => v
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConvertError::InvalidConfig(format!("無效的數值：{}", v))),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

// 互動式配置適配器
pub struct InteractiveConfigAdapter {
    input: String,
    output: Option<String>,
}

impl InteractiveConfigAdapter {
    pub fn new(input: String, output: Option<String>) -> Self {
        InteractiveConfigAdapter { input, output }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        let input_dir = validate_input_dir(&self.input)?.to_path_buf();
        let width = prompt_optional::<u32>("輸出寬度（像素，留空則不指定）")?.filter(|w| *w > 0);
        let height = prompt_optional::<u32>("輸出高度（像素，留空則不指定）")?.filter(|h| *h > 0);
        let scale = validate_scale(prompt_optional::<f64>("縮放比例（留空則不縮放）")?)?;
        let timeout = prompt_optional::<u64>("單一檔案逾時秒數（留空則不限制）")?.filter(|t| *t > 0);

        Ok(AppConfig {
            input_dir,
            output_dir: self.output.as_ref().map(PathBuf::from),
            width,
            height,
            scale,
            timeout: timeout.map(Duration::from_secs),
            no_progress: false,
        })
    }
}
