use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::action::interactive::process_interactive_mode;
use crate::config::config::{validate_input_dir, validate_scale, validate_timeout, Cli};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::error::Result;
use crate::models::conversion::BatchReport;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::ConversionAdapter;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> Result<BatchReport> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> Result<BatchReport> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    // 只提供輸入與輸出路徑時使用預設配置
    let is_default_config = cli.width.is_none()
        && cli.height.is_none()
        && cli.scale.is_none()
        && cli.timeout.is_none()
        && !cli.no_progress;

    let config_port: Box<dyn ConfigPort> = if is_default_config {
        log::info!("未提供尺寸參數，使用預設配置：原始尺寸輸出");
        Box::new(DefaultConfigAdapter::new(cli.input.clone(), cli.output.clone()))
    } else {
        Box::new(CliConfigAdapter::new(cli.clone()))
    };

    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let report = conversion_port.execute(config.clone());

    // 若啟用 --show-config，在轉換後顯示配置
    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    report
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        let input_dir = validate_input_dir(&self.cli.input)?.to_path_buf();
        let scale = validate_scale(self.cli.scale)?;
        let timeout = validate_timeout(self.cli.timeout)?;

        if scale.is_some() && (self.cli.width.is_some() || self.cli.height.is_some()) {
            log::warn!(
                "同時指定縮放比例與寬高：寬高將乘上縮放比例 {:?}，width={:?}, height={:?}",
                scale,
                self.cli.width,
                self.cli.height
            );
        }

        Ok(AppConfig {
            input_dir,
            output_dir: self.cli.output.as_ref().map(PathBuf::from),
            width: self.cli.width,
            height: self.cli.height,
            scale,
            timeout: timeout.map(Duration::from_secs),
            no_progress: self.cli.no_progress,
        })
    }
}
