use log::info;

use crate::config::ports::{AppConfig, ConversionPort};
use crate::error::Result;
use crate::facade::conversion_facade::BatchOrchestrator;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::BatchReport;
use crate::service::dimension::UsvgDimensionService;
use crate::service::file::FileService;
use crate::service::process::CommandRunner;
use crate::service::resolver::{ConverterResolver, PathProbe};

// 轉換執行適配器：解析主機上的轉換器並以實際服務執行批次轉換
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> Result<BatchReport> {
        let resolver = ConverterResolver::new(Box::new(PathProbe));
        let available = resolver.available();
        if !available.is_empty() {
            let names: Vec<String> = available.iter().map(|spec| spec.name.to_string()).collect();
            info!("可用的轉換器：{}", names.join(", "));
        }
        let converter = resolver.resolve()?;

        let facade: Box<dyn ConversionFacadeTrait> = Box::new(BatchOrchestrator::new(
            converter,
            Box::new(FileService::new()),
            Box::new(CommandRunner::new()),
            Box::new(UsvgDimensionService::new()),
        ));
        facade.run(config.batch_input())
    }
}
