use std::path::Path;

use log::{error, info, warn};

use crate::error::{ConvertError, Result};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{BatchInput, BatchReport, ConversionOptions, ConversionOutcome, ConversionRequest};
use crate::models::converter::ConverterSpec;
use crate::service::file::png_output_path;
use crate::service::traits::i_service::{DimensionServiceTrait, FileServiceTrait, ProcessRunnerTrait};
use crate::utils::utils::create_progress_bar;

/// 批次轉換協調器：列舉檔案、逐一呼叫外部轉換器、彙整結果
pub struct BatchOrchestrator {
    converter: ConverterSpec,
    file_service: Box<dyn FileServiceTrait>,
    runner: Box<dyn ProcessRunnerTrait>,
    dimensions: Box<dyn DimensionServiceTrait>,
}

impl BatchOrchestrator {
    pub fn new(
        converter: ConverterSpec,
        file_service: Box<dyn FileServiceTrait>,
        runner: Box<dyn ProcessRunnerTrait>,
        dimensions: Box<dyn DimensionServiceTrait>,
    ) -> Self {
        BatchOrchestrator {
            converter,
            file_service,
            runner,
            dimensions,
        }
    }

    pub fn converter(&self) -> &ConverterSpec {
        &self.converter
    }

    /// 建立單一檔案的轉換請求，需要時查詢原始尺寸
    pub fn build_request(&self, svg_path: &Path, output_path: &Path, options: &ConversionOptions) -> ConversionRequest {
        let native = if needs_native_size(options) {
            self.dimensions.native_size(svg_path)
        } else {
            None
        };
        let (width, height, scale) = plan_dimensions(options, native);
        ConversionRequest {
            input_path: svg_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
            width,
            height,
            scale,
        }
    }

    fn convert_file(&self, svg_path: &Path, output_path: &Path, options: &ConversionOptions) -> ConversionOutcome {
        match self.try_convert(svg_path, output_path, options) {
            Ok(()) => ConversionOutcome::success(svg_path, output_path),
            Err(message) => ConversionOutcome::failure(svg_path, output_path, message),
        }
    }

    fn try_convert(&self, svg_path: &Path, output_path: &Path, options: &ConversionOptions) -> std::result::Result<(), String> {
        let request = self.build_request(svg_path, output_path, options);
        let args = self.converter.arguments(&request).map_err(|e| e.to_string())?;
        let output = self
            .runner
            .run(self.converter.executable(), &args, options.timeout)
            .map_err(|e| format!("無法執行 {}：{}", self.converter.name, e))?;

        if output.timed_out {
            let secs = options.timeout.map(|t| t.as_secs_f64()).unwrap_or_default();
            return Err(format!("轉換逾時（超過 {} 秒）", secs));
        }
        if output.success {
            return Ok(());
        }
        let stderr = output.stderr.trim();
        if !stderr.is_empty() {
            Err(stderr.to_string())
        } else {
            match output.exit_code {
                Some(code) => Err(format!("{} 結束碼 {}", self.converter.name, code)),
                None => Err(format!("{} 被訊號終止", self.converter.name)),
            }
        }
    }
}

impl ConversionFacadeTrait for BatchOrchestrator {
    fn run(&self, input: BatchInput) -> Result<BatchReport> {
        let files = self
            .file_service
            .collect_svg_files(&input.input_dir)
            .map_err(|e| ConvertError::InputDirectory {
                path: input.input_dir.clone(),
                reason: e.to_string(),
            })?;

        let total = files.len();
        if total == 0 {
            warn!("{} 中沒有 SVG 檔案可處理", input.input_dir.display());
            return Err(ConvertError::NoInputFiles(input.input_dir.clone()));
        }

        let output_dir = input.output_dir.clone().unwrap_or_else(|| input.input_dir.clone());
        self.file_service
            .prepare_output_dir(&output_dir)
            .map_err(|e| ConvertError::OutputDirectory {
                path: output_dir.clone(),
                reason: e.to_string(),
            })?;

        info!(
            "找到 {} 個 SVG 檔案，使用 {} 轉換，輸出目錄：{}",
            total,
            self.converter.name,
            output_dir.display()
        );

        let progress = create_progress_bar(total as u64, input.no_progress);
        let mut outcomes = Vec::with_capacity(total);
        for (index, svg_path) in files.iter().enumerate() {
            let output_path = png_output_path(svg_path, &output_dir);
            let outcome_name = output_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            progress.update(format!("轉換檔案 {}/{}", index + 1, total));
            progress.line(&format!(
                "[{}/{}] 轉換中：{} -> {}",
                index + 1,
                total,
                svg_path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default(),
                outcome_name
            ));

            let outcome = self.convert_file(svg_path, &output_path, &input.options);
            if let Some(message) = &outcome.error_message {
                error!("轉換 {} 失敗：{}", svg_path.display(), message);
                progress.line(&format!("  失敗：{}", message));
            }
            progress.advance();
            outcomes.push(outcome);
        }

        let report = BatchReport {
            converter: self.converter.name,
            outcomes,
        };
        progress.finish(report.succeeded_count(), total);
        info!("轉換結束：成功 {}，失敗 {}", report.succeeded_count(), report.failed_count());
        Ok(report)
    }
}

fn needs_native_size(options: &ConversionOptions) -> bool {
    match (options.width, options.height) {
        (Some(_), Some(_)) => false,
        (None, None) => options.scale.is_some(),
        _ => true,
    }
}

fn usable_scale(scale: Option<f64>) -> Option<f64> {
    scale.filter(|s| s.is_finite() && *s > 0.0)
}

fn round_px(value: f64) -> u32 {
    value.round().max(1.0) as u32
}

/// 決定交給轉換器的寬、高與縮放比例
///
/// 縮放與寬高同時指定時，寬高先乘上縮放比例（無條件捨去），縮放比例隨即用掉，不再傳給轉換器。
/// 只有單邊時依原始長寬比補上另一邊；只有縮放時換算成絕對尺寸。
/// 取不到原始尺寸時保留原值，由轉換器自行處理。
pub fn plan_dimensions(
    options: &ConversionOptions,
    native: Option<(f64, f64)>,
) -> (Option<u32>, Option<u32>, Option<f64>) {
    let mut width = options.width;
    let mut height = options.height;
    let mut scale = options.scale;

    if width.is_some() || height.is_some() {
        if let Some(s) = usable_scale(scale) {
            width = width.map(|w| ((w as f64 * s) as u32).max(1));
            height = height.map(|h| ((h as f64 * s) as u32).max(1));
        }
        scale = None;
    }

    let native = native.filter(|(w, h)| *w > 0.0 && *h > 0.0);
    match (width, height, native) {
        (Some(w), None, Some((nw, nh))) => height = Some(round_px(w as f64 * nh / nw)),
        (None, Some(h), Some((nw, nh))) => width = Some(round_px(h as f64 * nw / nh)),
        (None, None, Some((nw, nh))) => {
            if let Some(s) = usable_scale(scale) {
                width = Some(round_px(nw * s));
                height = Some(round_px(nh * s));
                scale = None;
            }
        }
        _ => {}
    }
    (width, height, scale)
}
