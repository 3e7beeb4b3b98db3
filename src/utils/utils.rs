use std::io;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use crate::models::conversion::BatchReport;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            match ProgressStyle::default_bar().template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}") {
                Ok(style) => pb.set_style(style.progress_chars("##-")),
                Err(e) => log::warn!("進度條樣式無效，使用預設樣式：{}", e),
            }
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    /// 輸出一行進度訊息到 stdout；進度條顯示時暫時收起進度條
    pub fn line(&self, msg: &str) {
        self.pb.suspend(|| println!("{}", msg));
    }

    pub fn update(&self, msg: String) {
        self.pb.set_message(msg);
    }

    pub fn advance(&self) {
        self.pb.inc(1);
    }

    pub fn finish(&self, succeeded: usize, total: usize) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(format!(
            "完成 {}/{}，耗時 {:.1} 秒",
            succeeded,
            total,
            self.start.elapsed().as_secs_f64()
        ));
    }
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressManager {
    ProgressManager::new(total, no_progress)
}

/// 產生轉換摘要：成功數、失敗數與失敗清單
pub fn format_summary(report: &BatchReport) -> String {
    let total = report.outcomes.len();
    let mut summary = format!(
        "轉換完成（{}）：成功 {}/{}，失敗 {}",
        report.converter,
        report.succeeded_count(),
        total,
        report.failed_count()
    );
    if report.failed_count() > 0 {
        summary.push_str("\n失敗的檔案：");
        for outcome in report.failures() {
            summary.push_str(&format!(
                "\n  - {}：{}",
                outcome.file_name(),
                outcome.error_message.as_deref().unwrap_or("未知錯誤")
            ));
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::conversion::ConversionOutcome;
    use crate::models::converter::ConverterKind;
    use std::path::Path;

    #[test]
    fn summary_lists_failures_with_reasons() {
        let report = BatchReport {
            converter: ConverterKind::Inkscape,
            outcomes: vec![
                ConversionOutcome::success(Path::new("a.svg"), Path::new("a.png")),
                ConversionOutcome::failure(Path::new("b.svg"), Path::new("b.png"), "結束碼 1"),
            ],
        };
        let summary = format_summary(&report);
        assert!(summary.starts_with("轉換完成（inkscape）：成功 1/2，失敗 1"));
        assert!(summary.contains("  - b.svg：結束碼 1"));
        assert!(!summary.contains("a.svg"));
    }

    #[test]
    fn summary_without_failures_is_single_line() {
        let report = BatchReport {
            converter: ConverterKind::RsvgConvert,
            outcomes: vec![ConversionOutcome::success(Path::new("a.svg"), Path::new("a.png"))],
        };
        assert_eq!(format_summary(&report).lines().count(), 1);
    }
}
