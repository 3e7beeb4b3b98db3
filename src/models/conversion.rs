use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::converter::ConverterKind;

/// 所有檔案共用的轉換選項
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub scale: Option<f64>,
    pub timeout: Option<Duration>,
}

/// 單一檔案的轉換請求，交由轉換器的參數模板處理
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub scale: Option<f64>,
}

/// 批次轉換的輸入
#[derive(Debug, Clone)]
pub struct BatchInput {
    pub input_dir: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub options: ConversionOptions,
    pub no_progress: bool,
}

/// 單一檔案的轉換結果，建立後不再修改
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub succeeded: bool,
    pub error_message: Option<String>,
}

impl ConversionOutcome {
    pub fn success(input_path: &Path, output_path: &Path) -> Self {
        ConversionOutcome {
            input_path: input_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
            succeeded: true,
            error_message: None,
        }
    }

    pub fn failure(input_path: &Path, output_path: &Path, message: impl Into<String>) -> Self {
        ConversionOutcome {
            input_path: input_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
            succeeded: false,
            error_message: Some(message.into()),
        }
    }

    pub fn file_name(&self) -> String {
        self.input_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.input_path.display().to_string())
    }
}

/// 整批轉換的報告
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub converter: ConverterKind,
    pub outcomes: Vec<ConversionOutcome>,
}

impl BatchReport {
    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.succeeded_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ConversionOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded)
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(statuses: &[bool]) -> BatchReport {
        let outcomes = statuses
            .iter()
            .enumerate()
            .map(|(i, ok)| {
                let input = PathBuf::from(format!("in/{}.svg", i));
                let output = PathBuf::from(format!("out/{}.png", i));
                if *ok {
                    ConversionOutcome::success(&input, &output)
                } else {
                    ConversionOutcome::failure(&input, &output, "boom")
                }
            })
            .collect();
        BatchReport { converter: ConverterKind::RsvgConvert, outcomes }
    }

    #[test]
    fn counts_success_and_failure() {
        let report = report(&[true, false, true, false, false]);
        assert_eq!(report.succeeded_count(), 2);
        assert_eq!(report.failed_count(), 3);
        assert!(!report.all_succeeded());
        let failed: Vec<String> = report.failures().map(|o| o.file_name()).collect();
        assert_eq!(failed, vec!["1.svg", "3.svg", "4.svg"]);
    }

    #[test]
    fn empty_report_counts_as_success() {
        let report = report(&[]);
        assert!(report.all_succeeded());
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn failure_keeps_message() {
        let outcome = ConversionOutcome::failure(Path::new("a.svg"), Path::new("a.png"), "bad");
        assert!(!outcome.succeeded);
        assert_eq!(outcome.error_message.as_deref(), Some("bad"));
    }
}
