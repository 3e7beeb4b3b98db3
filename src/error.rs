use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 轉換流程中所有可回報的錯誤
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("找不到可用的 SVG 轉換器，請安裝以下其中一個：\n{hints}")]
    NoConverterFound { hints: String },

    #[error("輸入目錄 '{}' 中沒有 SVG 檔案", .0.display())]
    NoInputFiles(PathBuf),

    #[error("輸入目錄 '{}' 無效：{reason}", .path.display())]
    InputDirectory { path: PathBuf, reason: String },

    #[error("輸出目錄 '{}' 無法使用：{reason}", .path.display())]
    OutputDirectory { path: PathBuf, reason: String },

    #[error("{converter} 不支援選項：{option}")]
    UnsupportedOption {
        converter: &'static str,
        option: String,
    },

    #[error("無效的設定：{0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
