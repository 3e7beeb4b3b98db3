use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::models::conversion::ConversionRequest;

/// Inkscape 匯出時的基準 DPI，縮放比例以此換算
const INKSCAPE_BASE_DPI: f64 = 96.0;

/// 支援的外部轉換器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterKind {
    Inkscape,
    RsvgConvert,
}

impl ConverterKind {
    /// 偵測順序固定，先找到者優先
    pub const DETECTION_ORDER: [ConverterKind; 2] = [ConverterKind::Inkscape, ConverterKind::RsvgConvert];

    /// 在 PATH 中查找的執行檔名稱
    pub fn program(&self) -> &'static str {
        match self {
            ConverterKind::Inkscape => "inkscape",
            ConverterKind::RsvgConvert => "rsvg-convert",
        }
    }

    pub fn install_hint(&self) -> &'static str {
        match self {
            ConverterKind::Inkscape => "Inkscape：brew install inkscape 或 apt install inkscape",
            ConverterKind::RsvgConvert => "librsvg：brew install librsvg 或 apt install librsvg2-bin",
        }
    }

    /// 依轉換器語法產生命令列參數
    /// # 參數
    /// - request: 已決定尺寸的轉換請求
    /// # 回傳
    /// - 參數列表；縮放比例無法表達時回傳 UnsupportedOption
    pub fn build_args(&self, request: &ConversionRequest) -> Result<Vec<String>> {
        match self {
            ConverterKind::Inkscape => self.inkscape_args(request),
            ConverterKind::RsvgConvert => self.rsvg_args(request),
        }
    }

    fn inkscape_args(&self, request: &ConversionRequest) -> Result<Vec<String>> {
        let mut args = vec![
            request.input_path.display().to_string(),
            "--export-type=png".to_string(),
            format!("--export-filename={}", request.output_path.display()),
        ];
        if let Some(width) = request.width {
            args.push(format!("--export-width={}", width));
        }
        if let Some(height) = request.height {
            args.push(format!("--export-height={}", height));
        }
        if request.width.is_none() && request.height.is_none() {
            if let Some(scale) = request.scale {
                let scale = self.passthrough_scale(scale)?;
                args.push(format!("--export-dpi={}", INKSCAPE_BASE_DPI * scale));
            }
        }
        Ok(args)
    }

    fn rsvg_args(&self, request: &ConversionRequest) -> Result<Vec<String>> {
        let mut args = vec![
            request.input_path.display().to_string(),
            "-o".to_string(),
            request.output_path.display().to_string(),
        ];
        if let Some(width) = request.width {
            args.push("-w".to_string());
            args.push(width.to_string());
        }
        if let Some(height) = request.height {
            args.push("-h".to_string());
            args.push(height.to_string());
        }
        match (request.width, request.height) {
            (Some(_), None) | (None, Some(_)) => args.push("--keep-aspect-ratio".to_string()),
            (None, None) => {
                if let Some(scale) = request.scale {
                    let scale = self.passthrough_scale(scale)?;
                    args.push("--zoom".to_string());
                    args.push(scale.to_string());
                }
            }
            (Some(_), Some(_)) => {}
        }
        Ok(args)
    }

    fn passthrough_scale(&self, scale: f64) -> Result<f64> {
        if scale.is_finite() && scale > 0.0 {
            Ok(scale)
        } else {
            Err(ConvertError::UnsupportedOption {
                converter: self.program(),
                option: format!("縮放比例 {}", scale),
            })
        }
    }
}

impl fmt::Display for ConverterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// 已解析的轉換器，整個執行期間只解析一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterSpec {
    pub name: ConverterKind,
    pub executable_path: PathBuf,
}

impl ConverterSpec {
    pub fn new(name: ConverterKind, executable_path: impl Into<PathBuf>) -> Self {
        ConverterSpec {
            name,
            executable_path: executable_path.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable_path
    }

    pub fn arguments(&self, request: &ConversionRequest) -> Result<Vec<String>> {
        self.name.build_args(request)
    }
}
