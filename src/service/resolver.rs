use std::path::PathBuf;

use log::{debug, info};

use crate::error::{ConvertError, Result};
use crate::models::converter::{ConverterKind, ConverterSpec};
use crate::service::traits::i_service::ExecutableProbe;

/// 以系統 PATH 查找執行檔
pub struct PathProbe;

impl ExecutableProbe for PathProbe {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

/// 轉換器解析服務，決定使用哪一個外部轉換器
pub struct ConverterResolver {
    probe: Box<dyn ExecutableProbe>,
}

impl ConverterResolver {
    pub fn new(probe: Box<dyn ExecutableProbe>) -> Self {
        ConverterResolver { probe }
    }

    /// 列出主機上所有可用的轉換器，依偵測順序排列
    pub fn available(&self) -> Vec<ConverterSpec> {
        ConverterKind::DETECTION_ORDER
            .iter()
            .filter_map(|kind| {
                let found = self.probe.locate(kind.program());
                debug!("偵測 {}：{:?}", kind, found);
                found.map(|path| ConverterSpec::new(*kind, path))
            })
            .collect()
    }

    /// 解析要使用的轉換器，先找到者優先
    /// # 回傳
    /// - 找到時返回 ConverterSpec，兩者皆無時返回 NoConverterFound
    pub fn resolve(&self) -> Result<ConverterSpec> {
        for kind in ConverterKind::DETECTION_ORDER {
            if let Some(path) = self.probe.locate(kind.program()) {
                info!("使用轉換器：{}（{}）", kind, path.display());
                return Ok(ConverterSpec::new(kind, path));
            }
        }
        let hints = ConverterKind::DETECTION_ORDER
            .iter()
            .map(|kind| format!("  - {}", kind.install_hint()))
            .collect::<Vec<_>>()
            .join("\n");
        Err(ConvertError::NoConverterFound { hints })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeProbe(Vec<&'static str>);

    impl ExecutableProbe for FakeProbe {
        fn locate(&self, program: &str) -> Option<PathBuf> {
            self.0
                .iter()
                .any(|installed| *installed == program)
                .then(|| PathBuf::from("/opt/bin").join(program))
        }
    }

    fn resolver(installed: Vec<&'static str>) -> ConverterResolver {
        ConverterResolver::new(Box::new(FakeProbe(installed)))
    }

    #[test]
    fn prefers_inkscape_when_both_installed() {
        let spec = resolver(vec!["rsvg-convert", "inkscape"]).resolve().unwrap();
        assert_eq!(spec.name, ConverterKind::Inkscape);
        assert_eq!(spec.executable_path, PathBuf::from("/opt/bin/inkscape"));
    }

    #[test]
    fn falls_back_to_rsvg_convert() {
        let spec = resolver(vec!["rsvg-convert"]).resolve().unwrap();
        assert_eq!(spec.name, ConverterKind::RsvgConvert);
    }

    #[test]
    fn fails_without_any_converter() {
        let err = resolver(vec![]).resolve().unwrap_err();
        match err {
            ConvertError::NoConverterFound { hints } => {
                assert!(hints.contains("inkscape"));
                assert!(hints.contains("librsvg"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn lists_available_in_detection_order() {
        let kinds: Vec<ConverterKind> = resolver(vec!["rsvg-convert", "inkscape"])
            .available()
            .into_iter()
            .map(|spec| spec.name)
            .collect();
        assert_eq!(kinds, vec![ConverterKind::Inkscape, ConverterKind::RsvgConvert]);
        assert!(resolver(vec![]).available().is_empty());
    }
}
