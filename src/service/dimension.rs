use std::fs;
use std::path::Path;

use log::warn;

use crate::service::traits::i_service::DimensionServiceTrait;

/// 以 usvg 解析 SVG 取得原始尺寸
pub struct UsvgDimensionService;

impl UsvgDimensionService {
    pub fn new() -> Self {
        UsvgDimensionService
    }
}

impl Default for UsvgDimensionService {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionServiceTrait for UsvgDimensionService {
    fn native_size(&self, svg_path: &Path) -> Option<(f64, f64)> {
        let data = match fs::read(svg_path) {
            Ok(data) => data,
            Err(e) => {
                warn!("無法讀取 {}：{}", svg_path.display(), e);
                return None;
            }
        };
        match usvg::Tree::from_data(&data, &usvg::Options::default()) {
            Ok(tree) => {
                let size = tree.size();
                Some((size.width() as f64, size.height() as f64))
            }
            Err(e) => {
                warn!("無法取得 {} 的原始尺寸：{}", svg_path.display(), e);
                None
            }
        }
    }
}
