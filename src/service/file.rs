use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::service::traits::i_service::FileServiceTrait;

/// File 服務，負責列舉 SVG 檔案並實現 FileServiceTrait
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn collect_svg_files(&self, input_dir: &Path) -> io::Result<Vec<PathBuf>> {
        if !input_dir.is_dir() {
            let kind = if input_dir.exists() {
                io::ErrorKind::InvalidInput
            } else {
                io::ErrorKind::NotFound
            };
            return Err(io::Error::new(kind, "路徑不存在或不是目錄"));
        }
        let mut files = Vec::new();
        let walker = WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    warn!("無法讀取目錄項目，跳過：{}", e);
                    continue;
                }
            };
            if entry.file_type().is_file() && is_svg(entry.path()) {
                files.push(entry.into_path());
            }
        }
        debug!("在 {} 中找到 {} 個 SVG 檔案", input_dir.display(), files.len());
        Ok(files)
    }

    fn prepare_output_dir(&self, output_dir: &Path) -> io::Result<()> {
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "路徑已存在且不是目錄",
            ));
        }
        fs::create_dir_all(output_dir)
    }
}

/// 副檔名是否為 svg（不分大小寫）
pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// 輸出路徑：輸出目錄 + 原檔名（去副檔名）+ `.png`
pub fn png_output_path(svg_path: &Path, output_dir: &Path) -> PathBuf {
    let stem = svg_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());
    output_dir.join(format!("{}.png", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"<svg/>").unwrap();
    }

    #[test]
    fn collects_only_top_level_svg_files_sorted() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "b.svg");
        touch(dir.path(), "a.SVG");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "svg");
        fs::create_dir(dir.path().join("nested.svg")).unwrap();
        touch(&dir.path().join("nested.svg"), "deep.svg");

        let files = FileService::new().collect_svg_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.SVG", "b.svg"]);
    }

    #[test]
    fn missing_or_file_input_is_an_error() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.svg");
        let service = FileService::new();

        let err = service.collect_svg_files(&dir.path().join("gone")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        let err = service.collect_svg_files(&dir.path().join("a.svg")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn output_path_uses_lowercase_png() {
        let out = png_output_path(Path::new("/in/Icon.v2.SVG"), Path::new("/out"));
        assert_eq!(out, PathBuf::from("/out/Icon.v2.png"));
    }

    #[test]
    fn prepare_output_dir_creates_nested_dirs() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("x").join("y");
        FileService::new().prepare_output_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn prepare_output_dir_rejects_file() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "taken");
        let err = FileService::new()
            .prepare_output_dir(&dir.path().join("taken"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn is_svg_ignores_case() {
        assert!(is_svg(Path::new("x.Svg")));
        assert!(!is_svg(Path::new("x.svgz")));
        assert!(!is_svg(Path::new("svg")));
    }
}
