use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

// 執行檔偵測接口，負責在搜尋路徑中查找外部程式
pub trait ExecutableProbe: Send + Sync {
    /// 查找執行檔
    /// # 參數
    /// - program: 執行檔名稱，例如 `inkscape`
    /// # 回傳
    /// - 找到時返回完整路徑，否則返回 None
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

/// 外部程式執行結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stderr: String,
    pub timed_out: bool,
}

// 外部程式執行接口
pub trait ProcessRunnerTrait: Send + Sync {
    /// 執行外部程式並等待結束
    /// # 參數
    /// - program: 執行檔路徑
    /// - args: 參數列表
    /// - timeout: 逾時設定，None 表示無限等待
    /// # 回傳
    /// - 成功啟動時返回結束狀態與標準錯誤輸出，無法啟動時返回 IO 錯誤
    fn run(&self, program: &Path, args: &[String], timeout: Option<Duration>) -> io::Result<ProcessOutput>;
}

// File 服務接口，負責列舉輸入檔案與準備輸出目錄
pub trait FileServiceTrait: Send + Sync {
    /// 列出目錄下（不遞迴）副檔名為 svg 的檔案，依檔名排序
    fn collect_svg_files(&self, input_dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// 確保輸出目錄存在且為目錄
    fn prepare_output_dir(&self, output_dir: &Path) -> io::Result<()>;
}

// 尺寸查詢接口，負責讀取 SVG 的原始尺寸
pub trait DimensionServiceTrait: Send + Sync {
    fn native_size(&self, svg_path: &Path) -> Option<(f64, f64)>;
}
