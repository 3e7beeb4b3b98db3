use crate::error::Result;
use crate::models::conversion::{BatchInput, BatchReport};

// Facade 接口，負責協調整批 SVG 轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 轉換輸入目錄中的所有 SVG 檔案
    /// # 參數
    /// - input: 輸入目錄、輸出目錄與共用轉換選項
    /// # 回傳
    /// - 每個檔案各一筆結果；找不到檔案或目錄無法使用時返回錯誤
    fn run(&self, input: BatchInput) -> Result<BatchReport>;
}
