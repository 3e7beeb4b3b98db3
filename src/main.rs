use std::process::ExitCode;

use svg_to_png::action::cli::process_args;
use svg_to_png::error::ConvertError;
use svg_to_png::utils::utils::format_summary;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(report) => {
            println!("\n{}", format_summary(&report));
            if report.all_succeeded() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e @ ConvertError::NoInputFiles(_)) => {
            eprintln!("警告：{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("程式執行失敗：{}", e);
            eprintln!("錯誤：{}", e);
            ExitCode::FAILURE
        }
    }
}
