use std::path::PathBuf;

use crate::config::config::validate_input_dir;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::Result;

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：原始尺寸、無逾時、顯示進度
pub struct DefaultConfigAdapter {
    input: String,
    output: Option<String>,
}

impl DefaultConfigAdapter {
    pub fn new(input: String, output: Option<String>) -> Self {
        DefaultConfigAdapter { input, output }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        let input_dir = validate_input_dir(&self.input)?.to_path_buf();
        Ok(AppConfig {
            input_dir,
            output_dir: self.output.as_ref().map(PathBuf::from),
            width: None,
            height: None,
            scale: None,
            timeout: None,
            no_progress: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use tempfile::tempdir;

    #[test]
    fn default_adapter_keeps_native_size() {
        let dir = tempdir().unwrap();
        let input = dir.path().to_string_lossy().to_string();
        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new(input, Some("out".to_string()))));
        let config = service.get_config().unwrap();
        assert_eq!(config.input_dir, dir.path());
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert_eq!((config.width, config.height, config.scale), (None, None, None));
    }

    #[test]
    fn default_adapter_validates_input() {
        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new("/no/such/dir".to_string(), None)));
        assert!(matches!(service.get_config(), Err(ConvertError::InputDirectory { .. })));
    }
}
