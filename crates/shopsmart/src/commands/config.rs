use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShopConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    Show,
    Set { key: String, value: String },
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShopConfig::load(data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::Show => {}
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            config.save(data_dir)?;
            result.add_message(CmdMessage::success(format!("{} = {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn show_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::Show).unwrap();
        assert_eq!(result.config, Some(ShopConfig::default()));
    }

    #[test]
    fn set_persists() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set {
                key: "total_precision".into(),
                value: "2".into(),
            },
        )
        .unwrap();
        assert_eq!(ShopConfig::load(dir.path()).unwrap().total_precision, 2);
    }
}
