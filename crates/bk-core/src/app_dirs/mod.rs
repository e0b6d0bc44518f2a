use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

impl AppDirs {
    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }

    pub fn tokens_dir(&self) -> PathBuf {
        self.app_data_root.join("tokens")
    }

    pub fn config_path(&self) -> PathBuf {
        self.app_data_root.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn app_dirs_derives_locations_from_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/bossika"),
        };
        assert_eq!(dirs.logs_dir(), PathBuf::from("/tmp/bossika/logs"));
        assert_eq!(dirs.tokens_dir(), PathBuf::from("/tmp/bossika/tokens"));
        assert_eq!(dirs.config_path(), PathBuf::from("/tmp/bossika/config.toml"));
    }
}
