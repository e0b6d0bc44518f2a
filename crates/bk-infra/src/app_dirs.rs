use std::path::PathBuf;

use bk_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "bossika";

fn resolved_app_dir_name() -> String {
    match std::env::var("BOSSIKA_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Resolves the data directory from the platform (`dirs`) or an explicit override.
pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
    app_data_root_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
            app_data_root_override: None,
        }
    }

    /// Use `root` verbatim as the application data root (from `[storage] data_dir`).
    pub fn with_app_data_root(root: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: None,
            app_data_root_override: Some(root),
        }
    }

    #[cfg(test)]
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
            app_data_root_override: None,
        }
    }

    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        if let Some(root) = &self.app_data_root_override {
            return Ok(AppDirs {
                app_data_root: root.clone(),
            });
        }
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(resolved_app_dir_name()),
        })
    }
}
