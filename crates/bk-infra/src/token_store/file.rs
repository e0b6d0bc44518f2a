use std::fs;
use std::io;
use std::path::PathBuf;

use bk_core::ports::{TokenKey, TokenStoreError, TokenStorePort};
use bk_core::security::SecretString;

/// One file per token under `<app_data_root>/tokens`, owner-only on unix.
#[derive(Clone)]
pub struct FileTokenStore {
    base_dir: PathBuf,
}

impl FileTokenStore {
    /// Create the store under `<app_data_root>/tokens`, creating the directory.
    pub fn new_in_app_data_root(app_data_root: PathBuf) -> Result<Self, io::Error> {
        let base_dir = app_data_root.join("tokens");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn file_path(&self, key: TokenKey) -> PathBuf {
        self.base_dir.join(key.as_str())
    }

    fn map_io_error(context: &str, err: io::Error) -> TokenStoreError {
        match err.kind() {
            io::ErrorKind::PermissionDenied => {
                TokenStoreError::PermissionDenied(format!("{context}: {err}"))
            }
            _ => TokenStoreError::Io(format!("{context}: {err}")),
        }
    }
}

impl TokenStorePort for FileTokenStore {
    fn get(&self, key: TokenKey) -> Result<Option<SecretString>, TokenStoreError> {
        match fs::read(self.file_path(key)) {
            Ok(bytes) => {
                let value = String::from_utf8(bytes).map_err(|_| {
                    TokenStoreError::Corrupt(format!("{} is not valid utf-8", key.as_str()))
                })?;
                Ok(Some(SecretString::new(value)))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::map_io_error("failed to read token file", err)),
        }
    }

    fn set(&self, key: TokenKey, value: &SecretString) -> Result<(), TokenStoreError> {
        fs::create_dir_all(&self.base_dir)
            .map_err(|err| Self::map_io_error("failed to create token directory", err))?;
        let path = self.file_path(key);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value.expose().as_bytes())
            .map_err(|err| Self::map_io_error("failed to write token temp file", err))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&temp_path, fs::Permissions::from_mode(0o600))
                .map_err(|err| Self::map_io_error("failed to set token file permissions", err))?;
        }

        fs::rename(&temp_path, &path)
            .map_err(|err| Self::map_io_error("failed to rename token file", err))?;
        Ok(())
    }

    fn remove(&self, key: TokenKey) -> Result<(), TokenStoreError> {
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::map_io_error("failed to delete token file", err)),
        }
    }
}
