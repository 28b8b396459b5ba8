mod config;

use std::env;

use tempfile::TempDir;

pub(crate) const VALID_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point HR_CONFIG_DIR at it and clear the
/// secret so every test starts from the defaults
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let dir_guard = EnvGuard::set("HR_CONFIG_DIR", temp.path().to_str().unwrap());
    let secret_guard = EnvGuard::remove("HR_AUTH_JWT_SECRET");
    (temp, dir_guard, secret_guard)
}
