use lazy_static::lazy_static;
use rand::{distributions::Alphanumeric, Rng};
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

lazy_static! {
    static ref GLOBAL: Mutex<()> = Mutex::new(());
}

/// Serializes tests that initialize the process-wide logging state.
pub fn lock() -> MutexGuard<'static, ()> {
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn random_string(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

/// A path in the temp directory, removed on drop.
pub struct TempFile {
    pub path: PathBuf,
}

impl TempFile {
    pub fn new(ext: &str) -> Self {
        let name = format!("loghelper-{}.{}", random_string(10), ext);
        Self {
            path: env::temp_dir().join(name),
        }
    }

    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).unwrap_or_default()
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if self.path.is_dir() {
            fs::remove_dir_all(&self.path).expect("failed to remove temporary test directory");
        } else if self.path.exists() {
            fs::remove_file(&self.path).expect("failed to remove temporary test file");
        }
    }
}

/// An environment variable with a random name, unset on drop.
pub struct EnvVar {
    pub name: String,
}

impl EnvVar {
    pub fn unset() -> Self {
        Self {
            name: format!("LOGHELPER_TEST_{}", random_string(12).to_uppercase()),
        }
    }

    pub fn set(value: &str) -> Self {
        Self::set_os(OsStr::new(value))
    }

    pub fn set_os(value: &OsStr) -> Self {
        let var = Self::unset();
        env::set_var(&var.name, value);
        var
    }
}

impl Drop for EnvVar {
    fn drop(&mut self) {
        env::remove_var(&self.name);
    }
}

#[test]
fn temp_file_removed_on_drop() {
    let path;
    {
        let tmp = TempFile::new("txt");
        path = tmp.path.clone();
        fs::write(&tmp.path, "content").unwrap();
        assert!(path.exists());
    }
    assert!(!path.exists());
}

#[test]
fn env_var_removed_on_drop() {
    let name;
    {
        let var = EnvVar::set("INFO");
        name = var.name.clone();
        assert_eq!(env::var(&name).unwrap(), "INFO");
    }
    assert!(env::var(&name).is_err());
}
