use std::ffi::OsString;
use std::path::{Path, PathBuf};

const DOWNLOADS_DIR: &str = "Downloads";

/// Default location for a newly saved file: `~/Downloads/<filename>`.
///
/// Falls back to a relative `Downloads/<filename>` when the home directory
/// cannot be determined.
pub fn default_save_path(filename: &str) -> PathBuf {
    match dirs::home_dir() {
        Some(home) => default_save_path_in(&home, filename),
        None => {
            tracing::warn!("Could not determine home directory; using relative Downloads path");
            PathBuf::from(DOWNLOADS_DIR).join(filename)
        }
    }
}

fn default_save_path_in(home: &Path, filename: &str) -> PathBuf {
    home.join(DOWNLOADS_DIR).join(filename)
}

/// Return `path` if nothing exists there yet, otherwise the first of
/// `<stem>_1.<ext>`, `<stem>_2.<ext>`, ... that is free.
pub fn unique_save_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    let extension = path.extension();

    let mut counter: u64 = 1;
    loop {
        let mut name = OsString::from(&stem);
        name.push(format!("_{}", counter));
        if let Some(ext) = extension {
            name.push(".");
            name.push(ext);
        }

        let candidate = path.with_file_name(&name);
        if !candidate.exists() {
            tracing::debug!(
                "{} exists, using {}",
                path.display(),
                candidate.display()
            );
            return candidate;
        }
        counter += 1;
    }
}
