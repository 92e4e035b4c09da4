use std::path::{Path, PathBuf};

/// Keep the candidates that are existing regular files with one of the
/// allowed extensions, in input order.
///
/// Extensions match case-insensitively and may be given with or without the
/// leading dot. Anything else is dropped without an error.
pub fn validate_files<P, S>(files: &[P], allowed_extensions: &[S]) -> Vec<PathBuf>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let allowed: Vec<String> = allowed_extensions
        .iter()
        .map(|ext| normalize_extension(ext.as_ref()))
        .filter(|ext| !ext.is_empty())
        .collect();

    if allowed.is_empty() {
        return Vec::new();
    }

    files
        .iter()
        .map(P::as_ref)
        .filter(|path| is_valid_file(path, &allowed))
        .map(Path::to_path_buf)
        .collect()
}

fn is_valid_file(path: &Path, allowed: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        tracing::debug!("Skipping {}: no extension", path.display());
        return false;
    };

    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)) {
        tracing::debug!("Skipping {}: extension .{} not allowed", path.display(), ext);
        return false;
    }

    if !path.is_file() {
        tracing::debug!("Skipping {}: not an existing file", path.display());
        return false;
    }

    true
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}
