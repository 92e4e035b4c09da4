use crate::paths::unique_save_path;
use anyhow::Result;
use std::path::Path;

pub fn run<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.file_name().is_none() {
        anyhow::bail!("Not a file path: {}", path.display());
    }

    println!("{}", unique_save_path(path).display());

    Ok(())
}
