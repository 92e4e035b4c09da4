use crate::paths::default_save_path;
use anyhow::Result;

pub fn run(filename: &str) -> Result<()> {
    if filename.trim().is_empty() {
        anyhow::bail!("No filename specified");
    }

    println!("{}", default_save_path(filename).display());

    Ok(())
}
