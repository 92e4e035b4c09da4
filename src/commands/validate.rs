use crate::files::validate_files;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(files: &[PathBuf], extensions: &[String]) -> Result<()> {
    let valid = validate_files(files, extensions);

    for path in &valid {
        println!("{}", path.display());
    }

    println!(
        "\n{} of {} file(s) valid (allowed: {}).",
        valid.len(),
        files.len(),
        extensions.join(", ")
    );

    Ok(())
}
