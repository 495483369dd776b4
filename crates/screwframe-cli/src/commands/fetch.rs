use crate::cli::FetchArgs;
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

const ARCHIVE_URL: &str = "https://files.rcsb.org/download/";

fn archive_file_name(id: &str) -> String {
    if id.ends_with(".pdb") {
        id.to_string()
    } else {
        format!("{id}.pdb")
    }
}

pub fn run(args: FetchArgs) -> Result<()> {
    let file_name = archive_file_name(&args.id);
    let url = format!("{ARCHIVE_URL}{file_name}");

    info!("Downloading {} from the RCSB archive.", file_name);
    let response = reqwest::blocking::get(&url)?.error_for_status()?;
    let body = response.bytes()?;

    let target = args
        .out_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join(&file_name);
    std::fs::write(&target, &body)?;

    info!("Saved {} bytes to {:?}", body.len(), target);
    println!("Saved {}", target.display());
    Ok(())
}
