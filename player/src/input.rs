use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;
use tracing::info;

fn is_url(name: &str) -> bool {
    name.starts_with("http://") || name.starts_with("https://")
}

/// Open a local path or fetch an http(s) URL.
pub fn open_input(name: &str) -> anyhow::Result<Box<dyn Read>> {
    if is_url(name) {
        info!(url = name, "fetching");
        let response = reqwest::blocking::get(name)
            .and_then(reqwest::blocking::Response::error_for_status)
            .with_context(|| format!("failed to fetch {name}"))?;
        return Ok(Box::new(response));
    }

    let path = Path::new(name);
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}
