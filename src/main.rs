#![allow(clippy::module_name_repetitions)]

use doctext::configuration::factories::{config_loader, config_resolver, text_extractor};
use doctext::configuration::telemetry::init_tracing;
use doctext::report::{failure_message, loaded_message, skipped_message};
use doctext::{Config, DocumentPayload, Format};

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::{env, fs, process};
use tracing::{debug, error, instrument, warn};

fn main() -> Result<()> {
    init_tracing();

    let mut args = env::args().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        bail!("usage: doctext <file> [format-tag]");
    };
    let tag = args
        .next()
        .unwrap_or_else(|| Format::guess_tag(&path).to_string());

    let path_override = env::var("DOCTEXT_CONFIG_PATH").ok().map(PathBuf::from);
    let cfg = config_resolver(config_loader()).handle_config(path_override)?;

    if !extract_file(&cfg, &path, tag)? {
        process::exit(1);
    }
    Ok(())
}

/// Prints text of the file to stdout. Returns `false` when extraction failed.
#[instrument(skip(cfg))]
fn extract_file(cfg: &Config, path: &Path, tag: String) -> Result<bool> {
    let len = fs::metadata(path)?.len();
    if !cfg.admits(len) {
        bail!(
            "'{}' has {} bytes, files up to {} bytes are accepted",
            path.display(),
            len,
            cfg.max_payload_bytes
        );
    }
    let payload = DocumentPayload::new(fs::read(path)?, tag);
    debug!("extracting {} bytes as '{}'", payload.len(), payload.format());

    match text_extractor(cfg).extract(payload) {
        Ok(extracted) => {
            eprintln!("{}", loaded_message(&extracted));
            if let Some(msg) = skipped_message(&extracted) {
                warn!(partial = extracted.is_partial(), "{}", msg);
                eprintln!("{msg}");
            }
            println!("{}", extracted.text);
            Ok(true)
        }
        Err(failure) => {
            error!(kind = %failure.kind, "extraction failed: {}", failure.message);
            eprintln!("{}", failure_message(&failure));
            Ok(false)
        }
    }
}
