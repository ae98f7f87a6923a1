//! Subcommand implementations

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use vellum_format::Format;
use vellum_models::Resource;

use crate::config::OutputConfig;
use crate::outline;

/// Explicit format, or the one named by the file extension
pub fn input_format(path: &Path, explicit: Option<Format>) -> Result<Format> {
    match explicit.or_else(|| Format::from_path(path)) {
        Some(format) => Ok(format),
        None => bail!(
            "cannot infer the format of {}; pass --format json|bson",
            path.display()
        ),
    }
}

pub fn load(path: &Path, format: Format) -> Result<Resource> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let resource = format
        .decode(&bytes)
        .with_context(|| format!("failed to resolve {} as {}", path.display(), format))?;
    tracing::info!(
        path = %path.display(),
        resource_type = %resource.resource_type(),
        embedded = resource.embedded().len(),
        "resolved"
    );
    Ok(resource)
}

pub fn inspect(path: &Path, format: Option<Format>, out: &mut impl Write) -> Result<()> {
    let resource = load(path, input_format(path, format)?)?;
    out.write_all(outline::render(&resource).as_bytes())?;
    Ok(())
}

/// Resolve every file, reporting each one. Returns whether all succeeded.
pub fn check(paths: &[PathBuf], out: &mut impl Write) -> Result<bool> {
    let mut all_ok = true;
    for path in paths {
        let result = input_format(path, None).and_then(|format| load(path, format));
        match result {
            Ok(resource) => writeln!(out, "{}: ok ({})", path.display(), resource.resource_type())?,
            Err(err) => {
                all_ok = false;
                tracing::warn!(path = %path.display(), error = %err, "check failed");
                writeln!(out, "{}: error: {:#}", path.display(), err)?;
            }
        }
    }
    Ok(all_ok)
}

pub fn convert(
    path: &Path,
    from: Option<Format>,
    to: Format,
    output: Option<&Path>,
    settings: &OutputConfig,
) -> Result<()> {
    let from = input_format(path, from)?;
    let resource = load(path, from)?;
    let bytes = to
        .encode(&resource, settings.pretty)
        .with_context(|| format!("failed to encode {} as {}", path.display(), to))?;

    match output {
        Some(target) => fs::write(target, &bytes)
            .with_context(|| format!("failed to write {}", target.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            if to == Format::Json {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }

    tracing::info!(from = %from, to = %to, bytes = bytes.len(), "converted");
    Ok(())
}
