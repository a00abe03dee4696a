// Copyright (c) 2025 - Cowboy AI, Inc.
//! Output destinations for rendered artifacts
//!
//! Files are truncated on open and closed when the writer goes out of scope,
//! on success and on every early return.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::{HostRecord, NetworkMap};
use crate::errors::{SyncError, SyncResult};
use crate::render::{encode_network_map, HostTemplate};

fn output_error(path: &Path) -> impl FnOnce(io::Error) -> SyncError + '_ {
    move |source| SyncError::Output {
        path: path.to_path_buf(),
        source,
    }
}

fn create(path: &Path) -> SyncResult<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(output_error(path))
}

/// Render hosts into a file, replacing its previous contents
pub fn write_hosts_file(
    path: &Path,
    template: &HostTemplate,
    hosts: &[HostRecord],
) -> SyncResult<usize> {
    let mut out = create(path)?;
    let written = template
        .write_hosts(hosts, &mut out)
        .map_err(output_error(path))?;
    out.flush().map_err(output_error(path))?;

    info!("Wrote {} hosts to {}", written, path.display());
    Ok(written)
}

/// Render hosts to standard output
pub fn write_hosts_console(template: &HostTemplate, hosts: &[HostRecord]) -> SyncResult<usize> {
    let stdout = PathBuf::from("<stdout>");
    let mut out = BufWriter::new(io::stdout().lock());
    let written = template
        .write_hosts(hosts, &mut out)
        .map_err(output_error(&stdout))?;
    out.flush().map_err(output_error(&stdout))?;
    Ok(written)
}

/// Write the shoelaces network map document
pub fn write_network_map_file(path: &Path, map: &NetworkMap) -> SyncResult<()> {
    let body = encode_network_map(map)?;
    let mut out = create(path)?;
    out.write_all(&body).map_err(output_error(path))?;
    out.flush().map_err(output_error(path))?;

    info!(
        "Wrote {} network mappings to {}",
        map.network_maps.len(),
        path.display()
    );
    Ok(())
}
