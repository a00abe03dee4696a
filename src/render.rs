// Copyright (c) 2025 - Cowboy AI, Inc.
//! Output Renderers
//!
//! Host lines come from a user supplied [minijinja] template evaluated once
//! per host. The template sees the fields of [`HostRecord`]:
//!
//! | Variable   | Value                                   |
//! |------------|-----------------------------------------|
//! | `HWAddr`   | list of lower-case MAC addresses        |
//! | `Addr`     | IPv4 address without prefix length      |
//! | `Name`     | device name                             |
//! | `DeviceID` | NetBox device id                        |
//!
//! Addresses can be joined with the `join` filter or the `JoinStrings`
//! function: `{{ JoinStrings(HWAddr, ",") }}`.
//!
//! Templates use minijinja (Jinja2) syntax. Go `text/template` forms such as
//! `{{JoinStrings .HWAddr ","}}` are rejected when the template is parsed.

use minijinja::Environment;
use std::io::{self, Write};
use tracing::warn;

use crate::domain::{HostRecord, NetworkMap};
use crate::errors::SyncResult;

/// Name the host template is registered under
pub const HOST_TEMPLATE_NAME: &str = "dhcp-host";

/// `<comma separated MACs>,<address>` followed by a newline
pub const DEFAULT_HOST_TEMPLATE: &str = "{{ HWAddr | join(\",\") }},{{ Addr }}\n";

/// Compiled per-host line template
pub struct HostTemplate {
    env: Environment<'static>,
}

impl HostTemplate {
    /// Compile a template; syntax errors are reported here, before any rendering
    pub fn parse(source: impl Into<String>) -> SyncResult<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_function("JoinStrings", join_strings);
        env.add_template_owned(HOST_TEMPLATE_NAME, source.into())?;
        Ok(Self { env })
    }

    /// Compile the supplied template, or the default one when none is given
    pub fn from_source(source: Option<&str>) -> SyncResult<Self> {
        Self::parse(source.unwrap_or(DEFAULT_HOST_TEMPLATE))
    }

    pub fn render(&self, host: &HostRecord) -> SyncResult<String> {
        let template = self.env.get_template(HOST_TEMPLATE_NAME)?;
        Ok(template.render(host)?)
    }

    /// Render every host into `out`, returning how many lines were written
    ///
    /// A host that fails to render is logged and left out.
    pub fn write_hosts<W: Write>(&self, hosts: &[HostRecord], out: &mut W) -> io::Result<usize> {
        let mut written = 0;
        for host in hosts {
            match self.render(host) {
                Ok(line) => {
                    out.write_all(line.as_bytes())?;
                    written += 1;
                }
                Err(e) => warn!("Error executing template for {}: {}", host.name, e),
            }
        }
        Ok(written)
    }
}

fn join_strings(items: Vec<String>, separator: String) -> String {
    items.join(&separator)
}

/// Encode the shoelaces document, newline terminated
pub fn encode_network_map(map: &NetworkMap) -> SyncResult<Vec<u8>> {
    let mut body = serde_json::to_vec(map)?;
    body.push(b'\n');
    Ok(body)
}
