//! Handing URIs to the operating system.

use anyhow::{Context, Result};

pub trait UriOpener {
    fn open(&self, uri: &str) -> Result<()>;
}

/// Opens URIs with the desktop's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UriOpener for SystemOpener {
    fn open(&self, uri: &str) -> Result<()> {
        open::that_detached(uri).with_context(|| format!("Failed to open {uri}"))
    }
}
