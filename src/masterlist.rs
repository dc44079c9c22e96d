use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use crate::core::auth::MasterGate;
use crate::model::CallerId;

/// File-backed master-key list: one hex identity per line. The file is
/// re-read on every query so additions made at runtime (the `master`
/// command) take effect immediately.
pub struct MasterList {
    path: PathBuf,
}

impl MasterList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MasterGate for MasterList {
    fn is_privileged(&self, caller: &CallerId) -> bool {
        let txt = match fs::read_to_string(&self.path) {
            Ok(txt) => txt,
            Err(e) => {
                warn!("could not read masterkeys file {:?}: {e}", self.path);
                return false;
            }
        };

        txt.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .any(|l| l.eq_ignore_ascii_case(&caller.public_key))
    }

    fn add_master(&self, id: &str) -> Result<()> {
        let mut fp = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open masterkeys file {:?}", self.path))?;
        writeln!(fp, "{id}").context("append to masterkeys file")?;
        Ok(())
    }
}
