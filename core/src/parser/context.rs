use ciphr_common::target::{HostPortKey, UNKNOWN_PORT};

/// The (host, port) block currently being read.
#[derive(Debug, Default)]
pub struct ScanContext {
    host: Option<String>,
    port: String,
}

impl ScanContext {
    /// Replaces the whole context; the port falls back to [`UNKNOWN_PORT`].
    pub fn enter_host(&mut self, host: &str) {
        self.host = Some(host.to_string());
        self.port = UNKNOWN_PORT.to_string();
    }

    /// Returns `false` when no host block is open, in which case nothing changes.
    pub fn open_port(&mut self, port: &str) -> bool {
        if self.host.is_none() {
            return false;
        }
        self.port = port.to_string();
        true
    }

    pub fn key(&self) -> Option<HostPortKey> {
        let host = self.host.as_deref()?;
        Some(HostPortKey::new(host, &self.port))
    }
}
