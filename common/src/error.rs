use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CiphrError {
    #[error("failed to open scan output {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read scan output")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("unknown protocol: {0} (expected one of sslv2, sslv3, tls1.0, tls1.1)")]
    UnknownProtocol(String),

    #[error("unknown report mode: {0} (expected consolidated or grouped)")]
    UnknownMode(String),
}
