//! Configuration errors.
//!
//! Compiling a policy never fails; only turning user-supplied option strings
//! into [`Options`](crate::Options) values can.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown distribution type '{0}' (expected rpm, deb, arch or haiku)")]
    UnknownDistType(String),

    #[error("unknown alias flavor '{0}' (expected generic or fedora)")]
    UnknownFlavor(String),
}
