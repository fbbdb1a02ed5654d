// Error taxonomy for the peer store.
//
// Only construction can fail. Once a store exists, every operation on it
// returns a plain value and absence is reported as an empty result.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown peer store driver: {0}")]
    UnknownDriver(String),

    #[error("Peer store driver already registered: {0}")]
    DuplicateDriver(String),
}
