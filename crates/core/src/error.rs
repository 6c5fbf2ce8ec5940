use thiserror::Error;

use crate::id::HotbarId;

/// Errors raised by hotbar operations.
///
/// Ordinary UI races (duplicate adds, removing an absent item, activating an
/// unknown hotbar) are not errors; those operations report "nothing happened"
/// through their return value instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HotbarError {
    /// A restack position is negative, past the end of the table, or not a
    /// whole finite number.
    #[error("invalid restack range {from} -> {to} for a table of {len} slots")]
    InvalidRange {
        /// Requested source position.
        from: f64,
        /// Requested destination position.
        to: f64,
        /// Table length at the time of the call.
        len: usize,
    },
    /// Removing this hotbar would leave the set empty.
    #[error("cannot remove hotbar {id}: it is the last one")]
    LastCollection {
        /// Hotbar the caller tried to remove.
        id: HotbarId,
    },
    /// The operation names a hotbar that does not exist.
    #[error("unknown hotbar {id}")]
    UnknownHotbar {
        /// Requested hotbar id.
        id: HotbarId,
    },
}
