//! Marker types.

/// Marker type describing an entity possession handover.
#[derive(Clone, Copy, Debug)]
pub struct Possession;
