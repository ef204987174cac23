//! Mechanic interchange format version.

/// Newest `MechanicData::version` this crate understands.
pub const MECHANIC_FORMAT_VERSION: u32 = 1;

/// Frame rate assumed when a mechanic does not specify one.
pub const DEFAULT_FPS: f32 = 30.0;
