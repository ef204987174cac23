mod anchor;
mod debuff;
mod engine;
mod export;
mod field;
mod interpolate;
mod position;
mod snapshot;
mod timeline;
mod visibility;

pub use anchor::*;
pub use debuff::*;
pub use engine::*;
pub use export::*;
pub use field::*;
pub use interpolate::{lerp, resolve_envelope};
pub use position::*;
pub use snapshot::*;
pub use timeline::{Lifecycle, Timed, TimelineIndex};
pub use visibility::*;

#[cfg(test)]
mod test_support;




#[cfg(test)]
mod anchor_tests;
