use crate::{BossMoveEvent, Easing, Frame, MoveEvent, Position};

/// One movement segment, normalized from `move` and `boss_move` events.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Motion {
    pub frame: Frame,
    pub from: Option<Position>,
    pub to: Position,
    pub duration: Frame,
    pub easing: Easing,
}

impl Motion {
    pub fn from_move(frame: Frame, event: &MoveEvent) -> Self {
        Self {
            frame,
            from: event.from,
            to: event.to,
            duration: event.duration,
            easing: event.easing,
        }
    }

    /// Teleports collapse to a zero-length segment.
    pub fn from_boss_move(frame: Frame, event: &BossMoveEvent) -> Self {
        Self {
            frame,
            from: event.from,
            to: event.to,
            duration: if event.teleport { 0 } else { event.duration },
            easing: event.easing,
        }
    }

    pub fn end_frame(&self) -> Frame {
        self.frame.saturating_add(self.duration)
    }
}

/// Position at `frame` after replaying `motions` (sorted by frame) from `initial`.
///
/// Completed segments commit their `to`; a segment in progress interpolates from its explicit
/// `from`, or from the position accumulated so far, and ends the walk. Overlapping segments are
/// therefore resolved by input order.
pub fn resolve_position(initial: Position, motions: &[Motion], frame: Frame) -> Position {
    let mut current = initial;

    for motion in motions {
        if frame < motion.frame {
            break;
        }
        if motion.duration == 0 || frame >= motion.end_frame() {
            current = motion.to;
            continue;
        }

        let from = motion.from.unwrap_or(current);
        let t = (frame - motion.frame) as f32 / motion.duration as f32;
        return from.lerp(motion.to, motion.easing.apply(t));
    }

    current
}
