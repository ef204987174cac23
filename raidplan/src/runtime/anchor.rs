use crate::{AoeSource, AoeSpec, Frame, Position, TrackingMode};
use std::collections::HashMap;

/// Live positions an AoE may anchor to at one frame.
///
/// `objects` only holds objects that are currently shown; `debuff_holders` maps a debuff id to the
/// player carrying it.
#[derive(Clone, Debug, Default)]
pub struct AnchorContext<'a> {
    pub players: HashMap<&'a str, Position>,
    pub enemies: HashMap<&'a str, Position>,
    pub objects: HashMap<&'a str, Position>,
    pub debuff_holders: HashMap<&'a str, &'a str>,
}

impl AnchorContext<'_> {
    /// Live position of an AoE source. `Fixed` has none.
    pub fn source_position(&self, source: &AoeSource) -> Option<Position> {
        match source {
            AoeSource::Fixed => None,
            AoeSource::Boss { id } => self.enemies.get(id.as_str()).copied(),
            AoeSource::Player { id } => self.players.get(id.as_str()).copied(),
            AoeSource::Object { id } => self.objects.get(id.as_str()).copied(),
            AoeSource::Debuff { id } => {
                let holder = self.debuff_holders.get(id.as_str())?;
                self.players.get(holder).copied()
            }
        }
    }

    pub fn player_position(&self, id: &str) -> Option<Position> {
        self.players.get(id).copied()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedAnchor {
    pub position: Position,
    pub direction: f32,
}

/// Where an AoE shown at `show_frame` sits, and which way it points, at `frame`.
///
/// Returns `None` when the AoE must not render: a static AoE still inside its placement delay, or
/// a tracking AoE whose anchor (source entity, debuff carrier or target player) cannot be found.
pub fn resolve_anchor(
    spec: &AoeSpec,
    show_frame: Frame,
    ctx: &AnchorContext<'_>,
    frame: Frame,
) -> Option<ResolvedAnchor> {
    let position = match spec.tracking {
        TrackingMode::Static => {
            if frame < show_frame.saturating_add(spec.placement_delay) {
                return None;
            }
            spec.position
        }
        TrackingMode::TrackSource => match spec.source {
            AoeSource::Fixed => spec.position,
            ref source => ctx.source_position(source)? + spec.offset_from_source,
        },
        TrackingMode::TrackTarget => {
            let target = spec.target_player_id.as_deref()?;
            ctx.player_position(target)? + spec.offset_from_source
        }
    };

    Some(ResolvedAnchor {
        position,
        direction: resolve_direction(spec, ctx),
    })
}

/// Authored direction, or the live source → target angle for auto-directed lines and cones.
///
/// Falls back to the authored direction when either endpoint cannot be resolved.
pub fn resolve_direction(spec: &AoeSpec, ctx: &AnchorContext<'_>) -> f32 {
    if !spec.auto_direction || !spec.shape.is_directional() {
        return spec.direction;
    }
    let Some(target) = spec.target_player_id.as_deref() else {
        return spec.direction;
    };

    match (
        ctx.source_position(&spec.source),
        ctx.player_position(target),
    ) {
        (Some(from), Some(to)) => from.angle_to(to),
        _ => spec.direction,
    }
}
