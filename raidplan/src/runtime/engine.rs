use crate::runtime::timeline::until;
use crate::{
    ActiveAoe, ActiveCast, ActiveObject, ActiveText, AnchorContext, EnemyState, Frame,
    MechanicData, PlayerState, Snapshot, TimelineIndex, resolve_anchor, resolve_debuffs,
    resolve_envelope, resolve_field, resolve_position,
};

/// Resolves `mechanic` at `frame`.
///
/// Convenience for one-off queries; scrubbing and export should build a [`TimelineIndex`] once
/// and call [`TimelineIndex::resolve`] per frame.
pub fn resolve(mechanic: &MechanicData, frame: Frame) -> Snapshot {
    TimelineIndex::new(mechanic).resolve(frame)
}

impl<'a> TimelineIndex<'a> {
    /// Full snapshot at `frame`. Pure: depends only on the mechanic and `frame`, never on
    /// previously resolved frames.
    pub fn resolve(&self, frame: Frame) -> Snapshot {
        let mechanic = self.mechanic;
        let fps = mechanic.fps;

        let debuffs = resolve_debuffs(
            &mechanic.players,
            until(&self.debuff_changes, frame, |c| c.frame),
            frame,
        );

        let mut ctx = AnchorContext::default();

        let players = mechanic
            .players
            .iter()
            .map(|player| {
                let position =
                    resolve_position(player.position, self.motions_until(&player.id, frame), frame);
                ctx.players.insert(player.id.as_str(), position);
                PlayerState {
                    id: player.id.clone(),
                    name: player.name.clone(),
                    role: player.role,
                    position,
                    debuffs: debuffs.active(&player.id, frame, fps),
                }
            })
            .collect();

        let enemies = mechanic
            .enemies
            .iter()
            .map(|enemy| {
                let position =
                    resolve_position(enemy.position, self.motions_until(&enemy.id, frame), frame);
                ctx.enemies.insert(enemy.id.as_str(), position);
                EnemyState {
                    id: enemy.id.clone(),
                    name: enemy.name.clone(),
                    position,
                }
            })
            .collect();

        ctx.debuff_holders = debuffs.holders(&mechanic.players);

        let mut active_objects = Vec::new();
        for lc in until(&self.objects, frame, |lc| lc.show.frame) {
            let object = lc.show.event;
            let Some(opacity) = lc.opacity(object.opacity, frame) else {
                continue;
            };
            ctx.objects.insert(object.object_id.as_str(), object.position);
            active_objects.push(ActiveObject {
                id: object.object_id.clone(),
                kind: object.kind.clone(),
                position: object.position,
                size: object.size,
                color: object.color.clone(),
                opacity,
            });
        }

        let mut active_aoes = Vec::new();
        for lc in until(&self.aoes, frame, |lc| lc.show.frame) {
            let spec = &lc.show.event.aoe;
            let Some(anchor) = resolve_anchor(spec, lc.show.frame, &ctx, frame) else {
                continue;
            };
            let Some(opacity) = lc.opacity(spec.opacity, frame) else {
                continue;
            };
            active_aoes.push(ActiveAoe {
                id: lc.key.to_string(),
                show_event_id: lc.show.id.to_string(),
                shape: spec.shape.clone(),
                position: anchor.position,
                direction: anchor.direction,
                color: spec.color.clone(),
                opacity,
            });
        }

        let mut active_texts = Vec::new();
        for lc in until(&self.texts, frame, |lc| lc.show.frame) {
            let text = lc.show.event;
            let Some(opacity) = lc.opacity(1.0, frame) else {
                continue;
            };
            active_texts.push(ActiveText {
                id: text.text_id.clone(),
                content: text.content.clone(),
                position: text.position,
                font_size: text.font_size,
                color: text.color.clone(),
                opacity,
            });
        }
        for timed in until(&self.legacy_texts, frame, |t| t.frame) {
            let text = timed.event;
            let end = timed.frame.saturating_add(text.duration);
            if frame >= end {
                continue;
            }
            active_texts.push(ActiveText {
                id: timed.id.to_string(),
                content: text.content.clone(),
                position: text.position,
                font_size: text.font_size,
                color: text.color.clone(),
                opacity: resolve_envelope(
                    frame,
                    timed.frame,
                    text.fade_in_duration,
                    Some(end),
                    text.fade_out_duration,
                    1.0,
                ),
            });
        }

        let active_casts = until(&self.casts, frame, |c| c.frame)
            .iter()
            .filter(|c| frame < c.frame.saturating_add(c.event.duration))
            .map(|c| ActiveCast {
                event_id: c.id.to_string(),
                caster_id: c.event.caster_id.clone(),
                skill_name: c.event.skill_name.clone(),
                progress: (frame - c.frame) as f32 / c.event.duration as f32,
            })
            .collect();

        let field = resolve_field(
            &mechanic.field,
            until(&self.field_changes, frame, |c| c.frame),
            until(&self.field_reverts, frame, |r| r.frame),
            frame,
        );

        Snapshot {
            frame,
            players,
            enemies,
            active_aoes,
            active_objects,
            active_texts,
            active_casts,
            field,
        }
    }
}
