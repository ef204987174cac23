use crate::{AoeSource, DebuffTarget, Error, EventKind, MechanicData, Position, TimelineEvent};
use std::collections::HashSet;

fn ensure_finite(value: f32, context: &str) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            message: format!("{context} must be finite, got {value}"),
        })
    }
}

fn ensure_finite_position(position: Position, context: &str) -> Result<(), Error> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            message: format!("{context} must be finite, got ({}, {})", position.x, position.y),
        })
    }
}

impl MechanicData {
    /// Structural checks run at the import boundary, ahead of the engine.
    ///
    /// Rejects an unsupported format version, a non-positive or non-finite `fps`, non-finite
    /// numbers anywhere in the data and duplicate event ids. Events that reference unknown
    /// players or enemies are tolerated and only logged: the engine treats them as no-ops.
    pub fn validate(&self) -> Result<(), Error> {
        if self.version > crate::MECHANIC_FORMAT_VERSION {
            return Err(Error::UnsupportedVersion {
                found: self.version,
                supported: crate::MECHANIC_FORMAT_VERSION,
            });
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(Error::InvalidFps { fps: self.fps });
        }

        ensure_finite(self.field.size, "field size")?;
        ensure_finite(self.field.background_opacity, "field background opacity")?;
        for player in &self.players {
            ensure_finite_position(player.position, &format!("player '{}' position", player.id))?;
        }
        for enemy in &self.enemies {
            ensure_finite_position(enemy.position, &format!("enemy '{}' position", enemy.id))?;
        }

        let mut ids = HashSet::new();
        for event in &self.timeline {
            if !ids.insert(event.id.as_str()) {
                return Err(Error::DuplicateEventId {
                    id: event.id.clone(),
                });
            }
            validate_event(event)?;
            self.warn_unknown_references(event);
        }

        Ok(())
    }

    fn warn_unknown_references(&self, event: &TimelineEvent) {
        let is_entity = |id: &str| self.player(id).is_some() || self.enemy(id).is_some();
        let missing = match &event.kind {
            EventKind::Move(e) if !is_entity(&e.target_id) => Some(e.target_id.as_str()),
            EventKind::BossMove(e) if self.enemy(&e.target_id).is_none() => {
                Some(e.target_id.as_str())
            }
            EventKind::Cast(e) if !is_entity(&e.caster_id) => Some(e.caster_id.as_str()),
            EventKind::DebuffAdd(e) => match &e.target_id {
                DebuffTarget::Player(id) if self.player(id).is_none() => Some(id.as_str()),
                _ => None,
            },
            EventKind::AoeShow(e) => match &e.aoe.source {
                AoeSource::Boss { id } if self.enemy(id).is_none() => Some(id.as_str()),
                AoeSource::Player { id } if self.player(id).is_none() => Some(id.as_str()),
                _ => e
                    .aoe
                    .target_player_id
                    .as_deref()
                    .filter(|id| self.player(id).is_none()),
            },
            _ => None,
        };
        if let Some(id) = missing {
            log::warn!(
                "{} event '{}' references unknown entity '{id}'",
                event.kind.type_name(),
                event.id
            );
        }
    }
}

fn validate_event(event: &TimelineEvent) -> Result<(), Error> {
    let context = |what: &str| format!("{} '{}' {what}", event.kind.type_name(), event.id);

    match &event.kind {
        EventKind::Move(e) => {
            if let Some(from) = e.from {
                ensure_finite_position(from, &context("from"))?;
            }
            ensure_finite_position(e.to, &context("to"))
        }
        EventKind::BossMove(e) => {
            if let Some(from) = e.from {
                ensure_finite_position(from, &context("from"))?;
            }
            ensure_finite_position(e.to, &context("to"))
        }
        EventKind::AoeShow(e) => {
            let aoe = &e.aoe;
            for value in aoe.shape.dimensions() {
                ensure_finite(value, &context("shape"))?;
            }
            ensure_finite_position(aoe.position, &context("position"))?;
            ensure_finite_position(aoe.offset_from_source, &context("offset"))?;
            ensure_finite(aoe.direction, &context("direction"))?;
            ensure_finite(aoe.opacity, &context("opacity"))
        }
        EventKind::DebuffAdd(e) => match e.debuff.duration {
            Some(duration) => ensure_finite(duration, &context("debuff duration")),
            None => Ok(()),
        },
        EventKind::TextShow(e) => {
            ensure_finite_position(e.position, &context("position"))?;
            ensure_finite(e.font_size, &context("font size"))
        }
        EventKind::Text(e) => {
            ensure_finite_position(e.position, &context("position"))?;
            ensure_finite(e.font_size, &context("font size"))
        }
        EventKind::ObjectShow(e) => {
            ensure_finite_position(e.position, &context("position"))?;
            ensure_finite(e.size, &context("size"))?;
            ensure_finite(e.opacity, &context("opacity"))
        }
        EventKind::FieldChange(e) => match e.field_override.background_opacity {
            Some(opacity) => ensure_finite(opacity, &context("background opacity")),
            None => Ok(()),
        },
        EventKind::AoeHide(_)
        | EventKind::DebuffRemove(_)
        | EventKind::TextHide(_)
        | EventKind::Cast(_)
        | EventKind::ObjectHide(_)
        | EventKind::FieldRevert(_) => Ok(()),
    }
}
