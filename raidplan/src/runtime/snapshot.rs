use crate::{ActiveDebuff, AoeShape, FieldAppearance, Frame, Position, Role};

/// Fully resolved visual state of a mechanic at one frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Snapshot {
    pub frame: Frame,
    pub players: Vec<PlayerState>,
    pub enemies: Vec<EnemyState>,
    pub active_aoes: Vec<ActiveAoe>,
    pub active_objects: Vec<ActiveObject>,
    pub active_texts: Vec<ActiveText>,
    pub active_casts: Vec<ActiveCast>,
    pub field: FieldAppearance,
}

impl Snapshot {
    pub fn player(&self, id: &str) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyState> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn aoe(&self, id: &str) -> Option<&ActiveAoe> {
        self.active_aoes.iter().find(|a| a.id == id)
    }

    pub fn object(&self, id: &str) -> Option<&ActiveObject> {
        self.active_objects.iter().find(|o| o.id == id)
    }

    pub fn text(&self, id: &str) -> Option<&ActiveText> {
        self.active_texts.iter().find(|t| t.id == id)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct PlayerState {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub position: Position,
    pub debuffs: Vec<ActiveDebuff>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct EnemyState {
    pub id: String,
    pub name: String,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ActiveAoe {
    /// The AoE id shared by its show and hide events.
    pub id: String,
    pub show_event_id: String,
    pub shape: AoeShape,
    pub position: Position,
    pub direction: f32,
    pub color: String,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ActiveObject {
    pub id: String,
    pub kind: String,
    pub position: Position,
    pub size: f32,
    pub color: String,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ActiveText {
    /// `text_id` for show/hide texts, the event id for legacy texts.
    pub id: String,
    pub content: String,
    pub position: Position,
    pub font_size: f32,
    pub color: String,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ActiveCast {
    pub event_id: String,
    pub caster_id: String,
    pub skill_name: String,
    /// Fraction of the cast elapsed, in `[0, 1)`.
    pub progress: f32,
}
