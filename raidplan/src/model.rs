use crate::Position;

/// Integer time unit. All timing in a mechanic is expressed in frames at [`MechanicData::fps`].
pub type Frame = u32;

#[cfg(feature = "json")]
fn default_one() -> f32 {
    1.0
}

#[cfg(feature = "json")]
fn default_fps() -> f32 {
    crate::DEFAULT_FPS
}

#[cfg(feature = "json")]
fn default_version() -> u32 {
    crate::MECHANIC_FORMAT_VERSION
}

#[cfg(feature = "json")]
fn default_font_size() -> f32 {
    16.0
}

#[cfg(feature = "json")]
fn default_white() -> String {
    "#ffffff".to_string()
}

/// A complete, immutable mechanic: arena, initial entities and the event timeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MechanicData {
    #[cfg_attr(feature = "json", serde(default = "default_version"))]
    pub version: u32,
    #[cfg_attr(feature = "json", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "json", serde(default = "default_fps"))]
    pub fps: f32,
    #[cfg_attr(feature = "json", serde(default))]
    pub duration_frames: Frame,
    pub field: Field,
    #[cfg_attr(feature = "json", serde(default))]
    pub players: Vec<Player>,
    #[cfg_attr(feature = "json", serde(default))]
    pub enemies: Vec<Enemy>,
    #[cfg_attr(feature = "json", serde(default))]
    pub timeline: Vec<TimelineEvent>,
}

impl MechanicData {
    pub fn new(field: Field) -> Self {
        Self {
            version: crate::MECHANIC_FORMAT_VERSION,
            name: String::new(),
            fps: crate::DEFAULT_FPS,
            duration_frames: 0,
            field,
            players: Vec::new(),
            enemies: Vec::new(),
            timeline: Vec::new(),
        }
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn enemy(&self, id: &str) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&TimelineEvent> {
        self.timeline.iter().find(|e| e.id == id)
    }

    /// Frame of the last event, including the tail of its duration or fade.
    pub fn last_event_frame(&self) -> Frame {
        self.timeline
            .iter()
            .map(|e| e.frame.saturating_add(e.kind.span()))
            .max()
            .unwrap_or(0)
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FieldShape {
    #[default]
    Circle,
    Square,
}

/// The arena and its base background.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Field {
    #[cfg_attr(feature = "json", serde(default))]
    pub shape: FieldShape,
    pub size: f32,
    pub background_color: String,
    #[cfg_attr(
        feature = "json",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub background_image: Option<String>,
    #[cfg_attr(feature = "json", serde(default = "default_one"))]
    pub background_opacity: f32,
}

impl Field {
    pub fn new(shape: FieldShape, size: f32, background_color: impl Into<String>) -> Self {
        Self {
            shape,
            size,
            background_color: background_color.into(),
            background_image: None,
            background_opacity: 1.0,
        }
    }

    pub fn appearance(&self) -> FieldAppearance {
        FieldAppearance {
            background_color: self.background_color.clone(),
            background_image: self.background_image.clone(),
            background_opacity: self.background_opacity,
        }
    }
}

/// Resolved background of the arena at one frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct FieldAppearance {
    pub background_color: String,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub background_image: Option<String>,
    pub background_opacity: f32,
}

/// Partial background override carried by a `field_change` event. Unset fields keep the base.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FieldOverride {
    #[cfg_attr(
        feature = "json",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub background_color: Option<String>,
    #[cfg_attr(
        feature = "json",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub background_image: Option<String>,
    #[cfg_attr(
        feature = "json",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub background_opacity: Option<f32>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Role {
    Tank,
    Healer,
    Dps,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub position: Position,
}

/// Named easing curve. Unknown names resolve to [`Easing::Linear`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Returns `None` for names outside the four supported curves.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "easeIn" => Some(Self::EaseIn),
            "easeOut" => Some(Self::EaseOut),
            "easeInOut" => Some(Self::EaseInOut),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "easeIn",
            Self::EaseOut => "easeOut",
            Self::EaseInOut => "easeInOut",
        }
    }
}

impl From<String> for Easing {
    fn from(name: String) -> Self {
        Self::parse(&name).unwrap_or_else(|| {
            log::warn!("unknown easing '{name}', falling back to linear");
            Self::Linear
        })
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.as_str().to_string()
    }
}

/// One timeline entry. `frame` is when the event takes logical effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineEvent {
    pub id: String,
    pub frame: Frame,
    #[cfg_attr(feature = "json", serde(flatten))]
    pub kind: EventKind,
}

impl TimelineEvent {
    pub fn new(id: impl Into<String>, frame: Frame, kind: EventKind) -> Self {
        Self {
            id: id.into(),
            frame,
            kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum EventKind {
    Move(MoveEvent),
    BossMove(BossMoveEvent),
    AoeShow(AoeShowEvent),
    AoeHide(AoeHideEvent),
    DebuffAdd(DebuffAddEvent),
    DebuffRemove(DebuffRemoveEvent),
    TextShow(TextShowEvent),
    TextHide(TextHideEvent),
    Text(TextEvent),
    Cast(CastEvent),
    ObjectShow(ObjectShowEvent),
    ObjectHide(ObjectHideEvent),
    FieldChange(FieldChangeEvent),
    FieldRevert(FieldRevertEvent),
}

impl EventKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Move(_) => "move",
            Self::BossMove(_) => "boss_move",
            Self::AoeShow(_) => "aoe_show",
            Self::AoeHide(_) => "aoe_hide",
            Self::DebuffAdd(_) => "debuff_add",
            Self::DebuffRemove(_) => "debuff_remove",
            Self::TextShow(_) => "text_show",
            Self::TextHide(_) => "text_hide",
            Self::Text(_) => "text",
            Self::Cast(_) => "cast",
            Self::ObjectShow(_) => "object_show",
            Self::ObjectHide(_) => "object_hide",
            Self::FieldChange(_) => "field_change",
            Self::FieldRevert(_) => "field_revert",
        }
    }

    /// Frames after the event's own frame during which it still changes the picture.
    pub fn span(&self) -> Frame {
        match self {
            Self::Move(e) => e.duration,
            Self::BossMove(e) if e.teleport => 0,
            Self::BossMove(e) => e.duration,
            Self::AoeShow(e) => e.fade_in_duration.saturating_add(e.aoe.placement_delay),
            Self::AoeHide(e) => e.fade_out_duration,
            Self::TextShow(e) => e.fade_in_duration,
            Self::TextHide(e) => e.fade_out_duration,
            Self::Text(e) => e.duration,
            Self::Cast(e) => e.duration,
            Self::ObjectShow(e) => e.fade_in_duration,
            Self::ObjectHide(e) => e.fade_out_duration,
            Self::FieldChange(e) => e.fade_in_duration,
            Self::FieldRevert(e) => e.fade_out_duration,
            Self::DebuffAdd(_) | Self::DebuffRemove(_) => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MoveEvent {
    pub target_id: String,
    #[cfg_attr(
        feature = "json",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub from: Option<Position>,
    pub to: Position,
    #[cfg_attr(feature = "json", serde(default))]
    pub duration: Frame,
    #[cfg_attr(feature = "json", serde(default))]
    pub easing: Easing,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BossMoveEvent {
    pub target_id: String,
    #[cfg_attr(
        feature = "json",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub from: Option<Position>,
    pub to: Position,
    #[cfg_attr(feature = "json", serde(default))]
    pub duration: Frame,
    #[cfg_attr(feature = "json", serde(default))]
    pub easing: Easing,
    #[cfg_attr(feature = "json", serde(default))]
    pub teleport: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum AoeShape {
    Circle {
        radius: f32,
    },
    /// `angle` is the full opening angle in degrees.
    Cone {
        radius: f32,
        angle: f32,
    },
    Line {
        length: f32,
        width: f32,
    },
    Donut {
        #[cfg_attr(feature = "json", serde(rename = "innerRadius"))]
        inner_radius: f32,
        #[cfg_attr(feature = "json", serde(rename = "outerRadius"))]
        outer_radius: f32,
    },
}

impl AoeShape {
    /// Line and cone shapes point somewhere; `direction` is meaningless for the rest.
    pub fn is_directional(&self) -> bool {
        matches!(self, Self::Line { .. } | Self::Cone { .. })
    }

    pub(crate) fn dimensions(&self) -> [f32; 2] {
        match *self {
            Self::Circle { radius } => [radius, 0.0],
            Self::Cone { radius, angle } => [radius, angle],
            Self::Line { length, width } => [length, width],
            Self::Donut {
                inner_radius,
                outer_radius,
            } => [inner_radius, outer_radius],
        }
    }
}

/// Entity an AoE originates from.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum AoeSource {
    #[default]
    Fixed,
    Boss {
        id: String,
    },
    Player {
        id: String,
    },
    Object {
        id: String,
    },
    /// Whichever player currently carries the debuff with this id.
    Debuff {
        id: String,
    },
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TrackingMode {
    #[default]
    Static,
    TrackSource,
    TrackTarget,
}

/// Geometry and anchoring of an area-of-effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AoeSpec {
    pub shape: AoeShape,
    pub position: Position,
    /// Degrees, same convention as [`Position::angle_to`].
    #[cfg_attr(feature = "json", serde(default))]
    pub direction: f32,
    pub color: String,
    #[cfg_attr(feature = "json", serde(default = "default_one"))]
    pub opacity: f32,
    #[cfg_attr(feature = "json", serde(default))]
    pub source: AoeSource,
    #[cfg_attr(feature = "json", serde(default))]
    pub tracking: TrackingMode,
    #[cfg_attr(
        feature = "json",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub target_player_id: Option<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub offset_from_source: Position,
    #[cfg_attr(feature = "json", serde(default))]
    pub placement_delay: Frame,
    #[cfg_attr(feature = "json", serde(default))]
    pub auto_direction: bool,
}

impl AoeSpec {
    /// A static, fixed-source AoE at `position`.
    pub fn new(shape: AoeShape, position: Position, color: impl Into<String>) -> Self {
        Self {
            shape,
            position,
            direction: 0.0,
            color: color.into(),
            opacity: 1.0,
            source: AoeSource::Fixed,
            tracking: TrackingMode::Static,
            target_player_id: None,
            offset_from_source: Position::ORIGIN,
            placement_delay: 0,
            auto_direction: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AoeShowEvent {
    pub aoe_id: String,
    pub aoe: AoeSpec,
    #[cfg_attr(feature = "json", serde(default))]
    pub fade_in_duration: Frame,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AoeHideEvent {
    pub aoe_id: String,
    #[cfg_attr(feature = "json", serde(default))]
    pub fade_out_duration: Frame,
}

/// Debuff target: one player, or every player (`"all"` on the wire).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum DebuffTarget {
    All,
    Player(String),
}

impl DebuffTarget {
    pub const ALL: &'static str = "all";

    pub fn applies_to(&self, player_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Player(id) => id == player_id,
        }
    }
}

impl From<String> for DebuffTarget {
    fn from(value: String) -> Self {
        if value == Self::ALL {
            Self::All
        } else {
            Self::Player(value)
        }
    }
}

impl From<DebuffTarget> for String {
    fn from(target: DebuffTarget) -> Self {
        match target {
            DebuffTarget::All => DebuffTarget::ALL.to_string(),
            DebuffTarget::Player(id) => id,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Debuff {
    pub id: String,
    pub name: String,
    #[cfg_attr(
        feature = "json",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub color: Option<String>,
    /// Seconds. `None` never counts down.
    #[cfg_attr(
        feature = "json",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub duration: Option<f32>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DebuffAddEvent {
    pub target_id: DebuffTarget,
    pub debuff: Debuff,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DebuffRemoveEvent {
    pub target_id: DebuffTarget,
    pub debuff_id: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TextShowEvent {
    pub text_id: String,
    pub content: String,
    pub position: Position,
    #[cfg_attr(feature = "json", serde(default = "default_font_size"))]
    pub font_size: f32,
    #[cfg_attr(feature = "json", serde(default = "default_white"))]
    pub color: String,
    #[cfg_attr(feature = "json", serde(default))]
    pub fade_in_duration: Frame,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TextHideEvent {
    pub text_id: String,
    #[cfg_attr(feature = "json", serde(default))]
    pub fade_out_duration: Frame,
}

/// Legacy single-event text: visible for `duration` frames, fading out at the tail.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TextEvent {
    pub content: String,
    pub position: Position,
    pub duration: Frame,
    #[cfg_attr(feature = "json", serde(default = "default_font_size"))]
    pub font_size: f32,
    #[cfg_attr(feature = "json", serde(default = "default_white"))]
    pub color: String,
    #[cfg_attr(feature = "json", serde(default))]
    pub fade_in_duration: Frame,
    #[cfg_attr(feature = "json", serde(default))]
    pub fade_out_duration: Frame,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CastEvent {
    pub caster_id: String,
    pub skill_name: String,
    pub duration: Frame,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ObjectShowEvent {
    pub object_id: String,
    /// Free-form marker kind understood by the renderer (tower, waymark, orb, ...).
    pub kind: String,
    pub position: Position,
    #[cfg_attr(feature = "json", serde(default = "default_one"))]
    pub size: f32,
    #[cfg_attr(feature = "json", serde(default = "default_white"))]
    pub color: String,
    #[cfg_attr(feature = "json", serde(default = "default_one"))]
    pub opacity: f32,
    #[cfg_attr(feature = "json", serde(default))]
    pub fade_in_duration: Frame,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ObjectHideEvent {
    pub object_id: String,
    #[cfg_attr(feature = "json", serde(default))]
    pub fade_out_duration: Frame,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FieldChangeEvent {
    pub field_change_id: String,
    #[cfg_attr(feature = "json", serde(rename = "override"))]
    pub field_override: FieldOverride,
    #[cfg_attr(feature = "json", serde(default))]
    pub fade_in_duration: Frame,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FieldRevertEvent {
    pub field_change_id: String,
    #[cfg_attr(feature = "json", serde(default))]
    pub fade_out_duration: Frame,
}
