use crate::{
    AoeHideEvent, AoeShape, AoeShowEvent, AoeSpec, Easing, Enemy, EventKind, Field, FieldShape,
    MechanicData, MoveEvent, Player, Position, Role, TimelineEvent,
};

pub(crate) fn assert_approx(actual: f32, expected: f32) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= 1.0e-5,
        "expected {expected}, got {actual} (diff {diff})"
    );
}

pub(crate) fn assert_position(actual: Position, x: f32, y: f32) {
    assert!(
        (actual.x - x).abs() <= 1.0e-4 && (actual.y - y).abs() <= 1.0e-4,
        "expected ({x}, {y}), got ({}, {})",
        actual.x,
        actual.y
    );
}

pub(crate) fn player(id: &str, x: f32, y: f32) -> Player {
    Player {
        id: id.to_string(),
        name: id.to_uppercase(),
        role: Role::Dps,
        position: Position::new(x, y),
    }
}

pub(crate) fn enemy(id: &str, x: f32, y: f32) -> Enemy {
    Enemy {
        id: id.to_string(),
        name: id.to_string(),
        position: Position::new(x, y),
    }
}

pub(crate) fn arena() -> Field {
    Field::new(FieldShape::Circle, 40.0, "#202020")
}

pub(crate) fn mechanic(
    players: Vec<Player>,
    enemies: Vec<Enemy>,
    timeline: Vec<TimelineEvent>,
) -> MechanicData {
    MechanicData {
        name: "test".to_string(),
        players,
        enemies,
        timeline,
        ..MechanicData::new(arena())
    }
}

pub(crate) fn move_to(
    id: &str,
    frame: u32,
    target: &str,
    to: (f32, f32),
    duration: u32,
) -> TimelineEvent {
    TimelineEvent::new(
        id,
        frame,
        EventKind::Move(MoveEvent {
            target_id: target.to_string(),
            from: None,
            to: Position::new(to.0, to.1),
            duration,
            easing: Easing::Linear,
        }),
    )
}

pub(crate) fn circle_at(x: f32, y: f32) -> AoeSpec {
    AoeSpec::new(AoeShape::Circle { radius: 5.0 }, Position::new(x, y), "#ff8000")
}

pub(crate) fn aoe_show(id: &str, frame: u32, aoe_id: &str, aoe: AoeSpec, fade_in: u32) -> TimelineEvent {
    TimelineEvent::new(
        id,
        frame,
        EventKind::AoeShow(AoeShowEvent {
            aoe_id: aoe_id.to_string(),
            aoe,
            fade_in_duration: fade_in,
        }),
    )
}

pub(crate) fn aoe_hide(id: &str, frame: u32, aoe_id: &str, fade_out: u32) -> TimelineEvent {
    TimelineEvent::new(
        id,
        frame,
        EventKind::AoeHide(AoeHideEvent {
            aoe_id: aoe_id.to_string(),
            fade_out_duration: fade_out,
        }),
    )
}
