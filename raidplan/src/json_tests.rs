use crate::{AoeShape, AoeSource, DebuffTarget, Easing, Error, EventKind, MechanicData, TrackingMode};

const FIXTURE: &str = r##"
{
  "version": 1,
  "name": "Exaflare practice",
  "fps": 30,
  "durationFrames": 300,
  "field": { "shape": "circle", "size": 40, "backgroundColor": "#1a1a2e" },
  "players": [
    { "id": "mt", "name": "MT", "role": "tank", "position": { "x": 0, "y": -8 } },
    { "id": "h1", "name": "H1", "role": "healer", "position": { "x": 0, "y": 8 } }
  ],
  "enemies": [
    { "id": "boss", "name": "Boss", "position": { "x": 0, "y": 0 } }
  ],
  "timeline": [
    { "id": "e1", "frame": 30, "type": "move", "targetId": "mt", "to": { "x": 10, "y": -8 }, "duration": 30, "easing": "easeInOut" },
    { "id": "e2", "frame": 40, "type": "boss_move", "targetId": "boss", "to": { "x": 0, "y": 15 }, "teleport": true },
    { "id": "e3", "frame": 60, "type": "debuff_add", "targetId": "all", "debuff": { "id": "vuln", "name": "Vulnerability", "duration": 12.5 } },
    {
      "id": "e4", "frame": 90, "type": "aoe_show", "aoeId": "cleave", "fadeInDuration": 10,
      "aoe": {
        "shape": { "kind": "cone", "radius": 20, "angle": 90 },
        "position": { "x": 0, "y": 0 },
        "color": "#ff4040",
        "opacity": 0.6,
        "source": { "type": "boss", "id": "boss" },
        "tracking": "track_source",
        "targetPlayerId": "mt",
        "autoDirection": true
      }
    },
    {
      "id": "e5", "frame": 95, "type": "aoe_show", "aoeId": "donut", "aoe": {
        "shape": { "kind": "donut", "innerRadius": 5, "outerRadius": 20 },
        "position": { "x": 0, "y": 0 }, "color": "#4040ff"
      }
    },
    { "id": "e6", "frame": 150, "type": "aoe_hide", "aoeId": "cleave", "fadeOutDuration": 15 },
    { "id": "e7", "frame": 100, "type": "cast", "casterId": "boss", "skillName": "Exaflare", "duration": 45 },
    { "id": "e8", "frame": 120, "type": "field_change", "fieldChangeId": "p2", "override": { "backgroundColor": "#400000", "backgroundOpacity": 0.5 }, "fadeInDuration": 20 },
    { "id": "e9", "frame": 200, "type": "field_revert", "fieldChangeId": "p2", "fadeOutDuration": 20 },
    { "id": "e10", "frame": 0, "type": "text", "content": "Pull", "position": { "x": 0, "y": 12 }, "duration": 60 },
    { "id": "e11", "frame": 210, "type": "debuff_remove", "targetId": "h1", "debuffId": "vuln" }
  ]
}
"##;

#[test]
fn parses_full_mechanic() {
    let data = MechanicData::from_json_str(FIXTURE).expect("parse");
    assert_eq!(data.name, "Exaflare practice");
    assert_eq!(data.fps, 30.0);
    assert_eq!(data.duration_frames, 300);
    assert_eq!(data.field.background_opacity, 1.0);
    assert_eq!(data.players.len(), 2);
    assert_eq!(data.timeline.len(), 11);

    let EventKind::Move(m) = &data.event("e1").expect("e1").kind else {
        panic!("e1 is a move");
    };
    assert_eq!(m.easing, Easing::EaseInOut);
    assert_eq!(m.from, None);

    let EventKind::DebuffAdd(add) = &data.event("e3").expect("e3").kind else {
        panic!("e3 is a debuff add");
    };
    assert_eq!(add.target_id, DebuffTarget::All);
    assert_eq!(add.debuff.duration, Some(12.5));

    let EventKind::AoeShow(cleave) = &data.event("e4").expect("e4").kind else {
        panic!("e4 is an aoe show");
    };
    assert_eq!(cleave.aoe.source, AoeSource::Boss { id: "boss".into() });
    assert_eq!(cleave.aoe.tracking, TrackingMode::TrackSource);
    assert!(cleave.aoe.auto_direction);
    assert_eq!(cleave.aoe.placement_delay, 0);

    let EventKind::AoeShow(donut) = &data.event("e5").expect("e5").kind else {
        panic!("e5 is an aoe show");
    };
    assert_eq!(
        donut.aoe.shape,
        AoeShape::Donut {
            inner_radius: 5.0,
            outer_radius: 20.0
        }
    );
    assert_eq!(donut.aoe.opacity, 1.0);
    assert_eq!(donut.aoe.source, AoeSource::Fixed);

    let EventKind::Text(text) = &data.event("e10").expect("e10").kind else {
        panic!("e10 is a legacy text");
    };
    assert_eq!(text.font_size, 16.0);
    assert_eq!(text.color, "#ffffff");
}

#[test]
fn reexport_is_stable() {
    let data = MechanicData::from_json_str(FIXTURE).expect("parse");
    let first = data.to_json_string().expect("serialize");
    let reparsed = MechanicData::from_json_str(&first).expect("reparse");
    assert_eq!(reparsed, data);
    assert_eq!(reparsed.to_json_string().expect("serialize"), first);

    let pretty = data.to_json_string_pretty().expect("pretty");
    assert_eq!(MechanicData::from_json_str(&pretty).expect("reparse"), data);
}

#[test]
fn wire_names_survive_serialization() {
    let data = MechanicData::from_json_str(FIXTURE).expect("parse");
    let value: serde_json::Value =
        serde_json::from_str(&data.to_json_string().expect("serialize")).expect("value");

    let events = value["timeline"].as_array().expect("timeline");
    assert_eq!(events[0]["type"], "move");
    assert_eq!(events[0]["easing"], "easeInOut");
    assert_eq!(events[2]["targetId"], "all");
    assert_eq!(events[3]["aoe"]["source"]["type"], "boss");
    assert_eq!(events[3]["aoe"]["tracking"], "track_source");
    assert_eq!(events[4]["aoe"]["shape"]["innerRadius"], 5.0);
    assert_eq!(events[7]["override"]["backgroundColor"], "#400000");
}

#[test]
fn unknown_easing_falls_back_to_linear() {
    let json = r##"{
      "field": { "size": 30, "backgroundColor": "#000000" },
      "timeline": [
        { "id": "m", "frame": 0, "type": "move", "targetId": "x", "to": { "x": 1, "y": 1 }, "easing": "bounce" }
      ]
    }"##;
    let data = MechanicData::from_json_str(json).expect("parse");
    let EventKind::Move(m) = &data.timeline[0].kind else {
        panic!("move");
    };
    assert_eq!(m.easing, Easing::Linear);
    assert_eq!(data.fps, crate::DEFAULT_FPS);
    assert_eq!(data.version, crate::MECHANIC_FORMAT_VERSION);
}

#[test]
fn rejects_malformed_input() {
    let negative_frame = r##"{
      "field": { "size": 30, "backgroundColor": "#000000" },
      "timeline": [ { "id": "c", "frame": -1, "type": "cast", "casterId": "b", "skillName": "x", "duration": 5 } ]
    }"##;
    assert!(matches!(
        MechanicData::from_json_str(negative_frame),
        Err(Error::JsonParse { .. })
    ));

    let unknown_type = r##"{
      "field": { "size": 30, "backgroundColor": "#000000" },
      "timeline": [ { "id": "c", "frame": 1, "type": "teleport_everyone" } ]
    }"##;
    assert!(matches!(
        MechanicData::from_json_str(unknown_type),
        Err(Error::JsonParse { .. })
    ));

    let zero_fps = r##"{ "fps": 0, "field": { "size": 30, "backgroundColor": "#000000" } }"##;
    assert!(matches!(
        MechanicData::from_json_str(zero_fps),
        Err(Error::InvalidFps { .. })
    ));

    let future = r##"{ "version": 99, "field": { "size": 30, "backgroundColor": "#000000" } }"##;
    assert!(matches!(
        MechanicData::from_json_str(future),
        Err(Error::UnsupportedVersion { found: 99, .. })
    ));

    let duplicate = r##"{
      "field": { "size": 30, "backgroundColor": "#000000" },
      "timeline": [
        { "id": "c", "frame": 1, "type": "cast", "casterId": "b", "skillName": "x", "duration": 5 },
        { "id": "c", "frame": 2, "type": "cast", "casterId": "b", "skillName": "y", "duration": 5 }
      ]
    }"##;
    assert!(matches!(
        MechanicData::from_json_str(duplicate),
        Err(Error::DuplicateEventId { .. })
    ));
}

#[test]
fn snapshot_serializes_camel_case() {
    let data = MechanicData::from_json_str(FIXTURE).expect("parse");
    let snapshot = crate::resolve(&data, 130);
    let value = snapshot.to_json_value().expect("value");

    assert_eq!(value["frame"], 130);
    assert!(value["activeAoes"].as_array().is_some_and(|a| a.len() == 2));
    assert_eq!(value["activeAoes"][0]["showEventId"], "e4");
    assert_eq!(value["activeCasts"][0]["skillName"], "Exaflare");
    assert_eq!(value["players"][0]["debuffs"][0]["id"], "vuln");
    assert!(value["field"]["backgroundColor"].is_string());
}
