use crate::runtime::test_support::{assert_approx, assert_position, circle_at};
use crate::{
    AnchorContext, AoeShape, AoeSource, AoeSpec, Position, TrackingMode, resolve_anchor,
    resolve_direction,
};

fn context() -> AnchorContext<'static> {
    let mut ctx = AnchorContext::default();
    ctx.players.insert("p1", Position::new(10.0, 0.0));
    ctx.players.insert("p2", Position::new(0.0, 10.0));
    ctx.enemies.insert("boss", Position::new(0.0, 0.0));
    ctx.objects.insert("tower", Position::new(-5.0, -5.0));
    ctx.debuff_holders.insert("flare", "p2");
    ctx
}

fn line_from(source: AoeSource) -> AoeSpec {
    AoeSpec {
        source,
        tracking: TrackingMode::TrackSource,
        ..AoeSpec::new(
            AoeShape::Line {
                length: 30.0,
                width: 4.0,
            },
            Position::new(1.0, 1.0),
            "#ff0000",
        )
    }
}

#[test]
fn static_uses_authored_position() {
    let spec = circle_at(3.0, 4.0);
    let anchor = resolve_anchor(&spec, 50, &context(), 50).expect("anchor");
    assert_position(anchor.position, 3.0, 4.0);
}

#[test]
fn static_placement_delay_gates_rendering() {
    let spec = AoeSpec {
        placement_delay: 15,
        ..circle_at(3.0, 4.0)
    };
    let ctx = context();
    assert!(resolve_anchor(&spec, 50, &ctx, 50).is_none());
    assert!(resolve_anchor(&spec, 50, &ctx, 64).is_none());
    assert!(resolve_anchor(&spec, 50, &ctx, 65).is_some());
}

#[test]
fn track_source_follows_each_source_kind_with_offset() {
    let ctx = context();
    let cases = [
        (AoeSource::Boss { id: "boss".into() }, (2.0, 0.0)),
        (AoeSource::Player { id: "p1".into() }, (12.0, 0.0)),
        (AoeSource::Object { id: "tower".into() }, (-3.0, -5.0)),
        (AoeSource::Debuff { id: "flare".into() }, (2.0, 10.0)),
    ];
    for (source, (x, y)) in cases {
        let spec = AoeSpec {
            source: source.clone(),
            tracking: TrackingMode::TrackSource,
            offset_from_source: Position::new(2.0, 0.0),
            ..circle_at(0.0, 0.0)
        };
        let anchor = resolve_anchor(&spec, 0, &ctx, 10)
            .unwrap_or_else(|| panic!("anchor for {source:?}"));
        assert_position(anchor.position, x, y);
    }
}

#[test]
fn track_source_without_live_source_does_not_render() {
    let ctx = context();
    for source in [
        AoeSource::Boss { id: "adds".into() },
        AoeSource::Player { id: "p9".into() },
        AoeSource::Object { id: "hidden".into() },
        AoeSource::Debuff { id: "nobody".into() },
    ] {
        let spec = AoeSpec {
            source,
            tracking: TrackingMode::TrackSource,
            ..circle_at(0.0, 0.0)
        };
        assert!(resolve_anchor(&spec, 0, &ctx, 10).is_none());
    }
}

#[test]
fn track_source_with_fixed_source_stays_put() {
    let spec = AoeSpec {
        tracking: TrackingMode::TrackSource,
        offset_from_source: Position::new(100.0, 100.0),
        ..circle_at(7.0, 7.0)
    };
    let anchor = resolve_anchor(&spec, 0, &context(), 0).expect("anchor");
    assert_position(anchor.position, 7.0, 7.0);
}

#[test]
fn track_target_anchors_on_target_player() {
    let ctx = context();
    let spec = AoeSpec {
        source: AoeSource::Boss { id: "boss".into() },
        tracking: TrackingMode::TrackTarget,
        target_player_id: Some("p2".into()),
        offset_from_source: Position::new(0.0, 1.0),
        ..circle_at(0.0, 0.0)
    };
    let anchor = resolve_anchor(&spec, 0, &ctx, 0).expect("anchor");
    assert_position(anchor.position, 0.0, 11.0);

    let untargeted = AoeSpec {
        target_player_id: None,
        ..spec
    };
    assert!(resolve_anchor(&untargeted, 0, &ctx, 0).is_none());
}

#[test]
fn auto_direction_points_from_source_to_target() {
    let ctx = context();
    let spec = AoeSpec {
        auto_direction: true,
        target_player_id: Some("p2".into()),
        direction: 45.0,
        ..line_from(AoeSource::Boss { id: "boss".into() })
    };
    assert_approx(resolve_direction(&spec, &ctx), 90.0);

    let toward_p1 = AoeSpec {
        target_player_id: Some("p1".into()),
        ..spec.clone()
    };
    assert_approx(resolve_direction(&toward_p1, &ctx), 0.0);
}

#[test]
fn auto_direction_falls_back_to_authored() {
    let ctx = context();
    let base = AoeSpec {
        auto_direction: true,
        target_player_id: Some("p2".into()),
        direction: 45.0,
        ..line_from(AoeSource::Boss { id: "boss".into() })
    };

    // Circles have no direction to compute.
    let circle = AoeSpec {
        shape: AoeShape::Circle { radius: 3.0 },
        ..base.clone()
    };
    assert_approx(resolve_direction(&circle, &ctx), 45.0);

    // Fixed sources have no live position.
    let fixed = AoeSpec {
        source: AoeSource::Fixed,
        ..base.clone()
    };
    assert_approx(resolve_direction(&fixed, &ctx), 45.0);

    // Missing target.
    let missing = AoeSpec {
        target_player_id: Some("p9".into()),
        ..base.clone()
    };
    assert_approx(resolve_direction(&missing, &ctx), 45.0);

    let disabled = AoeSpec {
        auto_direction: false,
        ..base
    };
    assert_approx(resolve_direction(&disabled, &ctx), 45.0);
}

#[test]
fn cone_from_debuff_holder_aims_at_target() {
    let ctx = context();
    let spec = AoeSpec {
        shape: AoeShape::Cone {
            radius: 20.0,
            angle: 90.0,
        },
        auto_direction: true,
        target_player_id: Some("p1".into()),
        ..line_from(AoeSource::Debuff {
            id: "flare".into(),
        })
    };
    // Holder p2 at (0, 10) aiming at p1 at (10, 0).
    let anchor = resolve_anchor(&spec, 0, &ctx, 0).expect("anchor");
    assert_position(anchor.position, 0.0, 10.0);
    assert_approx(anchor.direction, -45.0);
}
