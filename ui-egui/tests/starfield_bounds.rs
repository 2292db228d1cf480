// SPDX-License-Identifier: MIT OR Apache-2.0

use egui::{Pos2, Rect, Vec2};
use rand::{rngs::StdRng, SeedableRng};
use space_tictactoe_ui_egui::starfield::{Starfield, StarfieldParams};

#[test]
fn generates_configured_count() {
    let mut rng = StdRng::seed_from_u64(42);
    let field = Starfield::generate(&mut rng, StarfieldParams::default());
    assert_eq!(field.len(), 50);

    let none = Starfield::generate(
        &mut rng,
        StarfieldParams {
            count: 0,
            ..StarfieldParams::default()
        },
    );
    assert!(none.is_empty());
}

#[test]
fn stars_stay_inside_viewport() {
    let mut rng = StdRng::seed_from_u64(1234);
    let field = Starfield::generate(&mut rng, StarfieldParams::default());
    let viewport = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(1280.0, 720.0));

    for star in field.stars() {
        assert!((0.5..1.0).contains(&star.scale));
        assert!((10.0..20.0).contains(&star.period));

        for step in 0..200 {
            let t = step as f32 * 0.37;
            let pos = star.position_at(t, viewport);
            assert!(viewport.contains(pos), "star left viewport at t={t}: {pos:?}");
        }
    }
}

#[test]
fn equal_drift_bounds_give_fixed_period() {
    let mut rng = StdRng::seed_from_u64(9);
    let field = Starfield::generate(
        &mut rng,
        StarfieldParams {
            min_period: 12.0,
            max_period: 12.0,
            ..StarfieldParams::default()
        },
    );
    assert!(field.stars().iter().all(|star| star.period == 12.0));
}
