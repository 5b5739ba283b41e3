//! Ball kinematics

use bevy::prelude::*;

use crate::constants::GRAVITY;

/// Position of a launched ball after `time` simulation units.
///
/// Closed-form projectile motion from `start`: the launch velocity is
/// `power` along `angle` (0 = right, π/2 = up), and gravity pulls the ball
/// back toward larger screen y. Any input is valid; values outside the
/// flight simply extrapolate the parabola.
pub fn next_position(start: Vec2, power: f32, angle: f32, time: f32) -> Vec2 {
    let velocity_x = angle.cos() * power;
    let velocity_y = angle.sin() * power;

    let distance_x = velocity_x * time;
    let distance_y = velocity_y * time - GRAVITY * time * time;

    // Screen y grows downward, so upward travel subtracts
    Vec2::new(start.x + distance_x, start.y - distance_y)
}

/// Simulation time at which a launch reaches its highest point (0 for
/// launches aimed downward).
pub fn apex_time(power: f32, angle: f32) -> f32 {
    (angle.sin() * power / (2.0 * GRAVITY)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    const START: Vec2 = Vec2::new(600.0, 489.0);

    #[test]
    fn test_time_zero_returns_start() {
        let pos = next_position(START, 17.68, FRAC_PI_4, 0.0);
        assert_eq!(pos, START);
    }

    #[test]
    fn test_straight_up_rises_then_falls() {
        let power = 20.0;
        let apex = apex_time(power, FRAC_PI_2);
        let before = next_position(START, power, FRAC_PI_2, apex * 0.5);
        let top = next_position(START, power, FRAC_PI_2, apex);
        let after = next_position(START, power, FRAC_PI_2, apex * 1.5);

        assert!((top.x - START.x).abs() < 1e-3, "Vertical shot drifted: {}", top.x);
        assert!(top.y < before.y, "Apex {} should be above {}", top.y, before.y);
        assert!(after.y > top.y, "Ball should fall after apex: {}", after.y);
    }

    #[test]
    fn test_horizontal_shot_only_drops() {
        // Zero angle: no initial vertical speed, the ball drops by g*t^2
        let pos = next_position(START, 10.0, 0.0, 2.0);
        assert!((pos.x - 620.0).abs() < 1e-3);
        assert!((pos.y - (489.0 + GRAVITY * 4.0)).abs() < 1e-3);
    }

    #[test]
    fn test_leftward_shot_moves_left() {
        let pos = next_position(START, 10.0, PI, 1.0);
        assert!(pos.x < START.x, "Angle pi should move left: {}", pos.x);
    }

    #[test]
    fn test_zero_power_falls_straight_down() {
        let pos = next_position(START, 0.0, 1.0, 1.0);
        assert_eq!(pos.x, START.x);
        assert!((pos.y - (START.y + GRAVITY)).abs() < 1e-4);
    }

    #[test]
    fn test_negative_time_extrapolates() {
        let pos = next_position(START, 10.0, 0.0, -1.0);
        assert!((pos.x - 590.0).abs() < 1e-3);
        assert!(pos.is_finite());
    }

    #[test]
    fn test_apex_time_clamped_for_downward_shots() {
        assert_eq!(apex_time(10.0, 3.0 * FRAC_PI_2), 0.0);
        assert!((apex_time(9.8, FRAC_PI_2) - 1.0).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn deterministic_and_continuous(
            power in 0.0f32..200.0,
            angle in 0.0f32..TAU,
            time in 0.0f32..50.0,
        ) {
            let a = next_position(START, power, angle, time);
            let b = next_position(START, power, angle, time);
            prop_assert_eq!(a, b);

            let nudged = next_position(START, power, angle, time + 1e-3);
            prop_assert!(
                a.distance(nudged) < 1.0,
                "Jump of {} over a tiny time step",
                a.distance(nudged)
            );
        }

        #[test]
        fn ball_only_falls_after_apex(
            power in 0.0f32..100.0,
            angle in 0.0f32..TAU,
            offset in 0.1f32..20.0,
            gap in 0.5f32..20.0,
        ) {
            let t1 = apex_time(power, angle) + offset;
            let t2 = t1 + gap;
            let y1 = next_position(START, power, angle, t1).y;
            let y2 = next_position(START, power, angle, t2).y;
            prop_assert!(y2 > y1, "y went from {} to {} after the apex", y1, y2);
        }
    }
}
