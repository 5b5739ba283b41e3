//! Headless App Builder
//!
//! Builds a windowless Bevy app running the simulation, for tests and for
//! driving the fixed tick by hand.

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use std::time::Duration;

use crate::constants::TICK_RATE_HZ;
use crate::simulation::SimulationPlugin;

/// Builder for creating headless Bevy apps
pub struct HeadlessAppBuilder {
    minimal_threads: bool,
}

impl Default for HeadlessAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessAppBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            minimal_threads: false,
        }
    }

    /// Enable minimal thread mode (task pools = 1)
    pub fn with_minimal_threads(mut self) -> Self {
        self.minimal_threads = true;
        self
    }

    /// Build the app with minimal plugins and the simulation plugin.
    ///
    /// No window, input, or rendering systems are added; callers feed
    /// [`crate::PointerInput`] directly and step with [`run_ticks`].
    pub fn build(self) -> App {
        let runner = ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(1.0 / TICK_RATE_HZ));

        let mut app = App::new();
        if self.minimal_threads {
            app.add_plugins(MinimalPlugins.set(runner).set(TaskPoolPlugin {
                task_pool_options: TaskPoolOptions::with_num_threads(1),
            }));
        } else {
            app.add_plugins(MinimalPlugins.set(runner));
        }

        app.add_plugins(SimulationPlugin);
        app
    }
}

/// Run the fixed-step schedule `ticks` times, independent of wall-clock time
pub fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LAUNCH_PAD;
    use crate::input::PointerInput;
    use crate::shooting::LastShotInfo;
    use crate::simulation::Simulation;

    fn press_at(app: &mut App, pointer: Vec2) {
        let mut input = app.world_mut().resource_mut::<PointerInput>();
        input.cursor = Some(pointer);
        input.press_pending = true;
    }

    fn sim(app: &App) -> &Simulation {
        app.world().resource::<Simulation>()
    }

    #[test]
    fn test_builder_creates_app() {
        let app = HeadlessAppBuilder::new().build();
        assert!(app.world().contains_resource::<Simulation>());
        assert!(app.world().contains_resource::<PointerInput>());
        assert!(app.world().contains_resource::<LastShotInfo>());
    }

    #[test]
    fn test_minimal_threads_creates_app() {
        let app = HeadlessAppBuilder::new().with_minimal_threads().build();
        assert_eq!(sim(&app).ball, LAUNCH_PAD);
    }

    #[test]
    fn test_tick_rate_is_fixed() {
        let app = HeadlessAppBuilder::new().build();
        let fixed = app.world().resource::<Time<Fixed>>();
        assert_eq!(fixed.timestep(), Duration::from_secs_f64(1.0 / TICK_RATE_HZ));
    }

    #[test]
    fn test_press_launches_on_next_tick() {
        let mut app = HeadlessAppBuilder::new().build();
        press_at(&mut app, Vec2::new(700.0, 389.0));
        run_ticks(&mut app, 1);

        assert!(sim(&app).is_shooting());
        // Launch tick leaves the ball on the pad with no time elapsed
        assert_eq!(sim(&app).ball, LAUNCH_PAD);
        assert!(!app.world().resource::<PointerInput>().press_pending);

        let info = app.world().resource::<LastShotInfo>();
        assert_eq!(info.shots_fired, 1);
        assert!((info.angle_degrees - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_full_shot_cycle() {
        let mut app = HeadlessAppBuilder::new().build();
        press_at(&mut app, Vec2::new(700.0, 389.0));
        run_ticks(&mut app, 21);

        // One launch tick plus twenty flight ticks: elapsed 1.0
        let ball = sim(&app).ball;
        assert!((ball.x - 612.5).abs() < 0.1, "x {}", ball.x);
        assert!((ball.y - 481.4).abs() < 0.1, "y {}", ball.y);

        // Flight lasts ~2.65 time units (53 ticks)
        run_ticks(&mut app, 40);
        assert!(!sim(&app).is_shooting());
        assert_eq!(sim(&app).ball, LAUNCH_PAD);

        let info = app.world().resource::<LastShotInfo>();
        let flight_time = info.flight_time.unwrap();
        assert!((flight_time - 2.65).abs() < 1e-3, "flight {flight_time}");
        assert!(info.landing.unwrap().y >= 490.0);
    }

    #[test]
    fn test_press_while_airborne_is_consumed_and_ignored() {
        let mut app = HeadlessAppBuilder::new().build();
        press_at(&mut app, Vec2::new(700.0, 389.0));
        run_ticks(&mut app, 5);

        let before = sim(&app).launch_params().copied();
        press_at(&mut app, Vec2::new(100.0, 100.0));
        run_ticks(&mut app, 1);

        let after = sim(&app).launch_params().copied().unwrap();
        assert_eq!(after.target, before.unwrap().target);
        assert!(!app.world().resource::<PointerInput>().press_pending);
        assert_eq!(app.world().resource::<LastShotInfo>().shots_fired, 1);
    }

    #[test]
    fn test_press_without_cursor_is_dropped() {
        let mut app = HeadlessAppBuilder::new().build();
        app.world_mut().resource_mut::<PointerInput>().press_pending = true;
        run_ticks(&mut app, 1);

        assert!(!sim(&app).is_shooting());
        assert!(!app.world().resource::<PointerInput>().press_pending);
    }
}
