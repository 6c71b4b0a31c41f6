//! # Auto-scroll controller
//!
//! The reading view can scroll itself while the user plays. A recurring timer fires
//! every [`TICK_PERIOD`]; on each tick the view asks [`AutoScroll::tick`] what to do
//! with the current [`Viewport`] and either scrolls by the current speed (in pixels)
//! or stops because the bottom was reached.
//!
//! The controller only holds state. The timer itself belongs to the view, which must
//! cancel it whenever the controller stops, whenever [`AutoScroll::set_speed`] asks
//! for a re-arm, and when the view is torn down.

use std::time::Duration;

/// Interval between two scroll steps.
pub const TICK_PERIOD: Duration = Duration::from_millis(60);

pub const MIN_SPEED: f64 = 1.0;
pub const MAX_SPEED: f64 = 4.0;
/// Granularity of the speed slider.
pub const SPEED_STEP: f64 = 0.4;

/// Distance from the end, in pixels, that already counts as the bottom.
pub const BOTTOM_TOLERANCE: f64 = 1.0;

/// Scroll metrics of the document, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl Viewport {
    /// `scrollY` can stop at a fractional maximum while the heights are whole
    /// pixels, so the last pixel counts as the bottom.
    pub fn at_bottom(&self) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - BOTTOM_TOLERANCE
    }
}

/// What a timer tick should do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// Scroll down by this many pixels.
    ScrollBy(f64),
    /// The end of the content was reached; the controller stopped itself.
    ReachedBottom,
    /// The controller is not running; a stray tick does nothing.
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScroll {
    running: bool,
    speed: f64,
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self {
            running: false,
            speed: MIN_SPEED,
        }
    }
}

impl AutoScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            running: false,
            speed: clamp_speed(speed),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Flip between running and stopped. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Change the speed. Returns `true` when the timer must be re-armed, i.e. the
    /// controller is running and the effective speed changed.
    pub fn set_speed(&mut self, speed: f64) -> bool {
        let speed = clamp_speed(speed);
        let changed = speed != self.speed;
        self.speed = speed;
        self.running && changed
    }

    pub fn tick(&mut self, viewport: Viewport) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        if viewport.at_bottom() {
            self.running = false;
            return Tick::ReachedBottom;
        }
        Tick::ScrollBy(self.speed)
    }
}

/// Clamp a slider value into `[MIN_SPEED, MAX_SPEED]`. Non-finite input falls back
/// to the minimum.
pub fn clamp_speed(speed: f64) -> f64 {
    if speed.is_finite() {
        speed.clamp(MIN_SPEED, MAX_SPEED)
    } else {
        MIN_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_top: f64) -> Viewport {
        Viewport {
            scroll_top,
            client_height: 600.0,
            scroll_height: 2000.0,
        }
    }

    #[test]
    fn test_idle_until_started() {
        let mut scroll = AutoScroll::default();
        assert_eq!(scroll.tick(viewport(0.0)), Tick::Idle);

        assert!(scroll.toggle());
        assert_eq!(scroll.tick(viewport(0.0)), Tick::ScrollBy(1.0));

        assert!(!scroll.toggle());
        assert_eq!(scroll.tick(viewport(10.0)), Tick::Idle);
    }

    #[test]
    fn test_stops_at_bottom() {
        let mut scroll = AutoScroll::new(2.2);
        scroll.toggle();

        assert_eq!(scroll.tick(viewport(1398.0)), Tick::ScrollBy(2.2));
        assert_eq!(scroll.tick(viewport(1400.0)), Tick::ReachedBottom);
        assert!(!scroll.is_running());
        assert_eq!(scroll.tick(viewport(1400.0)), Tick::Idle);
    }

    #[test]
    fn test_stops_at_fractional_maximum() {
        let mut scroll = AutoScroll::new(1.4);
        scroll.toggle();

        assert_eq!(scroll.tick(viewport(1398.4)), Tick::ScrollBy(1.4));
        assert_eq!(scroll.tick(viewport(1399.5)), Tick::ReachedBottom);
        assert!(!scroll.is_running());
        assert_eq!(scroll.tick(viewport(1399.5)), Tick::Idle);
    }

    #[test]
    fn test_speed_change_requests_rearm_only_while_running() {
        let mut scroll = AutoScroll::default();
        assert!(!scroll.set_speed(3.0));
        assert_eq!(scroll.speed(), 3.0);

        scroll.toggle();
        assert!(scroll.set_speed(1.4));
        assert!(!scroll.set_speed(1.4));
        assert_eq!(scroll.tick(viewport(0.0)), Tick::ScrollBy(1.4));
    }

    #[test]
    fn test_speed_is_clamped() {
        assert_eq!(clamp_speed(0.2), MIN_SPEED);
        assert_eq!(clamp_speed(9.0), MAX_SPEED);
        assert_eq!(clamp_speed(f64::NAN), MIN_SPEED);
        assert_eq!(AutoScroll::new(-3.0).speed(), MIN_SPEED);
    }

    #[test]
    fn test_tick_period() {
        assert_eq!(TICK_PERIOD.as_millis(), 60);
    }
}
