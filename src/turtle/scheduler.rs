//! The tick loop. A host calls [`Turtle::update`] on a timer (every
//! [`Turtle::update_interval`]) while [`Turtle::is_active`]; tests and
//! offline renderers drive [`Turtle::advance`] directly with a chosen
//! amount of time.
use log::debug;
use std::time::{Duration, Instant};

use super::Turtle;
use crate::surface::Surface;

#[derive(Debug, Clone)]
pub(crate) struct Clock {
    pub(crate) active: bool,
    pub(crate) auto_start: bool,
    pub(crate) interval_ms: u64,
    earlier: Option<Instant>,
}

impl Clock {
    pub(crate) fn new(interval_ms: u64) -> Clock {
        Clock {
            active: false,
            auto_start: false,
            interval_ms,
            earlier: None,
        }
    }

    /// Milliseconds since the previous call.
    fn lap(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = self
            .earlier
            .map(|earlier| now.duration_since(earlier).as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        self.earlier = Some(now);
        elapsed
    }
}

impl Turtle {
    /// Start processing the queue, and keep restarting whenever new work
    /// arrives.
    pub fn start(&mut self) -> &mut Self {
        self.start_clock();
        self.clock.auto_start = true;
        self
    }

    /// Stop processing. Queued and half finished tasks stay where they are.
    pub fn stop(&mut self) -> &mut Self {
        self.stop_clock();
        self.clock.auto_start = false;
        self
    }

    pub(crate) fn start_clock(&mut self) {
        if !self.clock.active {
            self.clock.active = true;
            self.clock.earlier = Some(Instant::now());
        }
    }

    pub(crate) fn stop_clock(&mut self) {
        self.clock.active = false;
        self.clock.earlier = None;
    }

    pub fn is_active(&self) -> bool {
        self.clock.active
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.clock.interval_ms)
    }

    /// How often the host should call [`Turtle::update`]. Does not change
    /// the animation speed.
    pub fn set_update_interval(&mut self, ms: u64) -> &mut Self {
        self.clock.interval_ms = ms;
        self
    }

    /// One wall clock tick. Spends the time since the previous tick on the
    /// queue and returns whatever was left over. Once the queue has run dry
    /// the next call deactivates the turtle.
    pub fn update(&mut self) -> f64 {
        if !self.clock.active {
            return 0.0;
        }
        if self.queue.is_empty() {
            self.stop_clock();
            return 0.0;
        }
        let elapsed = self.clock.lap();
        self.advance(elapsed)
    }

    /// Spend `ms` milliseconds on the queue. A task that finishes early
    /// hands the rest of the budget to the next one; a finished task is
    /// drawn onto the surface and dropped. Returns the unspent time, which
    /// is only non-zero if the queue emptied.
    ///
    /// With animation off every task completes at once, so the queue drains
    /// completely whatever `ms` is.
    pub fn advance(&mut self, ms: f64) -> f64 {
        let mut time = ms.max(0.0);
        while let Some(mut task) = self.queue.take_head() {
            time = task.perform(self, time);
            let injected = std::mem::take(&mut self.pending);
            if task.is_done() {
                let (w, h) = self.surface.size();
                task.render(self.surface.as_mut(), w as f64 / 2.0, h as f64 / 2.0);
                debug!("Committed {} task", task.op().name());
                self.queue.replace_head(None, injected);
            } else {
                self.queue.replace_head(Some(task), injected);
            }
            if time <= 0.0 && self.style.animate {
                break;
            }
        }
        time
    }

    /// Draw the task in progress, if the pen is down, onto `target`. The
    /// finished drawing lives on the turtle's own surface; a host composites
    /// the two each frame.
    pub fn preview(&self, target: &mut dyn Surface) {
        if !self.style.pen_down {
            return;
        }
        if let Some(task) = self.queue.head() {
            let (w, h) = target.size();
            task.render(target, w as f64 / 2.0, h as f64 / 2.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::CoordMode;
    use crate::surface::{DrawOp, RecordingSurface};
    use crate::turtle::Turtle;

    fn turtle() -> Turtle {
        Turtle::recording(400, 400, CoordMode::Display)
    }

    #[test]
    fn test_start_stop_idempotent() {
        let mut turtle = turtle();
        assert!(!turtle.is_active());
        turtle.start().start();
        assert!(turtle.is_active());
        turtle.stop().stop();
        assert!(!turtle.is_active());
    }

    #[test]
    fn test_adding_work_rearms_clock() {
        let mut turtle = turtle();
        turtle.start();
        turtle.stop_clock();
        turtle.fd(10.0);
        assert!(turtle.is_active());
        turtle.stop();
        turtle.fd(10.0);
        assert!(!turtle.is_active());
    }

    #[test]
    fn test_update_deactivates_when_empty() {
        let mut turtle = turtle();
        turtle.start();
        assert_eq!(turtle.update(), 0.0);
        assert!(!turtle.is_active());
    }

    #[test]
    fn test_leftover_carries_into_next_task() {
        let mut turtle = turtle();
        // 200px/s, so each 10px move takes 50ms
        turtle.fd(10.0).fd(10.0);
        assert_eq!(turtle.advance(75.0), 0.0);
        assert!((turtle.xcor() - 15.0).abs() < 1e-9);
        assert_eq!(turtle.task_count(), 1);
        let left = turtle.advance(55.0);
        assert!((left - 30.0).abs() < 1e-6);
        assert!(!turtle.has_tasks());
        assert!((turtle.xcor() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_is_conserved_across_a_tick() {
        let mut turtle = turtle();
        turtle.fd(10.0).sleep(20.0).rt(90.0).fd(10.0);
        // 50 + 20 + 100 + 50 ms of work
        let left = turtle.advance(500.0);
        assert!((left - 280.0).abs() < 1e-6);
    }

    #[test]
    fn test_commit_only_when_done() {
        let mut turtle = turtle();
        turtle.fd(100.0);
        turtle.advance(100.0);
        let ops = |t: &Turtle| t.surface_as::<RecordingSurface>().unwrap().ops().len();
        assert_eq!(ops(&turtle), 0);

        let mut frame = RecordingSurface::new(400, 400);
        turtle.preview(&mut frame);
        assert_eq!(frame.ops().len(), 1);

        turtle.advance(1000.0);
        assert_eq!(ops(&turtle), 1);
        match &turtle.surface_as::<RecordingSurface>().unwrap().ops()[0] {
            DrawOp::Stroke(path, _) => {
                assert_eq!(path.elements()[0], kurbo::PathEl::MoveTo(kurbo::Point::new(200.0, 200.0)));
                assert_eq!(path.elements()[1], kurbo::PathEl::LineTo(kurbo::Point::new(300.0, 200.0)));
            }
            other => panic!("Expected a stroke, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_time_still_runs_instant_head() {
        let mut turtle = turtle();
        turtle.pensize(5.0).fd(10.0);
        turtle.advance(0.0);
        assert_eq!(turtle.pen_size(), 5.0);
        assert_eq!(turtle.task_count(), 1);
    }
}
