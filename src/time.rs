// This file is part of stardrift.
// Copyright (c) 2025-2026 the stardrift project developers. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use std::thread;
use std::time::Duration;

use time;

/// Frame clock. `tick` paces the loop to the target frame rate and reports
/// elapsed wall-clock time between calls.
pub struct Time {
    frame_duration_ns: Option<u64>,
    last_tick_ns: u64,
    next_frame_ns: u64,
}

impl Time {
    pub fn new(fps: Option<f64>) -> Time {
        Time {
            frame_duration_ns: fps.map(|v| (1_000_000_000.0 / v) as u64),
            last_tick_ns: time::precise_time_ns(),
            next_frame_ns: 0,
        }
    }

    /// Sleeps until the next frame deadline (or returns immediately if it
    /// already passed), then returns seconds elapsed since the previous call.
    pub fn tick(&mut self) -> f64 {
        if let Some(frame_duration_ns) = self.frame_duration_ns {
            let time_ns = time::precise_time_ns();
            let wait_ns = if self.next_frame_ns > time_ns {
                self.next_frame_ns - time_ns
            } else {
                0
            };
            if wait_ns > 0 && wait_ns <= frame_duration_ns {
                thread::sleep(Duration::new(0, wait_ns as u32));
            }
            self.next_frame_ns = time::precise_time_ns() + frame_duration_ns;
        }
        let now_ns = time::precise_time_ns();
        let elapsed_ns = now_ns.saturating_sub(self.last_tick_ns);
        self.last_tick_ns = now_ns;
        elapsed_ns as f64 / 1_000_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_without_target_rate_never_sleeps() {
        let mut clock = Time::new(None);
        let dt = clock.tick();
        assert!(dt >= 0.0);
        assert!(dt < 1.0);
    }

    #[test]
    fn tick_reports_elapsed_seconds() {
        let mut clock = Time::new(None);
        clock.tick();
        thread::sleep(Duration::from_millis(5));
        let dt = clock.tick();
        assert!(dt >= 0.005);
    }
}
