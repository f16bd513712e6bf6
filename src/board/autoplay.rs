/// Autoplay engine - a timer thread that triggers random cells
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;

/// Tick interval while autoplay is running.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayEvent {
    /// A randomly chosen cell should be pressed and played.
    CellTriggered(usize),
}

/// Two states: idle and running. While running, a background thread emits
/// one `CellTriggered` every interval, sampling the shared cell count fresh
/// each tick so grid resizes take effect immediately.
pub struct Autoplay {
    sender: Sender<AutoplayEvent>,
    receiver: Receiver<AutoplayEvent>,
    is_running: Arc<Mutex<bool>>,
    timer: Option<thread::JoinHandle<()>>,
}

impl Autoplay {
    pub fn new() -> Self {
        let (sender, receiver) = channel();

        Self {
            sender,
            receiver,
            is_running: Arc::new(Mutex::new(false)),
            timer: None,
        }
    }

    pub fn start(&mut self, cell_count: Arc<Mutex<usize>>) {
        if *self.is_running.lock().unwrap() {
            return;
        }

        *self.is_running.lock().unwrap() = true;

        let is_running = Arc::clone(&self.is_running);
        let sender = self.sender.clone();

        self.timer = Some(thread::spawn(move || {
            let mut last_tick = Instant::now();

            while *is_running.lock().unwrap() {
                let now = Instant::now();

                if now.duration_since(last_tick) >= AUTOPLAY_INTERVAL {
                    let total_cells = *cell_count.lock().unwrap();

                    if total_cells > 0 {
                        let index = rand::thread_rng().gen_range(0..total_cells);
                        let _ = sender.send(AutoplayEvent::CellTriggered(index));
                    }

                    last_tick = now;
                }

                thread::sleep(Duration::from_millis(1));
            }
        }));
    }

    /// Stops the timer and discards anything already queued, so no trigger
    /// is observable after disabling, even one scheduled just before.
    ///
    /// Joins the timer thread before returning; otherwise an immediate
    /// restart could re-raise the flag before the old thread saw it drop,
    /// leaving two timers ticking.
    pub fn stop(&mut self) {
        *self.is_running.lock().unwrap() = false;
        if let Some(timer) = self.timer.take() {
            let _ = timer.join();
        }
        while self.receiver.try_recv().is_ok() {}
    }

    pub fn is_running(&self) -> bool {
        *self.is_running.lock().unwrap()
    }

    pub fn poll_events(&self) -> Vec<AutoplayEvent> {
        if !*self.is_running.lock().unwrap() {
            return Vec::new();
        }

        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared(count: usize) -> Arc<Mutex<usize>> {
        Arc::new(Mutex::new(count))
    }

    #[test]
    fn test_ticks_arrive_while_running() {
        let mut autoplay = Autoplay::new();
        autoplay.start(shared(12));
        assert!(autoplay.is_running());

        thread::sleep(AUTOPLAY_INTERVAL + Duration::from_millis(150));
        let events = autoplay.poll_events();
        assert!(!events.is_empty());
        for event in events {
            let AutoplayEvent::CellTriggered(index) = event;
            assert!(index < 12);
        }

        autoplay.stop();
    }

    #[test]
    fn test_stop_silences_pending_ticks() {
        let mut autoplay = Autoplay::new();
        autoplay.start(shared(12));
        autoplay.stop();
        assert!(!autoplay.is_running());

        thread::sleep(AUTOPLAY_INTERVAL + Duration::from_millis(150));
        assert!(autoplay.poll_events().is_empty());
    }

    #[test]
    fn test_restart_after_stop() {
        let mut autoplay = Autoplay::new();
        autoplay.start(shared(8));
        autoplay.stop();

        autoplay.start(shared(8));
        assert!(autoplay.is_running());
        thread::sleep(AUTOPLAY_INTERVAL + Duration::from_millis(150));
        assert!(!autoplay.poll_events().is_empty());
        autoplay.stop();
    }

    #[test]
    fn test_quick_restart_keeps_a_single_timer() {
        let mut autoplay = Autoplay::new();
        autoplay.start(shared(12));
        thread::sleep(Duration::from_millis(5));
        autoplay.stop();
        autoplay.start(shared(12));

        // With one timer, 2.1s fits four ticks (plus scheduling slack); a
        // second thread surviving the restart would double that rate.
        thread::sleep(Duration::from_millis(2100));
        let events = autoplay.poll_events();
        assert!(
            (1..=5).contains(&events.len()),
            "observed {} events in 2.1s",
            events.len()
        );

        autoplay.stop();
    }

    #[test]
    fn test_start_while_running_is_a_no_op() {
        let mut autoplay = Autoplay::new();
        autoplay.start(shared(4));
        autoplay.start(shared(4));
        assert!(autoplay.is_running());
        autoplay.stop();
    }

    #[test]
    fn test_resize_bounds_next_tick() {
        let mut autoplay = Autoplay::new();
        let cells = shared(20);
        autoplay.start(Arc::clone(&cells));

        thread::sleep(AUTOPLAY_INTERVAL + Duration::from_millis(150));
        let _ = autoplay.poll_events();

        // Shrink the grid while the timer is live
        *cells.lock().unwrap() = 2;
        thread::sleep(AUTOPLAY_INTERVAL + Duration::from_millis(150));

        for event in autoplay.poll_events() {
            let AutoplayEvent::CellTriggered(index) = event;
            assert!(index < 2);
        }

        autoplay.stop();
    }
}
