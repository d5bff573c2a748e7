//! Rotating cursor shown while completion calls are in flight.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    tty::IsTty,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const TICK: Duration = Duration::from_millis(100);

/// Handle to the spinner task. `stop()` signals it and waits for the cursor
/// to be cleared; dropping the handle also signals, so the task can never
/// outlive its caller.
pub struct Spinner {
    stop: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Spawn the spinner task. When stdout is not a terminal the handle is
    /// a no-op, keeping headless output clean.
    pub fn start() -> Self {
        let (stop, updates) = watch::channel(false);
        let handle = if io::stdout().is_tty() {
            Some(tokio::spawn(spin(updates)))
        } else {
            None
        };
        Self { stop, handle }
    }

    /// Signal the task and wait for it to finish clearing the cursor.
    pub async fn stop(mut self) {
        let _ = self.stop.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
    }
}

async fn spin(mut updates: watch::Receiver<bool>) {
    let mut i = 0;
    loop {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::DarkGrey),
            Print(format!("\r{}", FRAMES[i % FRAMES.len()])),
            ResetColor,
        )
        .ok();
        stdout.flush().ok();
        i += 1;

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {}
            _ = updates.changed() => break,
        }
    }
    // Clear the cursor cell before handing the line back.
    let mut stdout = io::stdout();
    execute!(stdout, Print("\r \r")).ok();
    stdout.flush().ok();
}
