//! Ticker Actor: Dedicated thread that runs a typewriter in real time.
//!
//! The engine only understands virtual time. This actor maps wall-clock
//! time onto it: it sleeps until the engine's next deadline, advances the
//! clock, and sends a [`Frame`] whenever the visible output changed.

use crate::engine::{Frame, Typewriter, TypewriterConfig};
use crate::error::{Error, Result};
use crossbeam_channel::{bounded, select, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::debug;

/// Frames buffered before the ticker waits for the host to catch up.
const FRAME_CHANNEL_CAPACITY: usize = 16;

/// Longest sleep when nothing is scheduled (only reachable after destroy).
const IDLE_WAIT: Duration = Duration::from_secs(1);

/// Ticker actor that owns a [`Typewriter`] and streams its frames.
pub struct TypewriterActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Dropping this sender tells the thread to stop.
    stop_tx: Option<Sender<()>>,
    /// Receiver for frame updates.
    frame_rx: Receiver<Frame>,
}

impl TypewriterActor {
    /// Spawn a ticker thread running a typewriter built from `config`.
    ///
    /// The first frame (empty text, caret visible) is sent immediately;
    /// later frames follow every visible change.
    pub fn spawn(config: TypewriterConfig) -> Result<Self> {
        let (frame_tx, frame_rx) = bounded(FRAME_CHANNEL_CAPACITY);
        let (stop_tx, stop_rx) = bounded::<()>(0);

        let handle = thread::Builder::new()
            .name("typewriter-ticker".to_string())
            .spawn(move || {
                Self::run_loop(Typewriter::new(config), &frame_tx, &stop_rx);
            })
            .map_err(Error::Spawn)?;

        debug!("typewriter ticker spawned");

        Ok(Self {
            handle: Some(handle),
            stop_tx: Some(stop_tx),
            frame_rx,
        })
    }

    /// Get a reference to the frame receiver.
    ///
    /// Use this with `select!` for event-driven loops:
    ///
    /// ```ignore
    /// loop {
    ///     select! {
    ///         recv(actor.receiver()) -> frame => line.update(frame?),
    ///         default(Duration::from_millis(16)) => poll_input(),
    ///     }
    /// }
    /// ```
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Frame> {
        &self.frame_rx
    }

    /// Drain pending frames and return the newest, if any arrived.
    pub fn latest(&self) -> Option<Frame> {
        self.frame_rx.try_iter().last()
    }

    /// Whether the ticker thread is still running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the ticker and wait for its thread.
    ///
    /// Idempotent. Once this returns no new frames are produced; frames
    /// already queued stay readable.
    pub fn destroy(&mut self) {
        // Disconnecting the stop channel wakes the thread from any wait.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!("typewriter ticker stopped");
        }
    }

    /// Stop the ticker, consuming the actor.
    pub fn join(mut self) {
        self.destroy();
    }

    /// Main ticker loop.
    fn run_loop(mut typewriter: Typewriter, frame_tx: &Sender<Frame>, stop_rx: &Receiver<()>) {
        let start = Instant::now();

        if Self::send_frame(typewriter.frame(), frame_tx, stop_rx) {
            loop {
                let wait = typewriter.time_until_next().unwrap_or(IDLE_WAIT);
                match stop_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {}
                    // Stop requested or the actor was dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }

                if typewriter.advance_to(start.elapsed())
                    && !Self::send_frame(typewriter.frame(), frame_tx, stop_rx)
                {
                    break;
                }
            }
        }

        typewriter.destroy();
    }

    /// Send a frame, giving up if a stop arrives while the channel is full.
    ///
    /// Returns `false` when the loop should exit.
    fn send_frame(frame: Frame, frame_tx: &Sender<Frame>, stop_rx: &Receiver<()>) -> bool {
        select! {
            send(frame_tx, frame) -> sent => sent.is_ok(),
            recv(stop_rx) -> _ => false,
        }
    }
}

impl Drop for TypewriterActor {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config(words: &[&str], looping: bool) -> TypewriterConfig {
        TypewriterConfig::new(words.iter().copied())
            .with_loop(looping)
            .with_timing(
                Duration::from_millis(2),
                Duration::from_millis(1),
                Duration::ZERO,
                Duration::from_millis(5),
            )
    }

    #[test]
    fn test_first_frame_is_blank() {
        let actor = TypewriterActor::spawn(fast_config(&["Rust"], true)).unwrap();

        let frame = actor.receiver().recv_timeout(Duration::from_millis(500)).unwrap();
        assert_eq!(frame.text, "");
        assert!(frame.caret_visible);
        assert!(!frame.done);

        actor.join();
    }

    #[test]
    fn test_runs_to_completion() {
        let actor = TypewriterActor::spawn(fast_config(&["Go", "Hobbyist"], false)).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut last = None;
        while Instant::now() < deadline {
            if let Ok(frame) = actor.receiver().recv_timeout(Duration::from_millis(50)) {
                let done = frame.done;
                last = Some(frame);
                if done {
                    break;
                }
            }
        }

        let last = last.unwrap();
        assert!(last.done);
        assert_eq!(last.text, "Hobbyist");
        actor.join();
    }

    #[test]
    fn test_destroy_is_idempotent_and_final() {
        let mut actor = TypewriterActor::spawn(fast_config(&["Go", "Rust"], true)).unwrap();
        thread::sleep(Duration::from_millis(20));

        actor.destroy();
        actor.destroy();
        assert!(!actor.is_running());

        // Drain what was queued before the stop; nothing arrives afterwards.
        while actor.receiver().try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(30));
        assert!(actor.latest().is_none());
    }

    #[test]
    fn test_stop_while_host_is_not_reading() {
        // Nobody reads, so the channel fills up and the ticker blocks on send.
        let actor = TypewriterActor::spawn(fast_config(&["Go", "Rust"], true)).unwrap();
        thread::sleep(Duration::from_millis(200));

        let started = Instant::now();
        actor.join();
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_latest_returns_newest() {
        let actor = TypewriterActor::spawn(fast_config(&["Hobbyist"], false)).unwrap();
        thread::sleep(Duration::from_millis(200));

        let frame = actor.latest().unwrap();
        assert_eq!(frame.text, "Hobbyist");
        assert!(frame.done);
        actor.join();
    }
}
