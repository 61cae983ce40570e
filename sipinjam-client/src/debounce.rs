//! Debouncer
//!
//! Delays a rapidly changing value until it has been stable for the
//! configured window, then emits only the last value.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Handle to a background debounce task.
///
/// Values pushed within `delay` of each other collapse into a single
/// emission of the newest one. Dropping the handle (or calling
/// [`Debouncer::shutdown`]) stops the task and discards any pending value.
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
    shutdown: CancellationToken,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the debounce task; settled values arrive on the returned receiver
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (output_tx, output_rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        tokio::spawn(run(delay, input_rx, output_tx, shutdown.clone()));
        (
            Self {
                input: input_tx,
                shutdown,
            },
            output_rx,
        )
    }

    /// Feed a new value, restarting the delay window
    pub fn push(&self, value: T) {
        if self.input.send(value).is_err() {
            tracing::debug!("Debouncer task already stopped");
        }
    }

    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn run<T>(
    delay: Duration,
    mut input: mpsc::UnboundedReceiver<T>,
    output: mpsc::UnboundedSender<T>,
    shutdown: CancellationToken,
) {
    let mut pending: Option<T> = None;
    let mut deadline: Option<Instant> = None;

    loop {
        let sleep_until = deadline.unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));

        tokio::select! {
            _ = shutdown.cancelled() => break,

            _ = tokio::time::sleep_until(sleep_until), if deadline.is_some() => {
                deadline = None;
                if let Some(value) = pending.take()
                    && output.send(value).is_err()
                {
                    // receiver gone
                    break;
                }
            }

            value = input.recv() => match value {
                Some(value) => {
                    pending = Some(value);
                    deadline = Some(Instant::now() + delay);
                }
                None => break,
            },
        }
    }

    if pending.is_some() {
        tracing::trace!("Debouncer stopped with a pending value, discarded");
    }
}
