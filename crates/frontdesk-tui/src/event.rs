//! Terminal input and the toast clock, merged into one channel.
//!
//! A background task owns the crossterm `EventStream`. The app pulls from
//! the receiver and redraws after whatever it handled, so there is no
//! separate render timer.

use std::time::{Duration, Instant};

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const MIN_TICK: Duration = Duration::from_millis(100);
const MAX_TICK: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    /// Toast clock. Carries the time toasts are judged against.
    Tick(Instant),
}

/// How often toasts are checked for expiry: a tenth of their lifetime,
/// kept between 100 ms and 1 s.
pub fn tick_interval(toast_ttl: Duration) -> Duration {
    (toast_ttl / 10).clamp(MIN_TICK, MAX_TICK)
}

pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventReader {
    /// Start reading input, ticking every `tick`.
    pub fn spawn(tick: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        tokio::spawn(pump(tx, tick, cancel.clone()));
        Self { rx, cancel }
    }

    /// `None` once the reader has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn pump(tx: mpsc::UnboundedSender<Event>, tick: Duration, cancel: CancellationToken) {
    let mut input = EventStream::new();
    let mut clock = tokio::time::interval(tick);
    clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let event = tokio::select! {
            () = cancel.cancelled() => break,
            at = clock.tick() => Event::Tick(at.into_std()),
            next = input.next() => match next {
                Some(Ok(raw)) => match translate(raw) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => {
                    warn!(error = %e, "terminal input error");
                    continue;
                }
                None => break,
            },
        };
        if tx.send(event).is_err() {
            break;
        }
    }
    debug!("event reader stopped");
}

/// Key presses and resizes. Releases, repeats, mouse and focus are dropped.
fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(..) => Some(Event::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tick_follows_toast_lifetime() {
        assert_eq!(tick_interval(Duration::from_secs(5)), Duration::from_millis(500));
        assert_eq!(tick_interval(Duration::from_millis(200)), MIN_TICK);
        assert_eq!(tick_interval(Duration::from_secs(60)), MAX_TICK);
    }

    #[test]
    fn only_presses_and_resizes_pass() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(translate(CrosstermEvent::Key(release)).is_none());
        assert!(translate(CrosstermEvent::FocusLost).is_none());
        assert!(matches!(
            translate(CrosstermEvent::Key(KeyEvent::from(KeyCode::Char('q')))),
            Some(Event::Key(k)) if k.code == KeyCode::Char('q')
        ));
        assert!(matches!(translate(CrosstermEvent::Resize(80, 24)), Some(Event::Resize)));
    }
}
