//! Game event sinks.
//!
//! The engine reports each applied action and the end of the game to its
//! observers. Delivery beyond that (network, UI) is up to the observer.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use tracing::warn;

use crate::board::GameStatus;
use crate::resolve::GameEvent;

/// Receives notifications from an `Engine`.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);

    fn on_game_over(&mut self, _status: GameStatus) {}
}

/// Lets a caller keep a handle on an observer after handing it to the engine.
impl<T: GameObserver> GameObserver for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &GameEvent) {
        self.borrow_mut().on_event(event);
    }

    fn on_game_over(&mut self, status: GameStatus) {
        self.borrow_mut().on_game_over(status);
    }
}

/// Records every event in memory.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
    pub result: Option<GameStatus>,
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }

    fn on_game_over(&mut self, status: GameStatus) {
        self.result = Some(status);
    }
}

/// Writes each event as one JSON object per line.
pub struct JsonLinesObserver<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesObserver<W> {
    pub fn new(out: W) -> Self {
        JsonLinesObserver { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: serde::Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> GameObserver for JsonLinesObserver<W> {
    fn on_event(&mut self, event: &GameEvent) {
        if let Err(e) = self.write_line(event) {
            warn!(error = %e, "failed to write game event");
        }
    }

    fn on_game_over(&mut self, status: GameStatus) {
        let line = serde_json::json!({ "kind": "game_over", "status": status });
        if let Err(e) = self.write_line(&line) {
            warn!(error = %e, "failed to write game result");
        }
    }
}
