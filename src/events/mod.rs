//! Change notifications for the presentation layer.
//!
//! The engine never issues rendering commands. It emits a `GameEvent` after
//! every visible change, and hosts re-read `GameController::view` in their
//! observer.
//!
//! ## Example Usage
//!
//! ```
//! use std::rc::Rc;
//! use memory_match::events::{EventLog, GameEvent};
//! use memory_match::{GameConfig, GameController};
//!
//! let mut game = GameController::with_seed(GameConfig::default(), 42).unwrap();
//! let log = EventLog::shared();
//! game.subscribe(Box::new(Rc::clone(&log)));
//!
//! game.reset();
//! assert!(matches!(log.borrow().events()[0], GameEvent::Dealt { .. }));
//! ```

mod event;
mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, FnObserver, ObserverId, Observers, StateObserver};
