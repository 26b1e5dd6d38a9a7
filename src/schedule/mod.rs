//! Deferred mismatch resets.
//!
//! A mismatched pair stays face-up for the configured delay. The controller
//! issues a `ResetTicket` tagged with the current `Epoch` and hands it to a
//! `Scheduler`; when the delay elapses the ticket comes back through
//! `GameController::resolve_mismatch`.
//!
//! ## Stale Tickets
//!
//! Every deal bumps the epoch and cancels the pending ticket. A ticket that
//! fires anyway (a host timer that could not be cancelled) no longer matches
//! the controller's pending ticket and is ignored, so it cannot touch the
//! new game.
//!
//! ## Schedulers
//!
//! - `TimerQueue`: manual clock driven by `advance`, for tests and
//!   frame-driven hosts
//! - `FnScheduler`: forwards to a host callback such as a browser timeout

mod ticket;
mod timer;

pub use ticket::{Epoch, ResetTicket};
pub use timer::{FnScheduler, Scheduler, TimerQueue};
