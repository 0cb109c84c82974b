//! Session module - level ingestion and the turn driver
//!
//! The engine core exposes primitives (swap, match removal, gravity,
//! refill) and deliberately does not sequence them. This crate is the
//! canonical caller: it ingests a level definition, owns the per-level
//! score and move accounting, drives the full cascade for each accepted
//! swap, and reports everything a presentation layer needs to animate.
//!
//! # Structure
//!
//! - [`level`]: the level definition data model (`tiles`, `targetScore`,
//!   `moves`) and its validation into an engine tile mask
//! - [`session`]: [`GameSession`] - turn processing, win/loss evaluation,
//!   reshuffle
//!
//! # Example
//!
//! ```
//! use gridcrush_session::{GameSession, LevelConfig, SessionState};
//!
//! let config = LevelConfig::fully_open(1000, 15);
//! let mut session = GameSession::new(&config, 12345).unwrap();
//!
//! let pieces = session.start();
//! assert!(!pieces.is_empty());
//! assert_eq!(session.state(), SessionState::Playing);
//! assert_eq!(session.moves_left(), 15);
//! ```

pub mod level;
pub mod session;

pub use level::LevelConfig;
pub use session::{CascadeStep, GameSession, SessionState, SwapOutcome, TurnReport};
