//! igo: a rules engine for casual 9x9 Go.
//!
//! The engine places stones, finds groups, resolves captures, rejects
//! forbidden (suicide) moves, and estimates territory and dead stones.
//! It does not generate moves.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and labels
//! - [`board`] - The 9x9 grid, colors and vertex conversion
//! - [`group`] - Flood-fill group and region detection
//! - [`capture`] - Removal of groups without liberties
//! - [`rules`] - Move legality on a speculative board
//! - [`territory`] - Territory counting and the dead-stone marker
//! - [`session`] - Turn order, history and capture tallies
//! - [`gtp`] - Go Text Protocol front end
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use igo::board::Color;
//! use igo::session::Session;
//!
//! let mut game = Session::new();
//! let placed = game.place_stone(4, 4).unwrap();
//! assert!(placed.accepted);
//! assert_eq!(game.board().get(4, 4), Ok(Some(Color::Black)));
//! assert_eq!(game.to_move(), Color::White);
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod error;
pub mod group;
pub mod gtp;
pub mod rules;
pub mod session;
pub mod territory;

pub use error::{GoError, Result};
