//! Pictionar(ai) game logic.
//!
//! A round pairs a model-chosen object with a rendered image of it; the
//! player guesses from the image and the model judges the guess. The
//! state machine in [`session`] drives the whole loop and is UI
//! agnostic: any frontend that can deliver [`session::Action`]s can run
//! the game.

pub mod prompts;
pub mod round;
pub mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub use round::Round;
pub use session::{Action, GameSession, Outcome, State};
