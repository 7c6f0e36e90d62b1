//! Game session state machine.
//!
//! The session moves through three states:
//!
//! ```text
//! Idle --Play--> Presenting --SubmitGuess--> Judged --PlayAgain--> Idle
//! ```
//!
//! Each state carries exactly the data valid in it, so a round with an
//! object name but no image cannot be represented. The UI layer owns no
//! game state of its own; it delivers [`Action`]s and renders
//! [`Outcome`]s.

use pictionai_openai::{ImageModel, ModelError, TextModel};
use tracing::debug;

use crate::round::{self, Round};

/// Where the session is in the play loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum State {
    /// No round in progress.
    #[default]
    Idle,
    /// A round is on screen, waiting for a guess.
    Presenting { round: Round },
    /// The guess has been judged; the round stays visible.
    Judged { round: Round },
}

/// Player input, as delivered by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a round.
    Play,
    /// Submit a guess for the round on screen.
    SubmitGuess(String),
    /// Clear the finished round and return to the start.
    PlayAgain,
}

/// What a handled action produced, for the UI to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new round is ready; show the image.
    RoundStarted { image_url: String },
    /// The guess was judged; show the verdict.
    GuessJudged { judgment: String },
    /// The guess was blank; ask again without calling the judge.
    EmptyGuess,
    /// Session returned to the start.
    Reset,
    /// The action does not apply in the current state.
    Ignored,
}

/// A single-player game session.
///
/// Holds the current [`State`] and applies [`Action`]s to it. Model
/// calls happen inside [`GameSession::handle`]; an error from either
/// model leaves the state untouched, so the caller can retry the same
/// action or move on.
#[derive(Debug, Default)]
pub struct GameSession {
    state: State,
}

impl GameSession {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Secret object of the round in progress, if any.
    pub fn object_name(&self) -> Option<&str> {
        match &self.state {
            State::Idle => None,
            State::Presenting { round } | State::Judged { round } => Some(&round.object_name),
        }
    }

    /// Image URL of the round in progress, if any.
    pub fn image_url(&self) -> Option<&str> {
        match &self.state {
            State::Idle => None,
            State::Presenting { round } | State::Judged { round } => Some(&round.image_url),
        }
    }

    /// Apply a player action, calling out to the models as needed.
    ///
    /// Actions that do not apply in the current state return
    /// [`Outcome::Ignored`] rather than an error.
    pub async fn handle(
        &mut self,
        action: Action,
        text: &dyn TextModel,
        images: &dyn ImageModel,
    ) -> Result<Outcome, ModelError> {
        match action {
            Action::Play => {
                if !matches!(self.state, State::Idle) {
                    debug!("play ignored outside idle");
                    return Ok(Outcome::Ignored);
                }
                let round = round::generate_round(text, images).await?;
                let image_url = round.image_url.clone();
                self.state = State::Presenting { round };
                Ok(Outcome::RoundStarted { image_url })
            }
            Action::SubmitGuess(guess) => {
                let State::Presenting { round } = &self.state else {
                    debug!("guess ignored outside presenting");
                    return Ok(Outcome::Ignored);
                };
                let guess = guess.trim();
                if guess.is_empty() {
                    return Ok(Outcome::EmptyGuess);
                }
                let judgment = round::judge_guess(text, &round.object_name, guess).await?;
                let round = round.clone();
                self.state = State::Judged { round };
                Ok(Outcome::GuessJudged { judgment })
            }
            Action::PlayAgain => {
                if !matches!(self.state, State::Judged { .. }) {
                    debug!("play again ignored outside judged");
                    return Ok(Outcome::Ignored);
                }
                self.state = State::Idle;
                Ok(Outcome::Reset)
            }
        }
    }
}
