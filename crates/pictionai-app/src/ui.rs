//! Terminal front end for the game.
//!
//! Reads player input line by line from stdin and renders prompts and
//! results to stdout. All game state lives in [`GameSession`]; this
//! layer only turns lines into actions and outcomes into text.

use pictionai_game::{Action, GameSession, Outcome, State};
use pictionai_openai::{ImageModel, TextModel};
use tokio::io::{AsyncBufReadExt, BufReader};

/// What to do with one line of player input.
#[derive(Debug, PartialEq, Eq)]
enum UiStep {
    Act(Action),
    Quit,
}

/// Map a line of input to a step, given where the session is.
///
/// While a round is on screen every line is a guess, including "q";
/// quitting mid-round goes through end-of-input instead.
fn interpret(state: &State, line: String) -> UiStep {
    match state {
        State::Idle if is_quit(line.trim()) => UiStep::Quit,
        State::Idle => UiStep::Act(Action::Play),
        State::Presenting { .. } => UiStep::Act(Action::SubmitGuess(line)),
        State::Judged { .. } if is_quit(line.trim()) => UiStep::Quit,
        State::Judged { .. } => UiStep::Act(Action::PlayAgain),
    }
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit")
}

/// Run the game loop until the player quits or stdin closes.
pub async fn run(
    text: &dyn TextModel,
    images: &dyn ImageModel,
    open_images: bool,
) -> pictionai_common::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    print_banner();

    let mut session = GameSession::new();

    loop {
        print_prompt(session.state());

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let action = match interpret(session.state(), line) {
            UiStep::Quit => break,
            UiStep::Act(action) => action,
        };

        // Progress lines go out before the slow model calls start
        match &action {
            Action::Play => println!("Generating random object and image..."),
            Action::SubmitGuess(guess) if !guess.trim().is_empty() => {
                println!("Judging your guess...");
            }
            _ => {}
        }

        match session.handle(action, text, images).await {
            Ok(Outcome::RoundStarted { image_url }) => {
                show_round(&image_url, open_images);
            }
            Ok(Outcome::GuessJudged { judgment }) => {
                println!("Thank you for your submission!");
                println!("{judgment}");
                println!();
            }
            Ok(Outcome::EmptyGuess) => {
                println!("Please enter a guess before submitting.");
            }
            Ok(Outcome::Reset) => {
                println!();
            }
            Ok(Outcome::Ignored) => {}
            Err(e) => {
                println!("Something went wrong: {e}");
                println!("Please try again.");
            }
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

fn print_banner() {
    println!("Pictionar(ai)");
    println!("=============");
    println!();
    println!("This is a terminal version of the Pictionar(ai) game.");
    println!("Try to guess the random object based on the generated image!");
    println!();
}

fn print_prompt(state: &State) {
    match state {
        State::Idle => println!("Press Enter to play, or q to quit."),
        State::Presenting { .. } => println!("Guess the Object!"),
        State::Judged { .. } => println!("Press Enter to play again, or q to quit."),
    }
}

fn show_round(image_url: &str, open_images: bool) {
    println!();
    println!("Generated Image:");
    println!("  {image_url}");
    println!();
    if open_images {
        if let Err(e) = open::that(image_url) {
            tracing::error!("Failed to open image in browser: {e}");
            println!("(could not open the browser; use the link above)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictionai_game::Round;

    fn round() -> Round {
        Round {
            object_name: "teapot".into(),
            image_url: "https://images.example/teapot.png".into(),
        }
    }

    #[test]
    fn enter_plays_from_idle() {
        assert_eq!(
            interpret(&State::Idle, "".into()),
            UiStep::Act(Action::Play)
        );
        assert_eq!(
            interpret(&State::Idle, "sure".into()),
            UiStep::Act(Action::Play)
        );
    }

    #[test]
    fn q_quits_from_idle_and_judged() {
        assert_eq!(interpret(&State::Idle, "q".into()), UiStep::Quit);
        assert_eq!(interpret(&State::Idle, "QUIT".into()), UiStep::Quit);
        assert_eq!(
            interpret(&State::Judged { round: round() }, "q".into()),
            UiStep::Quit
        );
    }

    #[test]
    fn any_line_is_a_guess_while_presenting() {
        assert_eq!(
            interpret(&State::Presenting { round: round() }, "q".into()),
            UiStep::Act(Action::SubmitGuess("q".into()))
        );
        assert_eq!(
            interpret(&State::Presenting { round: round() }, "  ".into()),
            UiStep::Act(Action::SubmitGuess("  ".into()))
        );
    }

    #[test]
    fn enter_replays_from_judged() {
        assert_eq!(
            interpret(&State::Judged { round: round() }, "".into()),
            UiStep::Act(Action::PlayAgain)
        );
    }
}
