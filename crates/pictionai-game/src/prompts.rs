//! Prompt text for the game's model calls.
//!
//! The wording is part of the game's behavior: the object prompt pushes
//! the model toward variety, and the judgment prompt pins the reply to a
//! 1-10 score.

/// System prompt for random object generation.
pub const RANDOM_OBJECT_SYSTEM_PROMPT: &str =
    "You are an assistant that provides names of random objects.";

/// User prompt for random object generation.
pub const RANDOM_OBJECT_USER_PROMPT: &str =
    "Please provide the name of a random object, and I mean really random.";

/// System prompt for judging a guess.
pub const JUDGMENT_SYSTEM_PROMPT: &str =
    "You are an assistant judging how close a guess is to an original prompt.";

/// Render the judgment user prompt for one round.
pub fn judgment_user_prompt(object_name: &str, guess: &str) -> String {
    format!(
        "The original prompt was: '{object_name}'. The user guessed: '{guess}'. \
         Please judge how close the guess is. Please provide a score from 1 to 10, \
         with 1 being not even close and 10 being an exact match."
    )
}
