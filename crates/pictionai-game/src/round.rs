//! One round of the game: a secret object and its rendered image.

use pictionai_openai::{ImageModel, Message, ModelError, Role, TextModel};
use tracing::{debug, info};

use crate::prompts;

/// A fully prepared round.
///
/// Both fields are set together. A round with an object but no image
/// cannot be constructed, so the UI never shows half a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub object_name: String,
    pub image_url: String,
}

/// Ask the text model for a random object name.
pub async fn generate_object_name(text: &dyn TextModel) -> Result<String, ModelError> {
    let messages = [
        Message {
            role: Role::System,
            content: prompts::RANDOM_OBJECT_SYSTEM_PROMPT.into(),
        },
        Message {
            role: Role::User,
            content: prompts::RANDOM_OBJECT_USER_PROMPT.into(),
        },
    ];
    text.complete(&messages).await
}

/// Prepare a new round: pick an object, then render it.
///
/// Returns only once both model calls succeed; a failure in either
/// leaves no partial round behind.
pub async fn generate_round(
    text: &dyn TextModel,
    images: &dyn ImageModel,
) -> Result<Round, ModelError> {
    let object_name = generate_object_name(text).await?;
    // debug only: the object name is the answer the player is guessing
    debug!(object = %object_name, "object selected");

    let image_url = images.generate(&object_name).await?;
    info!(url = %image_url, "round image ready");

    Ok(Round {
        object_name,
        image_url,
    })
}

/// Ask the text model to judge a guess against the round's object.
///
/// The verdict comes back as free text (typically a 1-10 score with a
/// short remark) and is shown to the player verbatim.
pub async fn judge_guess(
    text: &dyn TextModel,
    object_name: &str,
    guess: &str,
) -> Result<String, ModelError> {
    let messages = [
        Message {
            role: Role::System,
            content: prompts::JUDGMENT_SYSTEM_PROMPT.into(),
        },
        Message {
            role: Role::User,
            content: prompts::judgment_user_prompt(object_name, guess),
        },
    ];
    let judgment = text.complete(&messages).await?;
    info!("guess judged");
    Ok(judgment)
}
