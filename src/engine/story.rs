use log::info;
use thiserror::Error;

use crate::engine::hf_client::{GenerateError, GenerateOptions, TextGenerator};
use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::validator::{self, WordError};
use crate::model::outline::{slot_role, SlotRole, SECTION_TITLES};
use crate::model::session::Session;

pub const CHARACTER_SAMPLING: GenerateOptions = GenerateOptions {
    max_new_tokens: 220,
    temperature: 0.8,
    top_p: 0.9,
};

pub const CONTINUATION_SAMPLING: GenerateOptions = GenerateOptions {
    max_new_tokens: 260,
    temperature: 0.85,
    top_p: 0.9,
};

pub const POLISH_SAMPLING: GenerateOptions = GenerateOptions {
    max_new_tokens: 300,
    temperature: 0.6,
    top_p: 0.9,
};

/// One action failed. Every failure is scoped to its action and leaves
/// the session as it was.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error("Write the earlier parts of the story first!")]
    NothingToContinue,
    #[error("Section {0} is written by the student, not continued.")]
    NotAutoSlot(usize),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Build the character description from the three favorite words.
/// On failure the previous description (if any) is kept.
pub fn build_character(
    session: &mut Session,
    words: &[&str; 3],
    gen: &dyn TextGenerator,
) -> Result<(), ActionError> {
    validator::validate_words(words)?;

    let prompt = PromptBuilder::character(words);
    let text = gen.generate(&prompt, CHARACTER_SAMPLING)?;

    session.character_description = strip_heading_markers(&text);
    info!(
        "character description generated ({} chars)",
        session.character_description.chars().count()
    );
    Ok(())
}

/// Fill auto slot `index` from everything written before it. The prompt
/// sees all prior filled slots, not just the neighbouring one, so later
/// continuations stay consistent with the whole story.
pub fn continue_slot(
    session: &mut Session,
    index: usize,
    gen: &dyn TextGenerator,
) -> Result<(), ActionError> {
    if slot_role(index) != SlotRole::Continued {
        return Err(ActionError::NotAutoSlot(index));
    }

    let story_so_far = session.prior_context(index);
    if story_so_far.is_empty() {
        return Err(ActionError::NothingToContinue);
    }

    let prompt = PromptBuilder::continuation(
        SECTION_TITLES[index],
        &story_so_far,
        &session.character_description,
    );
    let text = gen.generate(&prompt, CONTINUATION_SAMPLING)?;

    session.slots[index].text = text.trim().to_string();
    session.slots[index].auto = true;
    info!("slot {} continued automatically", index);
    Ok(())
}

/// Generated text sometimes arrives with stray markdown heading markers.
fn strip_heading_markers(text: &str) -> String {
    text.replace("###", "").trim().to_string()
}
