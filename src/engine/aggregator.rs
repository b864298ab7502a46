use log::warn;

use crate::engine::hf_client::TextGenerator;
use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::story::POLISH_SAMPLING;
use crate::model::outline::SECTION_TITLES;
use crate::model::session::Session;

/// The eight (title, content) pairs in fixed order, as one text.
pub fn combined_story(session: &Session) -> String {
    let parts: Vec<String> = SECTION_TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| format!("**{}**\n{}", title, session.slot_text(i)))
        .collect();
    parts.join("\n\n")
}

/// One finished story. Runs the polish pass over the combined text; if
/// that fails, the raw concatenation is used instead and no error reaches
/// the student.
pub fn finish_story(session: &Session, gen: &dyn TextGenerator) -> String {
    let combined = combined_story(session);

    match gen.generate(&PromptBuilder::polish(&combined), POLISH_SAMPLING) {
        Ok(text) => text.trim().to_string(),
        Err(err) => {
            warn!("polish pass failed, keeping the raw story: {}", err);
            combined
        }
    }
}
