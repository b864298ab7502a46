/// Builds the prompts sent to the generation endpoint.
/// This struct is intentionally dumb: it only formats text.
/// No parsing, no networking, no session logic.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Character introduction built from the three favorite words.
    pub fn character(words: &[&str; 3]) -> String {
        let mut prompt = String::new();

        prompt.push_str(
            "Using all three of the words below, introduce a story's main character \
             in 3-4 sentences that a third grader can easily read: their name, their \
             personality, what they love to do, and where they live.\n",
        );
        prompt.push_str(&format!(
            "Words: {}, {}, {}\n",
            words[0], words[1], words[2]
        ));
        prompt.push_str(
            "Write in a soft, warm voice, like: \"Their name is ___. They are bright \
             and kind. ...\"\n",
        );

        prompt
    }

    /// Continuation of one outline section, given everything written so
    /// far and the character description.
    pub fn continuation(title: &str, story_so_far: &str, character: &str) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Based on the story so far below, continue with the next scene that fits \
             the section \"{}\", in 200-300 characters.\n",
            title
        ));
        prompt.push_str(
            "Write in a soft, warm voice that a third grader can easily understand.\n\n",
        );

        prompt.push_str("THE STORY SO FAR:\n");
        prompt.push_str(&format!("\"\"\"{}\"\"\"\n\n", story_so_far));

        prompt.push_str("THE MAIN CHARACTER:\n");
        prompt.push_str(character);
        prompt.push('\n');

        prompt
    }

    /// Final smoothing pass over the combined eight-part story.
    pub fn polish(combined: &str) -> String {
        let mut prompt = String::new();

        prompt.push_str(
            "Rewrite the eight-part story below as one smooth, natural story. Use \
             easy sentences at a third-grade reading level. Do not make it longer.\n\n",
        );
        prompt.push_str(combined);

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_prompt_names_all_three_words() {
        let prompt = PromptBuilder::character(&["rainbow", "puppy", "soccer"]);
        assert!(prompt.contains("Words: rainbow, puppy, soccer"));
    }

    #[test]
    fn continuation_prompt_carries_title_story_and_character() {
        let prompt = PromptBuilder::continuation("Then one day", "A B", "Their name is Mina.");
        assert!(prompt.contains("\"Then one day\""));
        assert!(prompt.contains("\"\"\"A B\"\"\""));
        assert!(prompt.contains("Their name is Mina."));
    }

    #[test]
    fn polish_prompt_ends_with_the_combined_story() {
        let prompt = PromptBuilder::polish("**Once upon a time**\nA");
        assert!(prompt.ends_with("**Once upon a time**\nA"));
    }
}
