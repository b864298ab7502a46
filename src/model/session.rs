use crate::model::outline::SLOT_COUNT;

/* =========================
   Session
   ========================= */

/// One student's in-progress story. Created when the session starts,
/// mutated by explicit actions, discarded at the end. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub class_id: String,
    pub student_number: String,
    pub student_name: String,

    /// Empty until the character step has run.
    pub character_description: String,

    pub slots: [StorySlot; SLOT_COUNT],
}

#[derive(Debug, Clone, Default)]
pub struct StorySlot {
    pub text: String,
    /// True when the text came from a continue action, not the student.
    pub auto: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot_text(&self, index: usize) -> &str {
        &self.slots[index].text
    }

    /// Overwrite a slot with student-authored text.
    pub fn set_authored(&mut self, index: usize, text: &str) {
        self.slots[index].text = text.trim().to_string();
        self.slots[index].auto = false;
    }

    /// Everything written before `index`, space-joined in slot order.
    pub fn prior_context(&self, index: usize) -> String {
        let parts: Vec<&str> = self.slots[..index]
            .iter()
            .map(|slot| slot.text.trim())
            .filter(|text| !text.is_empty())
            .collect();
        parts.join(" ")
    }

    /// The story is complete once every slot holds non-blank text.
    /// Re-derived on each call, never cached.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| !slot.text.trim().is_empty())
    }

    /// File name for the exported story, derived from the student
    /// identifiers. Falls back to a generic name when they are all empty.
    pub fn export_file_name(&self) -> String {
        let class = self.class_id.trim();
        let number = self.student_number.trim();
        let name = self.student_name.trim();

        if class.is_empty() && number.is_empty() && name.is_empty() {
            return "my_story.txt".to_string();
        }
        format!("{}_{}_{}_story.txt", class, number, name).replace(' ', "_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_not_complete() {
        assert!(!Session::new().is_complete());
    }

    #[test]
    fn completion_flips_only_when_the_last_slot_fills() {
        let mut session = Session::new();
        for i in 0..SLOT_COUNT - 1 {
            session.set_authored(i, "something");
        }
        assert!(!session.is_complete());

        session.set_authored(SLOT_COUNT - 1, "the end");
        assert!(session.is_complete());
    }

    #[test]
    fn blank_text_does_not_count_as_filled() {
        let mut session = Session::new();
        for i in 0..SLOT_COUNT {
            session.set_authored(i, "x");
        }
        session.slots[3].text = "   ".to_string();
        assert!(!session.is_complete());
    }

    #[test]
    fn prior_context_joins_filled_slots_in_order() {
        let mut session = Session::new();
        session.set_authored(0, "A");
        session.slots[1].text = "B".to_string();
        assert_eq!(session.prior_context(3), "A B");
    }

    #[test]
    fn prior_context_skips_empty_slots() {
        let mut session = Session::new();
        session.set_authored(0, "A");
        session.set_authored(2, "C");
        assert_eq!(session.prior_context(5), "A C");
    }

    #[test]
    fn export_file_name_uses_the_identifiers() {
        let mut session = Session::new();
        session.class_id = "3-2".to_string();
        session.student_number = "5".to_string();
        session.student_name = "Kim".to_string();
        assert_eq!(session.export_file_name(), "3-2_5_Kim_story.txt");
    }

    #[test]
    fn export_file_name_replaces_spaces() {
        let mut session = Session::new();
        session.class_id = "3 2".to_string();
        session.student_number = "5".to_string();
        session.student_name = "Kim Minji".to_string();
        assert_eq!(session.export_file_name(), "3_2_5_Kim_Minji_story.txt");
    }

    #[test]
    fn export_file_name_falls_back_when_identifiers_are_empty() {
        assert_eq!(Session::new().export_file_name(), "my_story.txt");
    }
}
