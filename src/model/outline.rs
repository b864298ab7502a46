//! The fixed eight-part story outline (story-spine section titles).
//! Slot roles are static: the student writes some sections directly,
//! the machine continues the others on request.

pub const SLOT_COUNT: usize = 8;

pub const SECTION_TITLES: [&str; SLOT_COUNT] = [
    "Once upon a time",
    "And every day",
    "Then one day",
    "Because of that",
    "Because of that",
    "Because of that",
    "Until finally",
    "Ever since then",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    /// Typed directly by the student.
    Authored,
    /// Filled only by an explicit continue action.
    Continued,
}

pub fn slot_role(index: usize) -> SlotRole {
    match index {
        1 | 3 | 5 => SlotRole::Continued,
        _ => SlotRole::Authored,
    }
}
