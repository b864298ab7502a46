//! Story Machine — an eight-part story writer for elementary-school
//! students, backed by the Hugging Face Inference API.
//!
//! A student picks three favorite words, a main character is generated
//! from them, and the story grows section by section: the student writes
//! some sections, the model continues the others from everything written
//! so far. When all eight sections are filled, the parts are combined and
//! lightly rewritten into one finished story.

pub mod engine;
pub mod model;
