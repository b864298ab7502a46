use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use log::info;

use story_machine::engine::aggregator;
use story_machine::engine::config;
use story_machine::engine::hf_client::{HfClient, TextGenerator};
use story_machine::engine::story;
use story_machine::model::outline::{slot_role, SlotRole, SECTION_TITLES, SLOT_COUNT};
use story_machine::model::session::Session;

fn main() -> Result<()> {
    env_logger::init();

    let config = config::load();
    if config.api_token.is_none() {
        eprintln!("Warning: HUGGINGFACEHUB_API_TOKEN is not set; generation will fail.");
    }
    let client = HfClient::new(&config).context("could not build the generation client")?;

    let mut session = Session::new();

    println!("Let's see what kind of story you can write!");
    session.class_id = read_line("Class (e.g. 3-2): ")?;
    session.student_number = read_line("Number: ")?;
    session.student_name = read_line("Name: ")?;

    make_character(&mut session, &client)?;

    println!("\nNow let's write the story, one part at a time.");
    while !session.is_complete() {
        for index in 0..SLOT_COUNT {
            if !session.slot_text(index).trim().is_empty() {
                continue;
            }
            fill_slot(&mut session, index, &client)?;
        }
    }

    let story_text = aggregator::finish_story(&session, &client);
    println!("\nYour finished story:\n\n{}", story_text);

    let file_name = session.export_file_name();
    fs::write(&file_name, &story_text)
        .with_context(|| format!("could not write {}", file_name))?;
    info!("story written to {}", file_name);
    println!("\nSaved as {}", file_name);

    Ok(())
}

fn make_character(session: &mut Session, gen: &dyn TextGenerator) -> Result<()> {
    println!("\nFirst, make the main character from three favorite words.");
    loop {
        let w1 = read_line("Word 1: ")?;
        let w2 = read_line("Word 2: ")?;
        let w3 = read_line("Word 3: ")?;

        match story::build_character(session, &[w1.trim(), w2.trim(), w3.trim()], gen) {
            Ok(()) => {
                println!("\nYour main character:\n{}", session.character_description);
                return Ok(());
            }
            Err(err) => println!("{}", err),
        }
    }
}

fn fill_slot(session: &mut Session, index: usize, gen: &dyn TextGenerator) -> Result<()> {
    let title = SECTION_TITLES[index];

    match slot_role(index) {
        SlotRole::Authored => {
            let text = read_line(&format!("{} — your turn: ", title))?;
            session.set_authored(index, &text);
        }
        SlotRole::Continued => {
            let answer = read_line(&format!(
                "{} — press Enter to let the machine continue (s to skip): ",
                title
            ))?;
            if answer.trim() == "s" {
                return Ok(());
            }
            match story::continue_slot(session, index, gen) {
                Ok(()) => println!("{}\n", session.slot_text(index)),
                Err(err) => println!("{}", err),
            }
        }
    }

    Ok(())
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}
