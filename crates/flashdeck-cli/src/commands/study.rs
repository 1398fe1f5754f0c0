//! Study command - review a saved deck in the terminal.
//!
//! Enter flips the card, `y`/`n` grade it, `r` starts another pass once
//! the deck is done and `q` quits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use flashdeck::{Deck, Event, Face, Grade, Phase, Session};

pub fn run(deck_file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    if !deck_file.exists() {
        return Err(format!(
            "Deck file not found: {}\nRun 'flashdeck format <notes>' first.",
            deck_file.display()
        )
        .into());
    }

    let deck = Deck::load(&deck_file)?;
    if deck.is_empty() {
        return Err(format!("Deck has no cards: {}", deck_file.display()).into());
    }

    println!(
        "{} {} ({} cards)",
        "Studying".cyan().bold(),
        deck_file.display().to_string().white(),
        deck.len()
    );
    println!("{}", "Enter flips, y = knew it, n = didn't, q = quit".dimmed());

    let mut session = Session::new().reduce(Event::LoadDeck(deck.cards().to_vec()));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match session.phase() {
            Phase::Reviewing => print_card(&session),
            Phase::Finished => print_summary(&session),
            Phase::Idle => break,
        }
        prompt(&session)?;

        let Some(line) = lines.next() else { break };
        let input = line?;
        let event = match (session.phase(), input.trim().to_lowercase().as_str()) {
            (_, "q") => break,
            (Phase::Reviewing, "") => Event::Flip,
            (Phase::Reviewing, "y") => Event::MarkKnown,
            (Phase::Reviewing, "n") => Event::MarkUnknown,
            (Phase::Finished, "r") => Event::RestartPass,
            (_, other) => {
                println!("{} unknown key: {:?}", "?".yellow(), other);
                continue;
            }
        };
        session.dispatch(event);
    }

    Ok(())
}

fn print_card(session: &Session) {
    let Some(card) = session.current_card() else {
        return;
    };
    println!();
    println!(
        "{}  {}",
        format!(
            "[{} known, {} to go]",
            session.known_count(),
            session.remaining()
        )
        .dimmed(),
        card.question.white().bold()
    );
    if session.face() == Face::Answer {
        for line in card.answer.lines() {
            println!("    {}", line.green());
        }
    }
}

fn print_summary(session: &Session) {
    let summary = session.summary();
    println!();
    println!("{}", "Deck complete".cyan().bold());
    println!(
        "  First try: {}/{} ({}%)",
        summary.first_try_correct, summary.deck_size, summary.accuracy_percent
    );
    let message = match summary.grade {
        Grade::Excellent => summary.grade.message().green().bold(),
        Grade::KeepPracticing => summary.grade.message().yellow(),
    };
    println!("  {}", message);

    if !session.history().is_empty() {
        println!();
        println!("{}", "Previous attempts:".dimmed());
        for record in session.history() {
            println!("  Attempt {}: {}%", record.attempt, record.accuracy);
        }
    }
}

fn prompt(session: &Session) -> io::Result<()> {
    let hint = match (session.phase(), session.face()) {
        (Phase::Finished, _) => "r = study again, q = quit",
        (_, Face::Question) => "Enter = show answer",
        (_, Face::Answer) => "y / n",
    };
    print!("{} ", format!("{}>", hint).dimmed());
    io::stdout().flush()
}
