//! Extract command - parse an already formatted file into cards.

use std::path::PathBuf;

use colored::Colorize;
use flashdeck::{extract_with_tier, read_notes};

pub fn run(file: PathBuf, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_notes(&file)?;
    let extraction = extract_with_tier(&raw);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&extraction.cards)?);
        return Ok(());
    }

    let Some(tier) = extraction.tier else {
        println!(
            "{} No flashcards found in {}",
            "Note:".yellow(),
            file.display()
        );
        println!("Use 'Q: ...' / 'A: ...' pairs or '# Heading' sections followed by a paragraph.");
        return Ok(());
    };

    println!(
        "{} {} cards from {}",
        "Extracted".green().bold(),
        extraction.cards.len().to_string().white().bold(),
        file.display()
    );
    if verbose {
        println!("  Format: {}", tier.label());
    }
    println!();

    for card in &extraction.cards {
        println!("{} {}", format!("[{}]", card.id).dimmed(), card.question.cyan());
        for line in card.answer.lines() {
            println!("    {}", line);
        }
        println!();
    }

    Ok(())
}
