//! Format command - turn a notes file into a deck file.

use std::path::PathBuf;

use colored::Colorize;
use flashdeck::{
    Action, Deck, FileCredentialStore, ProviderKind, Studio, deck_path, format_notes,
    is_supported_notes_file, read_notes, resolve_credential,
};

pub fn run(
    file: PathBuf,
    llm: ProviderKind,
    model: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    if !is_supported_notes_file(&file) {
        eprintln!(
            "{} {} is not a .md or .txt file; reading it as text anyway",
            "Warning:".yellow(),
            file.display()
        );
    }

    let credential = if llm.needs_credential() {
        let store = FileCredentialStore::open_default()?;
        resolve_credential(&store, llm)
    } else {
        None
    };

    let mut studio = Studio::new();
    studio.dispatch(Action::SetNotes(read_notes(&file)?));
    let notes = studio.format_request(credential.as_deref(), llm.needs_credential())?;

    let provider = llm.build(credential.as_deref(), model.as_deref())?;
    println!(
        "{} {} with {} ({})",
        "Formatting".cyan().bold(),
        file.display().to_string().white(),
        provider.name(),
        provider.config().model
    );

    let cards = format_notes(provider.as_ref(), &notes)?;
    let deck = Deck::new(cards);
    let output_path = output.unwrap_or_else(|| deck_path(&file));
    deck.save(&output_path)?;

    println!();
    println!(
        "{} {} cards",
        "Created".green().bold(),
        deck.len().to_string().white().bold()
    );
    println!("  Deck: {}", output_path.display());
    println!();
    println!("Study it with: flashdeck study {}", output_path.display());

    Ok(())
}
