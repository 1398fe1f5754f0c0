//! Key command - manage the stored API key.

use colored::Colorize;
use flashdeck::{CredentialStore, FileCredentialStore, mask};

use crate::cli::KeyAction;

pub fn run(action: KeyAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileCredentialStore::open_default()?;

    match action {
        KeyAction::Set { value } => {
            if value.trim().is_empty() {
                return Err("API key must not be empty; use 'flashdeck key clear' to remove it".into());
            }
            store.set(&value)?;
            println!("{} API key saved to {}", "✓".green(), store.path().display());
        }
        KeyAction::Show => match store.get() {
            Some(value) => println!("{}", mask(&value)),
            None => println!("{}", "No API key stored".dimmed()),
        },
        KeyAction::Clear => {
            store.set("")?;
            println!("{} API key cleared", "✓".green());
        }
    }

    Ok(())
}
