//! Serve command - open the study app in the browser.

use std::sync::Arc;

use colored::Colorize;
use flashdeck::{CredentialStore, FileCredentialStore, MemoryCredentialStore, ProviderKind};

use crate::server::{app, state::AppState};

pub fn run(
    port: u16,
    no_open: bool,
    llm: ProviderKind,
    model: Option<String>,
    ephemeral_key: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (credentials, key_location): (Arc<dyn CredentialStore>, String) = if ephemeral_key {
        (
            Arc::new(MemoryCredentialStore::new()),
            "memory only".to_string(),
        )
    } else {
        let store = FileCredentialStore::open_default()?;
        let location = store.path().display().to_string();
        (Arc::new(store), location)
    };

    let model_name = model.clone().unwrap_or_else(|| llm.default_model().to_string());
    let state = AppState::new(credentials, llm, model);

    // Print server info
    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting flashdeck at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Provider: {} ({})", llm, model_name);
    println!("  API key:  {}", key_location);
    if llm.needs_credential() && state.credential().is_none() {
        println!(
            "  {} no API key yet; enter one in the app or run 'flashdeck key set'",
            "Note:".yellow()
        );
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    // Open browser if requested
    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    // Run the server
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
