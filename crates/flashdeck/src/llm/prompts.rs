//! Prompt templates for the completion service.

/// Separates the instructions from the user's notes.
pub const NOTES_SEPARATOR: &str = "Notes:\n---\n";

/// System message for providers that take one.
pub fn system_prompt() -> &'static str {
    "You turn study notes into concise question and answer flashcards."
}

/// Build the prompt asking for flashcards in the `Q:` / `A:` format.
///
/// The notes are embedded verbatim after [`NOTES_SEPARATOR`].
pub fn flashcard_prompt(notes: &str) -> String {
    format!(
        "You are an assistant that writes flashcards. Convert the notes below into a \
         series of flashcards. Write every flashcard in exactly this format:\n\
         Q: [question]\n\
         A: [answer]\n\
         \n\
         Separate each Q: and A: pair from the next with a blank line. \
         Do not include any other text or explanation in your response. \
         {NOTES_SEPARATOR}{notes}"
    )
}

/// Recover the notes embedded in a prompt built by [`flashcard_prompt`].
pub fn notes_section(prompt: &str) -> Option<&str> {
    prompt
        .split_once(NOTES_SEPARATOR)
        .map(|(_, notes)| notes)
}
