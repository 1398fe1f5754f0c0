//! Delimited tier: `Q: question` followed by `A: answer`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::deck::{Flashcard, card_id};

/// Question marker, a single-line question, then the answer marker.
/// Group 2 is the whitespace between the answer marker and the answer.
static PAIR_HEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Q:\s*(.+?)\s*A:(\s*)").expect("pair pattern is valid"));

/// Marks the start of the next pair; an answer runs up to it.
const NEXT_QUESTION: &str = "\nQ:";

/// Scan `raw` left to right for non-overlapping question/answer pairs.
pub(crate) fn extract_pairs(raw: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    let mut pos = 0;

    while pos < raw.len() {
        let Some(caps) = PAIR_HEAD.captures_at(raw, pos) else {
            break;
        };
        let (Some(head), Some(question), Some(gap)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            break;
        };

        let answer_start = head.end();
        let Some(first) = raw[answer_start..].chars().next() else {
            // Nothing after the answer marker. A pair still forms when the
            // marker was followed by whitespace; its answer trims to empty.
            if !gap.as_str().is_empty() {
                cards.push(Flashcard::new(
                    card_id(cards.len()),
                    question.as_str().trim(),
                    "",
                ));
                break;
            }
            // `Q` is one byte, so the next char boundary follows it.
            pos = head.start() + 1;
            continue;
        };

        // The answer holds at least one character before it may stop.
        let search_from = answer_start + first.len_utf8();
        let answer_end = raw[search_from..]
            .find(NEXT_QUESTION)
            .map(|offset| search_from + offset)
            .unwrap_or(raw.len());

        cards.push(Flashcard::new(
            card_id(cards.len()),
            question.as_str().trim(),
            raw[answer_start..answer_end].trim(),
        ));
        pos = answer_end;
    }

    cards
}
