use crate::tokens::state::TokenizerState;
use crate::tokens::token::Token;
use crate::tokens::tokenizer::Tokenizer;

/// Handles `RawText`, the escape hatch entered right after a `<script>` or
/// `<style>` start tag.
///
/// The main loop has already advanced past the character following the
/// opening tag's `>`, so the first thing this does is reconsume to put the
/// cursor back there. From that position it scans forward for the first
/// occurrence of `appropriate_end_tag` (already lowercased, matched
/// case-sensitively against the source — see the open question on this in
/// the design notes) and emits everything up to the match as a single
/// `Character` token.
pub fn handle_raw_text_state(tokenizer: &mut Tokenizer) {
    tokenizer.reconsume();

    let start = tokenizer.pos;
    let needle: Vec<char> = tokenizer.appropriate_end_tag.chars().collect();
    let end = find_subsequence(&tokenizer.input[start..], &needle)
        .map(|offset| start + offset)
        .unwrap_or(tokenizer.input.len());

    if end > start {
        let raw_text: String = tokenizer.input[start..end].iter().collect();
        tokenizer.emit(Token::character_run(raw_text));
    }

    tokenizer.pos = end;
    tokenizer.state = TokenizerState::Data;
}

/// Finds the first index at which `needle` occurs in `haystack`, scanning by
/// character rather than byte offset so positions line up with `Tokenizer`'s
/// `Vec<char>` input.
fn find_subsequence(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&i| haystack[i..i + needle.len()] == *needle)
}
