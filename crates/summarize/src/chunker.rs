//! Position-based splitting of a transcript into bounded-size chunks.

use crate::error::PipelineError;

/// Budget in characters for one completion request (instruction + chunk).
pub const CHUNK_MAX: usize = 4000;

/// Characters left for transcript text once `instruction` takes its share.
/// Fails when the instruction eats the whole budget.
pub fn effective_limit(instruction: &str) -> Result<usize, PipelineError> {
    let prompt_len = instruction.chars().count();
    CHUNK_MAX
        .checked_sub(prompt_len)
        .filter(|limit| *limit > 0)
        .ok_or_else(|| {
            PipelineError::Configuration(format!(
                "instruction is {prompt_len} chars, leaving no room in the {CHUNK_MAX}-char chunk budget"
            ))
        })
}

/// Split `text` into consecutive pieces of at most `limit` characters.
/// Splitting is purely positional (chunks may cut mid-word), boundaries
/// fall on character positions so multi-byte text never splits inside a
/// codepoint, and concatenating the pieces reconstructs `text` exactly.
pub fn split(text: &str, limit: usize) -> Result<Vec<String>, PipelineError> {
    if limit == 0 {
        return Err(PipelineError::Configuration(
            "chunk limit must be positive".to_string(),
        ));
    }

    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(limit)
            .map_or(rest.len(), |(i, _)| i);
        chunks.push(rest[..end].to_string());
        rest = &rest[end..];
    }
    Ok(chunks)
}
