use chrono::{DateTime, Utc};

/// Stem used when the text yields nothing printable
pub const FALLBACK_STEM: &str = "audio";

/// Extension of every stored artifact
pub const AUDIO_EXT: &str = "mp3";

const MAX_STEM_CHARS: usize = 40;

/// Derive the stored filename for a synthesis request.
///
/// The seconds-resolution timestamp keeps names from colliding across
/// requests; two requests landing in the same second share a name and the
/// later write wins.
pub fn derive_name(text: &str, created_at: DateTime<Utc>) -> String {
    format!(
        "{}_{}.{}",
        sanitize_stem(text),
        created_at.timestamp(),
        AUDIO_EXT
    )
}

/// Reduce arbitrary text to a filesystem-safe stem: first line, truncated to
/// 40 characters, everything outside `[A-Za-z0-9 _-]` removed, whitespace
/// runs collapsed to a single underscore.
pub fn sanitize_stem(text: &str) -> String {
    let first_line = text.trim().lines().next().unwrap_or("");
    let base: String = first_line.chars().take(MAX_STEM_CHARS).collect();
    if base.is_empty() {
        return FALLBACK_STEM.to_string();
    }

    let disallowed = regex::Regex::new(r"[^A-Za-z0-9 _-]").unwrap();
    let stripped = disallowed.replace_all(&base, "");
    let whitespace = regex::Regex::new(r"\s+").unwrap();
    let collapsed = whitespace.replace_all(stripped.trim(), "_").to_string();

    if collapsed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        collapsed
    }
}
