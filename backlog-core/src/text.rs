//! Text helpers for shaping upstream content before it is handed back to the
//! agent.

/// Marker appended to text cut short by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `length` characters, appending [`ELLIPSIS`] when
/// anything was cut.
///
/// Length is counted in Unicode scalar values so multi-byte content is never
/// split mid-character.
pub fn truncate(text: &str, length: usize) -> String {
  match text.char_indices().nth(length) {
    Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
    None => text.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_short_text_is_unchanged() {
    assert_eq!(truncate("Home", 100), "Home");
    assert_eq!(truncate("", 0), "");
  }

  #[test]
  fn test_text_at_exact_length_is_unchanged() {
    let text = "x".repeat(100);
    assert_eq!(truncate(&text, 100), text);
  }

  #[test]
  fn test_long_text_is_cut_with_ellipsis() {
    let text = "A".repeat(150);
    let result = truncate(&text, 100);

    assert_eq!(result.chars().count(), 103);
    assert!(result.ends_with(ELLIPSIS));
    assert!(text.starts_with(result.trim_end_matches(ELLIPSIS)));
  }

  #[test]
  fn test_multibyte_text_is_counted_by_character() {
    let text = "課題の説明文です";
    assert_eq!(truncate(text, 3), "課題の...");
    assert_eq!(truncate(text, 8), text);
  }

  #[test]
  fn test_zero_length_keeps_only_marker() {
    assert_eq!(truncate("abc", 0), "...");
  }
}
