//! Method-name extraction from the prose that precedes a frame's path.

use crate::keywords::TraceKeywords;

/// Extract the method signature from the text before the path.
///
/// `"à NUnit.UiException.TraceItem.get_Text() dans "` gives
/// `NUnit.UiException.TraceItem.get_Text()`. The frame marker, the path
/// marker and a Mono IL offset (`[0x0001c]`) are dropped; nothing else is
/// rewritten. Returns `None` when nothing is left.
pub fn extract_method_name(prefix: &str, keywords: &TraceKeywords) -> Option<String> {
    let text = prefix.trim();
    let text = keywords.trailing_path_marker().replace(text, "");
    let text = keywords.il_offset().replace(&text, "");
    let text = keywords.leading_frame_marker().replace(&text, "");
    let method = text.trim();
    (!method.is_empty()).then(|| method.to_string())
}
