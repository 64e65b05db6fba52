//! Scanner — finds the candidate payload in raw model text.
//!
//! Everything here is heuristic and never decodes anything. The normalizer
//! applies strict decoding to whatever span the scanner hands it.

/// Opening fence markers. Tagged fences go first so the tag is removed with them.
const FENCE_MARKERS: &[&str] = &["```json", "```JSON", "```"];

/// Strips a leading ```json / ``` fence and a trailing ``` fence.
///
/// Only the edges are touched; fences inside the text are left alone.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = FENCE_MARKERS
        .iter()
        .find_map(|marker| text.strip_prefix(*marker))
        .unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text).trim()
}

/// Span from the first `{` to the last `}` inclusive.
///
/// Prose before or after the object is ignored. Several objects in a row come
/// back as one span; deciding whether that span is valid is the decoder's job.
pub fn locate_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// One `### HEADING` block of sectioned output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub heading: &'a str,
    pub body: &'a str,
}

/// Splits text on `delimiter`. The heading is the rest of the delimiter's line,
/// the body is everything up to the next delimiter. Text before the first
/// delimiter is preamble and is dropped.
pub fn split_sections<'a>(text: &'a str, delimiter: &str) -> Vec<Section<'a>> {
    text.split(delimiter)
        .skip(1)
        .filter_map(|chunk| {
            let (heading, body) = chunk.split_once('\n').unwrap_or((chunk, ""));
            let heading =
                heading.trim_matches(|c: char| matches!(c, '#' | '*' | ':') || c.is_whitespace());
            (!heading.is_empty()).then(|| Section {
                heading,
                body: body.trim(),
            })
        })
        .collect()
}

/// Splits a section body into list items, dropping bullet and numbering markers.
pub fn list_items(body: &str) -> Vec<String> {
    body.lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("• "))
    {
        return rest.trim();
    }

    // "1. text" / "1) text"
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(after) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            if after.is_empty() || after.starts_with(char::is_whitespace) {
                return after.trim();
            }
        }
    }

    line
}
