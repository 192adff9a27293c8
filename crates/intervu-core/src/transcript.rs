/// Transcript highlighting. The text is scanned once and annotated with
/// non-overlapping spans; earlier phrases win, so a later phrase can never
/// split or double-wrap a span that is already claimed. Matching is
/// case-insensitive over ASCII, which covers the feedback vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Keyword,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightPhrase {
    pub text: String,
    pub kind: HighlightKind,
}

impl HighlightPhrase {
    pub fn new(text: impl Into<String>, kind: HighlightKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSpan {
    pub text: String,
    pub highlight: Option<HighlightKind>,
}

/// Splits `text` into ordered spans covering the whole input, with each
/// phrase occurrence annotated by its kind.
pub fn annotate(text: &str, phrases: &[HighlightPhrase]) -> Vec<TranscriptSpan> {
    let mut claimed: Vec<(usize, usize, HighlightKind)> = Vec::new();
    for phrase in phrases {
        for (start, end) in find_occurrences(text, &phrase.text) {
            let overlaps = claimed
                .iter()
                .any(|&(s, e, _)| start < e && s < end);
            if !overlaps {
                claimed.push((start, end, phrase.kind));
            }
        }
    }
    claimed.sort_unstable_by_key(|&(start, _, _)| start);

    let mut spans = Vec::new();
    let mut pos = 0;
    for (start, end, kind) in claimed {
        if start > pos {
            spans.push(TranscriptSpan {
                text: text[pos..start].to_owned(),
                highlight: None,
            });
        }
        spans.push(TranscriptSpan {
            text: text[start..end].to_owned(),
            highlight: Some(kind),
        });
        pos = end;
    }
    if pos < text.len() {
        spans.push(TranscriptSpan {
            text: text[pos..].to_owned(),
            highlight: None,
        });
    }
    spans
}

fn find_occurrences(haystack: &str, needle: &str) -> Vec<(usize, usize)> {
    let hay = haystack.as_bytes();
    let ned = needle.as_bytes();
    if ned.is_empty() || ned.len() > hay.len() {
        return Vec::new();
    }
    let mut occurrences = Vec::new();
    let mut start = 0;
    while start + ned.len() <= hay.len() {
        let end = start + ned.len();
        if haystack.is_char_boundary(start)
            && haystack.is_char_boundary(end)
            && hay[start..end].eq_ignore_ascii_case(ned)
        {
            occurrences.push((start, end));
            start = end;
        } else {
            start += 1;
        }
    }
    occurrences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(text: &str) -> HighlightPhrase {
        HighlightPhrase::new(text, HighlightKind::Keyword)
    }

    fn negative(text: &str) -> HighlightPhrase {
        HighlightPhrase::new(text, HighlightKind::Negative)
    }

    fn joined(spans: &[TranscriptSpan]) -> String {
        spans.iter().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn spans_cover_the_full_text_in_order() {
        let text = "Var is function scoped, while let is block scoped.";
        let spans = annotate(text, &[keyword("function scoped"), keyword("block scoped")]);
        assert_eq!(joined(&spans), text);
        let highlighted: Vec<&str> = spans
            .iter()
            .filter(|span| span.highlight.is_some())
            .map(|span| span.text.as_str())
            .collect();
        assert_eq!(highlighted, vec!["function scoped", "block scoped"]);
    }

    #[test]
    fn matching_is_case_insensitive_and_repeats_are_all_annotated() {
        let spans = annotate(
            "Closures, closures everywhere",
            &[negative("closures")],
        );
        let hits = spans
            .iter()
            .filter(|span| span.highlight == Some(HighlightKind::Negative))
            .count();
        assert_eq!(hits, 2);
    }

    #[test]
    fn overlapping_phrases_do_not_double_annotate() {
        // Sequential string replacement would wrap "scoped" inside the
        // already-wrapped "function scoped"; span annotation must not.
        let spans = annotate(
            "function scoped variables",
            &[keyword("function scoped"), negative("scoped")],
        );
        assert_eq!(joined(&spans), "function scoped variables");
        assert_eq!(
            spans
                .iter()
                .filter(|span| span.highlight.is_some())
                .count(),
            1
        );
        assert_eq!(spans[0].highlight, Some(HighlightKind::Keyword));
    }

    #[test]
    fn no_phrases_yields_one_plain_span() {
        let spans = annotate("plain text", &[]);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].highlight, None);
    }

    #[test]
    fn empty_phrase_matches_nothing() {
        let spans = annotate("text", &[keyword("")]);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "text");
    }
}
