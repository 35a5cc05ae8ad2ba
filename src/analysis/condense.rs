use regex::Regex;

const START_MARKER: &str = "*** START OF THE PROJECT GUTENBERG EBOOK";
const CHUNK_CHARS: usize = 5_000;

/// Shrinks a book-length text into a model-sized excerpt.
///
/// Sentences containing dialogue or proper names are treated as key
/// sentences; at most two of the longest ones per 5,000-char chunk survive.
/// The result is capped at `max_chars`.
pub fn condense(text: &str, max_chars: usize) -> String {
    let text = skip_archive_header(text);

    let sentence_end = Regex::new(r"[.!?]\s+").unwrap();
    let capitalized = Regex::new(r"[A-Z][a-z]+").unwrap();

    let chunks = chunk_chars(text, CHUNK_CHARS);
    let chunk_count = chunks.len();

    let mut condensed: Vec<&str> = vec![];

    for (i, chunk) in chunks.iter().enumerate() {
        let sentences = split_sentences(chunk, &sentence_end);

        let mut key = sentences
            .iter()
            .copied()
            .filter(|s| s.contains('"') || capitalized.is_match(s))
            .collect::<Vec<_>>();

        if key.is_empty() {
            if let Some(first) = sentences.first() {
                condensed.push(first);
            }
            continue;
        }

        let weight = std::cmp::min(2, chunk_count - i);

        key.sort_by(|a, b| b.len().cmp(&a.len()));
        condensed.extend(key.into_iter().take(weight));
    }

    truncate_chars(&condensed.join(" "), max_chars)
}

/// Everything before the archive's START marker line is license preamble.
fn skip_archive_header(text: &str) -> &str {
    match text.find(START_MARKER) {
        Some(idx) => {
            let after = &text[idx + START_MARKER.len()..];

            match after.find('\n') {
                Some(nl) => &after[nl + 1..],
                None => after,
            }
        }
        None => text,
    }
}

/// Splits on sentence-ending punctuation followed by whitespace, keeping the
/// punctuation with its sentence.
fn split_sentences<'a>(chunk: &'a str, sentence_end: &Regex) -> Vec<&'a str> {
    let mut sentences = vec![];
    let mut last = 0;

    for m in sentence_end.find_iter(chunk) {
        // the class matches one ascii punctuation char, so +1 is a boundary
        let end = m.start() + 1;

        let sentence = chunk[last..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }

        last = m.end();
    }

    let tail = chunk[last..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

fn chunk_chars(text: &str, size: usize) -> Vec<&str> {
    let mut chunks = vec![];
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == size {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }

        count += 1;
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => String::from(&text[..idx]),
        None => String::from(text),
    }
}

#[cfg(test)]
mod tests {
    use super::{chunk_chars, condense, skip_archive_header, truncate_chars};

    #[test]
    fn header_before_the_start_marker_is_skipped() {
        let text = "license preamble\n\
*** START OF THE PROJECT GUTENBERG EBOOK HAMLET ***\n\
Who's there?";

        assert_eq!("Who's there?", skip_archive_header(text));
    }

    #[test]
    fn unmarked_text_is_kept_whole() {
        assert_eq!("Who's there?", skip_archive_header("Who's there?"));
    }

    #[test]
    fn longest_key_sentence_survives_condensation() {
        let text = r#"Elizabeth walked to Meryton with her sisters. it was raining. "No," said Darcy. nothing else happened."#;

        let condensed = condense(text, 10_000);

        assert!(condensed.contains("Elizabeth walked to Meryton"));
        assert!(!condensed.contains("nothing else happened"));
    }

    #[test]
    fn chunk_without_key_sentences_keeps_its_first_sentence() {
        let condensed = condense("it was raining. it kept raining.", 10_000);

        assert_eq!("it was raining.", condensed);
    }

    #[test]
    fn condensed_text_respects_the_cap() {
        let sentence = "Elizabeth admired the grounds of Pemberley greatly. ";
        let text = sentence.repeat(2_000);

        let condensed = condense(&text, 10_000);

        assert!(condensed.chars().count() <= 10_000);
        assert!(!condensed.is_empty());
    }

    #[test]
    fn chunks_cut_on_char_boundaries() {
        let text = "é".repeat(7);
        let chunks = chunk_chars(&text, 3);

        assert_eq!(vec!["ééé", "ééé", "é"], chunks);
    }

    #[test]
    fn truncation_cuts_on_char_boundaries() {
        assert_eq!("ééé", truncate_chars(&"é".repeat(5), 3));
        assert_eq!("abc", truncate_chars("abc", 10));
    }
}
