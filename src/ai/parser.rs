//! Turns the model's loosely structured completions into typed records.
//!
//! Parsing is best effort and never fails: missing fields degrade to
//! placeholders, and the outcome is tagged so callers (and tests) can tell a
//! clean parse from a degraded one.

/// Separator the headline prompt asks the model to put between news items.
pub const NEWS_SEPARATOR: &str = "---";

const HEADLINE_LABEL: &str = "Headline:";
const SUMMARY_LABEL: &str = "Summary:";
const SUMMARY_PLACEHOLDER: &str = "No summary available";

/// Result of parsing generated text. `Degraded` carries a usable value in
/// which at least one field fell back to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    Parsed(T),
    Degraded(T),
}

impl<T> ParseOutcome<T> {
    pub fn into_inner(self) -> T {
        match self {
            ParseOutcome::Parsed(v) | ParseOutcome::Degraded(v) => v,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, ParseOutcome::Degraded(_))
    }
}

/// Headline fields extracted from one `---`-separated block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsFields {
    pub headline: String,
    pub summary: String,
}

/// One candidate title per non-blank line, at most five, source order kept.
pub fn title_suggestions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(5)
        .map(String::from)
        .collect()
}

/// Split the completion on the item separator and pull the labelled fields
/// out of each block. A block missing a label gets a placeholder instead of
/// failing the whole batch.
pub fn news_items(raw: &str) -> ParseOutcome<Vec<NewsFields>> {
    let mut degraded = false;
    let items: Vec<NewsFields> = raw
        .split(NEWS_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .enumerate()
        .map(|(index, block)| {
            let headline = labelled_line(block, HEADLINE_LABEL).unwrap_or_else(|| {
                degraded = true;
                format!("News Item {}", index + 1)
            });
            let summary = labelled_line(block, SUMMARY_LABEL).unwrap_or_else(|| {
                degraded = true;
                SUMMARY_PLACEHOLDER.to_string()
            });
            NewsFields { headline, summary }
        })
        .collect();

    if degraded {
        ParseOutcome::Degraded(items)
    } else {
        ParseOutcome::Parsed(items)
    }
}

/// Excerpts, article bodies and answers come back as free text; the only
/// cleanup is trimming.
pub fn plain_text(raw: &str) -> String {
    raw.trim().to_string()
}

fn labelled_line(block: &str, label: &str) -> Option<String> {
    block
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(label))
        .map(|line| line[label.len()..].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_skip_blank_lines_and_cap_at_five() {
        let raw = "First\n\n  Second  \nThird\nFourth\nFifth\nSixth\n";
        let titles = title_suggestions(raw);
        assert_eq!(titles, vec!["First", "Second", "Third", "Fourth", "Fifth"]);
    }

    #[test]
    fn titles_of_empty_input_are_empty() {
        assert!(title_suggestions("\n\n  \n").is_empty());
    }

    #[test]
    fn news_blocks_parse_cleanly() {
        let raw = "Headline: Solar farm opens\nSummary: A big one.\n---\nHeadline: Wind record\nSummary: Breezy.";
        let outcome = news_items(raw);
        assert!(!outcome.is_degraded());
        let items = outcome.into_inner();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].headline, "Solar farm opens");
        assert_eq!(items[1].summary, "Breezy.");
    }

    #[test]
    fn missing_labels_degrade_to_placeholders() {
        let raw = "Summary: only a summary\n---\nHeadline: only a headline";
        let outcome = news_items(raw);
        assert!(outcome.is_degraded());
        let items = outcome.into_inner();
        assert_eq!(items[0].headline, "News Item 1");
        assert_eq!(items[0].summary, "only a summary");
        assert_eq!(items[1].headline, "only a headline");
        assert_eq!(items[1].summary, "No summary available");
    }

    #[test]
    fn empty_blocks_are_dropped() {
        let raw = "---\nHeadline: A\nSummary: B\n---\n   \n---";
        let items = news_items(raw).into_inner();
        assert_eq!(items.len(), 1);
    }
}
