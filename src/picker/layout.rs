use unicode_width::UnicodeWidthStr;

/// Items at least this wide (in terminal columns) force a single-column listing.
pub const TWO_COLUMN_THRESHOLD: usize = 46;
/// Width the left column is padded to in a two-column listing.
pub const COLUMN_WIDTH: usize = 50;

/// Lays out one batch of already-rendered item texts.
///
/// Every entry is prefixed with its zero-padded batch-local index. Two items
/// share a line when every text is narrower than [`TWO_COLUMN_THRESHOLD`] and
/// none of them contains a line break; otherwise each item gets its own line.
pub fn layout_batch(texts: &[String]) -> Vec<String> {
    let labelled: Vec<String> = texts
        .iter()
        .enumerate()
        .map(|(idx, text)| format!("{idx:02} {text}"))
        .collect();

    if !fits_two_columns(texts) {
        return labelled;
    }

    labelled
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => format!("{}{}", pad_to(left, COLUMN_WIDTH), right),
            [single] => single.clone(),
            _ => unreachable!("chunks(2) yields one or two items"),
        })
        .collect()
}

pub fn fits_two_columns(texts: &[String]) -> bool {
    texts
        .iter()
        .all(|t| !t.contains('\n') && t.width() < TWO_COLUMN_THRESHOLD)
}

fn pad_to(text: &str, width: usize) -> String {
    let used = text.width();
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(used));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn short_items_pair_up() {
        let lines = layout_batch(&texts(&["alpha", "beta", "gamma"]));
        assert_eq!(
            lines,
            vec![format!("{:<50}01 beta", "00 alpha"), "02 gamma".to_string()]
        );
    }

    #[test]
    fn long_item_forces_single_column() {
        let long = "x".repeat(TWO_COLUMN_THRESHOLD);
        let lines = layout_batch(&texts(&["a", &long]));
        assert_eq!(lines, vec!["00 a".to_string(), format!("01 {long}")]);
    }

    #[test]
    fn just_under_threshold_still_pairs() {
        let edge = "y".repeat(TWO_COLUMN_THRESHOLD - 1);
        let lines = layout_batch(&texts(&[&edge, "b"]));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("01 b"));
    }

    #[test]
    fn multi_line_item_forces_single_column() {
        let lines = layout_batch(&texts(&["a", "two\nlines", "c"]));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "01 two\nlines");
    }

    #[test]
    fn wide_characters_pad_by_display_width() {
        let lines = layout_batch(&texts(&["日本", "b"]));
        // "00 日本" occupies 7 columns, so 43 spaces follow it.
        assert_eq!(lines[0], format!("00 日本{}01 b", " ".repeat(43)));
    }

    #[test]
    fn indices_beyond_two_digits_keep_growing() {
        let many: Vec<String> = (0..101).map(|i| i.to_string()).collect();
        let lines = layout_batch(&many);
        assert!(lines.last().unwrap().starts_with("100 "));
    }

    #[test]
    fn empty_batch_lays_out_nothing() {
        assert!(layout_batch(&[]).is_empty());
    }
}
