// Chunk: docs/chunks/tab_columns - Storage column to visual column mapping

//! Mapping between storage columns (scalar indices) and visual columns
//! (screen cells) for lines that contain tabs.
//!
//! Every scalar occupies one cell except the tab, which advances to the
//! next tab stop: a tab starting at visual column `v` is
//! `tab_width - v % tab_width` cells wide.

/// Cells occupied by a tab that starts at visual column `visual`.
pub fn tab_width_at(visual: usize, tab_width: usize) -> usize {
    let width = tab_width.max(1);
    width - visual % width
}

fn cell_width(ch: char, visual: usize, tab_width: usize) -> usize {
    if ch == '\t' {
        tab_width_at(visual, tab_width)
    } else {
        1
    }
}

/// Visual column of the left edge of storage column `col`.
///
/// `col` past the end of the line is treated as the end of the line.
pub fn visual_column(line: &[char], col: usize, tab_width: usize) -> usize {
    line.iter()
        .take(col)
        .fold(0, |visual, &ch| visual + cell_width(ch, visual, tab_width))
}

/// Visual width of the scalars up to and including `col`.
///
/// The end-of-line slot counts as one cell, so for a line without tabs this
/// is `col + 1`.
pub fn adjust_for_tabs(line: &[char], col: usize, tab_width: usize) -> usize {
    let col = col.min(line.len());
    let left = visual_column(line, col, tab_width);
    match line.get(col) {
        Some(&ch) => left + cell_width(ch, left, tab_width),
        None => left + 1,
    }
}

/// Inverse of [`adjust_for_tabs`]: the first storage column whose visual
/// extent reaches `visual`, clamped to the line length.
pub fn from_tab_adjusted(line: &[char], visual: usize, tab_width: usize) -> usize {
    if visual == 0 {
        return 0;
    }
    let mut reached = 0;
    for (col, &ch) in line.iter().enumerate() {
        reached += cell_width(ch, reached, tab_width);
        if reached >= visual {
            return col;
        }
    }
    line.len()
}

/// The storage column a caret should take to sit at visual column
/// `visual`. Inside a tab the caret lands before the tab.
pub fn column_at_visual(line: &[char], visual: usize, tab_width: usize) -> usize {
    let mut left = 0;
    for (col, &ch) in line.iter().enumerate() {
        let right = left + cell_width(ch, left, tab_width);
        if visual < right {
            return col;
        }
        left = right;
    }
    line.len()
}

/// Total visual width of the line.
pub fn tab_adjusted_len(line: &[char], tab_width: usize) -> usize {
    visual_column(line, line.len(), tab_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_tab_width_formula() {
        assert_eq!(tab_width_at(0, 4), 4);
        assert_eq!(tab_width_at(1, 4), 3);
        assert_eq!(tab_width_at(3, 4), 1);
        assert_eq!(tab_width_at(4, 4), 4);
        assert_eq!(tab_width_at(5, 8), 3);
    }

    #[test]
    fn test_zero_tab_width_is_treated_as_one() {
        assert_eq!(tab_width_at(7, 0), 1);
    }

    #[test]
    fn test_adjust_without_tabs() {
        let line = chars("abc");
        assert_eq!(adjust_for_tabs(&line, 0, 4), 1);
        assert_eq!(adjust_for_tabs(&line, 2, 4), 3);
        assert_eq!(adjust_for_tabs(&line, 3, 4), 4);
    }

    #[test]
    fn test_adjust_after_tab() {
        let line = chars("a\tb");
        assert_eq!(adjust_for_tabs(&line, 2, 4), 5);
        assert_eq!(from_tab_adjusted(&line, 5, 4), 2);
    }

    #[test]
    fn test_from_tab_adjusted_inside_tab() {
        let line = chars("a\tb");
        assert_eq!(from_tab_adjusted(&line, 0, 4), 0);
        assert_eq!(from_tab_adjusted(&line, 2, 4), 1);
        assert_eq!(from_tab_adjusted(&line, 4, 4), 1);
        assert_eq!(from_tab_adjusted(&line, 99, 4), 3);
    }

    #[test]
    fn test_round_trip_every_column() {
        let line = chars("\tab\t\tc d\t");
        for col in 0..=line.len() {
            let visual = adjust_for_tabs(&line, col, 4);
            assert_eq!(from_tab_adjusted(&line, visual, 4), col, "col {}", col);
        }
    }

    #[test]
    fn test_visual_column_and_caret_placement() {
        let line = chars("\tx");
        assert_eq!(visual_column(&line, 1, 4), 4);
        assert_eq!(column_at_visual(&line, 0, 4), 0);
        assert_eq!(column_at_visual(&line, 2, 4), 0);
        assert_eq!(column_at_visual(&line, 4, 4), 1);
        assert_eq!(column_at_visual(&line, 9, 4), 2);
    }

    #[test]
    fn test_tab_adjusted_len() {
        assert_eq!(tab_adjusted_len(&chars("ab\tc"), 4), 5);
        assert_eq!(tab_adjusted_len(&chars(""), 4), 0);
        assert_eq!(tab_adjusted_len(&chars("\t\t"), 2), 4);
    }
}
