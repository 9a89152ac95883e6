//! Bordered screen header.
//!
//! Pure formatting: given a title and a fixed column width, builds the
//! asterisk-ruled block every screen prints first. Rendering to a `String`
//! keeps the geometry testable.

/// Renders the header block, newline-terminated, followed by one blank line.
///
/// Height is `max(ceil(len / (width - 4)) + 2, 5)` rows: top and bottom
/// rules, the title row horizontally centered between `*` border columns,
/// and blank bordered rows for the rest.
pub fn render(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let inner = width.saturating_sub(4).max(1);
    let line_count = len.div_ceil(inner).max(1);
    let height = (line_count + 2).max(5);
    let title_row = ((height as f64 / 2.0) - (line_count / 2) as f64).round() as usize - 1;

    let mut out = String::new();
    for row in 0..height {
        if row == 0 || row == height - 1 {
            out.push_str(&"*".repeat(width));
        } else if row == title_row {
            out.push_str(&title_line(title, len, width));
        } else {
            out.push('*');
            out.push_str(&" ".repeat(width.saturating_sub(2)));
            out.push('*');
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

fn title_line(title: &str, len: usize, width: usize) -> String {
    if len + 2 > width {
        // Degenerate case: no room to center, keep the borders and cut.
        let cut: String = title.chars().take(width.saturating_sub(2)).collect();
        return format!("*{}*", cut);
    }

    let pad = width - len;
    let left = pad.div_ceil(2);
    let right = pad - left;

    let mut line = String::with_capacity(width);
    line.push('*');
    line.push_str(&" ".repeat(left - 1));
    line.push_str(title);
    line.push_str(&" ".repeat(right.saturating_sub(1)));
    line.push('*');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(block: &str) -> Vec<&str> {
        block.lines().collect()
    }

    #[test]
    fn test_short_title_renders_five_rows_plus_blank() {
        let block = render("HelloWorld", 44);
        let rows = rows(&block);

        // 5 header rows, then the trailing blank line.
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[5], "");
        assert_eq!(rows[0], "*".repeat(44));
        assert_eq!(rows[4], "*".repeat(44));
        for row in &rows[..5] {
            assert_eq!(row.chars().count(), 44);
        }
    }

    #[test]
    fn test_title_row_is_centered() {
        let block = render("HelloWorld", 44);
        let title_row = rows(&block)[2];

        assert!(title_row.starts_with('*') && title_row.ends_with('*'));
        let start = title_row.find("HelloWorld").unwrap();
        let left_pad = start - 1;
        let right_pad = 44 - 2 - 10 - left_pad;
        assert!(left_pad.abs_diff(right_pad) <= 1);
    }

    #[test]
    fn test_blank_rows_keep_borders() {
        let block = render("Hi", 44);
        let rows = rows(&block);
        for row in [rows[1], rows[3]] {
            assert!(row.starts_with('*') && row.ends_with('*'));
            assert!(row[1..43].chars().all(|c| c == ' '));
        }
    }

    #[test]
    fn test_long_title_grows_past_minimum_height() {
        let title = "x".repeat(90); // 3 lines at inner width 40
        let block = render(&title, 44);
        assert_eq!(rows(&block).len(), 3 + 2 + 1);
    }
}
