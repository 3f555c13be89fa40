use crate::ui;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Minimum column width before truncation kicks in.
const MIN_COLUMN: usize = 6;

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_COLUMN)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false, 0))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(value, *width);
                let numeric = looks_numeric(&text);
                match options.color.then(|| ui::cell_color(&text)).flatten() {
                    Some(code) => {
                        let colored = ui::paint(&text, code);
                        let escapes = colored.chars().count() - text.chars().count();
                        pad(&colored, *width, numeric, escapes)
                    }
                    None => pad(&text, *width, numeric, 0),
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.join("\n")
}

/// Shrink the widest columns one character at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

/// Pad to `width` visible characters; `escapes` counts invisible ANSI characters.
fn pad(value: &str, width: usize, right_align: bool, escapes: usize) -> String {
    let visible = value.chars().count() - escapes;
    let fill = " ".repeat(width.saturating_sub(visible));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["id", "class", "name"];
        let rows = vec![
            vec!["emp-1".to_string(), "Class 1".to_string(), "Ada".to_string()],
            vec![
                "emp-200".to_string(),
                "Class 6".to_string(),
                "a much longer name".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("Class 1"), lines[3].find("Class 6"));
    }

    #[test]
    fn numbers_are_right_aligned() {
        let rows = vec![vec!["4".to_string()], vec!["12".to_string()]];
        let table = render_entity_table(&["class_id"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].ends_with(" 4"));
        assert!(lines[3].ends_with("12"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec!["x".repeat(60), "ok".to_string()]];
        let table = render_entity_table(
            &["text", "type"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.contains('…'));
        assert!(row.chars().count() <= 40);
    }

    #[test]
    fn colored_cells_keep_alignment() {
        let rows = vec![
            vec!["success".to_string(), "a".to_string()],
            vec!["plain".to_string(), "b".to_string()],
        ];
        let table = render_entity_table(
            &["type", "text"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        let strip = |line: &str| line.replace("\u{1b}[32m", "").replace("\u{1b}[0m", "");
        assert_eq!(strip(lines[2]).find('a'), strip(lines[3]).find('b'));
    }
}
