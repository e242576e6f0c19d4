//! Plain-text tables for terminal output.

use std::fmt::Write as _;

const MIN_WIDTH: usize = 4;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    /// Terminal width to fit into; `None` never truncates.
    pub max_width: Option<usize>,
    /// Colour payment/delivery status cells with ANSI codes.
    pub color: bool,
}

/// Column-aligned table built row by row.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing trailing cells render as `-`.
    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut widths = self.natural_widths();
        shrink_to_fit(&mut widths, options.max_width);

        let mut out = String::new();
        let header = Self::line(&self.headers, &widths, false);
        let rule = "-".repeat(header.trim_end().chars().count());
        out.push_str(header.trim_end());
        out.push('\n');
        out.push_str(&rule);

        for row in &self.rows {
            out.push('\n');
            out.push_str(Self::line(row, &widths, options.color).trim_end());
        }
        out
    }

    fn natural_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
                    .max(MIN_WIDTH)
            })
            .collect()
    }

    fn line(cells: &[String], widths: &[usize], color: bool) -> String {
        let mut line = String::new();
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                line.push_str(GAP);
            }
            let cell = cells.get(i).map_or("-", String::as_str);
            let text = truncate(cell, *width);
            let pad = width.saturating_sub(text.chars().count());
            let shown = if color { paint(&text) } else { text.clone() };
            if is_numeric(&text) {
                let _ = write!(line, "{}{shown}", " ".repeat(pad));
            } else {
                let _ = write!(line, "{shown}{}", " ".repeat(pad));
            }
        }
        line
    }
}

/// Narrow the widest columns one character at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > MIN_WIDTH)
            .max_by_key(|(_, w)| **w)
            .map(|(i, _)| i)
        else {
            break;
        };
        widths[widest] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

fn paint(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "paid" | "complete" | "completed" | "delivered" | "approved" | "ok" => "32",
        "pending" | "planned" | "in_progress" | "in_review" | "partial" => "33",
        "overdue" | "rejected" | "cancelled" | "failed" | "unpaid" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
