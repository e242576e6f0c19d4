use std::io::IsTerminal;

use accord_core::responses::ListResponse;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

use table::{Table, TableOptions};

/// Render any serializable value in the requested format.
///
/// Tables show objects as key/value pairs and arrays of objects as one row
/// per element.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(value_table(&serde_json::to_value(value)?)),
    }
}

/// Render one page of a list call. Tables use `columns` in order and end with
/// a position footer; JSON formats emit the whole envelope.
pub fn render_page<T: Serialize>(
    page: &ListResponse<T>,
    columns: &[&str],
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(page, format);
    }
    if page.data.is_empty() {
        return Ok(format!("(no rows, {} total)", page.total));
    }

    let mut table = Table::new(columns.iter().copied());
    for item in &page.data {
        let value = serde_json::to_value(item)?;
        table.push(
            columns
                .iter()
                .map(|col| value.get(*col).map_or_else(|| "-".to_string(), cell))
                .collect(),
        );
    }

    let first = u64::from(page.skip) + 1;
    let last = u64::from(page.skip) + page.data.len() as u64;
    Ok(format!(
        "{}\n\n{first}-{last} of {}",
        table.render(terminal_options()),
        page.total
    ))
}

pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

fn value_table(value: &Value) -> String {
    let options = terminal_options();
    match value {
        Value::Object(map) => {
            let mut table = Table::new(["key", "value"]);
            for (key, value) in map {
                table.push(vec![key.clone(), cell(value)]);
            }
            table.render(options)
        }
        Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
            let mut headers: Vec<String> = Vec::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|m| m.keys()) {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
            let mut table = Table::new(headers.clone());
            for item in items {
                table.push(
                    headers
                        .iter()
                        .map(|h| item.get(h).map_or_else(|| "-".to_string(), cell))
                        .collect(),
                );
            }
            table.render(options)
        }
        Value::Array(items) if items.is_empty() => "(no rows)".to_string(),
        Value::Array(items) => {
            let mut table = Table::new(["value"]);
            for item in items {
                table.push(vec![cell(item)]);
            }
            table.render(options)
        }
        scalar => cell(scalar),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| "<invalid-json>".to_string())
        }
    }
}

/// Fit to `$COLUMNS` and colour only when writing to a terminal without `NO_COLOR`.
fn terminal_options() -> TableOptions {
    let is_tty = std::io::stdout().is_terminal();
    TableOptions {
        max_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|cols| cols.parse().ok())
            .filter(|_| is_tty),
        color: is_tty && std::env::var_os("NO_COLOR").is_none(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Row {
        id: i64,
        title: &'static str,
        end_date: Option<&'static str>,
    }

    fn page() -> ListResponse<Row> {
        ListResponse {
            data: vec![
                Row {
                    id: 11,
                    title: "Cloud hosting",
                    end_date: None,
                },
                Row {
                    id: 12,
                    title: "Office lease",
                    end_date: Some("2025-12-31"),
                },
            ],
            total: 12,
            skip: 10,
            limit: 2,
        }
    }

    #[test]
    fn json_page_is_the_full_envelope() {
        let out = render_page(&page(), &["id", "title"], OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["total"], 12);
        assert_eq!(parsed["data"][1]["title"], "Office lease");
    }

    #[test]
    fn raw_is_single_line() {
        let out = render(&json!({"message": "ok"}), OutputFormat::Raw).unwrap();
        assert_eq!(out, r#"{"message":"ok"}"#);
    }

    #[test]
    fn table_page_uses_requested_columns_and_footer() {
        let out = render_page(&page(), &["id", "title", "end_date"], OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("id"));
        assert!(lines[0].contains("end_date"));
        assert!(lines[2].contains("Cloud hosting"));
        assert!(lines[2].trim_end().ends_with('-'));
        assert!(lines[3].contains("2025-12-31"));
        assert_eq!(lines.last().copied(), Some("11-12 of 12"));
    }

    #[test]
    fn empty_page_table() {
        let empty: ListResponse<Row> = ListResponse {
            data: vec![],
            total: 0,
            skip: 0,
            limit: 10,
        };
        assert_eq!(
            render_page(&empty, &["id"], OutputFormat::Table).unwrap(),
            "(no rows, 0 total)"
        );
    }

    #[test]
    fn object_table_lists_keys() {
        let out = render(&json!({"message": "done", "id": 3}), OutputFormat::Table).unwrap();
        assert!(out.lines().next().is_some_and(|l| l.starts_with("key")));
        assert!(out.contains("message"));
        assert!(out.contains("done"));
    }
}
