// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant). std-only.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, ",")?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_to_string(row: &[String]) -> String {
        let mut buf: Vec<u8> = Vec::new();
        write_row(&mut buf, row).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_row_round_trips() {
        let row = vec![s!("Backend Developer"), s!("Acme"), s!("Zagreb")];
        let text = row_to_string(&row);
        assert_eq!(text, "Backend Developer,Acme,Zagreb\n");
        assert_eq!(parse_rows(&text), vec![row]);
    }

    #[test]
    fn commas_and_quotes_are_escaped() {
        let row = vec![s!("Senior Dev, Backend"), s!("\"Acme\" d.o.o."), s!("Zagreb")];
        let text = row_to_string(&row);
        assert_eq!(parse_rows(&text), vec![row]);
    }

    #[test]
    fn crlf_and_blank_lines_tolerated() {
        let text = "a,b\r\n\r\nc,d\r\n";
        assert_eq!(parse_rows(text), vec![
            vec![s!("a"), s!("b")],
            vec![s!("c"), s!("d")],
        ]);
    }

    #[test]
    fn missing_trailing_newline_flushes_last_row() {
        assert_eq!(parse_rows("a,b\nc,d"), vec![
            vec![s!("a"), s!("b")],
            vec![s!("c"), s!("d")],
        ]);
    }
}
