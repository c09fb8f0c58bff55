use crate::projection::projector::Projection;

/// Renders the projection as a plain-text table for terminals.
///
/// Cells holding several sessions take several lines; the row grows to the
/// tallest cell. Column widths fit the widest line in each column.
pub fn render_text_table(projection: &Projection) -> String {
    let columns = projection.header.len() + 1;

    let mut widths = vec![0usize; columns];
    for (c, day) in projection.header.iter().enumerate() {
        widths[c + 1] = day.chars().count();
    }
    for row in &projection.rows {
        widths[0] = widths[0].max(row.label.chars().count());
        for (c, cell) in row.cells.iter().enumerate() {
            for line in cell {
                widths[c + 1] = widths[c + 1].max(line.chars().count());
            }
        }
    }

    let separator: String = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let separator = format!("+{}+\n", separator);

    let mut out = separator.clone();
    let mut header = vec![String::new()];
    header.extend(projection.header.iter().cloned());
    out.push_str(&format_line(&header, &widths));
    out.push_str(&separator);

    for row in &projection.rows {
        let height = row.cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
        for line in 0..height {
            let mut fields = Vec::with_capacity(columns);
            fields.push(if line == 0 { row.label.clone() } else { String::new() });
            for cell in &row.cells {
                fields.push(cell.get(line).cloned().unwrap_or_default());
            }
            out.push_str(&format_line(&fields, &widths));
        }
        out.push_str(&separator);
    }
    out
}

fn format_line(fields: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = fields
        .iter()
        .zip(widths)
        .map(|(f, w)| format!(" {:<width$} ", f, width = w))
        .collect();
    format!("|{}|\n", cells.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::projector::ProjectedRow;

    #[test]
    fn tall_cells_add_lines() {
        let p = Projection {
            header: vec!["Monday".into(), "Tuesday".into()],
            rows: vec![ProjectedRow {
                label: "09:00".into(),
                cells: vec![vec!["A (T1) - 1".into(), "B (T2) - 2".into()], vec![]],
            }],
        };
        let text = render_text_table(&p);
        let lines: Vec<&str> = text.lines().collect();
        // separator, header, separator, two body lines, separator
        assert_eq!(lines.len(), 6);
        assert!(lines[3].contains("09:00") && lines[3].contains("A (T1) - 1"));
        assert!(lines[4].contains("B (T2) - 2") && !lines[4].contains("09:00"));
    }
}
