/// Render a left-aligned table with a dashed divider under the header.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line = format_row(&widths, headers.iter().copied());
    let divider = "-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        lines.push(format_row(&widths, row.iter().map(String::as_str)));
    }
    lines.join("\n")
}

fn format_row<'a>(widths: &[usize], mut cells: impl Iterator<Item = &'a str>) -> String {
    let line = widths
        .iter()
        .map(|&width| {
            let cell = cells.next().unwrap_or("-");
            format!("{cell:<width$}")
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}
