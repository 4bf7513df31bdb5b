//! Display formatting for result tables, charts and captions.

/// Fraction as a percentage with one decimal: 0.1667 → "16.7%".
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Shown in place of values that overflowed to infinity or NaN.
pub const NOT_AVAILABLE: &str = "n/a";

/// FTE with two decimals.
pub fn format_fte(fte: f64) -> String {
    format_decimal(fte)
}

pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{value:.2}")
}

/// Whole-dollar currency with thousands separators: 1234567.4 → "$1,234,567".
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let digits = format!("{:.0}", value.abs());
    let grouped = group_thousands(&digits);
    if value < 0.0 && digits.chars().any(|c| c != '0') {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Bordered text table. Every row must have `headers.len()` cells.
pub fn render_text_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (ci, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(ci) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(w + 2));
        sep.push('+');
    }

    let line = |cells: &[String]| -> String {
        let mut out = String::from("|");
        for (ci, &w) in widths.iter().enumerate() {
            let cell = cells.get(ci).map(String::as_str).unwrap_or("");
            out.push_str(&format!(" {cell:<w$} |"));
        }
        out
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(sep.clone());
    out.push(line(&header_cells));
    out.push(sep.clone());
    for row in rows {
        out.push(line(row));
    }
    out.push(sep);
    out.join("\n")
}

/// Horizontal bar chart, bars scaled to the largest value.
pub fn render_bar_chart(bars: &[(String, f64)], width: usize) -> String {
    let label_width = bars.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    bars.iter()
        .map(|(label, value)| {
            let len = if max > 0.0 && *value > 0.0 {
                ((value / max) * width as f64).round() as usize
            } else {
                0
            };
            format!(
                "{label:<label_width$} | {bar:<width$} {value}",
                bar = "#".repeat(len.min(width)),
                value = format_fte(*value),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
