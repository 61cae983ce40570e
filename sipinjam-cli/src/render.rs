//! Terminal rendering: tables, badges, pagination footer

use std::io::IsTerminal;

use shared::view::{Pagination, StatusBadge};

/// Plain text table with left-aligned, width-fitted columns
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(visible_width(cell));
                }
            }
        }

        let mut out = String::new();
        let header: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        push_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(visible_width(cell));
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Character count ignoring ANSI color sequences
fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in text.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => width += 1,
        }
    }
    width
}

fn ansi_code(color: &str) -> &'static str {
    match color {
        "yellow" => "33",
        "green" => "32",
        "red" => "31",
        "blue" => "34",
        "purple" => "35",
        "orange" => "38;5;208",
        _ => "90",
    }
}

/// Badge text, colored when stdout is a terminal
pub fn badge(badge: StatusBadge) -> String {
    paint(badge, std::io::stdout().is_terminal())
}

fn paint(badge: StatusBadge, color: bool) -> String {
    if color {
        format!("\x1b[{}m{}\x1b[0m", ansi_code(badge.color), badge.label)
    } else {
        badge.label.to_string()
    }
}

/// `‹ 1 2 [3] 4 5 ›  Menampilkan 21–30 dari 42 data`
pub fn pagination_footer(pagination: &Pagination) -> String {
    let window = pagination.window();
    if window.pages.is_empty() {
        return pagination.summary();
    }
    let mut parts = Vec::with_capacity(window.pages.len() + 2);
    parts.push((if window.has_prev { "‹" } else { " " }).to_string());
    for page in &window.pages {
        if *page == window.current {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    parts.push((if window.has_next { "›" } else { " " }).to_string());
    format!("{}  {}", parts.join(" "), pagination.summary())
}

pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
