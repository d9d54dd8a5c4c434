//! Table rendering utilities for CLI outputs.

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths from the widest visible cell, header included.
    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render the table; `paint(row, col, cell, padded)` may wrap each padded
    /// body cell in colour codes.
    pub fn render_with<F>(&self, paint: F) -> String
    where
        F: Fn(usize, usize, &str, String) -> String,
    {
        let widths = self.widths();
        let mut out = String::new();

        for (h, w) in self.headers.iter().zip(&widths) {
            out.push_str(&format!("{:<width$} ", h, width = *w));
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        for (r, row) in self.rows.iter().enumerate() {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let padded = format!("{:<width$}", cell, width = *w);
                out.push_str(&paint(r, i, cell, padded));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }

    pub fn render(&self) -> String {
        self.render_with(|_, _, _, padded| padded)
    }
}
