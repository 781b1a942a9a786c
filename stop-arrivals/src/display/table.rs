//! Plain-text table layout.

/// Gap between columns.
const COLUMN_GAP: usize = 2;

/// Column-aligned text table.
///
/// Cells are left-aligned and padded to the widest cell of their column,
/// counted in characters so that accented names line up.
#[derive(Debug, Clone)]
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

    /// Append a row. Missing cells render empty; extra cells are dropped.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.headers.len())
            .map(Into::into)
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lay the table out, one line per row, header first.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| {
                std::iter::once(&self.headers[col])
                    .chain(self.rows.iter().map(|row| &row[col]))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
            let mut line = String::new();
            for (cell, width) in row.iter().zip(&widths) {
                line.push_str(cell);
                let pad = width - cell.chars().count() + COLUMN_GAP;
                line.extend(std::iter::repeat_n(' ', pad));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only() {
        let table = Table::new(["Linia", "Kierunek"]);
        assert!(table.is_empty());
        assert_eq!(table.render(), "Linia  Kierunek\n");
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let mut table = Table::new(["A", "B", "C"]);
        table.add_row(["12", "Centrum", "x"]);
        table.add_row(["N", "Leśnica", "yy"]);

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.render(),
            "A   B        C\n\
             12  Centrum  x\n\
             N   Leśnica  yy\n"
        );
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = Table::new(["A", "B"]);
        table.add_row(["only"]);
        table.add_row(["1", "2", "dropped"]);

        assert_eq!(table.render(), "A     B\nonly\n1     2\n");
    }
}
