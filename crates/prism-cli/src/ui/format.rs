//! Plain-text tables for command output.

/// Column-aligned text table.
///
/// # Examples
///
/// ```
/// use prism_cli::ui::Table;
///
/// let mut table = Table::new(["variant", "format"]);
/// table.row(["esm", "es"]);
/// table.row(["umd-production", "umd"]);
///
/// assert_eq!(
///     table.render(),
///     "variant         format\n\
///      esm             es\n\
///      umd-production  umd\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
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

    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render with two spaces between columns and no trailing padding.
    pub fn render(&self) -> String {
        let columns = std::iter::once(&self.headers)
            .chain(&self.rows)
            .map(Vec::len)
            .max()
            .unwrap_or(0);

        let mut widths = vec![0; columns];
        for line in std::iter::once(&self.headers).chain(&self.rows) {
            for (idx, cell) in line.iter().enumerate() {
                widths[idx] = widths[idx].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for line in std::iter::once(&self.headers).chain(&self.rows) {
            let last = line.len().saturating_sub(1);
            for (idx, cell) in line.iter().enumerate() {
                out.push_str(cell);
                if idx < last {
                    let pad = widths[idx] - cell.chars().count() + 2;
                    out.extend(std::iter::repeat_n(' ', pad));
                }
            }
            out.push('\n');
        }
        out
    }

    /// Print to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
