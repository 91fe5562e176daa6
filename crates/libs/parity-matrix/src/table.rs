const FUNCTION_COLUMN: &str = "Function";
const RETAIL_COLUMN: &str = "Retail reference";
const MIN_COLUMNS: usize = 5;

/// One row of the parity table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixEntry {
    pub function: String,
    pub retail: String,
    /// Lowercased.
    pub status: String,
    pub acceptance: String,
}

/// Collects every row of every `| Function | Retail reference | ...` table, in
/// document order.
pub fn parse_table<S: AsRef<str>>(lines: &[S]) -> Vec<MatrixEntry> {
    let mut entries = Vec::new();
    let mut in_table = false;

    for line in lines {
        let line = line.as_ref();
        if is_table_header(line) {
            in_table = true;
            continue;
        }
        if !in_table {
            continue;
        }

        let trimmed = line.trim();
        if !trimmed.starts_with('|') {
            in_table = false;
            continue;
        }

        let columns = trimmed.split('|').map(str::trim).collect::<Vec<_>>();
        if columns.len() < MIN_COLUMNS {
            continue;
        }
        let (function, retail, status, acceptance) =
            (columns[1], columns[2], columns[3], columns[4]);

        if function.eq_ignore_ascii_case("function") {
            continue;
        }
        if function.replace('-', "").trim().is_empty() {
            continue;
        }

        entries.push(MatrixEntry {
            function: function.to_owned(),
            retail: retail.to_owned(),
            status: status.to_lowercase(),
            acceptance: acceptance.to_owned(),
        });
    }

    log::debug!("parsed {} matrix entries", entries.len());
    entries
}

/// The header must open at column zero and close the second cell with a pipe.
fn is_table_header(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('|') else {
        return false;
    };
    let mut cells = rest.splitn(3, '|');
    let function = cells.next().map(str::trim);
    let retail = cells.next().map(str::trim);
    function == Some(FUNCTION_COLUMN) && retail == Some(RETAIL_COLUMN) && cells.next().is_some()
}

#[cfg(test)]
mod tests {
    use super::is_table_header;

    #[test]
    fn header_detection() {
        assert!(is_table_header("| Function | Retail reference | Status | Acceptance |"));
        assert!(is_table_header("|Function|Retail reference|"));
        assert!(!is_table_header("  | Function | Retail reference | Status |"));
        assert!(!is_table_header("| function | Retail reference | Status |"));
        assert!(!is_table_header("| Function | Retail reference"));
        assert!(!is_table_header("| Function | Retail ref | Status |"));
    }
}
