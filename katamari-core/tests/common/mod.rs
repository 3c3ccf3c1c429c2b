/// Parses a picture such as `"AAB/ABB"` into row-major cells and a row width.
///
/// Rows are separated by `/`; whitespace is ignored.
#[must_use]
pub fn picture(rows: &str) -> (Vec<char>, usize) {
    let rows: Vec<Vec<char>> = rows
        .split('/')
        .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect())
        .collect();
    let columns = rows.first().map_or(1, Vec::len).max(1);
    (rows.into_iter().flatten().collect(), columns)
}
