//! Edit distance
//!
//! Classic Levenshtein distance over characters.

/// Minimum number of single-character insertions, deletions and
/// substitutions needed to turn `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // matrix[i][j] = distance between a[..i] and b[..j]
    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            matrix[i][j] = if a[i - 1] == b[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + matrix[i - 1][j]
                    .min(matrix[i][j - 1])
                    .min(matrix[i - 1][j - 1])
            };
        }
    }

    matrix[a.len()][b.len()]
}
