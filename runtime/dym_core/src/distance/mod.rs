//! Levenshtein edit distance between identifier-sized strings.

/// Minimum number of single-character insertions, deletions, or
/// substitutions required to turn `a` into `b`.
///
/// Operates on `char` sequences, so multi-byte identifiers score the
/// same as ASCII ones. Symmetric, and zero exactly when the strings are
/// equal. Runs in O(len(a) * len(b)) time and O(len(b)) space.
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let b_chars: Vec<char> = b.chars().collect();
    if b_chars.is_empty() {
        return a.chars().count();
    }

    // Single-row DP: after processing i chars of `a`, row[j] holds the
    // distance between a[..i] and b[..j]. `diag` carries the value that
    // row[j] held on the previous iteration of the inner loop.
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, a_ch) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;

        for (j, &b_ch) in b_chars.iter().enumerate() {
            let substitute = diag + usize::from(a_ch != b_ch);
            let delete = row[j + 1] + 1;
            let insert = row[j] + 1;
            diag = row[j + 1];
            row[j + 1] = substitute.min(delete).min(insert);
        }
    }

    row[b_chars.len()]
}
