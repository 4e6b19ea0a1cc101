//! Edit-distance matching between normalized strings.

/// Levenshtein distance with unit-cost insertions, deletions and substitutions.
///
/// Fills the full `(word.len() + 1) x (query.len() + 1)` matrix over chars.
pub fn levenshtein_distance(query: &str, word: &str) -> usize {
    let query: Vec<char> = query.chars().collect();
    let word: Vec<char> = word.chars().collect();

    if query.is_empty() {
        return word.len();
    }
    if word.is_empty() {
        return query.len();
    }

    let mut matrix = vec![vec![0usize; query.len() + 1]; word.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=word.len() {
        for j in 1..=query.len() {
            let cost = usize::from(word[i - 1] != query[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[word.len()][query.len()]
}

/// Maximum tolerated distance for a query of `query_len` chars.
///
/// Breakpoints are 3, 7 and 9 chars.
pub fn distance_threshold(query_len: usize) -> usize {
    match query_len {
        0..=2 => 0,
        3..=6 => 1,
        7..=8 => 2,
        _ => 3,
    }
}

/// True when `word` is within the length-scaled threshold of `query`.
///
/// Both arguments are expected to be normalized already.
pub fn is_similar(query: &str, word: &str) -> bool {
    let query_len = query.chars().count();
    let threshold = distance_threshold(query_len);

    // Distance is at least the length gap.
    if query_len.abs_diff(word.chars().count()) > threshold {
        return false;
    }

    levenshtein_distance(query, word) <= threshold
}
