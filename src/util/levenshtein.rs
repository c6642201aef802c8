//! Levenshtein distance algorithms over Unicode code points.
//!
//! All functions compare `char`s, never bytes, so a multi-byte character
//! counts as a single edit. Only one or two rows of the dynamic-programming
//! matrix are ever kept in memory.

use std::cmp::min;

/// Compute the next row of the edit-distance matrix.
///
/// `previous` is the row for some prefix `p` of the other word against every
/// prefix of `target`; `current` receives the row for `p` extended by `letter`.
/// Both slices must have length `target.len() + 1`. Returns the minimum value
/// written to `current`, which is a lower bound on the distance between `target`
/// and any word starting with `p + letter`.
pub fn advance_row(
    previous: &[usize],
    letter: char,
    target: &[char],
    current: &mut [usize],
) -> usize {
    debug_assert_eq!(previous.len(), target.len() + 1);
    debug_assert_eq!(current.len(), target.len() + 1);

    current[0] = previous[0] + 1;
    let mut min_in_row = current[0];

    for (j, &target_char) in target.iter().enumerate() {
        let cost = if target_char == letter { 0 } else { 1 };

        current[j + 1] = min(
            min(
                previous[j + 1] + 1, // deletion
                current[j] + 1,      // insertion
            ),
            previous[j] + cost, // substitution
        );

        min_in_row = min(min_in_row, current[j + 1]);
    }

    min_in_row
}

/// The first row of the matrix: distance from the empty prefix to each prefix of `target`.
pub fn initial_row(target: &[char]) -> Vec<usize> {
    (0..=target.len()).collect()
}

/// Calculate the Levenshtein distance between two strings.
///
/// Space usage is O(min(n, m)): the shorter string is laid out along the row.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let (rows, columns) = by_length(s1, s2);

    if columns.is_empty() {
        return rows.len();
    }

    let mut prev_row = initial_row(&columns);
    let mut curr_row = vec![0; columns.len() + 1];

    for &letter in &rows {
        advance_row(&prev_row, letter, &columns, &mut curr_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[columns.len()]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None as soon as the distance is known to exceed the threshold.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let (rows, columns) = by_length(s1, s2);
    bounded_distance(rows.iter().copied(), rows.len(), &columns, threshold)
}

/// Thresholded distance from an already decoded `target` to `word`.
///
/// `word` is streamed through the matrix one code point at a time, so repeated
/// comparisons against the same target decode it only once.
pub fn levenshtein_distance_to(target: &[char], word: &str, threshold: usize) -> Option<usize> {
    bounded_distance(word.chars(), word.chars().count(), target, threshold)
}

fn bounded_distance<I>(
    rows: I,
    row_count: usize,
    columns: &[char],
    threshold: usize,
) -> Option<usize>
where
    I: IntoIterator<Item = char>,
{
    // The length difference is a lower bound on the distance.
    if row_count.abs_diff(columns.len()) > threshold {
        return None;
    }

    if columns.is_empty() {
        return Some(row_count);
    }

    let mut prev_row = initial_row(columns);
    let mut curr_row = vec![0; columns.len() + 1];

    for letter in rows {
        let min_in_row = advance_row(&prev_row, letter, columns, &mut curr_row);
        if min_in_row > threshold {
            return None;
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[columns.len()];
    if distance <= threshold {
        Some(distance)
    } else {
        None
    }
}

/// Split two strings into code points, longer first.
fn by_length(s1: &str, s2: &str) -> (Vec<char>, Vec<char>) {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    if a.len() >= b.len() { (a, b) } else { (b, a) }
}
