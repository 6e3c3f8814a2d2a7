//! Rail-fence transposition

use crate::transform::Mode;

/// Row index of every position when writing `len` characters in a zig-zag
/// over `rails` rows
pub fn zigzag_rows(len: usize, rails: usize) -> Vec<usize> {
    let mut rows = Vec::with_capacity(len);
    if rails == 0 {
        return rows;
    }

    let mut row = 0usize;
    let mut descending = true;
    for _ in 0..len {
        rows.push(row);
        if rails == 1 {
            continue;
        }
        if row == 0 {
            descending = true;
        } else if row == rails - 1 {
            descending = false;
        }
        if descending {
            row += 1;
        } else {
            row -= 1;
        }
    }
    rows
}

/// Apply the rail-fence cipher over `rails` rows
///
/// Works on characters, not bytes. One rail or at most one character is the
/// identity.
pub fn rail_fence(text: &str, mode: Mode, rails: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if rails <= 1 || chars.len() <= 1 {
        return text.to_string();
    }

    match mode {
        Mode::Encode => encode(&chars, rails),
        Mode::Decode => decode(&chars, rails),
    }
}

fn encode(chars: &[char], rails: usize) -> String {
    let mut fence: Vec<String> = vec![String::new(); rails];
    for (c, row) in chars.iter().zip(zigzag_rows(chars.len(), rails)) {
        fence[row].push(*c);
    }
    fence.concat()
}

fn decode(chars: &[char], rails: usize) -> String {
    let pattern = zigzag_rows(chars.len(), rails);

    let mut row_lengths = vec![0usize; rails];
    for &row in &pattern {
        row_lengths[row] += 1;
    }

    // Each row owns a contiguous block of the ciphertext, in row order
    let mut cursors = Vec::with_capacity(rails);
    let mut start = 0usize;
    for len in &row_lengths {
        cursors.push(start);
        start += len;
    }

    pattern
        .iter()
        .map(|&row| {
            let c = chars[cursors[row]];
            cursors[row] += 1;
            c
        })
        .collect()
}
