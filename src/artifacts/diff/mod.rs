//! Line diffs
//!
//! A pure function from two texts to a tagged line sequence, consumed only
//! for display by `show`. The implementation trims the common prefix and
//! suffix, then runs a longest-common-subsequence pass over the middle;
//! tracked files are small enough that the quadratic core is fine.

/// How one output line relates to the two input texts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    /// Line present in both texts
    Context,
    /// Line only in the new text
    Added,
    /// Line only in the old text
    Removed,
}

impl DiffTag {
    /// The `+`/`-`/` ` marker used when rendering
    pub fn marker(&self) -> char {
        match self {
            DiffTag::Context => ' ',
            DiffTag::Added => '+',
            DiffTag::Removed => '-',
        }
    }
}

/// One line of diff output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub tag: DiffTag,
    pub text: String,
}

/// Compare two texts line by line
///
/// Removed lines are emitted before added lines within each changed region.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffLine> {
    let old_lines = old.lines().collect::<Vec<_>>();
    let new_lines = new.lines().collect::<Vec<_>>();

    let common_prefix = old_lines
        .iter()
        .zip(new_lines.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let common_suffix = old_lines[common_prefix..]
        .iter()
        .rev()
        .zip(new_lines[common_prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = Vec::with_capacity(old_lines.len().max(new_lines.len()));

    for line in &old_lines[..common_prefix] {
        result.push(DiffLine {
            tag: DiffTag::Context,
            text: line.to_string(),
        });
    }

    let old_middle = &old_lines[common_prefix..old_lines.len() - common_suffix];
    let new_middle = &new_lines[common_prefix..new_lines.len() - common_suffix];
    diff_middle(old_middle, new_middle, &mut result);

    for line in &old_lines[old_lines.len() - common_suffix..] {
        result.push(DiffLine {
            tag: DiffTag::Context,
            text: line.to_string(),
        });
    }

    result
}

/// LCS pass over the changed middle region
fn diff_middle(old: &[&str], new: &[&str], result: &mut Vec<DiffLine>) {
    // lcs[i][j] = length of the LCS of old[i..] and new[j..]
    let mut lcs = vec![vec![0usize; new.len() + 1]; old.len() + 1];
    for i in (0..old.len()).rev() {
        for j in (0..new.len()).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            result.push(DiffLine {
                tag: DiffTag::Context,
                text: old[i].to_string(),
            });
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            result.push(DiffLine {
                tag: DiffTag::Removed,
                text: old[i].to_string(),
            });
            i += 1;
        } else {
            result.push(DiffLine {
                tag: DiffTag::Added,
                text: new[j].to_string(),
            });
            j += 1;
        }
    }
    for line in &old[i..] {
        result.push(DiffLine {
            tag: DiffTag::Removed,
            text: line.to_string(),
        });
    }
    for line in &new[j..] {
        result.push(DiffLine {
            tag: DiffTag::Added,
            text: line.to_string(),
        });
    }
}
