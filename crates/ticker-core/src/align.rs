//! Column alignment between the text currently shown and the next text.
//!
//! A slightly modified Levenshtein distance. Runs of animatable glyphs are
//! aligned as a unit; runs of equal length always update in place, since
//! "every column scrolls" reads better than "columns shift and relabel" even
//! when an insert/delete script would be cheaper. Glyphs outside the
//! animatable set are never aligned, only paired positionally.

use std::collections::HashSet;

use serde::Serialize;

use crate::glyph::Glyph;

/// What happens to one column when the text changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnAction {
    /// The existing column scrolls to the next new glyph
    Same,
    /// A new column is created for the next new glyph
    Insert,
    /// The existing column scrolls to EMPTY and is removed once collapsed
    Delete,
}

impl ColumnAction {
    /// Whether the action consumes a column of the old text
    #[inline]
    pub fn uses_old(self) -> bool {
        matches!(self, ColumnAction::Same | ColumnAction::Delete)
    }

    /// Whether the action consumes a glyph of the new text
    #[inline]
    pub fn uses_new(self) -> bool {
        matches!(self, ColumnAction::Same | ColumnAction::Insert)
    }

    /// One-letter form, handy for logs and test expectations
    pub fn symbol(self) -> char {
        match self {
            ColumnAction::Same => '=',
            ColumnAction::Insert => '+',
            ColumnAction::Delete => '-',
        }
    }
}

/// Compute one action per resulting column, left to right.
pub fn align(old: &[Glyph], new: &[Glyph], animatable: &HashSet<Glyph>) -> Vec<ColumnAction> {
    let mut actions = Vec::with_capacity(old.len().max(new.len()));
    let mut old_index = 0;
    let mut new_index = 0;

    loop {
        let old_done = old_index == old.len();
        let new_done = new_index == new.len();
        if old_done && new_done {
            break;
        } else if old_done {
            fill(&mut actions, new.len() - new_index, ColumnAction::Insert);
            break;
        } else if new_done {
            fill(&mut actions, old.len() - old_index, ColumnAction::Delete);
            break;
        }

        let old_animatable = animatable.contains(&old[old_index]);
        let new_animatable = animatable.contains(&new[new_index]);

        match (old_animatable, new_animatable) {
            (true, true) => {
                let old_end = next_unsupported(old, old_index + 1, animatable);
                let new_end = next_unsupported(new, new_index + 1, animatable);
                align_segment(
                    &mut actions,
                    &old[old_index..old_end],
                    &new[new_index..new_end],
                );
                old_index = old_end;
                new_index = new_end;
            }
            (true, false) => {
                actions.push(ColumnAction::Delete);
                old_index += 1;
            }
            (false, true) => {
                actions.push(ColumnAction::Insert);
                new_index += 1;
            }
            (false, false) => {
                actions.push(ColumnAction::Same);
                old_index += 1;
                new_index += 1;
            }
        }
    }

    actions
}

fn next_unsupported(glyphs: &[Glyph], from: usize, animatable: &HashSet<Glyph>) -> usize {
    glyphs[from..]
        .iter()
        .position(|g| !animatable.contains(g))
        .map_or(glyphs.len(), |offset| from + offset)
}

fn fill(actions: &mut Vec<ColumnAction>, count: usize, action: ColumnAction) {
    actions.extend(std::iter::repeat(action).take(count));
}

/// Append the actions for one pair of animatable runs.
fn align_segment(actions: &mut Vec<ColumnAction>, old: &[Glyph], new: &[Glyph]) {
    if old.len() == new.len() {
        fill(actions, old.len(), ColumnAction::Same);
        return;
    }

    let rows = old.len() + 1;
    let cols = new.len() + 1;
    let mut matrix = vec![vec![0usize; cols]; rows];
    for (row, cells) in matrix.iter_mut().enumerate() {
        cells[0] = row;
    }
    for (col, cell) in matrix[0].iter_mut().enumerate() {
        *cell = col;
    }

    for row in 1..rows {
        for col in 1..cols {
            let cost = usize::from(old[row - 1] != new[col - 1]);
            matrix[row][col] = (matrix[row - 1][col] + 1)
                .min(matrix[row][col - 1] + 1)
                .min(matrix[row - 1][col - 1] + cost);
        }
    }

    // Walk back from the bottom-right cell. Ties go to Same, then Delete.
    let mut traced = Vec::with_capacity(rows + cols);
    let (mut row, mut col) = (rows - 1, cols - 1);
    while row > 0 || col > 0 {
        if row == 0 {
            traced.push(ColumnAction::Insert);
            col -= 1;
        } else if col == 0 {
            traced.push(ColumnAction::Delete);
            row -= 1;
        } else {
            let insert = matrix[row][col - 1];
            let delete = matrix[row - 1][col];
            let same = matrix[row - 1][col - 1];

            if insert < delete && insert < same {
                traced.push(ColumnAction::Insert);
                col -= 1;
            } else if delete < same {
                traced.push(ColumnAction::Delete);
                row -= 1;
            } else {
                traced.push(ColumnAction::Same);
                row -= 1;
                col -= 1;
            }
        }
    }

    actions.extend(traced.into_iter().rev());
}
