use std::collections::HashSet;

use anyhow::Result;
use serde::Serialize;

use ticker_core::{align, ColumnAction, Glyph, GlyphCycle, Segmentation};

/// One resulting column of an alignment
#[derive(Debug, Serialize, PartialEq)]
pub struct ColumnReport {
    pub column: usize,
    pub action: ColumnAction,
    /// Glyph the column shows now; empty for inserted columns
    pub from: String,
    /// Glyph the column scrolls to; empty for deleted columns
    pub to: String,
}

pub fn run(old: &str, new: &str, lists: &[String], segmentation: Segmentation, json: bool) -> Result<()> {
    let animatable = animatable_set(lists, segmentation)?;
    let old_glyphs = segmentation.segment(old);
    let new_glyphs = segmentation.segment(new);

    let actions = align(&old_glyphs, &new_glyphs, &animatable);
    let report = describe(&actions, &old_glyphs, &new_glyphs);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let summary: String = actions.iter().map(|a| a.symbol()).collect();
    println!("{:?} -> {:?}  [{}]\n", old, new, summary);
    for row in &report {
        println!(
            "  {:>3}  {:<6} {:>4} -> {}",
            row.column,
            format!("{:?}", row.action),
            display(&row.from),
            display(&row.to)
        );
    }

    Ok(())
}

fn animatable_set(lists: &[String], segmentation: Segmentation) -> Result<HashSet<Glyph>> {
    let mut set = HashSet::new();
    for list in lists {
        let cycle = GlyphCycle::from_text(list, segmentation)?;
        set.extend(cycle.glyphs().cloned());
    }
    Ok(set)
}

/// Replay the actions to pair every resulting column with its glyphs
pub fn describe(actions: &[ColumnAction], old: &[Glyph], new: &[Glyph]) -> Vec<ColumnReport> {
    let mut old_glyphs = old.iter();
    let mut new_glyphs = new.iter();

    actions
        .iter()
        .enumerate()
        .map(|(column, &action)| {
            let from = if action.uses_old() { old_glyphs.next() } else { None };
            let to = if action.uses_new() { new_glyphs.next() } else { None };
            ColumnReport {
                column,
                action,
                from: from.map(|g| g.to_string()).unwrap_or_default(),
                to: to.map(|g| g.to_string()).unwrap_or_default(),
            }
        })
        .collect()
}

fn display(glyph: &str) -> &str {
    if glyph.is_empty() {
        "·"
    } else {
        glyph
    }
}
