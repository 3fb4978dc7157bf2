use anyhow::Result;

use ticker_core::glyph::to_display_string;
use ticker_core::{ScrollDirection, Segmentation, TickerColumnManager};
use ticker_tui::TerminalMeasure;

pub fn run(
    from: &str,
    to: &str,
    frames: u32,
    direction: ScrollDirection,
    lists: &[String],
    segmentation: Segmentation,
) -> Result<()> {
    let mut manager = TickerColumnManager::new(TerminalMeasure);
    manager.set_segmentation(segmentation)?;
    manager.set_supported_glyphs(lists)?;
    manager.set_preferred_direction(direction);

    manager.set_text(from)?;
    manager.set_animation_progress(1.0);
    manager.on_animation_end();
    manager.set_text(to)?;

    println!("{:?} -> {:?} scrolling {:?}\n", from, to, direction);
    for line in trace_lines(&mut manager, frames) {
        println!("{}", line);
    }

    Ok(())
}

/// One line per frame: progress, each column's draw state, and the text shown
pub fn trace_lines(manager: &mut TickerColumnManager, frames: u32) -> Vec<String> {
    let frames = frames.max(1);
    let mut lines = Vec::with_capacity(frames as usize + 1);

    for frame in 0..=frames {
        let progress = frame as f32 / frames as f32;
        manager.set_animation_progress(progress);

        let columns: Vec<String> = manager
            .columns()
            .iter()
            .map(|column| {
                column
                    .draw_state()
                    .iter()
                    .filter(|placed| !placed.glyph.is_empty())
                    .map(|placed| format!("{}{:+.2}", placed.glyph, placed.offset))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        lines.push(format!(
            "{:>5.2} | {} | {}",
            progress,
            columns.join(" | "),
            to_display_string(&manager.current_text())
        ));
    }
    manager.on_animation_end();

    lines
}
