//! Slide printing commands.

use anyhow::Context;
use console::style;

use crate::content::{render, slide};
use crate::models::{SlideIndex, SLIDE_COUNT};
use crate::utils::truncate;

/// Width slide titles are cut to in the listing.
const TITLE_WIDTH: usize = 48;

/// Print one slide as plain text.
pub fn cmd_slide(number: u8) -> anyhow::Result<()> {
    let index = SlideIndex::new(number)
        .with_context(|| format!("No slide {}; slides run from 1 to {}", number, SLIDE_COUNT))?;
    let s = slide(index);

    println!(
        "{}  {}",
        style(format!("[{}/{}]", index.get(), SLIDE_COUNT)).dim(),
        style(s.title).bold()
    );
    println!();
    print!("{}", render::to_text(s.blocks));
    Ok(())
}

/// Print the numbered list of slide titles.
pub fn cmd_slides_list() {
    for index in SlideIndex::all() {
        println!(
            "{:>3}  {}",
            style(index.get()).cyan(),
            truncate(slide(index).title, TITLE_WIDTH)
        );
    }
}
