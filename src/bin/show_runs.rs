use anyhow::Result;
use std::io::{self, Write};
use wordiff::{compare_edits, matching_segment_stats};

fn main() -> Result<()> {
    let a = "insert the original text";
    let b = "insert a revised version of the text";

    let mut stdout = io::stdout().lock();
    for run in compare_edits(a, b) {
        writeln!(stdout, "{}", run)?;
    }

    let a = "insert version 1 of the same text";
    let b = "insert version 2 of the same text";

    match matching_segment_stats(a, b) {
        Some(stats) => writeln!(stdout, "{:#?}", stats)?,
        None => writeln!(stdout, "no overlap")?,
    }

    Ok(())
}
