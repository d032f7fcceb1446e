//! Examples command implementation

use anyhow::Result;
use console::style;

use crate::domain::EXAMPLE_PROBLEMS;

pub fn run() -> Result<()> {
    println!("Sample problems (use with `add --example N`):");
    for (idx, example) in EXAMPLE_PROBLEMS.iter().enumerate() {
        println!("{}. {} [{}]", idx + 1, style(example.title).bold(), example.area.label());
        println!("   {}", example.description);
    }
    Ok(())
}
