//! Demonstration of the blasting engine: reference explosives and a bench blast.

use blasting_engine::{demonstration_lines, logging};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    for line in demonstration_lines()? {
        println!("{line}");
    }

    Ok(())
}
