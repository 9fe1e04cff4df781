use colored::Colorize;

use stargaze::{Registry, Result};

pub fn execute() -> Result<()> {
    let registry = Registry::with_defaults();
    println!("{}", "Available outputs:".bold());
    for name in registry.names() {
        println!("  {name}");
    }
    Ok(())
}
