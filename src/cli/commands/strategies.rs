//! List available strategies.

use anyhow::Result;

use pairbench_strategies::StrategyRegistry;

pub fn run() -> Result<()> {
    let registry = StrategyRegistry::new();

    println!("Available strategies:\n");
    for info in registry.list() {
        println!("  {} - {}", info.id, info.name);
        println!("      {}", info.description);
        println!(
            "      defaults: {}",
            serde_json::to_string(&info.default_config)?
        );
        println!();
    }
    Ok(())
}
