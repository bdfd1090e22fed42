use kiln_config::loader::FileLoader;
use kiln_config::validation::ConfigValidator;
use kiln_config::{ConfigUtils, KilnConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Kiln Configuration Basic Usage Example");
    println!("======================================\n");

    // Demo key only; real projects set WALLET_KEY in the environment or .env
    if std::env::var("WALLET_KEY").is_err() {
        std::env::set_var(
            "WALLET_KEY",
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        );
    }

    // Example 1: The standard project profile
    println!("1. Standard project profile:");
    let config = KilnConfig::standard()?;
    println!("   Solc version: {}", config.solidity.version);
    println!(
        "   Optimizer: enabled={}, runs={}",
        config.solidity.settings.optimizer.enabled, config.solidity.settings.optimizer.runs
    );
    println!("   Default network: {}", config.default_network);
    for name in config.networks.keys() {
        println!("   Network target: {}", name);
    }

    // Example 2: Save and reload from file
    println!("\n2. Saving and reloading from file:");
    let output_dir = "./examples_output";
    ConfigUtils::ensure_config_directory(output_dir)?;

    let config_path = format!("{}/kiln.toml", output_dir);
    FileLoader::save(&config, &config_path).await?;
    println!("   Saved configuration to: {}", config_path);

    let loaded = FileLoader::load(&config_path).await?;
    println!("   Reloaded default network: {}", loaded.default_network);
    assert_eq!(config, loaded);

    // Example 3: Validation
    println!("\n3. Configuration validation:");
    match ConfigValidator::validate_comprehensive(&config) {
        Ok(()) => println!("   Configuration is valid"),
        Err(e) => println!("   Configuration error: {}", e),
    }

    // Example 4: Configuration report
    println!("\n4. Configuration report:");
    println!("{}", ConfigValidator::generate_report(&config));

    // Example 5: Template for new projects
    println!("5. Project template:");
    println!("{}", ConfigUtils::generate_template());

    Ok(())
}
