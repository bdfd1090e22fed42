use kiln_config::loader::EnvLoader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Kiln Configuration Environment Override Example");
    println!("===============================================\n");

    // Demo key only; real projects set WALLET_KEY in the environment or .env
    if std::env::var("WALLET_KEY").is_err() {
        std::env::set_var(
            "WALLET_KEY",
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        );
    }

    // In practice these would be set externally
    std::env::set_var("KILN_DEFAULT_NETWORK", "localhost");
    std::env::set_var("KILN_OPTIMIZER_RUNS", "1000");
    std::env::set_var("KILN_VIA_IR", "false");

    let config = EnvLoader::load_from_env()?;

    println!("Default network from env: {}", config.default_network);
    println!(
        "Optimizer runs from env: {}",
        config.solidity.settings.optimizer.runs
    );
    println!("Via IR from env: {}", config.solidity.settings.via_ir);

    println!("\nKiln environment variables currently set:");
    for (key, value) in EnvLoader::list_kiln_env_vars() {
        println!("   {}={}", key, value);
    }

    Ok(())
}
