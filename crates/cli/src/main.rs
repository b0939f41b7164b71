use stockroom_cli::{Config, demo};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = Config::from_env();
    tracing::info!(
        "using data file {} (low stock below {})",
        config.data_file.display(),
        config.low_stock_threshold
    );

    demo::run(&config, std::io::stdout().lock())?;
    Ok(())
}
