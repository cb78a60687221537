use catalog_cli::DemoConfig;

fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = DemoConfig::from_env()?;
    let product = config.build_product();

    tracing::info!(maker = product.maker(), price = product.price, "product built");

    Ok(())
}
