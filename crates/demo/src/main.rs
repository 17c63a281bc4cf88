use solidshop_core::ConsoleReporter;
use solidshop_observability::ObservabilityConfig;

fn main() -> anyhow::Result<()> {
    let config = ObservabilityConfig::from_env()?;
    solidshop_observability::init(&config);

    solidshop_demo::run(ConsoleReporter::shared());

    Ok(())
}
