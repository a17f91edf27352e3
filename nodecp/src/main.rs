use anyhow::Result;
use clap::Parser;
use nodecore::{NodeRegistry, YieldAggregator, aggregate::normalize_yields, resolve_lodging};
use nodedata::{Dataset, DatasetPaths};

mod args;
mod report;

fn main() -> Result<()> {
    let cli = args::Cli::parse();

    let level = std::str::FromStr::from_str(&cli.log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let paths = DatasetPaths::in_dir(&cli.data_dir);
    let dataset = Dataset::load(&paths)?;
    let Dataset {
        nodes,
        connections,
        lodging,
    } = dataset;

    let resolved_lodging = resolve_lodging(&lodging);
    let registry = NodeRegistry::build(nodes, &connections, &resolved_lodging);

    let queries = normalize_yields(&cli.yields);
    log::info!("Resolving {} yield queries", queries.len());

    let outcome = YieldAggregator::new(&registry).resolve(&queries);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", report::console_report(&outcome));
    }

    if let Some(path) = &cli.html {
        report::write_html(&outcome, path)?;
        log::info!("HTML report written to {}", path.display());
    }

    Ok(())
}
