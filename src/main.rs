use repoident::config::Config;
use repoident::error::AppResult;
use repoident::RepositoryIntrospector;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let path = env::args().nth(1).unwrap_or_else(|| ".".to_string());

    let config = Config::load_or_default()?;
    let introspector = RepositoryIntrospector::with_providers(&path, config.provider_map());

    let name = introspector.qualified_name()?;
    let revision = introspector.current_revision()?;
    let parents = introspector.current_parents()?;

    println!("name: {}", name);
    println!("revision: {}", revision);
    println!(
        "parents: {}",
        parents
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(())
}
