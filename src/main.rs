use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;
use travel_streams::config::log_filter;
use travel_streams::reports::{self, uppercase};
use travel_streams::{catalog, consolidation, samples, sequences, Package, ShowcaseConfig, State};

fn load_states(config: &ShowcaseConfig) -> Result<Vec<State>> {
    match &config.states_path {
        Some(path) => catalog::load_states(path)
            .with_context(|| format!("loading states from {}", path.display())),
        None => Ok(samples::sample_states()?),
    }
}

fn load_packages(config: &ShowcaseConfig) -> Result<Vec<Package>> {
    match &config.packages_path {
        Some(path) => catalog::load_packages(path)
            .with_context(|| format!("loading packages from {}", path.display())),
        None => Ok(samples::sample_packages()?),
    }
}

fn print_lines<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) {
    for item in items {
        println!("{}", item);
    }
}

fn run_uppercase() {
    println!("Collection");
    print_lines(uppercase(samples::sample_words()));

    println!("Array");
    let array = ["First", "Second", "Third"];
    print_lines(uppercase(array));

    println!("Iterator");
    print_lines(uppercase(["One", "Two", "Three"].iter()));
}

fn run_state_reports(states: &[State], config: &ShowcaseConfig) -> Result<()> {
    println!("Flattening cities");
    print_lines(reports::flatten_sorted_cities(states));

    println!("Cities by state");
    print_lines(reports::city_names_by_state(states));

    println!("Reducing States Population");
    print_lines(reports::population_by_state(states));

    println!("Max Population by State");
    print_lines(reports::max_population_by_state(states)?);

    if let Some(state) = states.first() {
        println!("Collecting (mutable reduction)");
        println!("{:?}", reports::city_names(state));
        println!(
            "Cities Total Population: {}",
            reports::total_population(state.cities())
        );
    }

    println!("Filtering");
    print_lines(reports::big_cities_by_state(
        states,
        config.big_city_threshold,
    ));

    Ok(())
}

fn run_consolidation(packages: Vec<Package>) -> Result<()> {
    println!("Group Collecting");
    for group in consolidation::group_by_identity(packages.clone()) {
        println!("Key: {}", group.key());
        print_lines(group.members());
    }

    let consolidated = consolidation::consolidate(packages)?;
    println!("Final List");
    print_lines(&consolidated);

    println!("Catalog XML");
    println!("{}", catalog::export_xml(&consolidated, Utc::now())?);
    Ok(())
}

fn run_sequences(config: &ShowcaseConfig) {
    println!("Sorted integers");
    print_lines(sequences::sorted_ints(&[1, 3, 2, 5, 4]));

    println!("Range");
    print_lines(sequences::range(config.range_start, config.range_end));

    println!("Iterate");
    print_lines(sequences::iterate(0, |n| n + 1, config.iterate_limit));
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let config = ShowcaseConfig::from_env().context("loading showcase config")?;
    info!(?config, "starting showcase");

    let states = load_states(&config)?;
    let packages = load_packages(&config)?;

    run_uppercase();
    run_state_reports(&states, &config)?;
    run_consolidation(packages)?;
    run_sequences(&config);

    Ok(())
}
