use anyhow::Result;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

use collection_catalog::{
    default_elements, default_galaxies, elements_below, even_sequence, load_elements, Catalog,
    DemoConfig, LookupOutcome, Sequence,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = DemoConfig::resolve(&args)?;

    init_tracing(&config);
    info!(version = collection_catalog::VERSION, "starting collection demo");

    run_salmons();
    run_numbers();
    run_even_sequence(&config);
    run_galaxies();

    let elements = match &config.elements_file {
        Some(path) => load_elements(path)?,
        None => default_elements(),
    };
    let catalog = Catalog::from_elements(elements)?;

    run_catalog_iteration(&catalog);
    run_ranked_query(&catalog, config.rank_threshold);
    run_lookups(&catalog, &config.lookup_codes);

    Ok(())
}

fn init_tracing(config: &DemoConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_line<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) {
    let line: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    println!("{}\n", line.join(" "));
}

fn run_salmons() {
    println!("🐟 Salmons");
    let mut salmons: Sequence<String> = ["chinook", "coho", "pink", "sockeye"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    print_line(&salmons);

    salmons.remove_by_value(&"coho".to_string());

    // Walk by position
    let positional: Vec<&String> = (0..salmons.len()).filter_map(|i| salmons.get(i)).collect();
    print_line(positional);

    salmons.append("coho".to_string());
    print_line(&salmons);
}

fn run_numbers() {
    println!("🔢 Numbers");
    let mut numbers: Sequence<i64> = (0..10).collect();

    numbers.for_each(|n| print!("{} ", n));
    println!("\n");

    let removed = numbers.remove_where(|n| n % 2 == 1);
    info!(removed, "removed odd numbers");

    numbers.for_each(|n| print!("{} ", n));
    println!("\n");
}

fn run_even_sequence(config: &DemoConfig) {
    println!(
        "➗ Even numbers in [{}, {}]",
        config.generator_first, config.generator_last
    );
    print_line(&even_sequence(config.generator_first, config.generator_last));
}

fn run_galaxies() {
    println!("🌌 Galaxies");
    let galaxies: Sequence<_> = default_galaxies().into();
    galaxies.for_each(|galaxy| println!("{}", galaxy));
    println!();
}

fn run_catalog_iteration(catalog: &Catalog) {
    println!("📚 Catalog ({} elements)", catalog.len());
    for element in catalog {
        println!("key: {}", element.code());
        println!("values: {}", element);
    }
    println!();
}

fn run_ranked_query(catalog: &Catalog, threshold: i64) {
    println!("🔎 Elements with rank < {}, by name", threshold);
    for element in &elements_below(catalog.records(), threshold) {
        println!("{} {}", element.name(), element.rank());
    }
    println!();
}

fn run_lookups(catalog: &Catalog, codes: &[String]) {
    println!("🔍 Lookups");
    for outcome in catalog.lookup_all(codes.iter().map(String::as_str)) {
        match outcome {
            LookupOutcome::Found(element) => println!("found: {}", element.name()),
            LookupOutcome::NotFound(code) => println!("{} not found", code),
        }
    }
    println!();
}
