mod cli;
mod error;
mod input;
mod output;

use clap::Parser;
use cli::Cli;
use error::exit_with_error;
use yarrrml_fed_mapping::{Comparator, DescriptorBuilder, JoinInferencer};

fn init_tracing(cli: &Cli) {
    // --quiet → no logs; --verbose → info for everything; default → warnings
    // only, so a document declaring multiple sources is still surfaced.
    // RUST_LOG overrides the non-quiet defaults.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> error::CliResult<()> {
    let doc1 = input::load_mapping(&cli.mapping1)?;
    let doc2 = input::load_mapping(&cli.mapping2)?;

    let d1 = DescriptorBuilder::new(&doc1).build()?;
    let d2 = DescriptorBuilder::new(&doc2).build()?;

    let comparator = Comparator::with_config(cli.comparator_config());
    let overlap = comparator.compare(&d1, &d2);

    let joins = cli
        .joins
        .then(|| JoinInferencer::new().derive(&d1, &d2, &overlap));

    if cli.json {
        output::print_json(&overlap, joins.as_ref())?;
    } else {
        output::print_report(&overlap, joins.as_ref());
    }

    Ok(())
}
