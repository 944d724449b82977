use clap::Parser;
use std::path::PathBuf;
use yarrrml_fed_mapping::ComparatorConfig;

#[derive(Parser)]
#[command(
    name = "yfed",
    about = "Find federated join candidates for a pair of YARRRML mappings",
    version
)]
pub struct Cli {
    /// First YARRRML mapping file
    pub mapping1: PathBuf,

    /// Second YARRRML mapping file
    pub mapping2: PathBuf,

    /// Also derive candidate join patterns
    #[arg(long)]
    pub joins: bool,

    /// Emit the result as JSON instead of a styled report
    #[arg(long)]
    pub json: bool,

    /// Class IRI to ignore in addition to the defaults (repeatable)
    #[arg(long = "ignore-class", value_name = "IRI")]
    pub ignore_classes: Vec<String>,

    /// Property IRI to ignore in addition to the defaults (repeatable)
    #[arg(long = "ignore-property", value_name = "IRI")]
    pub ignore_properties: Vec<String>,

    /// Drop the built-in ignore lists
    #[arg(long)]
    pub no_default_ignores: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Ignore-list configuration assembled from the flags
    pub fn comparator_config(&self) -> ComparatorConfig {
        let mut config = if self.no_default_ignores {
            ComparatorConfig::empty()
        } else {
            ComparatorConfig::default()
        };
        config.ignored_classes.extend(self.ignore_classes.iter().cloned());
        config
            .ignored_properties
            .extend(self.ignore_properties.iter().cloned());
        config
    }
}
