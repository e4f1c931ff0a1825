//! Command-line interface implementation for modulegen.
//! Provides argument parsing and usage reporting using clap.

use clap::{error::ErrorKind, Parser};
use std::path::PathBuf;

use crate::example::Example;
use crate::generator::GeneratorConfig;

/// Exit code for a usage error, the same one clap uses.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Command-line arguments structure for modulegen.
#[derive(Parser, Debug)]
#[command(author, version, about = "modulegen: scaffolds a new example module", long_about = None)]
pub struct Args {
    /// Name of the example. Only alphabetical characters are allowed.
    #[arg(long)]
    pub name: String,

    /// Title of the example name, used to override the name in the case of
    /// mixed casing (Mongodb -> MongoDB). Only alphabetical characters are allowed.
    #[arg(long)]
    pub title: Option<String>,

    /// Fully-qualified name of the Docker image to be used by the example
    #[arg(long)]
    pub image: String,

    /// Root directory of the project receiving the example
    #[arg(long, value_name = "DIR", default_value = "..")]
    pub root_dir: PathBuf,

    /// Directory holding the templates [default: <ROOT_DIR>/examples/_template]
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The example described by the arguments.
    pub fn example(&self) -> Example {
        Example::new(self.name.clone(), self.title.clone(), self.image.clone())
    }

    /// The run configuration described by the arguments.
    pub fn generator_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::new(&self.root_dir);
        match &self.template_dir {
            Some(template_dir) => config.with_template_dir(template_dir),
            None => config,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 2 and the error, usage included, on stderr if a required flag is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("{}", e.render());
                std::process::exit(USAGE_EXIT_CODE);
            } else {
                e.exit();
            }
        }
    }
}
