//! modulegen's main application entry point.
//! Handles command-line argument parsing and reports the outcome of the run.

use modulegen::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generator::{generate, next_steps},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Generates the example and prints the manual steps that follow.
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let example = args.example();
    let config = args.generator_config();

    for path in generate(&example, &config, &engine)? {
        log::info!("Generated: '{}'", path.display());
    }

    for step in next_steps(&example) {
        println!("{step}");
    }
    Ok(())
}
