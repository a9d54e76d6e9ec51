use clap::Parser;
use img_minify::adapter::{Minifier, Options};
use img_minify::batch::run_batch;
use img_minify::cli::Args;
use img_minify::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::set_quiet_mode(args.quiet);

    // Verbosity is resolved here, once, and handed to the adapter.
    let options = Options {
        verbose: args.verbose,
    };

    let minifier = match args.use_plugins {
        Some(kinds) => {
            let plugins = kinds.into_iter().map(|kind| kind.build()).collect();
            Minifier::with_plugins(plugins, options)
        }
        None => Minifier::with_options(options),
    };

    let concurrency = args.concurrency.unwrap_or_else(num_cpus::get);
    let failed = run_batch(
        &args.input,
        &args.output,
        minifier,
        concurrency,
        args.recursive,
    )
    .await?;

    if failed > 0 {
        anyhow::bail!("{} file(s) failed to minify", failed);
    }

    Ok(())
}
