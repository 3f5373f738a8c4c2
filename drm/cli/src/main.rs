use clap::Parser;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug surfaces the plugins' per-operation logs.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    cli::Cli::parse().run()
}
