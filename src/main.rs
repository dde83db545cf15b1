use clap::Parser as _;
use tracing_subscriber::filter::{LevelFilter, targets::Targets};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};
use victron_gx_tools::commands;

#[derive(clap::Parser)]
#[clap(version, about, author)]
enum Commands {
    Registers(commands::registers::Args),
    Scan(commands::scan::Args),
    Poll(commands::poll::Args),
    Write(commands::write::Args),
}

fn end<E: std::error::Error>(r: Result<(), E>) {
    std::process::exit(match r {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            let mut cause = e.source();
            while let Some(e) = cause {
                eprintln!("  because: {e}");
                cause = e.source();
            }
            1
        }
    });
}

fn main() {
    let default_filter = Targets::new().with_default(LevelFilter::INFO);
    let filter = match std::env::var("VICTRON_GX_LOG") {
        Err(_) => default_filter,
        Ok(description) => description.parse::<Targets>().unwrap_or_else(|e| {
            eprintln!("warning: ignoring VICTRON_GX_LOG: {e}");
            default_filter
        }),
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    match Commands::parse() {
        Commands::Registers(args) => end(commands::registers::run(args)),
        Commands::Scan(args) => end(commands::scan::run(args)),
        Commands::Poll(args) => end(commands::poll::run(args)),
        Commands::Write(args) => end(commands::write::run(args)),
    }
}
