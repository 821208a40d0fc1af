mod cli;

use clap::Parser;
use cli::{Args, CliError, Command, ConfigAction, Context};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Route `log` records to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    // Writing the default file must work even when the current one is broken
    if let Command::Config {
        action: ConfigAction::Init,
    } = &args.command
    {
        return cli::init_config(args.config.as_deref());
    }

    let ctx = Context::from_args(&args)?;
    log::debug!("Resolved settings: {:?}", ctx.settings);

    match args.command {
        Command::Analyze {
            input,
            width,
            height,
            output,
        } => cli::analyze(&ctx, &input, width, height, output.as_deref()),
        Command::Classify { r, g, b } => {
            cli::classify(&ctx, r, g, b);
            Ok(())
        }
        Command::Stream { width, height } => cli::stream(&ctx, width, height),
        Command::Sweep { steps, frame_size } => cli::sweep(&ctx, steps, frame_size),
        Command::Names => {
            cli::list_names(&ctx);
            Ok(())
        }
        Command::Config { action } => match action {
            ConfigAction::Show => {
                cli::show_config(&ctx);
                Ok(())
            }
            ConfigAction::Init => cli::init_config(args.config.as_deref()),
        },
    }
}
