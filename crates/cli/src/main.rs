use clap::Parser;
use onepay_cli::{cli::Cli, commands, context::CommandContext, logging};
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let ctx = CommandContext::new(cli.api_base, cli.session_file);

    if let Err(err) = commands::dispatch(cli.command, &ctx).await {
        error!(target = "onepay", error = %err, "command failed");
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }
}
