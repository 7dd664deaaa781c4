mod cli;
mod logging;
mod render_cmd;
mod request_file;

use clap::Parser;
pub(crate) use cli::Cli;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.run().await
}

#[cfg(test)]
mod tests;
