use clap::CommandFactory;
use crate::render_cmd::RenderCmd;
use std::process::ExitCode;

#[derive(clap::Parser, Debug)]
#[command(name = "graphql", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<CliCommand>,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Run the chosen subcommand, or print help when none was given.
    pub(crate) async fn run(self) -> ExitCode {
        match self.cmd {
            Some(CliCommand::Render(cmd)) => cmd.run().await.report(),
            None => match Self::command().print_help() {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{e}");
                    ExitCode::FAILURE
                },
            },
        }
    }
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CliCommand {
    /// Render request description files to GraphQL text or JSON request
    /// payloads.
    Render(Box<RenderCmd>),
}
