use crate::demo::{run_compare, CompareArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pairwise::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Pairwise",
    about = "Compare two profiles and render their narrative, or run the HTTP service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compare two profiles and print the narrative
    Compare(CompareArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Compare(args) => run_compare(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["pairwise"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn compare_accepts_inline_scores() {
        let cli = Cli::try_parse_from([
            "pairwise",
            "compare",
            "--a-name",
            "Ana",
            "--a",
            "engagement=1,expression=2",
            "--b-name",
            "Ben",
            "--b",
            "engagement=3",
            "--share",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Compare(args)) => {
                assert_eq!(args.a_name, "Ana");
                assert!(args.share);
                assert!(args.a.is_some());
                assert!(args.csv.is_none());
            }
            other => panic!("expected compare, got {other:?}"),
        }
    }

    #[test]
    fn compare_rejects_csv_with_inline_scores() {
        let result = Cli::try_parse_from([
            "pairwise",
            "compare",
            "--csv",
            "sheet.csv",
            "--a",
            "engagement=1",
        ]);
        assert!(result.is_err());
    }
}
