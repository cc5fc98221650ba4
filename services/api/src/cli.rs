use crate::demo::{run_catalog_show, run_demo, run_quiz_report, CatalogShowArgs, QuizReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use riasec_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "RIASEC Advisor",
    about = "Run the career-orientation quiz service or score a quiz from the command line",
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
    /// Score a completed questionnaire
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// Inspect the question, major and exam group catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Walk a sample student through the quiz and print the recommendation
    Demo,
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Print the Holland profile, suggested majors and score outlook
    Report(QuizReportArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List questions per type, exam groups and majors
    Show(CatalogShowArgs),
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
        Command::Quiz {
            command: QuizCommand::Report(args),
        } => run_quiz_report(args),
        Command::Catalog {
            command: CatalogCommand::Show(args),
        } => run_catalog_show(args),
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["riasec-advisor-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn quiz_report_splits_exam_groups() {
        let cli = Cli::try_parse_from([
            "riasec-advisor-api",
            "quiz",
            "report",
            "--answers",
            r#"{"1": true}"#,
            "--groups",
            "A00,D01",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Quiz {
                command: QuizCommand::Report(args),
            }) => {
                assert_eq!(args.groups, vec!["A00".to_string(), "D01".to_string()]);
                assert!(args.scores.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
