use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlfront::Source;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Path to the GraphQL file to tokenize.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let body = match std::fs::read_to_string(&self.file_path) {
            Ok(body) => body,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to read {}: {e}",
                output_utils::RED_X,
                self.file_path.display(),
            )),
        };
        let source = Source::new(self.file_path.display().to_string(), body);

        let tokens = match gqlfront::tokenize(&source) {
            Ok(tokens) => tokens,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {}",
                output_utils::RED_X,
                e.format_detailed(),
            )),
        };
        log::debug!("Lexed {} tokens.", tokens.len());

        let mut out = String::new();
        for token in &tokens {
            // Writing into a `String` cannot fail.
            let _ = writeln!(
                out,
                "{:>5}:{:<4} {:>6}..{:<6} {}",
                token.line,
                token.column,
                token.start,
                token.end,
                token.description(),
            );
        }
        CommandResult::stdout(format_args!("{}", out.trim_end()))
    }
}
