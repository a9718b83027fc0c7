mod check;
mod tokens;
#[cfg(test)]
mod tests;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use tokens::TokensCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlfront")]
pub(crate) enum CommandEnum {
    /// Parse GraphQL files and report any lexical or syntax errors.
    Check(Box<CheckCmd>),

    /// Print the token chain of a GraphQL file.
    Tokens(Box<TokensCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
        }
    }
}
