pub(crate) mod input_files;
mod lex;
mod parse;

use crate::Cli;
use crate::CommandResult;
use lex::LexCmd;
use parse::ParseCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphquery")]
pub(crate) enum CommandEnum {
    /// Print the token stream of a single GraphQL file.
    Lex(Box<LexCmd>),

    /// Parse GraphQL executable documents and report any syntax errors.
    Parse(Box<ParseCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Lex(cmd) => cmd.run(cli).await,
            Self::Parse(cmd) => cmd.run(cli).await,
        }
    }
}
