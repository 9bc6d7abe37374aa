use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphquery_parser::token::GraphQLTokenValue;
use graphquery_parser::token_source::StrGraphQLTokenSource;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct LexCmd {
    #[arg(
        help="Also print insignificant tokens (whitespace, comments, \
             commas, and line terminators).",
        long,
    )]
    all: bool,

    #[arg(
        help="Path to the GraphQL file to tokenize.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for LexCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match tokio::fs::read_to_string(&self.file_path).await {
            Ok(source) => source,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to read {}: {e}",
                output_utils::RED_X,
                self.file_path.display(),
            )),
        };

        let mut out = String::new();
        let mut num_tokens = 0;
        for token in StrGraphQLTokenSource::new(&source) {
            let token = match token {
                Ok(token) => token,
                Err(e) => {
                    log::debug!("Lexing stopped after {num_tokens} tokens.");
                    return CommandResult::stderr(format_args!(
                        "{out}{} {}: {}",
                        output_utils::RED_X,
                        self.file_path.display(),
                        e.format_detailed(Some(&source)),
                    ));
                },
            };
            num_tokens += 1;
            if !self.all && token.kind.is_insignificant() {
                continue;
            }
            let _ = write!(
                out,
                "{}..{} {}",
                token.span.start_inclusive,
                token.span.end_exclusive,
                token.kind.name(),
            );
            if token.value != GraphQLTokenValue::None {
                let _ = write!(out, " {}", token.value);
            }
            out.push('\n');
        }

        log::debug!("Lexed {num_tokens} tokens from {:#?}.", self.file_path);
        CommandResult::stdout(format_args!("{}", out.trim_end()))
    }
}
