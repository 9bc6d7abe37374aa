use crate::commands::input_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphquery_parser::ast;
use graphquery_parser::GraphQLParser;
use graphquery_parser::GraphQLParserOptions;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// One line per file with operation and fragment counts.
    #[default]
    Summary,

    /// The full syntax tree of every file.
    Debug,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        default_value_t=GraphQLParserOptions::default().max_recursion_depth,
        help="Maximum nesting depth of selection sets, list and object \
             values, and list types.",
        long,
    )]
    max_depth: usize,

    #[arg(
        help="Treat `{}` selection sets as syntax errors.",
        long,
    )]
    reject_empty_selection_sets: bool,

    #[arg(
        default_value_t,
        help="How to report successfully parsed files.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be parsed.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What happened to one input file.
struct ParseOutcome {
    path: PathBuf,
    result: Result<ast::Document, String>,
}

impl ParseCmd {
    fn parser_options(&self) -> GraphQLParserOptions {
        GraphQLParserOptions {
            max_recursion_depth: self.max_depth,
            reject_empty_selection_sets: self.reject_empty_selection_sets,
        }
    }

    fn write_success(&self, out: &mut String, path: &Path, document: &ast::Document) {
        match self.format {
            OutputFormat::Summary => {
                let _ = writeln!(
                    out,
                    "{} {}: {} operations, {} fragments",
                    output_utils::GREEN_CHECK,
                    path.display(),
                    document.operations().count(),
                    document.fragments().count(),
                );
            },
            OutputFormat::Debug => {
                let _ = writeln!(out, "{} {}:\n{document:#?}", output_utils::GREEN_CHECK, path.display());
            },
        }
    }
}

fn parse_file(path: PathBuf, options: GraphQLParserOptions) -> ParseOutcome {
    let result = match std::fs::read_to_string(&path) {
        Ok(source) => GraphQLParser::new(&source)
            .with_options(options)
            .parse()
            .map_err(|e| e.format_detailed(Some(&source))),
        Err(e) => Err(format!("failed to read file: {e}")),
    };
    ParseOutcome { path, result }
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let exts = input_files::normalize_exts(&self.graphql_file_exts);
        let input = input_files::collect(&self.file_or_dir_paths, &exts);
        if !input.errors.is_empty() {
            let errors = input.errors.iter()
                .map(|e| format!("  * {e:#}"))
                .collect::<Vec<_>>()
                .join("\n");
            return CommandResult::stderr(format_args!(
                "{} Failed to scan input paths:\n{errors}",
                output_utils::RED_X,
            ));
        }

        let options = self.parser_options();
        let tasks = input.paths.into_iter()
            .map(|path| tokio::task::spawn_blocking(move || parse_file(path, options)))
            .collect::<Vec<_>>();

        let mut outcomes = Vec::with_capacity(tasks.len());
        for task in tasks {
            match task.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Parse task failed: {e}",
                    output_utils::RED_X,
                )),
            }
        }

        let mut out = String::new();
        let mut num_failed = 0;
        for outcome in &outcomes {
            match &outcome.result {
                Ok(document) => self.write_success(&mut out, &outcome.path, document),
                Err(diagnostic) => {
                    num_failed += 1;
                    let _ = writeln!(
                        out,
                        "{} {}:\n{diagnostic}",
                        output_utils::RED_X,
                        outcome.path.display(),
                    );
                },
            }
        }

        log::debug!(
            "Parsed {} files ({num_failed} failed, {} skipped).",
            outcomes.len(),
            input.num_skipped,
        );

        if num_failed == 0 {
            CommandResult::stdout(format_args!(
                "{out}{} Parsed {} files successfully ({} non-GraphQL files skipped).",
                output_utils::GREEN_CHECK,
                outcomes.len(),
                input.num_skipped,
            ))
        } else {
            CommandResult::failed_with_stdout(format_args!(
                "{out}{} {num_failed} of {} files failed to parse.",
                output_utils::RED_X,
                outcomes.len(),
            ))
        }
    }
}
