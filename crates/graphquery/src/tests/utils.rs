use crate::Cli;
use crate::CommandResult;
use clap::Parser;
use std::path::Path;
use std::path::PathBuf;

/// Parses `args` as a command line (without the binary name) and runs the
/// resulting subcommand.
pub(super) async fn run_cli(args: &[&str]) -> CommandResult {
    let argv = std::iter::once("graphquery").chain(args.iter().copied());
    let mut cli = Cli::try_parse_from(argv).unwrap();
    let command = cli.cmd.take().expect("a subcommand");
    command.run(cli).await
}

pub(super) fn write_file(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}

pub(super) fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

pub(super) fn stdout(result: &CommandResult) -> &str {
    result.stdout.as_deref().unwrap_or_else(|| panic!("no stdout: {result:?}"))
}

pub(super) fn stderr(result: &CommandResult) -> &str {
    result.stderr.as_deref().unwrap_or_else(|| panic!("no stderr: {result:?}"))
}
