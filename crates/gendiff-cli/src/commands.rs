use anyhow::Context;
use tracing::debug;

use crate::cli::Cli;

/// Compare the two files named on the command line and return the rendered
/// diff.
pub fn run_command(cli: &Cli) -> anyhow::Result<String> {
    debug!(file1 = %cli.file1.display(), file2 = %cli.file2.display(), format = %cli.format, "comparing");
    gendiff_sdk::gen_diff(&cli.file1, &cli.file2, &cli.format).with_context(|| {
        format!(
            "cannot compare {} and {}",
            cli.file1.display(),
            cli.file2.display()
        )
    })
}
