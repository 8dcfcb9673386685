//! Rewrite command implementation

use std::io::{self, BufWriter};

use colored::*;
use tracing::info;

use crate::cli::args::RewriteArgs;
use crate::cli::input::parser_for;
use crate::config::Config;
use crate::{DfqWriter, Result};

/// Parse a DFQ file and write it back in canonical record order
///
/// Output goes to `--output` when given, otherwise to stdout.
pub fn run_rewrite(args: &RewriteArgs, config: &Config) -> Result<()> {
    let mut result = parser_for(config).parse_file(&args.path, &config.input.encoding)?;
    let writer = DfqWriter::new();

    match &args.output {
        Some(output) => {
            writer.write_file(&mut result.model, output)?;
            info!("Wrote {}", output.display());
            eprintln!(
                "{} {} -> {} ({} characteristics, {} values)",
                "Rewrote".green(),
                args.path.display(),
                output.display(),
                result.model.characteristic_count(),
                result.model.value_count()
            );
        }
        None => {
            let stdout = io::stdout();
            writer.write_to(&mut result.model, BufWriter::new(stdout.lock()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_rewrite_to_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.dfq");
        let output = dir.path().join("out.dfq");
        fs::write(&input, "K1001/1 P1\nK2001/1 C1\nK0001/1 1.5\n").unwrap();

        let args = RewriteArgs {
            path: input,
            output: Some(output.clone()),
        };
        run_rewrite(&args, &Config::default()).unwrap();

        let written = fs::read_to_string(output).unwrap();
        assert_eq!(
            written,
            "K0100 1\r\nK1001/1 P1\r\nK2001/1 C1\r\nK0001/1 1.5\r\n"
        );
    }
}
