use aqdef::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("dfq - Q-DAS AQDEF Quality Data Tool");
    println!("===================================");
    println!();
    println!("Read, inspect and rewrite AQDEF (DFQ) files with parts, characteristics,");
    println!("measured values, groups and the characteristic hierarchy.");
    println!();
    println!("USAGE:");
    println!("    dfq <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse DFQ files and print a summary of their content");
    println!("    rewrite     Parse a DFQ file and write it back as canonical DFQ");
    println!("    keys        List the K-keys known to the registry");
    println!("    catalog     List catalogs or the fields of one catalog");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>      Configuration file (TOML)");
    println!("    -e, --encoding <LABEL>   Encoding of input files (default: utf-8)");
    println!("    -v, --verbose            Increase logging verbosity");
    println!("    -q, --quiet              Only log errors");
    println!("    -h, --help               Show help information");
    println!("    -V, --version            Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize a file exported in a Central European code page:");
    println!("    dfq parse measurements.dfq --encoding windows-1250");
    println!();
    println!("    # Summarize every DFQ file below a directory as JSON:");
    println!("    dfq parse ./exports --format json");
    println!();
    println!("    # Rewrite a file in canonical record order:");
    println!("    dfq rewrite input.dfq -o output.dfq");
    println!();
    println!("    # List characteristic K-keys and the fields of the machine catalog:");
    println!("    dfq keys --level characteristic");
    println!("    dfq catalog machine");
    println!();
    println!("For detailed help on any command, use:");
    println!("    dfq <COMMAND> --help");
}
