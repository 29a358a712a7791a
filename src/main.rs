use clap::{Parser, Subcommand};
use docutree::{config, convert, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docutree")]
#[command(version)]
#[command(about = "Convert a source tree into a Docusaurus documentation tree")]
#[command(long_about = "\
Convert a source tree into a Docusaurus documentation tree

Every source file becomes a Markdown page embedding its content in a fenced
code block; every directory gets a _category_.json sidebar descriptor; a
structure.md page at the destination root lists the whole hierarchy.

Naming:

  main.c      → main.c.md            (extension kept, so main.c and main.h
                                      never collide on main.md)
  Makefile    → Makefile.md
  .gitignore  → dotfiles-gitignore.md

Children are visited in natural order (file2 before file10); each directory
numbers its file children 1..N for sidebar_position, and its _category_.json
carries position = nesting level × 100.

Run 'docutree gen-config' to print a documented docutree.toml.")]
struct Cli {
    /// Source directory to convert
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Destination directory for the generated docs
    #[arg(long, default_value = "docs", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert the source tree into the documentation tree
    Generate,
    /// Validate the source tree and config without writing anything
    Check,
    /// Print a stock docutree.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate => {
            convert::check_source(&cli.source)?;
            let config = config::load_config(&cli.source)?;
            let (files, _) = convert::count_entries(&cli.source);
            println!("Converting {} files from {}", files, cli.source.display());

            let converter = convert::Converter::new(&cli.source, &cli.output, config);
            let entries = converter.generate()?;
            output::print_generate_report(&entries);
            println!("Docs generated at {}", cli.output.display());
        }
        Command::Check => {
            convert::check_source(&cli.source)?;
            config::load_config(&cli.source)?;
            let (files, dirs) = convert::count_entries(&cli.source);
            output::print_check_report(files, dirs);
            println!("Source is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
