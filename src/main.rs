use clap::{Parser, Subcommand};
use std::path::PathBuf;
use yearpage::{config, generate, output, scan};

#[derive(Parser)]
#[command(name = "yearpage")]
#[command(about = "Build a tabbed yearly overview page from Markdown folders")]
#[command(long_about = "\
Build a tabbed yearly overview page from Markdown folders

Every digit-only folder is a year and becomes a tab, latest first. Every
subfolder with an index.md becomes a card in that tab.

Content structure:

  docs/
  ├── config.toml                  # Site config (optional)
  ├── 2025/
  │   ├── index.md                 # '# Tab name' + '- [Label](folder)' order list
  │   ├── betaTalk/index.md        # '# Card title' + Markdown body
  │   ├── alphaTalk/index.md
  │   └── .drafts/                 # Dot-prefixed = ignored
  └── 2024/
      └── kernel/index.md          # No year index: tab '2024', cards A→Z

Run 'yearpage gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory containing the year folders
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Path of the generated HTML page
    #[arg(long, default_value = "index.html", global = true)]
    output: PathBuf,

    /// Also print informational diagnostics
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory and write the page
    Build,
    /// Validate the content directory without writing anything
    Check,
    /// Print the scanned manifest as JSON
    Manifest,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Scanning {}", cli.source.display());
            let scanned = scan::scan(&cli.source)?;
            output::print_diagnostics(&scanned.diagnostics, cli.verbose);

            println!("==> Generating {}", cli.output.display());
            generate::generate(&scanned.manifest, &site_config, &cli.output)?;
            output::print_build_summary(&scanned.manifest, &cli.output);
        }
        Command::Check => {
            config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let scanned = scan::scan(&cli.source)?;
            output::print_scan_output(&scanned.manifest);
            output::print_diagnostics(&scanned.diagnostics, cli.verbose);
            match scanned.diagnostics.warning_count() {
                0 => println!("==> Content is valid"),
                n => println!("==> Content is usable ({n} warnings)"),
            }
        }
        Command::Manifest => {
            let scanned = scan::scan(&cli.source)?;
            output::print_diagnostics(&scanned.diagnostics, false);
            println!("{}", serde_json::to_string_pretty(&scanned.manifest)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
