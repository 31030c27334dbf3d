use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr};

use formdeck::{ExportOptions, FormDeck, FormRegistry, UiOptions, read_definition_file};

#[derive(Debug, Parser)]
#[command(
    name = "formdeck",
    version,
    about = "Build, save, and fill dynamic forms in the terminal"
)]
struct Cli {
    /// Definition files to preload into the session registry. Accepts
    /// multiple values per flag use.
    #[arg(short = 'l', long = "load", value_name = "FILE", num_args = 1.., action = ArgAction::Append)]
    load: Vec<PathBuf>,

    /// Directory where saved forms are written
    #[arg(short = 'd', long = "export-dir", value_name = "DIR", default_value = ".")]
    export_dir: PathBuf,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Print the session summary as JSON instead of plain text
    #[arg(long = "json-summary")]
    json_summary: bool,

    /// Skip the session summary printed on exit
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut registry = FormRegistry::new();
    for path in &cli.load {
        let definition = read_definition_file(path)
            .wrap_err_with(|| format!("failed to load {}", path.display()))?;
        registry.insert(definition);
    }

    let export = ExportOptions::new(&cli.export_dir).with_pretty(!cli.no_pretty);
    let options = UiOptions::default().with_export(export);

    let registry = FormDeck::new()
        .with_registry(registry)
        .with_options(options)
        .run()
        .map_err(Report::msg)?;

    if !cli.quiet {
        print_summary(&registry, cli.json_summary)?;
    }
    Ok(())
}

fn print_summary(registry: &FormRegistry, as_json: bool) -> Result<()> {
    if as_json {
        let summary: Vec<serde_json::Value> = registry
            .iter()
            .map(|(title, definition)| {
                serde_json::json!({
                    "title": title,
                    "fields": definition.fields.len(),
                    "submissions": definition.submissions.len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if registry.is_empty() {
        println!("no forms in session");
        return Ok(());
    }
    for (title, definition) in registry.iter() {
        println!(
            "{title}: {} field(s), {} submission(s)",
            definition.fields.len(),
            definition.submissions.len()
        );
    }
    Ok(())
}
