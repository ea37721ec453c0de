//! Print the OpenAPI document as JSON or YAML.

use clap::{Parser, ValueEnum};
use nudilog::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(about = "Write the dive log OpenAPI document to stdout")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let rendered = match cli.format {
        Format::Json => doc.to_pretty_json()?,
        Format::Yaml => doc.to_yaml()?,
    };
    println!("{rendered}");
    Ok(())
}
