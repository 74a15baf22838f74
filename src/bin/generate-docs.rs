//! Writes markdown reference pages for the configuration schemas.
use clap::{Parser, Subcommand};
use voidance_config::{docs::DocsGenerator, tracing_config};

#[derive(Parser)]
#[command(name = "generate-docs")]
#[command(about = "Generate reference documentation for Voidance configuration schemas")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Document every registered schema
    All {
        #[arg(short, long, default_value = "docs/config/schemas")]
        output: String,
    },
    /// Document a single schema
    Schema {
        name: String,
        #[arg(short, long, default_value = "docs/config/schemas")]
        output: String,
    },
    /// List the registered schema names
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_config::init_cli_mode(false)?;
    let cli = Cli::parse();

    match cli.command {
        Commands::All { output } => {
            let generator = DocsGenerator::new().with_output_dir(output);
            let written = generator.generate_all()?;
            for path in &written {
                println!("Generated {}", path.display());
            }
            println!("Generated documentation for {} schemas", written.len());
        }
        Commands::Schema { name, output } => {
            let generator = DocsGenerator::new().with_output_dir(output);
            let path = generator.generate_schema_by_name(&name)?;
            println!("Generated {}", path.display());
        }
        Commands::List => {
            let generator = DocsGenerator::new();
            println!("Available schemas:");
            for name in generator.list_schemas() {
                println!("  - {name}");
            }
        }
    }

    Ok(())
}
