use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use shapegen::{generate, samples, schema_to_json, validate_value, CodegenConfig, GeneratedFiles};
use shapegen_compiler::error::ShapeError;
use shapegen_compiler::{compile_schema, gen_api::API_FILE, gen_form::FORM_FILE, gen_zod::SCHEMA_FILE};

#[derive(Parser)]
#[command(name = "shapegen")]
#[command(about = "Generate zod schemas, React forms and REST clients from a TypeScript interface", long_about = None)]
struct Cli {
    /// TOML file with codegen settings (api_prefix, schema_module, submit_label)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Artifact {
    Schema,
    Form,
    Api,
}

impl Artifact {
    fn file_name(self) -> &'static str {
        match self {
            Artifact::Schema => SCHEMA_FILE,
            Artifact::Form   => FORM_FILE,
            Artifact::Api    => API_FILE,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the first interface/type block and print it as JSON
    Parse {
        /// Input `.ts` file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate `schema.ts`, `Form.tsx` and `api.ts`
    Generate {
        /// Input `.ts` file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only emit one artifact
        #[arg(long, value_enum)]
        only: Option<Artifact>,
    },

    /// Validate a JSON document against the parsed interface
    Check {
        /// Input `.ts` file
        #[arg(short, long)]
        input: PathBuf,

        /// JSON document to validate
        #[arg(short, long)]
        data: PathBuf,
    },

    /// List the bundled sample interfaces, or print one of them
    Samples {
        /// Sample to print
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<CodegenConfig, ShapeError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(ShapeError::Io)?;
            let config = CodegenConfig::from_toml_str(&text)?;
            tracing::info!(path = %path.display(), "loaded codegen config");
            Ok(config)
        }
        None => Ok(CodegenConfig::default()),
    }
}

fn write_files(files: &GeneratedFiles, only: Option<Artifact>, output: Option<&Path>) -> Result<(), ShapeError> {
    let selected = files
        .iter()
        .filter(|file| only.map_or(true, |artifact| artifact.file_name() == file.name));

    match output {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(ShapeError::Io)?;
            for file in selected {
                let path = dir.join(file.name);
                fs::write(&path, &file.contents).map_err(ShapeError::Io)?;
                println!("Wrote {}", path.display());
            }
        }
        None => {
            for file in selected {
                println!("// ---- {} ----", file.name);
                println!("{}", file.contents);
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), ShapeError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Parse { input } => {
            let text = fs::read_to_string(input).map_err(ShapeError::Io)?;
            let schema = compile_schema(&text)?;
            println!("{}", schema_to_json(&schema)?);
            Ok(())
        }

        Commands::Generate { input, output, only } => {
            let text = fs::read_to_string(input).map_err(ShapeError::Io)?;
            let (schema, files) = generate(&text, &config)?;
            tracing::info!(schema = %schema.name, input = %input.display(), "generating artifacts");
            write_files(&files, *only, output.as_deref())
        }

        Commands::Check { input, data } => {
            let text = fs::read_to_string(input).map_err(ShapeError::Io)?;
            let schema = compile_schema(&text)?;
            let document: serde_json::Value = serde_json::from_str(&fs::read_to_string(data).map_err(ShapeError::Io)?)?;

            let issues = validate_value(&schema, &document);
            if issues.is_empty() {
                println!("{} is a valid {}", data.display(), schema.name);
                return Ok(());
            }
            for issue in &issues {
                let path = if issue.path.is_empty() { "<root>" } else { issue.path.as_str() };
                println!("{}: {}", path, issue.message);
            }
            Err(ShapeError::Validation(issues.len()))
        }

        Commands::Samples { name } => {
            match name {
                Some(name) => match samples::find(name) {
                    Some(sample) => print!("{}", sample.source),
                    None => {
                        let known: Vec<&str> = samples::ALL.iter().map(|sample| sample.name).collect();
                        return Err(ShapeError::UnknownSample {
                            name:  name.clone(),
                            known: known.join(", "),
                        });
                    }
                },
                None => {
                    for sample in samples::ALL {
                        println!("{}", sample.name);
                    }
                }
            }
            Ok(())
        }
    }
}
