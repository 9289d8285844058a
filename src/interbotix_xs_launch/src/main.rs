//! interbotix_xs_launch CLI

use clap::{Parser, Subcommand};
use interbotix_xs_launch::{
    describe_robot, params::load_launch_arguments, record::DeclarationRecord,
    robot_launch_description, substitution::LaunchContext, xs_launch::RobotFamily,
};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "interbotix_xs_launch")]
#[command(about = "Robot description launch arguments for Interbotix X-Series robots", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the launch arguments declared for a robot family
    Args {
        /// Robot family (arm, cobot or locobot)
        family: RobotFamily,
    },

    /// Resolve launch arguments and build the robot description
    Describe {
        /// Robot family (arm, cobot or locobot)
        family: RobotFamily,

        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        /// YAML file of launch arguments; command-line arguments take precedence
        #[arg(long)]
        params_file: Option<PathBuf>,

        /// Parent directory of `srdf/`; builds the semantic description too
        #[arg(long)]
        semantic_config: Option<String>,

        /// Run xacro instead of printing its command lines
        #[arg(long)]
        execute: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_launch_arg(s: &str) -> Result<(String, String), String> {
    match s.split_once(":=") {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("Invalid launch argument format: {}", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Args { family } => list_arguments(family),
        Commands::Describe {
            family,
            args,
            params_file,
            semantic_config,
            execute,
            output,
        } => {
            log::info!("Describing {} robot", family);
            describe_and_write(
                family,
                args,
                params_file.as_deref(),
                semantic_config.as_deref(),
                execute,
                output.as_deref(),
            )
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn list_arguments(family: RobotFamily) -> Result<(), Box<dyn std::error::Error>> {
    let records: Vec<DeclarationRecord> = robot_launch_description(family)
        .arguments()
        .iter()
        .map(DeclarationRecord::from)
        .collect();
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

fn describe_and_write(
    family: RobotFamily,
    args: Vec<(String, String)>,
    params_file: Option<&Path>,
    semantic_config: Option<&str>,
    execute: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cli_args: HashMap<String, String> = HashMap::new();
    if let Some(path) = params_file {
        log::info!("Loading launch arguments from {}", path.display());
        cli_args.extend(load_launch_arguments(path)?);
    }
    cli_args.extend(args);

    let mut context = LaunchContext::new();
    context.set_dry_run(!execute);

    let record = describe_robot(family, &cli_args, semantic_config, context)?;
    let json = record.to_json()?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            log::info!("Wrote robot description record: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
