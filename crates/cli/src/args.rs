use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use surface_core::finding::Severity;
use surface_core::target::TargetType;
use surface_core::types::EntityId;

/// Command-line client for the attack-surface dashboard backend.
#[derive(Parser, Debug)]
#[command(name = "surface", version, long_about = None)]
pub struct Cli {
    /// Backend base URL. Overrides `API_URL`.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Bearer token. Overrides `ACCESS_TOKEN`.
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate and manage scan configurations.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Launch and follow scans.
    #[command(subcommand)]
    Scan(ScanCommand),
    #[command(subcommand)]
    Project(ProjectCommand),
    #[command(subcommand)]
    Target(TargetCommand),
    #[command(subcommand)]
    Finding(FindingCommand),
}

/// Scan configuration fields as typed on the command line.
#[derive(Args, Debug, Clone)]
pub struct ConfigInput {
    #[arg(long)]
    pub name: String,

    /// One of: nmap, dns, subdomain, nuclei, httpx, testSSL.
    #[arg(long, value_name = "TYPE")]
    pub scanner_type: String,

    /// Parameters as inline JSON, e.g. '{"timing":"4"}'.
    #[arg(long, value_name = "JSON", conflicts_with = "parameters_file")]
    pub parameters: Option<String>,

    /// Read parameters JSON from a file.
    #[arg(long, value_name = "FILE")]
    pub parameters_file: Option<PathBuf>,

    /// Store the configuration as inactive.
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Check a configuration locally without contacting the backend.
    Validate(ConfigInput),
    Create(ConfigInput),
    Update {
        #[arg(long)]
        id: EntityId,
        #[command(flatten)]
        input: ConfigInput,
    },
    List,
    Get { id: EntityId },
    Delete { id: EntityId },
}

#[derive(Subcommand, Debug)]
pub enum ScanCommand {
    /// Queue a scan. Without `--target` every target in the project is scanned.
    Start {
        #[arg(long)]
        project: EntityId,
        #[arg(long)]
        config: EntityId,
        #[arg(long = "target", value_name = "ID")]
        targets: Vec<EntityId>,
    },
    List {
        #[arg(long)]
        project: Option<EntityId>,
    },
    Get { id: EntityId },
    Cancel { id: EntityId },
    Findings { id: EntityId },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    List,
    Get { id: EntityId },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    Delete { id: EntityId },
}

#[derive(Subcommand, Debug)]
pub enum TargetCommand {
    List {
        #[arg(long)]
        project: Option<EntityId>,
    },
    /// Add an IP, CIDR range or domain to a project.
    Add {
        #[arg(long)]
        project: EntityId,
        value: String,
        /// ip, cidr or domain. Inferred from the value when omitted.
        #[arg(long = "type", value_name = "TYPE")]
        target_type: Option<TargetType>,
    },
    Delete { id: EntityId },
    /// Show how a target relates to others (resolves_to, parent_of, ...).
    Relations { id: EntityId },
}

#[derive(Subcommand, Debug)]
pub enum FindingCommand {
    List {
        #[arg(long)]
        project: Option<EntityId>,
        /// Only show findings at or above this severity.
        #[arg(long, value_name = "SEVERITY")]
        min_severity: Option<Severity>,
    },
    /// Mark a finding as fixed.
    Fixed {
        id: EntityId,
        /// Clear the flag instead of setting it.
        #[arg(long)]
        undo: bool,
    },
    /// Mark a finding as verified.
    Verified {
        id: EntityId,
        #[arg(long)]
        undo: bool,
    },
}
