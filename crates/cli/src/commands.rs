//! Subcommand handlers. Results are printed to stdout as pretty JSON; logs
//! and validation reports go to stderr.

use anyhow::{bail, Context};
use serde::Serialize;
use surface_client::{ApiClient, ClientConfig};
use surface_core::error::CoreError;
use surface_core::finding::{Finding, Severity};
use surface_core::project::ProjectInput;
use surface_core::scan::StartScan;
use surface_core::scan_config::{ScanConfig, ScanConfigCandidate};
use surface_core::target::{CreateTarget, TargetType};
use surface_core::types::EntityId;

use crate::args::{
    Cli, Command, ConfigCommand, ConfigInput, FindingCommand, ProjectCommand, ScanCommand,
    TargetCommand,
};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let backend = Backend {
        api_url: cli.api_url,
        token: cli.token,
    };
    match cli.command {
        Command::Config(cmd) => config_command(&backend, cmd).await,
        Command::Scan(cmd) => scan_command(&backend.connect()?, cmd).await,
        Command::Project(cmd) => project_command(&backend.connect()?, cmd).await,
        Command::Target(cmd) => target_command(&backend.connect()?, cmd).await,
        Command::Finding(cmd) => finding_command(&backend.connect()?, cmd).await,
    }
}

/// Command-line overrides for the client configuration. Nothing is read or
/// checked until [`Backend::connect`].
#[derive(Debug)]
struct Backend {
    api_url: Option<String>,
    token: Option<String>,
}

impl Backend {
    fn connect(&self) -> anyhow::Result<ApiClient> {
        let config = ClientConfig::from_lookup(|key| match key {
            "API_URL" => self.api_url.clone().or_else(|| std::env::var(key).ok()),
            "ACCESS_TOKEN" => self.token.clone().or_else(|| std::env::var(key).ok()),
            _ => std::env::var(key).ok(),
        })?;
        tracing::debug!(api_url = %config.api_url, "Loaded client configuration");
        Ok(ApiClient::new(&config)?)
    }
}

async fn config_command(backend: &Backend, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        // Offline: no backend or token needed.
        ConfigCommand::Validate(input) => {
            let config = validated(candidate_from(&input, None)?)?;
            eprintln!("valid {} configuration", config.scanner_type());
            print_json(&config.body())
        }
        ConfigCommand::Create(input) => {
            let config = validated(candidate_from(&input, None)?)?;
            print_json(&backend.connect()?.create_scan_config(&config).await?)
        }
        ConfigCommand::Update { id, input } => {
            let config = validated(candidate_from(&input, Some(id))?)?;
            print_json(&backend.connect()?.update_scan_config(&config).await?)
        }
        ConfigCommand::List => print_json(&backend.connect()?.list_scan_configs().await?),
        ConfigCommand::Get { id } => {
            let record = backend.connect()?.get_scan_config(id).await?;
            // Stored rows predate some schema changes; flag the ones that no longer pass.
            if let Err(e) = record.validate() {
                tracing::warn!(%id, error = %e, "Stored scan config does not validate");
            }
            print_json(&record)
        }
        ConfigCommand::Delete { id } => {
            backend.connect()?.delete_scan_config(id).await?;
            eprintln!("deleted scan config {id}");
            Ok(())
        }
    }
}

async fn scan_command(client: &ApiClient, cmd: ScanCommand) -> anyhow::Result<()> {
    match cmd {
        ScanCommand::Start {
            project,
            config,
            targets,
        } => {
            let request = StartScan {
                project_id: project,
                scan_config_id: config,
                target_ids: targets,
            };
            print_json(&client.start_scan(&request).await?)
        }
        ScanCommand::List { project: Some(id) } => print_json(&client.project_scans(id).await?),
        ScanCommand::List { project: None } => print_json(&client.list_scans().await?),
        ScanCommand::Get { id } => print_json(&client.get_scan(id).await?),
        ScanCommand::Cancel { id } => {
            let scan = client.get_scan(id).await?;
            if !scan.status.is_cancellable() {
                bail!("scan {id} is {:?} and can no longer be cancelled", scan.status);
            }
            client.cancel_scan(id).await?;
            eprintln!("cancelled scan {id}");
            Ok(())
        }
        ScanCommand::Findings { id } => print_json(&client.scan_findings(id).await?),
    }
}

async fn project_command(client: &ApiClient, cmd: ProjectCommand) -> anyhow::Result<()> {
    match cmd {
        ProjectCommand::List => print_json(&client.list_projects().await?),
        ProjectCommand::Get { id } => print_json(&client.get_project(id).await?),
        ProjectCommand::Create { name, description } => {
            let input = ProjectInput { name, description };
            print_json(&client.create_project(&input).await?)
        }
        ProjectCommand::Delete { id } => {
            client.delete_project(id).await?;
            eprintln!("deleted project {id}");
            Ok(())
        }
    }
}

async fn target_command(client: &ApiClient, cmd: TargetCommand) -> anyhow::Result<()> {
    match cmd {
        TargetCommand::List { project: Some(id) } => print_json(&client.project_targets(id).await?),
        TargetCommand::List { project: None } => print_json(&client.list_targets().await?),
        TargetCommand::Add {
            project,
            value,
            target_type,
        } => {
            let target_type = match target_type {
                Some(t) => t,
                None => TargetType::infer(&value)
                    .with_context(|| format!("cannot infer target type of `{value}`; pass --type"))?,
            };
            let input = CreateTarget {
                project_id: project,
                target_type,
                value,
            };
            print_json(&client.create_target(&input).await?)
        }
        TargetCommand::Delete { id } => {
            client.delete_target(id).await?;
            eprintln!("deleted target {id}");
            Ok(())
        }
        TargetCommand::Relations { id } => print_json(&client.target_relations(id).await?),
    }
}

async fn finding_command(client: &ApiClient, cmd: FindingCommand) -> anyhow::Result<()> {
    match cmd {
        FindingCommand::List {
            project,
            min_severity,
        } => {
            let findings = match project {
                Some(id) => client.project_findings(id).await?,
                None => client.list_findings().await?,
            };
            print_json(&filter_by_severity(findings, min_severity))
        }
        FindingCommand::Fixed { id, undo } => {
            client.mark_finding_fixed(id, !undo).await?;
            eprintln!("finding {id} fixed = {}", !undo);
            Ok(())
        }
        FindingCommand::Verified { id, undo } => {
            client.mark_finding_verified(id, !undo).await?;
            eprintln!("finding {id} verified = {}", !undo);
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a candidate from the command line, reading parameters inline, from
/// a file, or defaulting to `{}`.
fn candidate_from(input: &ConfigInput, id: Option<EntityId>) -> anyhow::Result<ScanConfigCandidate> {
    let raw = match (&input.parameters, &input.parameters_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => "{}".to_string(),
    };
    let candidate = ScanConfigCandidate::from_raw_parameters(
        input.name.clone(),
        input.scanner_type.clone(),
        !input.inactive,
        &raw,
    )?;
    Ok(match id {
        Some(id) => candidate.with_id(id),
        None => candidate,
    })
}

/// Validate, printing each field violation on its own line on failure.
fn validated(candidate: ScanConfigCandidate) -> anyhow::Result<ScanConfig> {
    match candidate.validate() {
        Ok(config) => Ok(config),
        Err(CoreError::SchemaViolation(errors)) => {
            for violation in &errors {
                eprintln!("  {violation}");
            }
            bail!("scan configuration rejected ({} violation(s))", errors.len())
        }
        Err(e) => Err(e.into()),
    }
}

fn filter_by_severity(findings: Vec<Finding>, min: Option<Severity>) -> Vec<Finding> {
    match min {
        Some(min) => findings.into_iter().filter(|f| f.severity >= min).collect(),
        None => findings,
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
