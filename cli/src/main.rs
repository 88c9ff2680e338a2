//! CLI entrypoint for bloc-supervision
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod args;
mod output;

use anyhow::{Context, Result, bail};
use args::{CheckArgs, Cli, Command, PlanArgs, RestArgs, SaveArgs, ShowArgs};
use clap::Parser;
use output::ConsoleFormatter;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use supervision_application::{LeaveRuleBridge, OrchestratorParams, PlanningOrchestrator};
use supervision_domain::{
    Assignment, AssignmentValidationEngine, BlocLayout, CandidateAssignment, ConfigIssue,
    DayPlanning, RuleCatalog, RuleContext, ValidationContext, validate_day_plan,
};
use supervision_infrastructure::{
    CatalogRuleEngine, ConfigLoader, FileConfig, JsonFilePlanningStore,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting bloc-supervision");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if let Command::Config = cli.command {
        return show_config(&cli, &config);
    }

    let (catalog, issues) = config.rule_catalog()?;
    for issue in &issues {
        warn!("{}", issue.message);
    }

    match &cli.command {
        Command::Check(args) => check(&cli, catalog, args),
        Command::Validate(args) => validate(&cli, catalog, args),
        Command::Save(args) => save(&cli, &config, catalog, args).await,
        Command::Show(args) => show(&cli, &config, catalog, args).await,
        Command::Rest(args) => rest(&cli, &catalog, args),
        Command::Config => show_config(&cli, &config),
    }
}

// ==================== Commands ====================

fn check(cli: &Cli, catalog: RuleCatalog, args: &CheckArgs) -> Result<()> {
    let (layout, mut plan) = read_plan_files(&args.files)?;
    let engine = AssignmentValidationEngine::new(catalog);
    let day = plan.day_of_week();

    let context = ValidationContext::builder(args.supervisor)
        .layout(&layout)
        .from_plan(&plan)
        .build();
    let candidate = CandidateAssignment::new(args.room, args.role, day, args.period);

    let mut result = engine.validate_assignment(&context, &candidate);
    if layout.room(args.room.into()).is_none() {
        result.push_error(format!("La salle {} n'existe pas", args.room));
    }
    for tip in engine.get_suggestions(&context, day, args.period) {
        if !result.suggestions.contains(&tip) {
            result.push_suggestion(tip);
        }
    }

    emit(
        cli,
        &result,
        ConsoleFormatter::format_result(
            &format!("Salle {} / superviseur {}", args.room, args.supervisor),
            &result,
        ),
    );

    if args.apply {
        if !result.is_valid() {
            bail!("Assignment rejected, plan file left unchanged");
        }
        let assignment = Assignment::new(args.supervisor, args.room, day, args.period, args.role);
        plan.add_assignment(assignment)?;
        write_json(&args.files.plan, &plan)?;
        info!(path = %args.files.plan.display(), "Assignment written to plan");
    }

    Ok(())
}

fn validate(cli: &Cli, catalog: RuleCatalog, args: &PlanArgs) -> Result<()> {
    let (layout, plan) = read_plan_files(args)?;
    let engine = AssignmentValidationEngine::new(catalog);
    let result = validate_day_plan(&engine, &layout, &plan);

    emit(
        cli,
        &result,
        ConsoleFormatter::format_result(&format!("Planning du {}", plan.date), &result),
    );

    if !result.is_valid() {
        bail!("Plan contains {} error(s)", result.errors.len());
    }
    Ok(())
}

async fn save(cli: &Cli, config: &FileConfig, catalog: RuleCatalog, args: &SaveArgs) -> Result<()> {
    let (layout, plan) = read_plan_files(&args.files)?;
    let dir = data_dir(config, args.data_dir.as_ref())?;
    let store = Arc::new(JsonFilePlanningStore::new(
        dir,
        AssignmentValidationEngine::new(catalog),
        layout,
    ));

    let params = OrchestratorParams::default().with_validate_before_save(!args.no_validate);
    let orchestrator = PlanningOrchestrator::with_params(store, params);

    let operation = orchestrator.save_day_planning(plan);
    let cancel = operation.cancel_handle();
    let saved = tokio::select! {
        saved = operation => saved,
        _ = tokio::signal::ctrl_c() => {
            cancel.cancel();
            bail!("Save interrupted, nothing written");
        }
    };

    match saved {
        Some(saved) => {
            emit(cli, &saved, ConsoleFormatter::format_plan(&saved));
            Ok(())
        }
        None => {
            if let Some(verdict) = orchestrator.validation_result()
                && !verdict.is_valid()
            {
                emit(
                    cli,
                    &verdict,
                    ConsoleFormatter::format_result("Plan refusé", &verdict),
                );
            }
            match orchestrator.error() {
                Some(error) => bail!(error),
                None => bail!("Save did not complete"),
            }
        }
    }
}

async fn show(cli: &Cli, config: &FileConfig, catalog: RuleCatalog, args: &ShowArgs) -> Result<()> {
    let dir = data_dir(config, args.data_dir.as_ref())?;
    let store = Arc::new(JsonFilePlanningStore::new(
        dir,
        AssignmentValidationEngine::new(catalog),
        BlocLayout::default(),
    ));
    let orchestrator = PlanningOrchestrator::new(store);

    match orchestrator.load_day_planning(args.date).await {
        Some(plan) => {
            emit(cli, &plan, ConsoleFormatter::format_plan(&plan));
            Ok(())
        }
        None => match orchestrator.error() {
            Some(error) => bail!(error),
            None => bail!("No plan stored for {}", args.date),
        },
    }
}

fn rest(cli: &Cli, catalog: &RuleCatalog, args: &RestArgs) -> Result<()> {
    let bridge = LeaveRuleBridge::new(CatalogRuleEngine::new(catalog));
    let context = RuleContext::new(args.shift).with_existing(args.existing.iter().copied());
    let result = bridge.evaluate(&context)?;

    emit(
        cli,
        &result,
        ConsoleFormatter::format_result("Repos et charge hebdomadaire", &result),
    );

    if !result.is_valid() {
        bail!("Shift breaks {} rule(s)", result.errors.len());
    }
    Ok(())
}

fn show_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    let (catalog, issues) = config.catalog.to_catalog();

    if cli.json {
        println!("{}", ConsoleFormatter::format_json(&config));
    } else {
        for source in ConfigLoader::config_sources(cli.config.as_deref()) {
            println!("{source}");
        }
        println!();
        println!("{}", ConsoleFormatter::format_catalog(&catalog, &issues));
    }

    if ConfigIssue::has_errors(&issues) {
        bail!("Configuration contains errors");
    }
    Ok(())
}

// ==================== Helpers ====================

fn emit<T: Serialize>(cli: &Cli, value: &T, text: String) {
    if cli.json {
        println!("{}", ConsoleFormatter::format_json(value));
    } else {
        println!("{text}");
    }
}

fn data_dir(config: &FileConfig, explicit: Option<&PathBuf>) -> Result<PathBuf> {
    explicit
        .cloned()
        .or_else(|| config.store.resolve_data_dir())
        .context("No data directory configured; pass --data-dir or set [store] data_dir")
}

fn read_plan_files(args: &PlanArgs) -> Result<(BlocLayout, DayPlanning)> {
    Ok((read_json(&args.layout)?, read_json(&args.plan)?))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
