mod cli;

use clap::Parser;
use cli::{Cli, Commands, ComputeArgs};
use seedrate::config::{Config, OutputFormat};
use seedrate::error::{Result, SeedRateError};
use seedrate::logic::{
    area_value_to_hectares, build_plan_report, classify_variety_length, compute_seed_totals,
    rate_table,
};
use seedrate::models::{
    AreaUnit, AreaValue, PlantingMethod, SeasonPlan, SeedTotalsRequest, VarietyDescriptor,
    VarietyInput,
};
use seedrate::render;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.command {
        Commands::Init => {
            let (_, path) = Config::setup_interactive()?;
            tracing::info!(path = %path.display(), "Wrote configuration");
            return Ok(());
        }
        _ => Config::load(cli.config.as_deref())?,
    };

    let format = cli.format.unwrap_or(config.output.format);
    let pretty = config.output.pretty;

    match cli.command {
        Commands::Compute(args) => {
            let request = build_request(&args, &config)?;
            let result = compute_seed_totals(&request);
            emit(format, pretty, &result, || {
                render::render_result(&request, &result)
            })
        }
        Commands::Rates => emit(format, pretty, &rate_table(), render::render_rate_table),
        Commands::Plan { file } => {
            let plan = SeasonPlan::load(&file)?;
            let report = build_plan_report(&plan);
            emit(format, pretty, &report, || render::render_plan_report(&report))
        }
        Commands::Check => check(&config),
        Commands::Init => Ok(()),
    }
}

fn build_request(args: &ComputeArgs, config: &Config) -> Result<SeedTotalsRequest> {
    let unit = args
        .unit
        .as_deref()
        .map(AreaUnit::from_label)
        .unwrap_or_else(|| config.defaults.unit.clone());
    let method = args
        .method
        .as_deref()
        .map(PlantingMethod::from_id)
        .unwrap_or_else(|| config.defaults.planting_method.clone());

    let variety = if let Some(name) = &args.variety {
        let profile = config.find_variety(name).ok_or_else(|| {
            SeedRateError::NotFound(format!("Variety '{}' is not in the catalog", name))
        })?;
        Some(VarietyInput::Descriptor(profile.descriptor()))
    } else if let Some(length) = &args.length {
        Some(VarietyInput::Length(length.clone()))
    } else if args.variety_type.is_some() || args.grain_shape.is_some() {
        let descriptor = VarietyDescriptor {
            variety_type: args.variety_type.clone(),
            characteristics: None,
        };
        let descriptor = match &args.grain_shape {
            Some(shape) => descriptor.with_grain_shape(shape.clone()),
            None => descriptor,
        };
        Some(VarietyInput::Descriptor(descriptor))
    } else {
        None
    };

    let area = AreaValue::Text(args.area.clone());

    if !unit.is_recognized() {
        tracing::warn!(unit = %unit, "Unrecognized area unit, reading area as hectares");
    }
    if area_value_to_hectares(Some(&area), Some(&unit)) == 0.0 {
        tracing::warn!(area = %args.area, "Area is not a positive number, totals will be zero");
    }

    Ok(SeedTotalsRequest {
        area: Some(area),
        unit: Some(unit),
        planting_method: Some(method),
        variety,
    })
}

fn check(config: &Config) -> Result<()> {
    println!(
        "Defaults: unit = {}, planting method = {}",
        config.defaults.unit, config.defaults.planting_method
    );

    if config.varieties.is_empty() {
        println!("Variety catalog is empty");
    } else {
        println!("Variety catalog:");
        for variety in &config.varieties {
            let length = classify_variety_length(Some(&variety.descriptor()));
            println!("  {:<24} {}", variety.name, length);
        }
    }

    let problems = config.validate();
    if problems.is_empty() {
        println!("Config OK");
        return Ok(());
    }

    for problem in &problems {
        println!("  ! {}", problem);
    }
    Err(SeedRateError::InvalidData(format!(
        "{} config problem(s) found",
        problems.len()
    )))
}

fn emit<T, F>(format: OutputFormat, pretty: bool, value: &T, text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", text()),
    }
    Ok(())
}
