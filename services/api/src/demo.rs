use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::Args;
use fleet_ai::config::AppConfig;
use fleet_ai::error::AppError;
use fleet_ai::fleet::compliance::{ComplianceReport, DriverStatusView};
use fleet_ai::fleet::dispatch::{DispatchError, DispatchPrompt, DispatchService, GeminiClient};
use fleet_ai::fleet::sample::sample_fleet;
use fleet_ai::fleet::snapshot::FleetSnapshot;

/// Operator question used when the demo runs without an explicit query.
const DEFAULT_QUERY: &str = "Esegui una verifica compliance completa di tutti i viaggi pianificati e attivi: controlla validita documenti autisti (patente, CQC, ADR), documenti veicoli (revisione, assicurazione), ore di guida CE 561/2006 (giornaliere, settimanali, bisettimanali), scadenze scarico tachigrafo, e requisiti CMR per i viaggi internazionali. Segnala tutti i BLOCCHI e le VIOLAZIONI.";

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Operator question for the dispatch portion of the demo.
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Print the full prompt document assembled for the completion model.
    #[arg(long)]
    pub(crate) show_prompt: bool,
    /// Call the configured completion backend instead of stopping at the prompt.
    #[arg(long)]
    pub(crate) live: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ComplianceReportArgs {
    /// Evaluation date for the report (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_compliance_report(args: ComplianceReportArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let snapshot = sample_fleet(today);
    let report = ComplianceReport::build(&snapshot, today);

    println!("Compliance report (evaluated {today})");
    println!("{}", report.render());
    println!(
        "\n{} findings over {} drivers, {} vehicles, {} trips",
        report.findings().len(),
        snapshot.drivers.len(),
        snapshot.vehicles.len(),
        snapshot.trips.len()
    );

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        query,
        show_prompt,
        live,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let query = query.unwrap_or_else(|| DEFAULT_QUERY.to_string());
    let snapshot = sample_fleet(today);

    println!("Fleet compliance and dispatch demo");
    println!("Evaluation date: {today}");
    render_fleet_overview(&snapshot);

    let report = ComplianceReport::build(&snapshot, today);
    println!("\nAutomatic compliance analysis");
    println!("{}", report.render());

    println!("\nDriver status");
    for driver in &snapshot.drivers {
        let view = DriverStatusView::for_driver(driver);
        println!(
            "- {} ({}): day {}h used / {}h left | week {}h used / {}h left",
            view.name,
            view.driver_id.0,
            view.daily_hours_used,
            view.daily_hours_remaining,
            view.weekly_hours_used,
            view.weekly_hours_remaining
        );
        println!(
            "  can drive: {} | break required: {}",
            yes_no(view.can_drive),
            yes_no(view.break_required)
        );
        for alert in &view.alerts {
            println!("  ! {alert}");
        }
    }

    let analysis = report.render();
    let prompt = DispatchPrompt::build(&snapshot, &analysis, &query, today);
    println!("\nOperator question");
    println!("{query}");

    if show_prompt {
        println!("\nPrompt document");
        println!("{}", prompt.user_prompt);
    } else {
        println!(
            "\nPrompt assembled: {} chars system instruction, {} chars user prompt (pass --show-prompt to print)",
            prompt.system_instruction.len(),
            prompt.user_prompt.len()
        );
    }

    if !live {
        println!("\nPass --live to send the request to the configured completion backend.");
        return Ok(());
    }

    let config = AppConfig::load()?;
    let gateway = Arc::new(GeminiClient::new(config.gemini));
    let service = Arc::new(DispatchService::new(gateway));

    match service.dispatch(&query, &snapshot, today).await {
        Ok(outcome) => {
            println!("\nAI response");
            println!("{}", outcome.result);
        }
        Err(DispatchError::MissingCredential) => {
            println!("\nGEMINI_API_KEY is not configured; set it in .env to enable live dispatch.");
        }
        Err(err) => return Err(AppError::from(err)),
    }

    Ok(())
}

fn render_fleet_overview(snapshot: &FleetSnapshot) {
    println!(
        "\nFleet: {} drivers, {} vehicles, {} trips",
        snapshot.drivers.len(),
        snapshot.vehicles.len(),
        snapshot.trips.len()
    );

    let available_drivers: Vec<String> = snapshot
        .available_drivers()
        .map(|driver| format!("{} ({})", driver.full_name(), driver.id.0))
        .collect();
    if available_drivers.is_empty() {
        println!("Available drivers: none");
    } else {
        println!("Available drivers: {}", available_drivers.join(", "));
    }

    let available_vehicles: Vec<String> = snapshot
        .available_vehicles()
        .map(|vehicle| format!("{} ({})", vehicle.plate, vehicle.id.0))
        .collect();
    if available_vehicles.is_empty() {
        println!("Available vehicles: none");
    } else {
        println!("Available vehicles: {}", available_vehicles.join(", "));
    }

    println!("Trips:");
    for trip in &snapshot.trips {
        let driver = trip
            .driver_id
            .as_ref()
            .map(|id| id.0.as_str())
            .unwrap_or("unassigned");
        let vehicle = trip
            .vehicle_id
            .as_ref()
            .map(|id| id.0.as_str())
            .unwrap_or("unassigned");
        println!(
            "- {} | {} | {} km | driver {} | vehicle {}{}{}",
            trip.id.0,
            trip.cargo_type,
            trip.total_km,
            driver,
            vehicle,
            if trip.is_adr { " | ADR" } else { "" },
            if trip.is_international {
                " | international"
            } else {
                ""
            }
        );
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
