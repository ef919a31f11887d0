//! Prompt assembly for the dispatch call: the fixed system instruction plus
//! a user prompt built from the compliance analysis, the full fleet roster,
//! and the operator's question.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::fleet::compliance::hours::{
    remaining_hours, BIWEEKLY_LIMIT_HOURS, DAILY_LIMIT_HOURS, WEEKLY_LIMIT_HOURS,
};
use crate::fleet::compliance::temporal::format_date_it;
use crate::fleet::domain::{Driver, Trip, Vehicle};
use crate::fleet::snapshot::FleetSnapshot;

/// Persona and rulebook handed to the model on every call. The text is fixed:
/// per-request variation belongs in the user prompt.
pub const SYSTEM_INSTRUCTION: &str = r#"Sei un esperto di logistica, ottimizzazione dei trasporti e compliance normativa per aziende italiane di autotrasporto (PMI con 1-50 veicoli). Il tuo obiettivo principale e OTTIMIZZARE costi, tempi e risorse, garantendo al contempo la piena conformita normativa.

COMPETENZE DI OTTIMIZZAZIONE:
- Ottimizzazione percorsi: consolidamento carichi, scelta percorsi alternativi, riduzione km a vuoto
- Gestione flotta: bilanciamento utilizzo veicoli, matching ottimale veicolo-carico, pianificazione manutenzione
- Gestione autisti: bilanciamento carichi di lavoro, ottimizzazione turni nel rispetto dei limiti orari
- Riduzione costi: carburante (velocita ottimale, percorsi efficienti), pedaggi, straordinari
- Pianificazione: scheduling settimanale, prevenzione colli di bottiglia, gestione picchi

COMPETENZE NORMATIVE:
- Regolamento CE 561/2006: tempi di guida e riposo (9h/giorno max, estendibile a 10h due volte a settimana; 56h/settimana; 90h/bisettimanale; pausa 45min ogni 4h30; riposo giornaliero 11h consecutive min; riposo settimanale 45h consecutive)
- Normativa ADR: trasporto merci pericolose (certificato autista obbligatorio, approvazione veicolo, equipaggiamento di sicurezza, documenti di trasporto ADR)
- Convenzione CMR / eCMR: lettera di vettura per trasporti internazionali su strada
- Tachigrafo digitale (Reg. UE 165/2014): scarico dati conducente ogni 28 giorni, dati veicolo ogni 90 giorni, calibrazione ogni 2 anni, obbligo Smart V2 entro 01/07/2026
- Mobility Package (Reg. UE 2020/1054): max 3 operazioni cabotaggio in 7 giorni + cooling-off 4 giorni, rientro veicolo ogni 8 settimane, rientro autista ogni 4 settimane, divieto riposo settimanale in cabina

APPROCCIO — OTTIMIZZAZIONE + COMPLIANCE:
Per ogni raccomandazione:
1. Proponi la soluzione PIU EFFICIENTE in termini di costi, tempi e risorse
2. Verifica che sia conforme (documenti, ore guida, veicolo adatto)
3. Se l'opzione ottimale non e conforme, proponi la migliore alternativa conforme e quantifica il delta di costo
4. Fornisci sempre stime numeriche: risparmio in EUR, riduzione km, riduzione tempo

CHECKLIST COMPLIANCE per ogni assegnazione:
1. Documenti autista validi alla data del viaggio (patente, CQC, ADR se richiesto)?
2. Ore di guida residue sufficienti (giornaliere, settimanali, bisettimanali)?
3. Documenti veicolo validi (revisione, assicurazione)?
4. Veicolo adatto (tipo, capacita peso, ADR)?
5. Scarico tachigrafo in regola (entro 28 giorni)?
6. Se internazionale: CMR disponibile, regole cabotaggio rispettate?

Rispondi in italiano, in modo chiaro, professionale e strutturato. Non usare emoji. Tono formale e orientato ai risultati.
Cita i riferimenti normativi specifici (es. "Art. 6 Reg. CE 561/2006") quando rilevi problemi."#;

const RESPONSE_OUTLINE: &str = r#"Struttura la risposta in:
1. **Raccomandazione Ottimale** — la soluzione piu efficiente con stima di risparmio in EUR, km e tempo
2. **Verifica Compliance** — conferma conformita di ogni assegnazione proposta, con riferimenti normativi
3. **Alternative** — se la soluzione ottimale non e conforme, proponi alternative con analisi costi-benefici
4. **Ottimizzazioni Aggiuntive** — consolidamento carichi, percorsi alternativi, bilanciamento flotta
5. **Scadenze e Azioni** — problemi urgenti e azioni immediate necessarie"#;

/// Assembled prompt pair for one dispatch round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchPrompt {
    pub system_instruction: String,
    pub user_prompt: String,
}

impl DispatchPrompt {
    pub fn build(
        snapshot: &FleetSnapshot,
        analysis: &str,
        user_query: &str,
        today: NaiveDate,
    ) -> Self {
        let user_prompt = format!(
            "## DATA ODIERNA: {date}\n\n\
             ## ANALISI COMPLIANCE AUTOMATICA\n{analysis}\n\n\
             ---\n\n\
             ## FLOTTA\n\n\
             ### AUTISTI ({driver_count})\n{drivers}\n\n\
             ### VEICOLI ({vehicle_count})\n{vehicles}\n\n\
             ### VIAGGI ({trip_count})\n{trips}\n\n\
             ---\n\n\
             ## RICHIESTA DELL'OPERATORE\n\n{user_query}\n\n\
             ---\n\n\
             {outline}",
            date = format_date_it(today),
            analysis = analysis,
            driver_count = snapshot.drivers.len(),
            drivers = drivers_section(&snapshot.drivers),
            vehicle_count = snapshot.vehicles.len(),
            vehicles = vehicles_section(&snapshot.vehicles),
            trip_count = snapshot.trips.len(),
            trips = trips_section(&snapshot.trips),
            user_query = user_query,
            outline = RESPONSE_OUTLINE,
        );

        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            user_prompt,
        }
    }
}

fn drivers_section(drivers: &[Driver]) -> String {
    drivers
        .iter()
        .map(driver_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn driver_entry(driver: &Driver) -> String {
    let mut entry = String::new();
    writeln!(entry, "- {} (ID: {})", driver.full_name(), driver.id.0).expect("write driver header");
    writeln!(entry, "    - Stato: {}", driver.status.label()).expect("write driver status");
    writeln!(
        entry,
        "    - Ore guida: giorno {}h/{}h | settimana {}h/{}h | bisett. {}h/{}h",
        driver.daily_hours_used,
        DAILY_LIMIT_HOURS,
        driver.weekly_hours_used,
        WEEKLY_LIMIT_HOURS,
        driver.biweekly_hours_used,
        BIWEEKLY_LIMIT_HOURS,
    )
    .expect("write driving hours");
    writeln!(
        entry,
        "    - Ore residue: giorno {}h | settimana {}h",
        remaining_hours(driver.daily_hours_used, DAILY_LIMIT_HOURS),
        remaining_hours(driver.weekly_hours_used, WEEKLY_LIMIT_HOURS),
    )
    .expect("write remaining hours");
    let adr = if driver.adr_certificate { "Si" } else { "No" };
    match driver.adr_deadline {
        Some(deadline) => writeln!(
            entry,
            "    - Certificato ADR: {adr} (scade: {})",
            format_date_it(deadline)
        ),
        None => writeln!(entry, "    - Certificato ADR: {adr}"),
    }
    .expect("write adr certificate");
    writeln!(
        entry,
        "    - Patente: scade {}",
        format_date_it(driver.license_deadline)
    )
    .expect("write license deadline");
    writeln!(
        entry,
        "    - CQC: scade {}",
        format_date_it(driver.cqc_deadline)
    )
    .expect("write cqc deadline");
    let last_download = driver
        .last_tachograph_download
        .map(format_date_it)
        .unwrap_or_else(|| "N/D".to_string());
    writeln!(entry, "    - Ultimo scarico tachigrafo: {last_download}")
        .expect("write tachograph download");
    let last_rest = driver
        .last_weekly_rest
        .map(format_date_it)
        .unwrap_or_else(|| "N/D".to_string());
    writeln!(entry, "    - Ultimo riposo settimanale: {last_rest}").expect("write weekly rest");
    if let Some(notes) = &driver.notes {
        writeln!(entry, "    - Note: {notes}").expect("write driver notes");
    }
    entry.trim_end().to_string()
}

fn vehicles_section(vehicles: &[Vehicle]) -> String {
    vehicles
        .iter()
        .map(vehicle_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn vehicle_entry(vehicle: &Vehicle) -> String {
    let mut entry = String::new();
    writeln!(
        entry,
        "- {} {} — Targa: {} (ID: {})",
        vehicle.brand, vehicle.model, vehicle.plate, vehicle.id.0
    )
    .expect("write vehicle header");
    let capacity = match vehicle.max_capacity_m3 {
        Some(m3) => format!("{} kg / {m3} m3", format_int_it(vehicle.max_capacity_kg)),
        None => format!("{} kg", format_int_it(vehicle.max_capacity_kg)),
    };
    writeln!(
        entry,
        "    - Tipo: {} | Capacita: {capacity}",
        vehicle.vehicle_type.label()
    )
    .expect("write vehicle specs");
    writeln!(entry, "    - Stato: {}", vehicle.status.label()).expect("write vehicle status");
    writeln!(entry, "    - Tachigrafo: {}", vehicle.tachograph_type.label())
        .expect("write tachograph type");
    writeln!(
        entry,
        "    - Revisione: scade {}",
        format_date_it(vehicle.revision_deadline)
    )
    .expect("write revision deadline");
    writeln!(
        entry,
        "    - Assicurazione: scade {}",
        format_date_it(vehicle.insurance_deadline)
    )
    .expect("write insurance deadline");
    if let Some(notes) = &vehicle.notes {
        writeln!(entry, "    - Note: {notes}").expect("write vehicle notes");
    }
    entry.trim_end().to_string()
}

fn trips_section(trips: &[Trip]) -> String {
    trips
        .iter()
        .map(trip_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn trip_entry(trip: &Trip) -> String {
    let mut entry = String::new();
    writeln!(
        entry,
        "- {} — {} km (ID: {})",
        trip.cargo_type,
        format_int_it(trip.total_km),
        trip.id.0
    )
    .expect("write trip header");
    writeln!(
        entry,
        "    - Stato: {} | Data: {}",
        trip.status.label(),
        format_date_it(trip.date)
    )
    .expect("write trip schedule");
    writeln!(
        entry,
        "    - Peso: {} kg | Costo stimato: EUR {}",
        format_int_it(trip.cargo_weight_kg),
        format_int_it(trip.estimated_cost_eur)
    )
    .expect("write trip load");
    let adr = if trip.is_adr { "Si (richiesto)" } else { "No" };
    let international = if trip.is_international { "Si" } else { "No" };
    writeln!(entry, "    - ADR: {adr} | Internazionale: {international}")
        .expect("write trip flags");
    let route = trip
        .stops
        .iter()
        .map(|stop| format!("{} ({})", stop.city, stop.stop_type.label()))
        .collect::<Vec<_>>()
        .join(" > ");
    writeln!(entry, "    - Percorso: {route}").expect("write trip route");
    let driver = trip
        .driver_id
        .as_ref()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "Non assegnato".to_string());
    let vehicle = trip
        .vehicle_id
        .as_ref()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "Non assegnato".to_string());
    writeln!(entry, "    - Autista: {driver} | Veicolo: {vehicle}").expect("write trip assignment");
    let compliance = match &trip.compliance_check {
        Some(check) if !check.issues.is_empty() => {
            format!("{} — {}", check.overall_status, check.issues.join("; "))
        }
        Some(check) => check.overall_status.clone(),
        None => "Non verificato".to_string(),
    };
    writeln!(entry, "    - Compliance: {compliance}").expect("write trip compliance");
    entry.trim_end().to_string()
}

/// it-IT thousands grouping, e.g. 24000 -> "24.000".
fn format_int_it(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
