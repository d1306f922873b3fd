use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Normalizer, RunContext, aggregate};
use crate::errors::AppResult;
use crate::export::export_records;
use crate::import::load_events;
use crate::models::DailyRecord;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::mins2readable;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use crate::utils::time::format_time;

/// Handle the `inspect` command: aggregate the input and print the days.
pub fn handle(cmd: &Commands, cfg: Config) -> AppResult<()> {
    if let Commands::Inspect {
        input,
        employee,
        xlsx,
    } = cmd
    {
        let path = expand_tilde(input.as_deref().unwrap_or(&cfg.paths.input));
        let mut ctx = RunContext::new(cfg);

        let normalizer = Normalizer::new(&ctx.config.normalizer)?;
        let events = load_events(
            &path,
            &ctx.config.input,
            &normalizer,
            ctx.config.aggregation.direction,
            &mut ctx.diagnostics,
        )?;
        let records = aggregate(&events, &ctx.config.aggregation, &mut ctx.diagnostics);

        // the filter accepts raw export names too
        let wanted = employee.as_deref().and_then(|e| normalizer.normalize(e));

        let selected: Vec<DailyRecord> = records
            .into_iter()
            .filter(|r| wanted.as_ref().is_none_or(|w| &r.employee == w))
            .collect();

        if let Some(file) = xlsx {
            let out = expand_tilde(file);
            export_records(&selected, &out, &ctx.config.output)?;
            success(format!("Daily records written to {}", out.display()));
        }

        let mut table = Table::new(vec!["Employee", "Date", "In", "Out", "Net", "Events", "Notes"]);
        for record in &selected {
            table.add_row(record_row(record));
        }

        if table.is_empty() {
            warning("No daily records found.");
            return Ok(());
        }

        header(format!("Daily records: {}", path.display()));
        print!("{}", table.render());
        info(format!(
            "{} day record(s), {} issue(s) logged",
            table.rows.len(),
            ctx.diagnostics.issues().len()
        ));
    }
    Ok(())
}

fn record_row(r: &DailyRecord) -> Vec<String> {
    let notes = match (r.incomplete, r.anomalous) {
        (true, _) => "incomplete",
        (_, true) => "anomalous, clamped",
        _ => "",
    };

    vec![
        r.employee.to_string(),
        r.date.format("%Y-%m-%d").to_string(),
        format_time(r.first_in),
        format_time(r.last_out),
        mins2readable(r.net_minutes(), false, false),
        r.event_count.to_string(),
        notes.to_string(),
    ]
}
