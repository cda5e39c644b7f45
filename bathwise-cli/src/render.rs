//! Human-readable output for the terminal.

use std::fmt::{self, Write};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use bathwise_core::catalog::SubProtocolOption;
use bathwise_core::explain::{
    build_suggestion_explanation, explain_recommendation, MEDICAL_DISCLAIMER,
};
use bathwise_core::home::{HomeOrchestrationContract, HomeSuggestion};
use bathwise_core::model::{ActiveState, BathRecommendation};

pub fn recommendation(rec: &BathRecommendation) -> Result<String, fmt::Error> {
    let mut out = String::new();

    let title = rec
        .theme_title
        .as_deref()
        .unwrap_or_else(|| rec.persona_code.label_ko());
    writeln!(out, "{title} ({})", rec.persona_code)?;
    writeln!(out, "  id:        {}", rec.id)?;
    writeln!(
        out,
        "  bath:      {} {}°C ({}~{}°C)",
        rec.bath_type.label_ko(),
        rec.temperature.recommended,
        rec.temperature.min,
        rec.temperature.max
    )?;
    match rec.duration_minutes {
        Some(minutes) => writeln!(out, "  duration:  {minutes}분")?,
        None => writeln!(out, "  duration:  자유롭게")?,
    }
    if !rec.ingredients.is_empty() {
        let names: Vec<&str> = rec.ingredients.iter().map(|i| i.name_ko.as_str()).collect();
        writeln!(out, "  scents:    {}", names.join(", "))?;
    }
    if let Some(music) = &rec.music_track_id {
        writeln!(out, "  music:     {music}")?;
    }
    if let Some(ambience) = &rec.ambience_track_id {
        writeln!(out, "  ambience:  {ambience}")?;
    }
    writeln!(out, "  lighting:  {}", rec.lighting)?;
    if let Some(blocks) = &rec.behavior_blocks {
        for block in blocks {
            writeln!(out, "  - {block}")?;
        }
    }

    // Blocking rules changed the routine; advisories only inform.
    let marker = if rec.is_safety_blocked() { "!!" } else { "!" };
    for warning in &rec.safety_warnings {
        writeln!(out, "  {marker} {warning}")?;
    }

    writeln!(out)?;
    for line in explain_recommendation(rec) {
        writeln!(out, "  · {line}")?;
    }
    writeln!(out, "\n{MEDICAL_DISCLAIMER}")?;
    Ok(out)
}

fn suggestion_line(suggestion: &HomeSuggestion) -> String {
    format!(
        "[{}] {} - {} ({}분)",
        suggestion.rank, suggestion.title, suggestion.subtitle, suggestion.duration_minutes
    )
}

pub fn home(
    contract: &HomeOrchestrationContract,
    state: ActiveState,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", contract.today_signal_label)?;
    let adjusted = if contract.engine_conflict_resolved {
        ", adjusted for time of day"
    } else {
        ""
    };
    writeln!(
        out,
        "mode: {} (base {}){adjusted}",
        contract.selected_mode, contract.base_mode
    )?;
    if let Some(notice) = &contract.fallback_notice {
        writeln!(out, "note: {notice}")?;
    }

    let primary = &contract.primary_suggestion;
    let explanation = build_suggestion_explanation(primary, state, contract.selected_mode);
    writeln!(out, "\n{}", suggestion_line(primary))?;
    writeln!(out, "    {}", explanation.headline)?;
    for reason in &explanation.reasons {
        writeln!(out, "    · {reason}")?;
    }

    for suggestion in &contract.secondary_suggestions {
        writeln!(out, "{}", suggestion_line(suggestion))?;
    }

    writeln!(out, "\n{}", explanation.disclosure)?;
    Ok(out)
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Persona")]
    persona: String,
    #[tabled(rename = "Bath")]
    bath: String,
    #[tabled(rename = "Minutes")]
    minutes: String,
    #[tabled(rename = "Feedback")]
    feedback: String,
}

pub fn history_table(entries: &[BathRecommendation]) -> String {
    let rows: Vec<HistoryRow> = entries
        .iter()
        .map(|rec| HistoryRow {
            id: rec.id.clone(),
            created: rec.created_at.format("%Y-%m-%d %H:%M").to_string(),
            mode: match &rec.theme_id {
                Some(theme) => format!("trip:{theme}"),
                None => "care".to_string(),
            },
            persona: rec.persona_code.to_string(),
            bath: format!("{} {}°C", rec.bath_type, rec.temperature.recommended),
            minutes: rec
                .duration_minutes
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string()),
            feedback: rec
                .feedback
                .as_ref()
                .map(|f| f.rating.to_string())
                .unwrap_or_default(),
        })
        .collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "Option")]
    id: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Minutes")]
    delta: String,
    #[tabled(rename = "Best in")]
    environment: String,
}

pub fn options_table(options: &[&SubProtocolOption]) -> String {
    let rows: Vec<OptionRow> = options
        .iter()
        .map(|option| OptionRow {
            id: option.id.clone(),
            label: option.label.clone(),
            delta: format!("{:+}", option.duration_delta),
            environment: option
                .environment_bias
                .map(|env| env.label_ko().to_string())
                .unwrap_or_default(),
        })
        .collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}
