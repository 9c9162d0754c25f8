use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use sihra_api::config::parse_log_level;
use sihra_client::{ClientConfig, SihraApi, TeacherTimetable, build_teacher_timetable};
use sihra_core::models::session::Credential;
use sihra_core::schedule::{CanonicalDay, HiddenReason, PlacedSlot};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

const CELL_WIDTH: usize = 22;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Initialize logging
    let level = parse_log_level(&std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()));
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let teacher_id = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: sihra-timetable <teacher-id>"))?;

    let config = ClientConfig::from_env()?;
    let token = std::env::var("SIHRA_API_TOKEN")
        .map_err(|_| eyre!("SIHRA_API_TOKEN environment variable not set"))?;
    let api = SihraApi::new(&config, Credential::new(token)?)?;

    info!("Loading timetable for teacher {}", teacher_id);
    let week = build_teacher_timetable(&api, &teacher_id, config.grid).await?;

    print!("{}", render(&week));

    Ok(())
}

fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{}{}", text, " ".repeat(width - count))
    }
}

fn describe(placed: &PlacedSlot) -> String {
    let label = placed
        .slot
        .group_name
        .as_deref()
        .or(placed.slot.room.as_deref())
        .unwrap_or("");
    format!("{}-{} {}", placed.start, placed.end, label)
}

fn describe_hidden(reason: &HiddenReason) -> String {
    match reason {
        HiddenReason::UnmatchedDay { day } => format!("unrecognised day {:?}", day),
        HiddenReason::InvalidTime { value } => format!("invalid time {:?}", value),
        HiddenReason::EmptyRange => "ends before it starts".to_string(),
        HiddenReason::OutsideWindow => "starts outside the displayed hours".to_string(),
        HiddenReason::BelowMinimumHeight { height_px } => {
            format!("too short to display ({:.0}px)", height_px)
        }
    }
}

/// Plain-text grid: one line per hour, more when a cell holds several sessions.
fn render(week: &TeacherTimetable) -> String {
    let timetable = &week.timetable;
    let mut out = String::new();

    out.push_str(&format!("Teacher {} ({} groups)\n\n", week.teacher_id, week.groups.len()));

    out.push_str("      ");
    for day in CanonicalDay::ALL {
        out.push_str(&format!("| {}", fit(day.label(), CELL_WIDTH)));
    }
    out.push('\n');

    for row in &timetable.rows {
        let depth = CanonicalDay::ALL
            .iter()
            .map(|day| timetable.cell(*day, row.index).len())
            .max()
            .unwrap_or(0)
            .max(1);

        for line in 0..depth {
            if line == 0 {
                out.push_str(&format!("{} ", row.start));
            } else {
                out.push_str("      ");
            }
            for day in CanonicalDay::ALL {
                let text = timetable
                    .cell(day, row.index)
                    .get(line)
                    .map(describe)
                    .unwrap_or_default();
                out.push_str(&format!("| {}", fit(&text, CELL_WIDTH)));
            }
            out.push('\n');
        }
    }

    if !timetable.hidden.is_empty() {
        out.push_str("\nNot shown:\n");
        for hidden in &timetable.hidden {
            out.push_str(&format!(
                "  session {} ({} {}-{}): {}\n",
                hidden.slot.id,
                hidden.slot.day,
                hidden.slot.start_time,
                hidden.slot.end_time,
                describe_hidden(&hidden.reason)
            ));
        }
    }

    if !week.failed_groups.is_empty() {
        out.push_str("\nCould not load:\n");
        for failed in &week.failed_groups {
            out.push_str(&format!("  {}: {}\n", failed.group.name, failed.error));
        }
    }

    out
}
