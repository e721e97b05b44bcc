use std::{
    env,
    io::{self, Write},
    iter::Peekable,
    process::{Command, Stdio},
};

use anyhow::Context;
use chrono::{Local, NaiveDate};

use weekgrid::{
    app::ScheduleState,
    config::{Config, ConfigError, View},
    grid::{self, DayColumn, DayLayout, PlacedEvent, WeekLayout},
    sample::sample_schedule,
    schedule::event::{Category, DepartmentFilter},
    schedule::time::{TimeError, format_hhmm},
    schedule::window::DayWindow,
};

pub const USAGE: &str = "Usage: weekgrid [--week [YYYY-MM-DD]] [--day [YYYY-MM-DD]] [--agenda [YYYY-MM-DD]] [--department NAME] [--sample]";

const CELL_WIDTH: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CliMode {
    pub view: Option<View>,
    pub date: Option<NaiveDate>,
    pub filter: DepartmentFilter,
    pub sample: bool,
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(env::args().skip(1))
}

fn parse_args<I>(raw: I) -> Result<CliMode, String>
where
    I: IntoIterator<Item = String>,
{
    let mut view = None;
    let mut date = None;
    let mut filter = DepartmentFilter::All;
    let mut sample = false;
    let mut args = raw.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--week" => {
                view = Some(View::Week);
                date = take_date(&mut args)?;
            }
            "--day" => {
                view = Some(View::Day);
                date = take_date(&mut args)?;
            }
            "--agenda" => {
                view = Some(View::Agenda);
                date = take_date(&mut args)?;
            }
            "--department" => {
                let Some(name) = args.next() else {
                    return Err("--department requires a value".to_string());
                };
                filter = DepartmentFilter::parse(&name).ok_or_else(|| {
                    format!(
                        "Unknown department '{}'. Use all, HR, Engineering, Marketing or Sales.",
                        name
                    )
                })?;
            }
            "--sample" => {
                sample = true;
            }
            "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(CliMode {
        view,
        date,
        filter,
        sample,
    })
}

fn take_date<I>(args: &mut Peekable<I>) -> Result<Option<NaiveDate>, String>
where
    I: Iterator<Item = String>,
{
    let Some(next) = args.peek() else {
        return Ok(None);
    };
    if next.starts_with("--") {
        return Ok(None);
    }

    let date_str = args.next().expect("peeked value must exist");
    NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD.", date_str))
}

fn resolve_view(selected: Option<View>, config: &Config) -> Result<View, ConfigError> {
    match selected {
        Some(view) => Ok(view),
        None => config.default_view(),
    }
}

pub fn run(mode: CliMode) -> anyhow::Result<()> {
    let config = Config::load_or_create().context("failed to load configuration")?;
    let window = config
        .day_window()
        .context("invalid [schedule] section in config")?;
    let week_start = config
        .week_start()
        .context("invalid [ui] section in config")?;
    let view = resolve_view(mode.view, &config).context("invalid [ui] section in config")?;

    let anchor = mode.date.unwrap_or_else(|| Local::now().date_naive());
    let mut state = ScheduleState::new(anchor)
        .with_window(window)
        .with_week_start(week_start);
    state.filter = mode.filter;

    if mode.sample {
        sample_schedule(&mut state);
    }

    match view {
        View::Week => {
            let layout = grid::week::calculate_layout(&state);
            let text = render_week(&layout, &state.window, state.filter)?;
            println!("{text}");
        }
        View::Day => {
            let state = state.with_window(DayWindow::full_day());
            let layout = grid::day::calculate_layout(&state);
            let text = render_day(&layout, &state.window, state.filter)?;
            println!("{text}");
        }
        View::Agenda => {
            let agenda = format_agenda_text(&state)?;
            display_with_pager(&agenda)?;
        }
    }

    Ok(())
}

fn render_week(
    layout: &WeekLayout,
    window: &DayWindow,
    filter: DepartmentFilter,
) -> Result<String, TimeError> {
    render_columns(&layout.days, window, filter)
}

fn render_day(
    layout: &DayLayout,
    window: &DayWindow,
    filter: DepartmentFilter,
) -> Result<String, TimeError> {
    let column = DayColumn {
        date: layout.date,
        events: layout.events.clone(),
    };
    render_columns(std::slice::from_ref(&column), window, filter)
}

fn render_columns(
    days: &[DayColumn],
    window: &DayWindow,
    filter: DepartmentFilter,
) -> Result<String, TimeError> {
    let rows = window.slot_count() as usize;

    let mut columns: Vec<Vec<String>> = Vec::new();
    for day in days {
        let mut cells = vec![String::new(); rows];
        for placed in &day.events {
            paint_event(&mut cells, placed, rows);
        }
        columns.push(cells);
    }

    let mut lines = Vec::new();
    if let DepartmentFilter::Only(_) = filter {
        lines.push(format!("Department: {}", filter.label()));
    }
    let header: Vec<String> = days
        .iter()
        .map(|day| format!("{:<width$}", day.date.format("%a %d").to_string(), width = CELL_WIDTH))
        .collect();
    lines.push(format!("{:>5}  {}", "", header.join(" ")));

    for (row, minute) in window.slots().into_iter().enumerate() {
        let label = format_hhmm(minute)?;
        let cells: Vec<String> = columns
            .iter()
            .map(|cells| format!("{:<width$}", cells[row], width = CELL_WIDTH))
            .collect();
        lines.push(format!("{:>5}  {}", label, cells.join(" ")));
    }

    Ok(lines.join("\n"))
}

fn paint_event(cells: &mut [String], placed: &PlacedEvent, rows: usize) {
    let scale = rows as f64;
    let first = (placed.top * scale).round() as usize;
    let span = ((placed.height * scale).round() as usize).max(1);
    let marker = if placed.has_conflict { "!" } else { " " };

    for offset in 0..span {
        let Some(cell) = cells.get_mut(first + offset) else {
            break;
        };

        let text = if offset == 0 {
            format!("{}{}", marker, placed.event.title)
        } else {
            format!("{}|", marker)
        };

        if cell.is_empty() {
            *cell = truncate_to_width(&text, CELL_WIDTH);
        } else {
            let merged = format!("{}/{}", cell, text.trim_start());
            *cell = truncate_to_width(&merged, CELL_WIDTH);
        }
    }
}

fn format_agenda_text(state: &ScheduleState) -> Result<String, TimeError> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Agenda – {}",
        state.anchor.format("%A, %B %d, %Y")
    ));
    if let DepartmentFilter::Only(_) = state.filter {
        lines.push(format!("Department: {}", state.filter.label()));
    }
    lines.push(String::new());

    let events: Vec<_> = state
        .events_on(state.anchor)
        .into_iter()
        .filter(|event| state.filter.matches(event.department))
        .collect();

    if events.is_empty() {
        lines.push("No events scheduled.".to_string());
    } else {
        for event in events {
            let time_label = format!(
                "{}-{}",
                format_hhmm(event.start_minute)?,
                format_hhmm(event.end_minute)?
            );
            let mut line = format!(
                "- {:<13} {} [{}]",
                time_label,
                event.title,
                event.department.label()
            );
            if event.category != Category::Work {
                line.push_str(&format!(" ({})", event.category.label()));
            }
            lines.push(line);
        }
    }

    Ok(lines.join("\n"))
}

fn truncate_to_width(line: &str, width: usize) -> String {
    if width > 0 && line.chars().count() > width {
        let mut truncated = line
            .chars()
            .take(width.saturating_sub(1))
            .collect::<String>();
        truncated.push('…');
        truncated
    } else {
        line.to_string()
    }
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            print!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            print!("{text}");
        }
    }

    Ok(())
}
