mod cli;
mod render;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use chorecal_core::config::load_config;
use chorecal_core::types::{CHORE_COLORS, CalendarView};
use chorecal_core::util::date::{date_key, parse_date};
use chorecal_service::chores::ChoreService;
use chorecal_store::model::{ChoreUpdate, NewChore, RecurrenceRule};
use chorecal_store::store::JsonStore;

use crate::cli::{Cli, Command};
use crate::render::{render_chore_list, render_view};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let store_path = cli
        .store
        .unwrap_or_else(|| config.storage.path.clone().into());
    tracing::debug!(path = %store_path.display(), "Opening chore store");
    let mut service = ChoreService::open(JsonStore::new(store_path))?;

    match cli.command {
        Command::Add {
            title,
            description,
            date,
            color,
            repeat,
            until,
        } => {
            let date = date.unwrap_or_else(|| date_key(today()));
            let color = color.unwrap_or_else(|| CHORE_COLORS[0].to_string());
            let recurrence = repeat.map(|frequency| RecurrenceRule {
                frequency: frequency.into(),
                end_date: until,
            });
            let chore = service.add(NewChore {
                title,
                description,
                date,
                color,
                recurrence,
            })?;
            println!("Added {}  {}", chore.id, chore.title);
        }
        Command::List => {
            print!("{}", render_chore_list(service.chores()));
        }
        Command::View { view, date } => {
            let view: CalendarView = view.map_or(config.calendar.default_view, Into::into);
            let reference = match date {
                Some(raw) => parse_date(&raw)?,
                None => today(),
            };
            print!("{}", render_view(view, reference, service.chores()));
        }
        Command::Done { id, date } => {
            let completed = service.toggle_complete(id, &date)?;
            let state = if completed { "done" } else { "not done" };
            println!("{date} marked {state}");
        }
        Command::Edit {
            id,
            title,
            description,
            date,
            color,
            repeat,
            until,
            no_repeat,
        } => {
            let recurrence = if no_repeat {
                Some(None)
            } else {
                repeat.map(|frequency| {
                    Some(RecurrenceRule {
                        frequency: frequency.into(),
                        end_date: until,
                    })
                })
            };
            let chore = service.update(
                id,
                ChoreUpdate {
                    title,
                    description,
                    date,
                    color,
                    recurrence,
                },
            )?;
            println!("Updated {}  {}", chore.id, chore.title);
        }
        Command::Delete { id } => {
            service.delete(id)?;
            println!("Deleted {id}");
        }
    }

    Ok(())
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
