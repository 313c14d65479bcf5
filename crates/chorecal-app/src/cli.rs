//! Command-line surface of the chore calendar.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use chorecal_core::types::{CalendarView, Frequency};

#[derive(Debug, Parser)]
#[command(name = "chorecal", version, about = "Chore-tracking calendar")]
pub struct Cli {
    /// Override the store path from configuration.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a chore, one-off or recurring.
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Anchor date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<String>,
        /// Display color; defaults to the first palette color.
        #[arg(long)]
        color: Option<String>,
        /// Recurrence frequency; omit for a one-off chore.
        #[arg(long, value_enum)]
        repeat: Option<FrequencyArg>,
        /// Inclusive series end date (YYYY-MM-DD); requires --repeat.
        #[arg(long, requires = "repeat")]
        until: Option<String>,
    },
    /// List every chore with its id and rule.
    List,
    /// Render a calendar view around a reference date.
    View {
        /// Granularity; defaults to the configured view.
        #[arg(value_enum)]
        view: Option<ViewArg>,
        /// Reference date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
    /// Toggle completion of one occurrence.
    Done {
        id: uuid::Uuid,
        /// Occurrence date (YYYY-MM-DD).
        date: String,
    },
    /// Update fields of an existing chore.
    Edit {
        id: uuid::Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// New anchor date; reinterprets the whole series.
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long, value_enum, conflicts_with = "no_repeat")]
        repeat: Option<FrequencyArg>,
        #[arg(long, requires = "repeat")]
        until: Option<String>,
        /// Clear the recurrence rule, making the chore one-off.
        #[arg(long)]
        no_repeat: bool,
    },
    /// Remove a chore entirely.
    Delete { id: uuid::Uuid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrequencyArg {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

impl From<FrequencyArg> for Frequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Daily => Self::Daily,
            FrequencyArg::Weekly => Self::Weekly,
            FrequencyArg::Biweekly => Self::Biweekly,
            FrequencyArg::Monthly => Self::Monthly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Day,
    Week,
    Month,
}

impl From<ViewArg> for CalendarView {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Day => Self::Day,
            ViewArg::Week => Self::Week,
            ViewArg::Month => Self::Month,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_parses_recurrence_flags() {
        let cli = Cli::parse_from([
            "chorecal", "add", "Dishes", "--date", "2024-03-04", "--repeat", "weekly", "--until",
            "2024-06-01",
        ]);
        let Command::Add { repeat, until, .. } = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(repeat, Some(FrequencyArg::Weekly));
        assert_eq!(until.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn test_until_requires_repeat() {
        let result =
            Cli::try_parse_from(["chorecal", "add", "Dishes", "--until", "2024-06-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_view_defaults_are_optional() {
        let cli = Cli::parse_from(["chorecal", "view"]);
        let Command::View { view, date } = cli.command else {
            panic!("expected view command");
        };
        assert!(view.is_none());
        assert!(date.is_none());
    }
}
