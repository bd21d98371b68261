pub mod changelog_parser;
pub mod client;
pub mod duration;
pub mod error;
pub mod history;
pub mod issue_keys;
pub mod models;

pub use client::{Auth, JiraClient, JiraConfig};
pub use error::{Error, Result};
pub use models::*;

// Changelog parser re-exports
pub use changelog_parser::{ChangelogParser, parse_changelog_timestamp};

// History re-exports
pub use history::{ChangeRecord, FieldDelta, Transition, extract_transitions};

// Duration re-exports
pub use duration::{
    DurationAggregator, StatusDurations, TimeUnit, WeekendPolicy, aggregate_durations,
};

pub use issue_keys::IssueKeyMatcher;
