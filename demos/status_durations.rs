use chrono::Utc;
use dotenv::dotenv;
use std::env;

use jira_api::{DurationAggregator, JiraClient, JiraConfig, TimeUnit};

/// 課題のステータス別滞在時間を表示する
///
/// ```
/// cargo run --example status_durations -- WE-44 hours --exclude-weekends
/// ```
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let mut args = env::args().skip(1);
    let issue = args.next().ok_or("usage: status_durations <ISSUE> [UNIT] [--exclude-weekends]")?;
    let unit: TimeUnit = args.next().as_deref().unwrap_or("hours").parse()?;
    let include_weekends = !args.any(|arg| arg == "--exclude-weekends");

    let client = JiraClient::new(JiraConfig::from_env()?)?;

    let transitions = client.get_issue_transition_history(&issue).await?;
    println!("📋 {} transitions for {}", transitions.len(), issue);
    for transition in &transitions {
        println!(
            "  {}  {} → {}",
            transition.timestamp.format("%Y-%m-%d %H:%M"),
            transition.from,
            transition.to
        );
    }

    let durations =
        DurationAggregator::new().aggregate(&transitions, unit, include_weekends, Utc::now())?;

    let mut durations: Vec<_> = durations.into_iter().collect();
    durations.sort_by(|a, b| a.0.cmp(&b.0));

    println!(
        "\n⏱️  Time in status ({}, weekends {})",
        unit,
        if include_weekends { "included" } else { "excluded" }
    );
    for (status, value) in durations {
        println!("  {:<20} {:>10.2}", status, value);
    }

    Ok(())
}
