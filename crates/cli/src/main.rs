//! Podtrack CLI - quarter-week dashboards for accountability pods.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use podtrack_calendar::QuarterCalendar;
use podtrack_core::{Pod, PodId, UserId, WeekStartDay, MAX_MILESTONE_WEEK};
use podtrack_progress::{
    check_ins_for_week, milestones_by_week, Dashboard, PodReport, Scope, Snapshot, UserSummary,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "podtrack")]
#[command(about = "Quarterly goal tracking for accountability pods", long_about = None)]
struct Cli {
    /// Snapshot file (JSON)
    #[arg(long, env = "PODTRACK_SNAPSHOT", default_value = "podtrack.json", global = true)]
    snapshot: PathBuf,

    /// Pod to report on (defaults to the first pod in the snapshot)
    #[arg(long, global = true)]
    pod: Option<String>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Override the pod's week start day (0 = Sunday .. 6 = Saturday)
    #[arg(long, global = true)]
    week_start: Option<u8>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the weeks of the quarter that have begun
    Weeks {
        /// List all twelve tracked weeks
        #[arg(long)]
        all: bool,
    },
    /// Show a member's dashboard
    Dashboard {
        /// User ID
        #[arg(long)]
        user: String,
        /// Week number (defaults to the current week)
        #[arg(long)]
        week: Option<u32>,
        /// Quarter label (defaults to the current quarter)
        #[arg(long)]
        quarter: Option<String>,
    },
    /// Show the pod's team analytics
    Analytics {
        /// Week number (defaults to the current week)
        #[arg(long)]
        week: Option<u32>,
        /// Quarter label (defaults to the current quarter)
        #[arg(long)]
        quarter: Option<String>,
    },
    /// Show a member's lifetime totals
    Profile {
        /// User ID
        #[arg(long)]
        user: String,
    },
    /// Show a member's milestones by week
    Milestones {
        /// User ID
        #[arg(long)]
        user: String,
    },
    /// Show the pod's check-ins for a week
    CheckIns {
        /// Week number (defaults to the current week)
        #[arg(long)]
        week: Option<u32>,
    },
    /// Check the snapshot for invalid or inconsistent entities
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let snapshot = load_snapshot(&cli.snapshot).await?;
    info!(
        path = %cli.snapshot.display(),
        pods = snapshot.pods().len(),
        goals = snapshot.goals().len(),
        milestones = snapshot.milestones().len(),
        "loaded snapshot"
    );

    snapshot.validate()?;
    if let Commands::Validate = cli.command {
        println!("Snapshot OK");
        return Ok(());
    }

    let pod = select_pod(&snapshot, cli.pod.as_deref())?;
    let week_start_day = match cli.week_start {
        Some(day) => WeekStartDay::new(day)?,
        None => pod.settings.week_start_day,
    };
    let today = cli.today.unwrap_or_else(podtrack_calendar::today);
    let calendar = QuarterCalendar::for_date(today, week_start_day);
    let current_week = calendar.current_week_number(today);
    let current_quarter = calendar.quarter().label();
    debug!(%today, %week_start_day, current_week, quarter = %current_quarter, "resolved calendar");

    match cli.command {
        Commands::Weeks { all } => {
            let weeks = if all { calendar.all_weeks() } else { calendar.weeks_elapsed(today) };
            if cli.json {
                return print_json(&weeks);
            }
            println!("{} - {} (weeks start {})", pod.name, current_quarter, week_start_day);
            for week in weeks {
                let marker = if week.number == current_week { "*" } else { " " };
                println!(" {} Week {:>2}  {}", marker, week.number, week.date_range());
            }
        }
        Commands::Dashboard { user, week, quarter } => {
            let user_id = parse_user(&user)?;
            let quarter = quarter.unwrap_or_else(|| current_quarter.clone());
            let week = check_week(week.unwrap_or(current_week))?;
            let dashboard = Dashboard::for_user(&snapshot, user_id, &quarter, week);
            if cli.json {
                return print_json(&dashboard);
            }

            let name = snapshot.user(user_id).map_or(user.as_str(), |u| u.name.as_str());
            println!("Dashboard: {} ({})", name, quarter);
            println!("  Life goals: {}%", dashboard.by_type.life);
            println!("  Work goals: {}%", dashboard.by_type.work);
            println!("  Overall:    {}%", dashboard.average_progress);
            println!(
                "  Goals: {} completed, {} in progress, {} not started",
                dashboard.goal_status.completed,
                dashboard.goal_status.in_progress,
                dashboard.goal_status.not_started,
            );
            println!("  Week {} ({})", week, calendar.week_date_range(week));
            print_weekly(&dashboard.weekly);
        }
        Commands::Analytics { week, quarter } => {
            let quarter = quarter.unwrap_or_else(|| current_quarter.clone());
            let week = check_week(week.unwrap_or(current_week))?;
            let report = PodReport::build(&snapshot, pod.id, &quarter, week)
                .ok_or_else(|| anyhow!("Pod not found: {}", pod.id))?;
            if cli.json {
                return print_json(&report);
            }

            println!("Analytics: {} ({})", pod.name, quarter);
            println!("  Goal completion: {}%", report.completion_rate);
            println!(
                "  Goals: {} completed, {} in progress, {} not started",
                report.goal_status.completed,
                report.goal_status.in_progress,
                report.goal_status.not_started,
            );
            println!("  Week {} ({})", week, calendar.week_date_range(week));
            print_weekly(&report.weekly);
            println!("  Members");
            for (rank, stats) in report.members.iter().enumerate() {
                println!(
                    "  {:>2}. {:<20} {:>3}% of {} goals | week: {}/{} milestones",
                    rank + 1,
                    stats.member.name,
                    stats.completion_rate,
                    stats.goals_count,
                    stats.weekly_breakdown.completed,
                    stats.weekly_breakdown.total,
                );
            }
        }
        Commands::Profile { user } => {
            let user_id = parse_user(&user)?;
            let summary = UserSummary::for_user(&snapshot, user_id);
            if cli.json {
                return print_json(&summary);
            }

            let name = snapshot.user(user_id).map_or(user.as_str(), |u| u.name.as_str());
            println!("Profile: {}", name);
            println!(
                "  Goals:      {}/{} completed ({}%)",
                summary.completed_goals, summary.total_goals, summary.goal_completion_rate
            );
            println!(
                "  Milestones: {}/{} completed ({}%)",
                summary.completed_milestones, summary.total_milestones, summary.milestone_completion_rate
            );
        }
        Commands::Milestones { user } => {
            let user_id = parse_user(&user)?;
            let milestones = snapshot.milestones_in_scope(&Scope::new().user(user_id));
            let grouped = milestones_by_week(milestones.iter().copied());
            if cli.json {
                return print_json(&grouped);
            }

            if grouped.is_empty() {
                println!("No milestones");
            }
            for (week, items) in grouped {
                println!("Week {} ({})", week, calendar.week_date_range(week));
                for milestone in items {
                    println!("  [{}] {}", milestone.status.as_str(), milestone.title);
                }
            }
        }
        Commands::CheckIns { week } => {
            let week = check_week(week.unwrap_or(current_week))?;
            let check_ins = check_ins_for_week(&snapshot, pod.id, week);
            if cli.json {
                return print_json(&check_ins);
            }

            println!("Check-ins: {} week {} ({})", pod.name, week, calendar.week_date_range(week));
            if check_ins.is_empty() {
                println!("  No check-ins yet");
            }
            for check_in in check_ins {
                let author = snapshot
                    .user(check_in.user_id)
                    .map_or_else(|| check_in.user_id.to_string(), |u| u.name.clone());
                println!("  {}", author);
                print_field("Update", &check_in.content);
                print_field("Wins", &check_in.wins);
                print_field("Challenges", &check_in.challenges);
                print_field("Next steps", &check_in.next_steps);
            }
        }
        Commands::Validate => unreachable!("handled before pod selection"),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn load_snapshot(path: &std::path::Path) -> Result<Snapshot> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("parsing snapshot {}", path.display()))?;
    Ok(snapshot)
}

fn select_pod<'a>(snapshot: &'a Snapshot, id: Option<&str>) -> Result<&'a Pod> {
    match id {
        Some(id) => {
            let pod_id: PodId = id.parse().map_err(|_| anyhow!("Invalid pod ID: {}", id))?;
            snapshot
                .pod(pod_id)
                .ok_or_else(|| anyhow!("Pod not found: {}", pod_id))
        }
        None => match snapshot.pods().first() {
            Some(pod) => Ok(pod),
            None => bail!("Snapshot contains no pods"),
        },
    }
}

fn check_week(week: u32) -> Result<u32> {
    if !(1..=MAX_MILESTONE_WEEK).contains(&week) {
        bail!("Week must be between 1 and {}, got {}", MAX_MILESTONE_WEEK, week);
    }
    Ok(week)
}

fn parse_user(id: &str) -> Result<UserId> {
    id.parse().map_err(|_| anyhow!("Invalid user ID: {}", id))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_weekly(weekly: &podtrack_progress::WeeklyBreakdown) {
    println!(
        "    {}/{} milestones completed ({}%), {} in progress, {} not started",
        weekly.completed, weekly.total, weekly.rate, weekly.in_progress, weekly.not_started,
    );
}

fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("    {}: {}", label, value);
    }
}
