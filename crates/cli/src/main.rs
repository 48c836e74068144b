//! Command Line Interface for the ecosystem dashboard.
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use ecodash_data::prelude::*;
use ecodash_domain::entities::MeetingRecord;
use ecodash_domain::enums::{Currency, Division, TrackStatus};
use ecodash_meeting::prelude::*;
use ecodash_simulation::prelude::*;
use dotenv::dotenv;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ecodash")]
#[command(about = "Ecosystem dashboard: metrics, growth simulator and weekly meeting", long_about = None)]
struct Cli {
    /// Storage backend (memory, file, postgres); overrides ECODASH_STORE
    #[arg(long, global = true)]
    store: Option<StoreBackend>,

    /// JSON data file; overrides ECODASH_DATA_FILE
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dashboard metrics and daily reports
    Dashboard {
        #[command(subcommand)]
        action: DashboardCommand,
    },
    /// Run the growth projection on the stored simulator state
    Simulate {
        /// Derive the target by growing every current driver by this percent
        #[arg(short, long, allow_negative_numbers = true)]
        growth: Option<Decimal>,

        /// Store the simulator state and sync dashboard profit
        #[arg(long)]
        save: bool,

        /// Display currency (IDR or USD)
        #[arg(short, long, default_value = "IDR")]
        currency: Currency,
    },
    /// Weekly meeting record
    Meeting {
        #[command(subcommand)]
        action: MeetingCommand,
    },
    /// Selling price from cost and markup
    Price {
        /// Unit cost
        #[arg(long)]
        cost: Decimal,

        /// Markup in percent
        #[arg(long)]
        markup: Decimal,

        #[arg(short, long, default_value = "IDR")]
        currency: Currency,
    },
    /// Reset all business data to factory defaults
    Reset {
        /// Skip the confirmation check
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DashboardCommand {
    /// Print metrics, weekly sales and stock alerts
    Show,
    /// Update metrics, e.g. `netSales=142000000 returnRate=2.5`
    Update {
        #[arg(value_parser = parse_assignment, required = true)]
        values: Vec<(String, String)>,
    },
    /// Extract figures from a free-text daily report
    Report { text: String },
}

#[derive(Subcommand)]
enum MeetingCommand {
    /// Print the meeting record
    Show,
    /// Flip a KPI row between on and off track
    ToggleKpi { division: Division, index: usize },
    /// Append a KPI row to a division table
    AddKpi { division: Division },
    /// Rate a division from 0 to 10
    Rate { division: Division, value: Decimal },
    /// Copy off-track KPIs and rocks into the issue list
    PullIssues,
    /// Flip a to-do between not done and done
    ToggleTodo { index: usize },
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))
}

fn signed_percent(pct: Decimal) -> String {
    let sign = if pct > Decimal::ZERO { "+" } else { "" };
    format!("{sign}{pct}%")
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = StoreConfig::from_env()?;
    if let Some(backend) = cli.store {
        config = config.with_backend(backend);
    }
    if let Some(path) = cli.data_file {
        config = config.with_data_file(path);
    }
    let service = EcosystemService::new(config.open().await?);

    match cli.command {
        Commands::Dashboard { action } => run_dashboard(&service, action).await?,
        Commands::Simulate {
            growth,
            save,
            currency,
        } => {
            let mut simulator = service.growth().await?;
            if let Some(pct) = growth {
                simulator.target = apply_global_growth(&simulator.current, pct);
                println!("📈 Target set to {} on every driver", signed_percent(pct));
            }

            let report = ProjectionReport::build(&simulator.current, &simulator.target);
            print_projection(&report, currency);

            if save {
                service.save_growth(simulator).await?;
                println!("✅ Simulator saved, dashboard profit synced");
            }
        }
        Commands::Meeting { action } => run_meeting(&service, action).await?,
        Commands::Price {
            cost,
            markup,
            currency,
        } => {
            let price = markup_price(cost, markup);
            println!(
                "Cost {} + {markup}% markup = {}",
                currency.format(cost),
                currency.format(price)
            );
        }
        Commands::Reset { yes } => {
            if !yes {
                bail!("this permanently resets all business data; re-run with --yes");
            }
            service.reset().await?;
            println!("🧹 All business data reset to factory defaults");
        }
    }

    Ok(())
}

async fn run_dashboard(service: &EcosystemService, action: DashboardCommand) -> Result<()> {
    let idr = Currency::Idr;
    match action {
        DashboardCommand::Show => {
            let metrics = service.dashboard_metrics().await?;
            println!("{:<16} | {:>20}", "Metric", "Value");
            println!("{}", "-".repeat(39));
            println!("{:<16} | {:>20}", "GMV", idr.format(metrics.gmv));
            println!("{:<16} | {:>20}", "Net Sales", idr.format(metrics.net_sales));
            println!("{:<16} | {:>20}", "Profit", idr.format(metrics.profit));
            println!("{:<16} | {:>20}", "Sold Items", metrics.sold_items);
            println!("{:<16} | {:>19}%", "Discount Rate", metrics.discount_rate);
            println!("{:<16} | {:>19}%", "Return Rate", metrics.return_rate);

            println!("\nWeekly sales:");
            for point in service.sales_chart().await? {
                println!("  {:<4} {:>20}", point.name, idr.format(point.sales));
            }

            let alerts: Vec<_> = service
                .sku_data()
                .await?
                .into_iter()
                .filter(|item| item.needs_attention())
                .collect();
            if !alerts.is_empty() {
                println!("\n⚠️  Stock alerts:");
                for item in alerts {
                    println!("  {} {:<28} {:>5} ({:?})", item.sku, item.name, item.stock, item.status);
                }
            }
        }
        DashboardCommand::Update { values } => {
            let metrics = service.update_dashboard_metrics(values).await?;
            info!(?metrics, "dashboard metrics updated");
            println!("✅ Metrics updated");
        }
        DashboardCommand::Report { text } => {
            let changed = service.apply_daily_report(&text).await?;
            if changed.is_empty() {
                println!("No sales, profit or item figures found in the report");
            }
            for (field, value) in changed {
                println!("✅ {field} = {value}");
            }
        }
    }
    Ok(())
}

async fn run_meeting(service: &EcosystemService, action: MeetingCommand) -> Result<()> {
    let mut session = MeetingSession::new(service.meeting().await?);

    let action = match action {
        MeetingCommand::Show => {
            print_meeting(session.record());
            println!("\nAverage rating: {}", format_rating(session.average_rating()));
            println!("Timer: {}", MeetingTimer::default().display());
            return Ok(());
        }
        MeetingCommand::ToggleKpi { division, index } => {
            MeetingAction::ToggleKpiStatus { division, index }
        }
        MeetingCommand::AddKpi { division } => MeetingAction::AddKpiRow(division),
        MeetingCommand::Rate { division, value } => MeetingAction::SetRating { division, value },
        MeetingCommand::PullIssues => MeetingAction::PullOffTrackIssues,
        MeetingCommand::ToggleTodo { index } => MeetingAction::ToggleTodo(index),
    };

    session.dispatch(action);
    if !session.is_dirty() {
        println!("Nothing changed");
        return Ok(());
    }
    service.save_meeting(session.record().clone()).await?;
    session.mark_saved();
    println!("✅ Meeting saved");
    Ok(())
}

fn print_projection(report: &ProjectionReport, currency: Currency) {
    println!("{:<12} | {:>22} | {:>22}", "", "Current", "Target");
    println!("{}", "-".repeat(62));
    println!(
        "{:<12} | {:>22} | {:>22}",
        "Customers", report.current.customers, report.target.customers
    );
    println!(
        "{:<12} | {:>22} | {:>22}",
        "Revenue",
        currency.format(report.current.revenue),
        currency.format(report.target.revenue)
    );
    println!(
        "{:<12} | {:>22} | {:>22}",
        "Profit",
        currency.format(report.current.profit),
        currency.format(report.target.profit)
    );
    println!(
        "\nGrowth: {}% ({}), score index {}",
        report.growth_percent.round_dp(2),
        currency.format(report.profit_lift()),
        report.score_index
    );

    println!("\n{:<10} | {:>22} | {:>22}", "Step", "Change", "Level");
    println!("{}", "-".repeat(60));
    for step in &report.waterfall {
        let change = if step.is_total() {
            String::new()
        } else {
            let sign = if step.is_gain() { "+" } else { "" };
            format!("{sign}{}", currency.format(step.delta))
        };
        println!(
            "{:<10} | {:>22} | {:>22}",
            step.label,
            change,
            currency.format(step.range[1])
        );
    }
}

fn print_meeting(record: &MeetingRecord) {
    println!("📅 {}", record.date);
    println!(
        "Attendance: {}/{}",
        record.present_count(),
        record.attendance.len()
    );

    for division in Division::ALL {
        println!("\n[{}]", division.label());
        for (i, row) in record.kpi_table(division).iter().enumerate() {
            let mark = if row.status == TrackStatus::On { "on " } else { "OFF" };
            println!(
                "  {i}. {mark} {:<28} target {:<14} actual {}",
                row.kpi, row.target, row.realisasi
            );
        }
    }

    println!("\nRocks:");
    for rock in &record.rocks_table {
        println!("  {:?} {} - {}", rock.status, rock.owner, rock.goal);
    }
    println!("\nTo-dos:");
    for (i, todo) in record.todo_table.iter().enumerate() {
        println!("  {i}. {:?} {} ({})", todo.status, todo.task, todo.owner);
    }
    if !record.idt_issues.is_empty() {
        println!("\nIssues:");
        for issue in &record.idt_issues {
            println!("  - {issue}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_growth_is_a_value() {
        let cli = Cli::try_parse_from(["ecodash", "simulate", "--growth", "-10"]).unwrap();
        match cli.command {
            Commands::Simulate { growth, .. } => assert_eq!(growth, Some(Decimal::from(-10))),
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn test_signed_percent() {
        assert_eq!(signed_percent(Decimal::from(10)), "+10%");
        assert_eq!(signed_percent(Decimal::from(-10)), "-10%");
        assert_eq!(signed_percent(Decimal::ZERO), "0%");
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("netSales = 142000000").unwrap(),
            ("netSales".to_string(), "142000000".to_string())
        );
        assert!(parse_assignment("netSales").is_err());
    }
}
