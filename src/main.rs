use anyhow::Context;
use boxoffice::config::{Config, LogFormat};
use boxoffice::core::Notification;
use boxoffice::reports::models::{RevenueView, StatusFilter};
use boxoffice::reports::{RevenueDashboard, RevenueFilters};
use boxoffice::tickets::models::TicketQuery;
use boxoffice::tickets::{HttpTicketClient, TicketFetcher, TicketStatus, TicketTable};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Cinema ticket revenue report
#[derive(Debug, Parser)]
#[command(name = "boxoffice", version)]
struct Cli {
    /// Only tickets for this movie id
    #[arg(long)]
    movie: Option<String>,

    /// Only tickets for this cinema id
    #[arg(long)]
    cinema: Option<String>,

    /// First booking day (YYYY-MM-DD, inclusive)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last booking day (YYYY-MM-DD, inclusive)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Only tickets with exactly this status
    #[arg(long, conflicts_with = "revenue_only")]
    status: Option<String>,

    /// Only tickets whose status counts as revenue
    #[arg(long)]
    revenue_only: bool,

    /// Print the ticket list instead of the revenue report
    #[arg(long)]
    tickets: bool,

    /// Ticket list page (1-based)
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Ticket list page size
    #[arg(long, env = "TICKET_PAGE_SIZE", default_value_t = 10)]
    page_size: u32,

    /// Ticket list search text
    #[arg(long)]
    search: Option<String>,

    /// Emit JSON instead of text tables
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn filters(&self) -> RevenueFilters {
        let status = if self.revenue_only {
            Some(StatusFilter::RevenueOnly)
        } else {
            self.status
                .as_deref()
                .map(|s| StatusFilter::Exact(TicketStatus::parse(s)))
        };

        RevenueFilters {
            movie_id: self.movie.clone(),
            cinema_id: self.cinema.clone(),
            date_start: self.from,
            date_end: self.to,
            status,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(config.app.log_format);

    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Ticket backend: {}", config.api.base_url);

    let client = HttpTicketClient::new(&config.api)?;

    if cli.tickets {
        let clock = config.report.clock()?;
        let fetcher = TicketFetcher::new(client);
        let query = TicketQuery::for_page(cli.page, cli.page_size, cli.search.clone());
        let outcome = fetcher.fetch(&query).await;
        let table = TicketTable::build(
            &outcome.page,
            cli.page,
            cli.page_size,
            config.report.currency,
            &clock,
        );

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&table)?);
        } else {
            print_notification(outcome.notification.as_ref());
            print_ticket_table(&table);
        }
        return Ok(());
    }

    let dashboard = RevenueDashboard::new(
        client,
        config.report.aggregation_options()?,
        config.report.presenter(),
    )
    .with_fetch_limit(config.report.fetch_limit);

    dashboard.refresh(cli.filters()).await?;
    let state = dashboard.snapshot().await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_notification(state.notification.as_ref());
        print_revenue(&state.view);
    }

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "boxoffice=info".into());

    // Logs go to stderr so report output on stdout stays clean
    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn print_notification(notification: Option<&Notification>) {
    if let Some(n) = notification {
        eprintln!("[{:?}] {}", n.level, n.message);
    }
}

fn print_revenue(view: &RevenueView) {
    println!("Total revenue: {} ({} tickets)", view.grand_total_display, view.ticket_count);

    println!("\nRevenue by movie");
    for row in &view.movie_rows {
        println!(
            "  {:<40} {:>18} {:>6} {:>7}",
            row.label, row.revenue, row.ticket_count, row.percentage
        );
    }

    println!("\nRevenue by cinema");
    for row in &view.cinema_rows {
        println!(
            "  {:<40} {:>18} {:>6} {:>7}",
            row.label, row.revenue, row.ticket_count, row.percentage
        );
    }

    println!("\nTop movies");
    for slice in &view.movie_pie {
        println!("  {:<40} {:>18} {:>6.1}%", slice.label, slice.display, slice.percentage);
    }

    println!("\nDaily trend");
    for point in &view.daily_line {
        println!("  {:<12} {:>18}", point.label, point.display);
    }
}

fn print_ticket_table(table: &TicketTable) {
    for row in &table.rows {
        println!(
            "{:>4}  {:<20} {:<30} {:<28} {:<10} {:<6} {:<12} {:>14}  {:<22} {}",
            row.ordinal,
            row.customer,
            row.movie,
            row.venue,
            row.show_date,
            row.show_time,
            row.seats,
            row.price,
            row.status,
            row.booked_at
        );
    }
    println!("{}", table.range_label());
}
