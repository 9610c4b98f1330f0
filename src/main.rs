// src/main.rs

use anyhow::{bail, Context};
use cafe_pos::{
    models::catalog::Sweetness,
    services::Poller,
    views::{AdminDashboard, Navigation, StudioDashboard},
    AppConfig, AppState, ErrorOutcome,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cafe-pos", about = "Cafe point-of-sale client", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in as admin and keep the token for later commands
    Login {
        #[arg(long, env = "CAFE_USERNAME")]
        username: String,
        #[arg(long, env = "CAFE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored admin token
    Logout,
    /// Show the guest menu
    Menu {
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Place a guest order, e.g. `--item 3 --item 5:low`
    Order {
        #[arg(long = "item", required = true, value_name = "ID[:SWEETNESS]")]
        items: Vec<String>,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Live admin dashboard, refreshed on the poll interval
    Dashboard {
        /// Refresh once, print, and exit
        #[arg(long)]
        once: bool,
    },
    /// Nail studio overview (sample data)
    Studio {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cafe_pos=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let state = AppState::new(config).context("Failed to initialize the application state")?;

    match cli.command {
        Command::Login { username, password } => login(&state, username, password).await,
        Command::Logout => {
            state.auth_service.logout()?;
            println!("Signed out.");
            Ok(())
        }
        Command::Menu { category, search } => menu(&state, category, search).await,
        Command::Order { items, note } => order(&state, &items, note).await,
        Command::Dashboard { once } => dashboard(&state, once).await,
        Command::Studio { date } => {
            studio(date);
            Ok(())
        }
    }
}

async fn login(state: &AppState, username: String, password: String) -> anyhow::Result<()> {
    let mut view = state.login_view();
    view.form.username = username;
    view.form.password = password;

    match view.submit().await {
        Navigation::Admin => {
            println!("Signed in. Run `cafe-pos dashboard` to open the admin dashboard.");
            Ok(())
        }
        _ => bail!(view.error.unwrap_or_else(|| "Login failed".to_string())),
    }
}

async fn menu(state: &AppState, category: Option<i64>, search: Option<String>) -> anyhow::Result<()> {
    let mut view = state.guest_view();
    view.load().await;
    view.select_category(category);
    view.search_query = search.unwrap_or_default();

    let categories: Vec<String> = view
        .categories
        .iter()
        .map(|c| format!("[{}] {}", c.id, c.name))
        .collect();
    println!("Categories: {}", categories.join("  "));

    for p in view.filtered_products() {
        println!(
            "{:>4}  {} {:<28} {:>8}.-  {}{}",
            p.id,
            if p.has_image_icon() { "🖼" } else { p.icon_or_default() },
            p.name,
            p.price,
            p.category_name.as_deref().unwrap_or("-"),
            if p.has_sweetness { "  (sweetness adjustable)" } else { "" },
        );
    }
    Ok(())
}

fn parse_item(raw: &str) -> anyhow::Result<(i64, Option<Sweetness>)> {
    let (id, level) = match raw.split_once(':') {
        Some((id, level)) => (id, Some(level)),
        None => (raw, None),
    };
    let id = id
        .trim()
        .parse::<i64>()
        .with_context(|| format!("'{}' is not a product id", id))?;
    let level = level
        .map(|l| l.parse::<Sweetness>().map_err(anyhow::Error::msg))
        .transpose()?;
    Ok((id, level))
}

async fn order(state: &AppState, items: &[String], note: String) -> anyhow::Result<()> {
    let mut view = state.guest_view();
    view.load().await;

    for raw in items {
        let (id, level) = parse_item(raw)?;
        let Some(product) = view.products.iter().find(|p| p.id == id).cloned() else {
            bail!("No product with id {}", id);
        };
        view.choose_product(&product);
        if view.pending_option.is_some() {
            view.select_sweetness(level.unwrap_or_default());
            view.confirm_option();
        }
    }
    view.note = note;

    for line in view.cart.lines() {
        let sweetness = line.sweetness.map(|s| format!(" ({})", s)).unwrap_or_default();
        println!("{} x {}{}  {}.-", line.quantity, line.product.name, sweetness, line.line_total());
    }
    println!("Total: {}.-", view.cart_total());

    match view.submit_order().await {
        Ok(Some(queue)) => {
            println!("Order placed! Your queue number is #{}", queue);
            Ok(())
        }
        Ok(None) => bail!("The cart is empty"),
        Err(e) => match e.outcome() {
            ErrorOutcome::Alert(message) => bail!(message),
            _ => Err(e.into()),
        },
    }
}

fn print_dashboard(dashboard: &AdminDashboard) {
    let today = dashboard.today();
    println!("=== {} ===", today.format("%d/%m/%Y"));
    println!(
        "Today: {}.-  ({} orders)",
        dashboard.today_total(),
        dashboard.today_orders().len()
    );
    for (category, count) in dashboard.today_category_stats() {
        println!("  {:<20} {}", category, count);
    }

    let history = dashboard.history_stats();
    println!(
        "History: total {}.-  avg {}.-  best day {}.-",
        history.total, history.avg, history.max
    );

    for (date, orders) in dashboard.orders_by_date() {
        let total: rust_decimal::Decimal = orders.iter().map(|o| o.total).sum();
        println!("  {}  {} order(s)  {}.-", date.format("%d/%m/%Y"), orders.len(), total);
    }

    for row in dashboard.orders.iter().take(10) {
        println!(
            "  Queue #{:<5} {:>8}.-  {} item(s)  {}",
            row.order.id,
            row.order.total,
            row.order.items().len(),
            row.order.note_or_placeholder()
        );
    }
}

async fn dashboard(state: &AppState, once: bool) -> anyhow::Result<()> {
    let mut dashboard = state.admin_view();

    if once {
        if dashboard.refresh().await == Navigation::Login {
            bail!("Not signed in. Run `cafe-pos login` first.");
        }
        print_dashboard(&dashboard);
        return Ok(());
    }

    let (poller, mut snapshots) = Poller::spawn(dashboard.service(), state.config.poll_interval);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            Some(snapshot) = snapshots.recv() => {
                if dashboard.apply(snapshot) == Navigation::Login {
                    poller.stop();
                    bail!("Session expired. Run `cafe-pos login` again.");
                }
                print_dashboard(&dashboard);
            }
            _ = &mut ctrl_c => break,
            else => break,
        }
    }

    Ok(())
}

fn studio(date: Option<NaiveDate>) {
    let studio = StudioDashboard::with_sample_data();
    let day = date.or_else(|| NaiveDate::from_ymd_opt(2026, 2, 3)).unwrap_or_default();
    let stats = studio.stats(day);

    println!("Bookings on {}: {}", day, stats.bookings_on_day);
    println!("Total revenue: ฿{}", stats.revenue);
    println!("Shop rating: {} ⭐", stats.average_rating);
    for booking in &studio.bookings {
        println!(
            "  {} {:<12} {:<18} {} {:>6} {:?}",
            booking.id, booking.customer_name, booking.service, booking.time, booking.price, booking.status
        );
        if let Some(slip) = &booking.payment_slip {
            println!("      slip: {}", slip);
        }
    }
}
