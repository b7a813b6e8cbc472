use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use gn_app::{
    initialize, load_defaults, update_pressed, AppError, AppResult, MemoryImage, MemoryPage,
    ZoomController,
};
use gn_catalog::{load_catalog, Catalog};
use gn_core::{format_timestamp, Period};
use gn_selection::SelectionDefaults;
use gn_zoom::{GraphUrl, PointerButton};

#[derive(Parser)]
#[command(name = "gn-cli")]
#[command(about = "GraphNav CLI - Dashboard navigation and zoom tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate catalog file syntax and structure
    Validate {
        /// Path to the catalog JSON file
        catalog_path: PathBuf,
    },
    /// List hosts in a catalog
    Hosts {
        /// Path to the catalog JSON file
        catalog_path: PathBuf,
    },
    /// Show the menus a page would render for a query string
    Menus {
        /// Path to the catalog JSON file
        catalog_path: PathBuf,
        /// Query string of the page URL (without the leading '?')
        #[arg(short, long, default_value = "")]
        query: String,
        /// Path to a defaults YAML file
        #[arg(long)]
        defaults: Option<PathBuf>,
    },
    /// Print the URL the update button would navigate to
    Navigate {
        /// Path to the catalog JSON file
        catalog_path: PathBuf,
        /// Query string of the page URL (without the leading '?')
        #[arg(short, long, default_value = "")]
        query: String,
        /// Page path the query is appended to
        #[arg(long, default_value = "/cgi-bin/graph.cgi")]
        path: String,
        /// Path to a defaults YAML file
        #[arg(long)]
        defaults: Option<PathBuf>,
    },
    /// Show the time window encoded in a graph image URL
    GraphUrl {
        /// Graph image source URL
        url: String,
        /// Clock to resolve relative times against (unix seconds, default now)
        #[arg(long)]
        now: Option<i64>,
    },
    /// Simulate a drag-to-zoom over a graph image and print the result
    Zoom {
        /// Graph image source URL
        url: String,
        /// Page x coordinate where the drag starts
        #[arg(long)]
        press: f64,
        /// Page x coordinate where the drag ends
        #[arg(long)]
        release: f64,
        /// Clock to resolve relative times against (unix seconds, default now)
        #[arg(long)]
        now: Option<i64>,
        /// Image offset on the page
        #[arg(long, default_value_t = 0.0)]
        offset_x: f64,
        #[arg(long, default_value_t = 0.0)]
        offset_y: f64,
        /// Image size in pixels
        #[arg(long, default_value_t = 580.0)]
        width: f64,
        #[arg(long, default_value_t = 240.0)]
        height: f64,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { catalog_path } => cmd_validate(&catalog_path),
        Commands::Hosts { catalog_path } => cmd_hosts(&catalog_path),
        Commands::Menus {
            catalog_path,
            query,
            defaults,
        } => cmd_menus(&catalog_path, &query, defaults.as_deref()),
        Commands::Navigate {
            catalog_path,
            query,
            path,
            defaults,
        } => cmd_navigate(&catalog_path, &query, &path, defaults.as_deref()),
        Commands::GraphUrl { url, now } => cmd_graph_url(&url, resolve_now(now)),
        Commands::Zoom {
            url,
            press,
            release,
            now,
            offset_x,
            offset_y,
            width,
            height,
        } => cmd_zoom(
            &url,
            press,
            release,
            resolve_now(now),
            (offset_x, offset_y),
            (width, height),
        ),
    }
}

fn resolve_now(now: Option<i64>) -> i64 {
    now.unwrap_or_else(|| chrono::Utc::now().timestamp())
}

fn load_catalog_file(catalog_path: &Path) -> AppResult<Catalog> {
    let catalog = load_catalog(catalog_path)?;
    tracing::debug!(hosts = catalog.hosts.len(), "catalog loaded");
    Ok(catalog)
}

fn resolve_defaults(path: Option<&Path>) -> AppResult<SelectionDefaults> {
    match path {
        Some(path) => load_defaults(path),
        None => Ok(SelectionDefaults::default()),
    }
}

fn cmd_validate(catalog_path: &Path) -> AppResult<()> {
    println!("Validating catalog: {}", catalog_path.display());
    let catalog = load_catalog_file(catalog_path)?;
    let services: usize = catalog.hosts.iter().map(|host| host.services.len()).sum();
    println!("✓ Catalog is valid");
    println!("  Hosts: {}", catalog.hosts.len());
    println!("  Services: {}", services);
    Ok(())
}

fn cmd_hosts(catalog_path: &Path) -> AppResult<()> {
    let catalog = load_catalog_file(catalog_path)?;

    if catalog.hosts.is_empty() {
        println!("No hosts found in catalog");
    } else {
        println!("Hosts in catalog:");
        for host in &catalog.hosts {
            let series: usize = host
                .services
                .iter()
                .map(|service| service.series_keys().len())
                .sum();
            println!(
                "  {} ({} services, {} series)",
                host.name,
                host.services.len(),
                series
            );
        }
    }
    Ok(())
}

fn cmd_menus(catalog_path: &Path, query: &str, defaults: Option<&Path>) -> AppResult<()> {
    let catalog = load_catalog_file(catalog_path)?;
    let defaults = resolve_defaults(defaults)?;

    let mut page = MemoryPage::with_query(query);
    let selection = initialize(&mut page, &catalog, &defaults);

    for alert in &page.alerts {
        println!("! {}", alert);
    }
    if !page.alerts.is_empty() {
        return Ok(());
    }

    println!("Hosts:");
    for (index, item) in page.host_menu.items.iter().enumerate() {
        let marker = if page.host_menu.selected == Some(index) { "*" } else { " " };
        println!("  {} {}", marker, item);
    }

    println!("\nServices:");
    for (index, item) in page.service_menu.items.iter().enumerate() {
        let marker = if page.service_menu.selected == Some(index) { "*" } else { " " };
        println!("  {} {}", marker, item);
    }

    println!("\nSeries:");
    for key in &page.series_menu {
        let marker = if page.series_selected.contains(key) { "*" } else { " " };
        println!("  {} {}", marker, key);
    }

    println!("\nPeriods:");
    for period in Period::ALL {
        if !selection.periods.contains(period) {
            continue;
        }
        let indicator = page
            .period_indicators
            .get(period.name())
            .map(String::as_str)
            .unwrap_or("+");
        println!("  {} {}", indicator, period);
    }
    Ok(())
}

fn cmd_navigate(
    catalog_path: &Path,
    query: &str,
    path: &str,
    defaults: Option<&Path>,
) -> AppResult<()> {
    let catalog = load_catalog_file(catalog_path)?;
    let defaults = resolve_defaults(defaults)?;

    let mut page = MemoryPage::new(path, query);
    initialize(&mut page, &catalog, &defaults);
    for alert in &page.alerts {
        println!("! {}", alert);
    }
    if !page.alerts.is_empty() {
        return Ok(());
    }

    update_pressed(&mut page, &defaults);
    match page.navigations.last() {
        Some(target) => println!("{}", target.url()),
        None => println!("No navigation produced"),
    }
    Ok(())
}

fn cmd_graph_url(url: &str, now: i64) -> AppResult<()> {
    let graph = GraphUrl::parse(url, now);

    println!("Window for {}", graph.base);
    println!(
        "  Start: {} ({})",
        format_timestamp(graph.start),
        graph.start
    );
    println!("  End:   {} ({})", format_timestamp(graph.end), graph.end);
    println!("  Span:  {}s", graph.span_secs());
    if !graph.rrd_options.is_empty() {
        println!("  Options: {}", graph.rrd_options);
    }
    if !graph.pass_through.is_empty() {
        println!("  Pass-through: {}", graph.pass_through.join("&"));
    }
    Ok(())
}

fn cmd_zoom(
    url: &str,
    press: f64,
    release: f64,
    now: i64,
    offset: (f64, f64),
    size: (f64, f64),
) -> AppResult<()> {
    if size.0 <= 0.0 || size.1 <= 0.0 {
        return Err(AppError::InvalidInput(format!(
            "image size must be positive, got {}x{}",
            size.0, size.1
        )));
    }

    let mut page = MemoryPage::with_query("");
    page.image = Some(MemoryImage::new(url, offset, size));

    let mut controller = ZoomController::new();
    controller.pointer_enter(&mut page, now);
    let Some(geometry) = controller.session().map(|session| session.geometry) else {
        return Err(AppError::InvalidInput("no zoom session for the image".to_string()));
    };

    let y = geometry.top + geometry.height / 2.0;
    controller.pointer_down(press, y);
    controller.pointer_move(&mut page, release);
    if let Some((readout, _)) = &page.readout {
        println!("Dragging: {}", readout);
    }
    controller.pointer_up(&mut page, PointerButton::Left, now);

    let src = page
        .image
        .as_ref()
        .map(|image| image.src.clone())
        .unwrap_or_default();
    if src == url {
        println!("No zoom: the drag selected no width inside the plot area");
        return Ok(());
    }

    let Some(session) = controller.session() else {
        return Err(AppError::InvalidInput("zoom session went away".to_string()));
    };
    println!(
        "✓ Zoomed to {} - {}",
        format_timestamp(session.graph.start),
        format_timestamp(session.graph.end)
    );
    println!("  {}", src);
    Ok(())
}
