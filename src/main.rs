use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use homescore::api::{app, AppState};
use homescore::config::AppConfig;
use homescore::data::{load_suburbs_from_path, Property, PropertyType, SuburbStore, UserPreferences};
use homescore::error::AppError;
use homescore::scoring::{
    category_display, generate_insights, property_banner, score_rating, suburb_banner,
    top_percent, GradeTable, PropertyScore, ScoringEngine, Strategy, SuburbScore,
};
use homescore::scoring::simple::PropertyProfile;
use homescore::telemetry;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "homescore",
    about = "Score Melbourne suburbs and property listings from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute a score report without starting the service
    Score {
        #[command(subcommand)]
        command: ScoreCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ScoreCommand {
    /// Score a suburb from the reference data
    Suburb(SuburbArgs),
    /// Score a property listing against its suburb
    Property(PropertyArgs),
    /// Quick estimate from a named property profile
    Profile(ProfileArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct SuburbArgs {
    /// Suburb name (case- and whitespace-insensitive)
    #[arg(long)]
    name: String,
    /// Weighting strategy; defaults to balanced
    #[arg(long, value_parser = parse_strategy)]
    strategy: Option<Strategy>,
    /// Override the suburbs CSV path
    #[arg(long)]
    suburbs_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PropertyArgs {
    /// Street address of the listing
    #[arg(long)]
    address: String,
    /// Suburb the listing sits in
    #[arg(long)]
    suburb: String,
    /// Listing price in dollars
    #[arg(long)]
    price: Option<f64>,
    /// Dwelling type (house, townhouse, unit, ...)
    #[arg(long, value_parser = parse_property_type, default_value = "house")]
    property_type: PropertyType,
    /// Land size in square metres
    #[arg(long)]
    land_size: Option<f64>,
    #[arg(long)]
    bedrooms: Option<f64>,
    #[arg(long)]
    bathrooms: Option<f64>,
    /// Street quality rating, 1-5
    #[arg(long)]
    street_quality: Option<f64>,
    /// Budget floor, drives strategy selection together with --budget-max
    #[arg(long)]
    budget_min: Option<f64>,
    /// Budget ceiling
    #[arg(long)]
    budget_max: Option<f64>,
    /// Override the suburbs CSV path
    #[arg(long)]
    suburbs_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// Profile preset: starter, family, investment or luxury
    #[arg(long, value_parser = parse_profile)]
    profile: PropertyProfile,
}

fn parse_strategy(raw: &str) -> Result<Strategy, String> {
    Strategy::parse(raw)
        .ok_or_else(|| format!("unknown strategy '{raw}' (investment, balanced, lifestyle)"))
}

fn parse_profile(raw: &str) -> Result<PropertyProfile, String> {
    PropertyProfile::named(raw)
        .ok_or_else(|| format!("unknown profile '{raw}' (starter, family, investment, luxury)"))
}

fn parse_property_type(raw: &str) -> Result<PropertyType, String> {
    Ok(PropertyType::parse(raw))
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => serve(args).await,
        Command::Score {
            command: ScoreCommand::Suburb(args),
        } => run_suburb_report(args),
        Command::Score {
            command: ScoreCommand::Property(args),
        } => run_property_report(args),
        Command::Score {
            command: ScoreCommand::Profile(args),
        } => run_profile_report(args),
    }
}

async fn serve(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let suburbs = load_suburbs_from_path(&config.data.suburbs_csv)?;
    info!(
        count = suburbs.len(),
        path = %config.data.suburbs_csv.display(),
        "suburb reference data loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness.clone(),
        metrics: Arc::new(prometheus_handle),
        store: Arc::new(SuburbStore::new(suburbs)),
        engine: Arc::new(ScoringEngine::new()),
    };

    let app = app(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness.store(true, Ordering::Release);

    info!(?config.environment, %addr, "suburb scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn load_store(override_path: Option<PathBuf>) -> Result<SuburbStore, AppError> {
    let path = match override_path {
        Some(path) => path,
        None => AppConfig::load()?.data.suburbs_csv,
    };
    let suburbs = load_suburbs_from_path(path)?;
    Ok(SuburbStore::new(suburbs))
}

fn run_suburb_report(args: SuburbArgs) -> Result<(), AppError> {
    let SuburbArgs {
        name,
        strategy,
        suburbs_csv,
    } = args;

    let store = load_store(suburbs_csv)?;
    let engine = ScoringEngine::new();
    let score = engine.score_suburb_in(&store, &name, strategy, None)?;
    render_suburb_report(&score);
    Ok(())
}

fn run_property_report(args: PropertyArgs) -> Result<(), AppError> {
    let PropertyArgs {
        address,
        suburb,
        price,
        property_type,
        land_size,
        bedrooms,
        bathrooms,
        street_quality,
        budget_min,
        budget_max,
        suburbs_csv,
    } = args;

    let store = load_store(suburbs_csv)?;
    let engine = ScoringEngine::new();

    let property = Property {
        address,
        suburb,
        price,
        property_type,
        land_size,
        bedrooms,
        bathrooms,
        street_quality,
        ..Property::default()
    };
    let preferences = (budget_min.is_some() || budget_max.is_some()).then(|| UserPreferences {
        budget_min,
        budget_max,
        ..UserPreferences::default()
    });

    let score = engine.score_property_in(&store, &property, preferences.as_ref())?;
    render_property_report(&score);
    Ok(())
}

fn run_profile_report(args: ProfileArgs) -> Result<(), AppError> {
    let profile = args.profile;
    let factors = profile.factors();
    let composite = profile.composite();
    let rating = score_rating(composite);

    println!(
        "Profile estimate: {:.1} {} ({})",
        composite, rating.grade, rating.label
    );
    println!("Breakdown:");
    for (key, value) in &factors {
        let display = category_display(key);
        println!("  {} {}: {:.1}", display.emoji, display.name, value);
    }
    println!("Insights:");
    for insight in generate_insights(composite, &factors) {
        println!("  {} {}: {}", insight.icon, insight.title, insight.message);
    }
    Ok(())
}

fn render_suburb_report(score: &SuburbScore) {
    let banner = suburb_banner(score.composite);
    println!(
        "{} {} — {:.1} {} ({})",
        banner.emoji,
        score.suburb,
        score.composite,
        GradeTable::Standard.letter(score.composite),
        banner.label
    );
    println!(
        "Strategy: {} | Top {}% of Melbourne suburbs",
        score.strategy.label(),
        top_percent(score.composite)
    );
    println!(
        "Tiers: investment {:.1} | location {:.1} | accessibility {:.1} | lifestyle {:.1}",
        score.investment, score.location, score.accessibility, score.lifestyle
    );
    println!("Breakdown:");
    for (factor, value) in &score.breakdown {
        println!("  - {:?}: {:.1}", factor, value);
    }
}

fn render_property_report(score: &PropertyScore) {
    let banner = property_banner(score.composite);
    println!(
        "{} {} ({}) — {:.1} {} ({})",
        banner.emoji,
        score.address,
        score.suburb,
        score.composite,
        GradeTable::Standard.letter(score.composite),
        banner.label
    );
    println!("Strategy: {}", score.strategy.label());
    println!(
        "Tiers: investment {:.1} | location {:.1} | accessibility {:.1} | features {:.1} | lifestyle {:.1}",
        score.investment, score.location, score.accessibility, score.features, score.lifestyle
    );
    println!("Breakdown:");
    for (factor, value) in &score.breakdown {
        println!("  - {:?}: {:.1}", factor, value);
    }
}
