//! MediGuide — Demo CLI
//!
//! Walks the app's five tabs from the command line. Each subcommand loads
//! the mock data, builds a `FilterQuery` where one applies, and renders
//! whatever the core returns.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- symptoms --text "headache and mild fever"
//!   cargo run -p demo -- medicines --query cro
//!   cargo run -p demo -- search --query para --category "Pain Relief" --min 20 --max 60
//!   cargo run -p demo -- beds
//!   cargo run -p demo -- profile

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mediguide_analysis::SymptomAnalyzer;
use mediguide_contracts::{
    analysis::SymptomReport,
    directory::BedSummary,
    error::MediGuideResult,
    profile::ProfileMenuItem,
    query::{FilterQuery, PriceRange},
};
use mediguide_data::{
    mock_beds, mock_catalog, mock_profile, MockAnalyzer, APP_NAME, APP_TAGLINE, DISCLAIMER,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// MediGuide — consumer health-information demo.
///
/// Each subcommand corresponds to one tab of the app: symptom analysis,
/// medicine browsing, filtered search, bed availability, and profile.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "MediGuide demo CLI",
    long_about = "Walks the MediGuide tabs from the command line: mock symptom analysis,\n\
                  catalog browsing and search, hospital bed availability, and profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk all five tabs in sequence with sample input.
    RunAll,
    /// Analyze a symptom description (fixed-delay mock analysis).
    Symptoms {
        /// Free-text symptom description.
        #[arg(long)]
        text: String,
    },
    /// Browse the medicine catalog with search text and one category.
    Medicines {
        /// Case-insensitive substring matched against name and brand.
        #[arg(long, default_value = "")]
        query: String,
        /// Restrict to a single category chip.
        #[arg(long)]
        category: Option<String>,
    },
    /// Full filtered search: text, multiple categories, price bounds.
    Search {
        /// Case-insensitive substring matched against name and brand.
        #[arg(long, default_value = "")]
        query: String,
        /// Category chip; repeat the flag to select several.
        #[arg(long)]
        category: Vec<String>,
        /// Minimum price. Unparsable input coerces to 0.
        #[arg(long)]
        min: Option<String>,
        /// Maximum price. Unparsable input coerces to 0.
        #[arg(long)]
        max: Option<String>,
    },
    /// Show hospital bed availability.
    Beds,
    /// Show the user profile and menu.
    Profile,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::Symptoms { text } => run_symptoms(&text),
        Command::Medicines { query, category } => run_medicines(&query, category.as_deref()),
        Command::Search {
            query,
            category,
            min,
            max,
        } => run_search(&query, &category, min.as_deref(), max.as_deref()),
        Command::Beds => run_beds(),
        Command::Profile => run_profile(),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Tab runners ───────────────────────────────────────────────────────────────

fn run_all() -> MediGuideResult<()> {
    run_symptoms("I have a headache and mild fever since yesterday")?;
    run_medicines("", None)?;
    run_search("o", &["Antacids".to_string()], Some("20"), Some("80"))?;
    run_beds()?;
    run_profile()?;
    Ok(())
}

fn run_symptoms(text: &str) -> MediGuideResult<()> {
    println!("=== Symptoms ===");
    println!();

    let report = SymptomReport::new(text);
    if report.is_blank() {
        // The app disables the analyze button on blank input; mirror that.
        println!("  Describe your symptoms first — nothing to analyze.");
        println!();
        return Ok(());
    }

    println!("  Report:  {}", report.text);
    println!("  Analyzing...");
    println!();

    let analysis = MockAnalyzer::new().analyze(&report).wait()?;

    println!("  Suggested medicines:");
    for medicine in &analysis.suggested_medicines {
        println!("    {} — {}", medicine.name, medicine.dosage);
        if let Some(warning) = &medicine.warning {
            println!("      Warning: {}", warning);
        }
    }
    println!();
    println!("  Advice: {}", analysis.advice);
    println!();
    println!("  {}", DISCLAIMER);
    println!();
    Ok(())
}

fn run_medicines(query: &str, category: Option<&str>) -> MediGuideResult<()> {
    println!("=== Medicines ===");
    println!();

    let catalog = mock_catalog()?;

    // The medicines tab offers the derived chips plus "All" (no selection).
    println!("  Categories: All, {}", catalog.categories().join(", "));

    let mut filter_query = FilterQuery::new().with_text(query);
    if let Some(category) = category {
        filter_query = filter_query.with_category(category);
    }

    let results = catalog.filter(&filter_query);
    print_results(&results, catalog.len());
    Ok(())
}

fn run_search(
    query: &str,
    categories: &[String],
    min: Option<&str>,
    max: Option<&str>,
) -> MediGuideResult<()> {
    println!("=== Search ===");
    println!();

    let catalog = mock_catalog()?;

    // Shell-side numeric sanitization: unparsable bounds coerce to 0, an
    // absent max leaves the range open.
    let min = parse_bound(min, 0.0);
    let max = parse_bound(max, f64::MAX);

    let mut filter_query = FilterQuery::new()
        .with_text(query)
        .with_price_range(PriceRange::new(min, max));
    for category in categories {
        filter_query = filter_query.with_category(category.clone());
    }

    let results = catalog.filter(&filter_query);
    print_results(&results, catalog.len());
    Ok(())
}

fn run_beds() -> MediGuideResult<()> {
    println!("=== Hospital Beds ===");
    println!();

    let beds = mock_beds();
    for bed in &beds {
        println!("  {:<8} {}", bed.name, bed.status.label());
    }

    let summary = BedSummary::of(&beds);
    println!();
    println!(
        "  {} of {} beds available ({} occupied)",
        summary.available,
        summary.total(),
        summary.occupied
    );
    println!();
    Ok(())
}

fn run_profile() -> MediGuideResult<()> {
    println!("=== Profile ===");
    println!();

    let profile = mock_profile();
    println!("  [{}] {}", profile.initials(), profile.name);
    println!("  {}", profile.email);
    println!();

    for item in ProfileMenuItem::ALL {
        println!("  {:<16} {}", item.title(), item.subtitle());
    }
    println!();
    Ok(())
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn print_results(results: &[&mediguide_contracts::catalog::CatalogEntry], total: usize) {
    println!();
    if results.is_empty() {
        println!("  No medicines match the current filters.");
    } else {
        for entry in results {
            println!(
                "  {:<14} {:<10} {:<14} ₹{:<7} {}",
                entry.name, entry.brand, entry.category, entry.price, entry.description
            );
        }
    }
    println!();
    println!("  {} of {} entries shown", results.len(), total);
    println!();
}

/// Coerce one price-bound field the way the app's search screen does:
/// absent → `default`, present but unparsable → 0.
fn parse_bound(value: Option<&str>, default: f64) -> f64 {
    match value {
        Some(raw) => raw.parse().unwrap_or(0.0),
        None => default,
    }
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("{} — {}", APP_NAME, APP_TAGLINE);
    println!("==================================");
    println!();
}
