use caffeine_core::*;
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveTime};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod text;

use text::{source_name, tier_label, warning_message};

#[derive(Parser)]
#[command(name = "cafcalc")]
#[command(about = "Caffeine intake and decay calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Check arguments accepted at the top level too; bare
    /// `cafcalc --age .. --weight ..` behaves like `cafcalc check ..`
    #[command(flatten)]
    check: CheckArgs,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate current caffeine load, safety tier, and decay timeline (default)
    Check(CheckArgs),

    /// List the built-in caffeine sources
    Sources {
        /// Display locale (en, es)
        #[arg(long, default_value = "en")]
        locale: String,
    },
}

#[derive(Args)]
struct CheckArgs {
    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Body weight (kg for metric, lb for imperial)
    #[arg(long)]
    weight: Option<f64>,

    /// Unit system (metric, imperial)
    #[arg(long, default_value = "metric")]
    unit: String,

    /// Pregnancy flag (applies the 200 mg guideline)
    #[arg(long)]
    pregnant: bool,

    /// Logged drink as id[:servings][@hours-ago], repeatable
    /// (e.g. "espresso", "coffee_brewed:2", "cola:1@3.5")
    #[arg(long = "drink")]
    drinks: Vec<String>,

    /// One-off custom dose in milligrams
    #[arg(long, allow_negative_numbers = true)]
    custom_mg: Option<f64>,

    /// Hours ago the custom dose was consumed
    #[arg(long, default_value_t = 0.0)]
    custom_hours_ago: f64,

    /// Target bedtime as HH:MM (next occurrence after now)
    #[arg(long)]
    bedtime: Option<String>,

    /// Display locale (en, es)
    #[arg(long, default_value = "en")]
    locale: String,

    /// Reference time override, RFC 3339 (defaults to the local clock)
    #[arg(long)]
    at: Option<String>,

    /// Emit the full result record as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    caffeine_core::logging::init();

    if let Err(e) = run() {
        // Validation failures are field-level messages, not stack traces
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Check(args)) => cmd_check(&config, args),
        Some(Commands::Sources { locale }) => cmd_sources(&locale),
        // No subcommand: fall through to check with the top-level args
        None => cmd_check(&config, cli.check),
    }
}

fn cmd_check(config: &Config, args: CheckArgs) -> Result<()> {
    let age = args
        .age
        .ok_or_else(|| Error::Config("--age is required".into()))?;
    let weight = args
        .weight
        .ok_or_else(|| Error::Config("--weight is required".into()))?;

    let now = match &args.at {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map_err(|e| Error::Config(format!("invalid --at time '{}': {}", s, e)))?,
        None => Local::now().fixed_offset(),
    };

    let unit = parse_unit(&args.unit)?;
    let locale = parse_locale(&args.locale)?;

    let mut events = Vec::new();
    for spec in &args.drinks {
        events.push(parse_drink_spec(spec, now)?);
    }
    if let Some(mg) = args.custom_mg {
        events.push(IntakeEvent {
            dose: DoseSpec::Custom { milligrams: mg },
            consumed_at: hours_before(now, args.custom_hours_ago),
        });
    }

    let bedtime = args
        .bedtime
        .as_deref()
        .map(|s| parse_bedtime(s, now))
        .transpose()?;

    tracing::debug!("Parsed {} intake events, reference time {}", events.len(), now);

    let input = CalculationInput {
        age,
        weight,
        unit,
        pregnant: args.pregnant,
        locale,
        events,
        now,
        bedtime,
    };

    let catalog = get_default_catalog();
    let result = calculate(catalog, &input, &config.engine_params())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result).expect("result serializes"));
    } else {
        display_result(&result, locale);
    }

    Ok(())
}

fn cmd_sources(locale: &str) -> Result<()> {
    let locale = parse_locale(locale)?;
    let catalog = get_default_catalog();

    let mut sources: Vec<_> = catalog.sources.values().collect();
    sources.sort_by_key(|s| &s.id);

    println!("Available caffeine sources:\n");
    for src in sources {
        println!(
            "  {:20} {:>5.0} mg  {}",
            src.id,
            src.mg_per_serving,
            source_name(locale, &src.name_key)
        );
    }

    Ok(())
}

// ============================================================================
// Argument parsing
// ============================================================================

fn parse_unit(s: &str) -> Result<UnitSystem> {
    match s.to_lowercase().as_str() {
        "metric" => Ok(UnitSystem::Metric),
        "imperial" => Ok(UnitSystem::Imperial),
        other => Err(Error::Config(format!(
            "unknown unit system '{}' (expected metric or imperial)",
            other
        ))),
    }
}

fn parse_locale(s: &str) -> Result<Locale> {
    match s.to_lowercase().as_str() {
        "en" => Ok(Locale::En),
        "es" => Ok(Locale::Es),
        other => Err(Error::Config(format!(
            "unsupported locale '{}' (expected en or es)",
            other
        ))),
    }
}

/// Parse a drink spec of the form `id[:servings][@hours-ago]`.
fn parse_drink_spec(spec: &str, now: DateTime<FixedOffset>) -> Result<IntakeEvent> {
    let (dose_part, hours_ago) = match spec.split_once('@') {
        Some((d, h)) => {
            let hours: f64 = h.parse().map_err(|_| {
                Error::Config(format!("invalid hours-ago in drink spec '{}'", spec))
            })?;
            (d, hours)
        }
        None => (spec, 0.0),
    };

    let (source_id, servings) = match dose_part.split_once(':') {
        Some((id, s)) => {
            let servings: f64 = s.parse().map_err(|_| {
                Error::Config(format!("invalid servings in drink spec '{}'", spec))
            })?;
            (id, servings)
        }
        None => (dose_part, 1.0),
    };

    if source_id.is_empty() {
        return Err(Error::Config(format!("empty source id in drink spec '{}'", spec)));
    }

    Ok(IntakeEvent {
        dose: DoseSpec::Source {
            source_id: source_id.to_string(),
            servings,
        },
        consumed_at: hours_before(now, hours_ago),
    })
}

/// Next occurrence of `HH:MM` after `now`, in `now`'s offset.
fn parse_bedtime(s: &str, now: DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>> {
    let time = NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|e| Error::Config(format!("invalid bedtime '{}': {}", s, e)))?;

    let candidate = now
        .date_naive()
        .and_time(time)
        .and_local_timezone(*now.offset())
        .single()
        .expect("fixed offsets are unambiguous");

    if candidate > now {
        Ok(candidate)
    } else {
        Ok(candidate + Duration::days(1))
    }
}

fn hours_before(now: DateTime<FixedOffset>, hours: f64) -> DateTime<FixedOffset> {
    now - Duration::milliseconds((hours * 3_600_000.0) as i64)
}

// ============================================================================
// Display
// ============================================================================

fn display_result(result: &CalculationResult, locale: Locale) {
    println!("\n╭─────────────────────────────────────────╮");
    println!(
        "│  CAFFEINE STATUS: {}",
        tier_label(locale, result.tier.as_key())
    );
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Consumed today:  {:>6.0} mg", result.total_mg);
    println!("  Active now:      {:>6.0} mg", result.active_mg);
    println!(
        "  Daily limit:     {:>6.0} mg ({:.0}% used)",
        result.daily_limit_mg, result.percent_of_limit
    );
    println!();
    println!(
        "  ~90% cleared in {:.1} h (around {})",
        result.hours_until_cleared,
        result.clear_time.format("%H:%M")
    );
    println!(
        "  Last safe intake before bed: {}",
        result.last_safe_intake.format("%H:%M")
    );

    if !result.warnings.is_empty() {
        println!();
        for warning in &result.warnings {
            println!("  ⚠ {}", warning_message(locale, warning.as_key()));
        }
    }

    println!();
    println!("  Decay outlook:");
    for point in &result.summary_timeline {
        let bar_len = (point.percent_of_peak / 5.0).round() as usize;
        println!(
            "    {}  {:>6.0} mg  {}",
            point.at.format("%H:%M"),
            point.active_mg,
            "█".repeat(bar_len)
        );
    }
    println!();
}
