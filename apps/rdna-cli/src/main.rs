use clap::{Parser, Subcommand};
use rdna_core::units::{bar, bar_of, degc, degc_of};
use rdna_fluids::{
    CoolPropSource, PropertySource, RefrigerantInfo, TabulatedSource, TemperatureSweep,
    filter_refrigerants, refrigerant_info, saturation_curve,
};
use rdna_match::{
    DEFAULT_PRESSURE_BAR, DEFAULT_TEMPERATURE_C, MatchError, MatchResult, MatcherConfig,
    Measurement, ReportFormat, identify, load_config, report,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "rdna")]
#[command(
    about = "Refrigerant DNA - estimate a refrigerant from one pressure/temperature reading",
    long_about = None
)]
struct Cli {
    /// Dew-line table (YAML) to use instead of CoolProp
    #[arg(long, global = true)]
    tabulated: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify likely refrigerants from a P/T reading
    Identify {
        /// Pressure in bar (absolute)
        #[arg(short, long, default_value_t = DEFAULT_PRESSURE_BAR)]
        pressure: f64,
        /// Temperature in °C
        #[arg(short, long, default_value_t = DEFAULT_TEMPERATURE_C, allow_negative_numbers = true)]
        temperature: f64,
        /// Matcher configuration (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format: text, json or yaml
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,
    },
    /// List the standard refrigerant catalog
    Catalog {
        /// Filter by id, name or alias
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show dew-line values for one refrigerant
    Saturation {
        /// Refrigerant identifier (e.g. R134a)
        refrigerant: String,
        /// Temperature in °C
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: Option<f64>,
        /// Pressure in bar (absolute)
        #[arg(short, long)]
        pressure: Option<f64>,
    },
    /// Print a PT chart (dew line) for one refrigerant
    PtChart {
        /// Refrigerant identifier (e.g. R134a)
        refrigerant: String,
        /// Start temperature in °C
        #[arg(long, allow_negative_numbers = true)]
        from: f64,
        /// End temperature in °C
        #[arg(long, allow_negative_numbers = true)]
        to: f64,
        /// Number of points
        #[arg(long, default_value_t = 11)]
        points: usize,
    },
    /// Print the default matcher configuration as YAML
    DefaultConfig,
}

fn main() -> MatchResult<()> {
    // Logs go to stderr; stdout carries only the report
    log_subscriber(std::io::stderr).init();

    let cli = Cli::parse();
    let source = build_source(cli.tabulated.as_deref())?;

    match cli.command {
        Commands::Identify {
            pressure,
            temperature,
            config,
            format,
        } => cmd_identify(
            source.as_ref(),
            pressure,
            temperature,
            config.as_deref(),
            format,
        ),
        Commands::Catalog { search } => cmd_catalog(search.as_deref()),
        Commands::Saturation {
            refrigerant,
            temperature,
            pressure,
        } => cmd_saturation(source.as_ref(), &refrigerant, temperature, pressure),
        Commands::PtChart {
            refrigerant,
            from,
            to,
            points,
        } => cmd_pt_chart(source.as_ref(), &refrigerant, from, to, points),
        Commands::DefaultConfig => cmd_default_config(),
    }
}

fn log_subscriber<W>(make_writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt().with_writer(make_writer).finish()
}

fn build_source(tabulated: Option<&Path>) -> MatchResult<Box<dyn PropertySource>> {
    match tabulated {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| MatchError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            let source = TabulatedSource::from_yaml_str(&content)?;
            tracing::info!(path = %path.display(), "using tabulated dew-line data");
            Ok(Box::new(source))
        }
        None => Ok(Box::new(CoolPropSource::new())),
    }
}

fn cmd_identify(
    source: &dyn PropertySource,
    pressure_bar: f64,
    temperature_c: f64,
    config_path: Option<&Path>,
    format: ReportFormat,
) -> MatchResult<()> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => MatcherConfig::default(),
    };
    let reading = Measurement::from_bar_celsius(pressure_bar, temperature_c)?;
    print!("{}", identify_report(source, &reading, &config, format)?);
    Ok(())
}

fn identify_report(
    source: &dyn PropertySource,
    reading: &Measurement,
    config: &MatcherConfig,
    format: ReportFormat,
) -> MatchResult<String> {
    let result = identify(source, reading, config);
    let mut out = report::render(&result, format)?;

    if format == ReportFormat::Text
        && let Some(best) = result.best_match()
    {
        out.push_str(&format!(
            "\nClosest: {} ({:.1}% confidence, {})\n",
            describe(&best.name),
            best.confidence_pct,
            best.phase
        ));
    }
    Ok(out)
}

/// Catalog id followed by its chemical name when the id is a standard one.
fn describe(refrigerant: &str) -> String {
    match refrigerant_info(refrigerant) {
        Some(info) => format!("{} - {}", refrigerant, info.display_name),
        None => refrigerant.to_string(),
    }
}

fn cmd_catalog(search: Option<&str>) -> MatchResult<()> {
    let entries: Vec<RefrigerantInfo> = filter_refrigerants(search.unwrap_or(""));

    if entries.is_empty() {
        println!("No refrigerants match '{}'", search.unwrap_or(""));
        return Ok(());
    }

    let id_width = entries.iter().map(|e| e.id.len()).max().unwrap_or(0);
    let family_width = entries
        .iter()
        .map(|e| e.family.label().len())
        .max()
        .unwrap_or(0);
    for entry in entries {
        println!(
            "  {:<id_w$}  {:<fam_w$}  {}",
            entry.id,
            entry.family.label(),
            entry.display_name,
            id_w = id_width,
            fam_w = family_width
        );
    }
    Ok(())
}

fn cmd_saturation(
    source: &dyn PropertySource,
    refrigerant: &str,
    temperature_c: Option<f64>,
    pressure_bar: Option<f64>,
) -> MatchResult<()> {
    if temperature_c.is_none() && pressure_bar.is_none() {
        return Err(MatchError::InvalidMeasurement {
            what: "give --temperature, --pressure or both",
        });
    }

    println!("{} ({}):", describe(refrigerant), source.name());
    if let Some(t_c) = temperature_c {
        let p_sat = source.saturation_pressure(refrigerant, degc(t_c))?;
        println!("  Dew pressure at {:.1} °C:    {:.2} bar(a)", t_c, bar_of(p_sat));
    }
    if let Some(p_bar) = pressure_bar {
        let t_sat = source.saturation_temperature(refrigerant, bar(p_bar))?;
        println!("  Dew temperature at {:.2} bar: {:.1} °C", p_bar, degc_of(t_sat));
    }
    Ok(())
}

fn cmd_pt_chart(
    source: &dyn PropertySource,
    refrigerant: &str,
    from_c: f64,
    to_c: f64,
    points: usize,
) -> MatchResult<()> {
    let sweep = TemperatureSweep::new(degc(from_c), degc(to_c), points)?;
    let curve = saturation_curve(source, refrigerant, &sweep);

    if curve.is_empty() {
        println!(
            "No dew-line data for {} between {:.1} and {:.1} °C",
            refrigerant, from_c, to_c
        );
        return Ok(());
    }

    println!("PT chart for {} (dew line, {}):", refrigerant, source.name());
    println!("  {:>8}  {:>10}", "T (°C)", "P (bar a)");
    for point in &curve.points {
        println!(
            "  {:>8.1}  {:>10.2}",
            degc_of(point.temperature),
            bar_of(point.pressure)
        );
    }
    if curve.num_failed > 0 {
        println!("  ({} points outside the valid range)", curve.num_failed);
    }
    Ok(())
}

fn cmd_default_config() -> MatchResult<()> {
    print!("{}", MatcherConfig::default().to_yaml_string()?);
    Ok(())
}
