mod logger;

use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tsurphu_calendar::{
    CalendarError, HenningBackend, RabjungYear, Tradition, cycle_for_year,
    tibetan_year_from_gregorian,
};
use tsurphu_frames::{FrameError, equatorial_to_ecliptic, mean_obliquity_deg};
use tsurphu_lunar::compute_tithi;
use tsurphu_stellarium::{
    LocationRequest, StellariumClient, StellariumConfig, StellariumError, take_snapshot,
};
use tsurphu_time::{TimeError, UtcTime, calcular_du, jd_to_iso_date, to_utc};

#[derive(Parser)]
#[command(name = "tsurphu", version, about = "Tibetan calendar and sky tools")]
struct Cli {
    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum TraditionArg {
    Phugpa,
    Tsurphu,
}

impl From<TraditionArg> for Tradition {
    fn from(t: TraditionArg) -> Self {
        match t {
            TraditionArg::Phugpa => Tradition::Phugpa,
            TraditionArg::Tsurphu => Tradition::Tsurphu,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Tibetan year attributes for a Gregorian year
    TibetanYear {
        /// Gregorian year (e.g. 2025)
        #[arg(
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32).range(-100_000..=100_000)
        )]
        year: i32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Calendar tradition used for the Losar date
        #[arg(long, value_enum, default_value = "tsurphu")]
        tradition: TraditionArg,
    },
    /// Tibetan date for a DU (Julian Day) value
    TibetanDate {
        /// DU, e.g. 2460453.5 for 2024-05-23 0h UT
        #[arg(long, allow_negative_numbers = true)]
        du: f64,
        #[arg(long)]
        json: bool,
        #[arg(long, value_enum, default_value = "tsurphu")]
        tradition: TraditionArg,
    },
    /// DU for a local civil date and time
    Du {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Local time (HH:MM or HH:MM:SS)
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
        /// IANA timezone, e.g. America/Bogota
        #[arg(long)]
        zone: String,
        #[arg(long)]
        json: bool,
    },
    /// Equatorial RA/Dec to ecliptic longitude/latitude of date
    Ecliptic {
        /// Right ascension in degrees
        #[arg(long, allow_negative_numbers = true)]
        ra: f64,
        /// Declination in degrees
        #[arg(long, allow_negative_numbers = true)]
        dec: f64,
        /// Julian Date
        #[arg(long)]
        jd: f64,
        #[arg(long)]
        json: bool,
    },
    /// Tithi from Moon and Sun ecliptic longitudes
    Tithi {
        /// Moon ecliptic longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        moon: f64,
        /// Sun ecliptic longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        sun: f64,
        #[arg(long)]
        json: bool,
    },
    /// Sun/Moon ephemeris snapshot through Stellarium RemoteControl
    Snapshot {
        /// Local datetime with offset (RFC 3339); default now
        #[arg(long, value_parser = parse_datetime)]
        dt: Option<DateTime<FixedOffset>>,
        #[arg(long, default_value_t = 4.7110, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, default_value_t = -74.0721, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, default_value = "Bogota")]
        name: String,
        #[arg(long, default_value = "CO")]
        country: String,
        #[arg(long, env = "TSURPHU_STELLARIUM_HOST", default_value = "127.0.0.1")]
        host: String,
        #[arg(long, env = "TSURPHU_STELLARIUM_PORT", default_value_t = 8090)]
        port: u16,
        /// Request timeout in seconds
        #[arg(long, env = "TSURPHU_STELLARIUM_TIMEOUT", default_value_t = 2.5)]
        timeout: f64,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Stellarium(#[from] StellariumError),
    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidArgument(String),
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| format!("expected HH:MM or HH:MM:SS, got {s}"))
}

fn parse_datetime(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s)
        .map_err(|e| format!("expected e.g. 1967-03-22T04:44:00-05:00: {e}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct YearReport {
    gregorian_year: i32,
    tibetan_year: i32,
    #[serde(flatten)]
    cycle: RabjungYear,
    tradition: Tradition,
    losar_du: Option<f64>,
    losar_date: Option<String>,
    /// Why Losar is missing, if it is.
    #[serde(skip_serializing_if = "Option::is_none")]
    losar_unresolved: Option<String>,
}

fn tibetan_year(year: i32, json: bool, tradition: Tradition) -> Result<(), CliError> {
    let tibetan_year = tibetan_year_from_gregorian(year);
    let cycle = cycle_for_year(tibetan_year);
    let losar = HenningBackend::for_tradition(tradition).losar(tibetan_year);
    let report = YearReport {
        gregorian_year: year,
        tibetan_year,
        cycle,
        tradition,
        losar_du: losar.as_ref().ok().copied(),
        losar_date: losar.as_ref().ok().map(|du| jd_to_iso_date(*du)),
        losar_unresolved: losar.as_ref().err().map(ToString::to_string),
    };
    if json {
        return print_json(&report);
    }
    println!("Tibetan year {tibetan_year} (Losar in {year})");
    println!(
        "{} {} {}",
        cycle.element.name(),
        cycle.gender.name(),
        cycle.animal.name()
    );
    println!(
        "Rabjung {}, year {} of 60",
        cycle.rabjung, cycle.position_in_cycle
    );
    match (&report.losar_date, &report.losar_unresolved) {
        (Some(date), _) => println!("Losar ({}): {date}", tradition.name()),
        (None, Some(reason)) => println!("Losar ({}): unresolved, {reason}", tradition.name()),
        (None, None) => {}
    }
    Ok(())
}

fn tibetan_date(du: f64, json: bool, tradition: Tradition) -> Result<(), CliError> {
    if !du.is_finite() {
        return Err(CliError::InvalidArgument(format!("DU must be finite, got {du}")));
    }
    let date = HenningBackend::for_tradition(tradition).from_du_tibetano(du);
    if json {
        return print_json(&date);
    }
    println!("DU {du} ({} UT)", jd_to_iso_date(du));
    println!("{}: {date}", tradition.name());
    Ok(())
}

#[derive(Serialize)]
struct DuReport {
    du: f64,
    utc: String,
}

fn du(date: NaiveDate, time: NaiveTime, zone: &str, json: bool) -> Result<(), CliError> {
    let instant: UtcTime = to_utc(date, time, zone)?;
    let report = DuReport {
        du: calcular_du(&instant),
        utc: instant.to_string(),
    };
    if json {
        return print_json(&report);
    }
    println!("DU {:.6} (UTC {})", report.du, report.utc);
    Ok(())
}

#[derive(Serialize)]
struct EclipticReport {
    lon_deg: f64,
    lat_deg: f64,
    mean_obliquity_deg: f64,
}

fn ecliptic(ra: f64, dec: f64, jd: f64, json: bool) -> Result<(), CliError> {
    let ecl = equatorial_to_ecliptic(ra, dec, jd)?;
    let report = EclipticReport {
        lon_deg: ecl.lon_deg,
        lat_deg: ecl.lat_deg,
        mean_obliquity_deg: mean_obliquity_deg(jd),
    };
    if json {
        return print_json(&report);
    }
    println!(
        "Ecliptic lon {:.6} deg, lat {:.6} deg (obliquity {:.6} deg)",
        report.lon_deg, report.lat_deg, report.mean_obliquity_deg
    );
    Ok(())
}

fn tithi(moon: f64, sun: f64, json: bool) -> Result<(), CliError> {
    let t = compute_tithi(moon, sun)?;
    if json {
        return print_json(&t);
    }
    println!(
        "Tithi {} ({} {} of 15), elongation {:.4} deg",
        t.tithi,
        t.paksha.name(),
        t.tithi_in_paksha,
        t.delta_deg
    );
    Ok(())
}

struct SnapshotArgs {
    dt: Option<DateTime<FixedOffset>>,
    location: LocationRequest,
    config: StellariumConfig,
}

fn snapshot(args: SnapshotArgs) -> Result<(), CliError> {
    let client = StellariumClient::new(args.config)?;
    tracing::debug!(base_url = %client.config().base_url(), "taking snapshot");
    let instant = args.dt.unwrap_or_else(|| Local::now().fixed_offset());
    let snap = take_snapshot(&client, instant, &args.location)?;
    print_json(&snap)
}

fn timeout_from_secs(secs: f64) -> Result<Duration, CliError> {
    Duration::try_from_secs_f64(secs)
        .map_err(|_| CliError::InvalidArgument(format!("invalid timeout: {secs} s")))
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::TibetanYear {
            year,
            json,
            tradition,
        } => tibetan_year(year, json, tradition.into()),

        Commands::TibetanDate {
            du,
            json,
            tradition,
        } => tibetan_date(du, json, tradition.into()),

        Commands::Du {
            date,
            time,
            zone,
            json,
        } => du(date, time, &zone, json),

        Commands::Ecliptic { ra, dec, jd, json } => ecliptic(ra, dec, jd, json),

        Commands::Tithi { moon, sun, json } => tithi(moon, sun, json),

        Commands::Snapshot {
            dt,
            lat,
            lon,
            name,
            country,
            host,
            port,
            timeout,
        } => snapshot(SnapshotArgs {
            dt,
            location: LocationRequest::on_earth(lat, lon, name, country),
            config: StellariumConfig::new(host, port, timeout_from_secs(timeout)?),
        }),
    }
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
