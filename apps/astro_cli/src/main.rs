use anyhow::Context;
use astro_config::AstroConfig;
use astro_engine::response::{aspect_records, planet_records};
use astro_engine::{
    compute_chart, current_tithi, detect_aspects, generate_positions, next_five_ekadashis,
    next_five_festivals, parse_calendar_date, placeholder_house_cusps, BirthDetails,
    BirthDetailsInput, TimezoneField,
};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Config file (default: configs/astro.toml, then ../../configs/astro.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print single-line JSON.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full chart: positions, aspects and house cusps.
    Chart(BirthArgs),
    /// Body positions only.
    Positions(BirthArgs),
    /// Aspects between body positions.
    Aspects(BirthArgs),
    /// House cusps (fixed placeholder values).
    Houses(BirthArgs),
    /// Lunar day at a moment.
    Tithi(DateArgs),
    /// Next five ekadashis.
    Ekadashis(DateArgs),
    /// Next five festivals.
    Festivals(DateArgs),
}

#[derive(clap::Args, Debug)]
struct BirthArgs {
    #[arg(long)]
    year: i32,
    #[arg(long)]
    month: i32,
    #[arg(long)]
    day: i32,
    #[arg(long, default_value_t = 0)]
    hour: i32,
    #[arg(long, default_value_t = 0)]
    minute: i32,
    #[arg(long, default_value_t = 0)]
    second: i32,
    /// Latitude, degrees north.
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude, degrees east.
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// UTC offset in hours, e.g. 5.5 or -3.
    #[arg(long, allow_negative_numbers = true, default_value = "0")]
    tz: String,
}

impl BirthArgs {
    fn to_input(&self) -> BirthDetailsInput {
        BirthDetailsInput {
            year: self.year,
            month: self.month,
            date: self.day,
            hours: self.hour,
            minutes: self.minute,
            seconds: self.second,
            latitude: self.lat,
            longitude: self.lon,
            timezone: TimezoneField::Text(self.tz.clone()),
        }
    }

    fn validate(&self) -> anyhow::Result<BirthDetails> {
        self.to_input()
            .validate()
            .context("Invalid birth details")
    }
}

#[derive(clap::Args, Debug)]
struct DateArgs {
    /// YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (default: now, local clock).
    #[arg(long)]
    date: Option<String>,
}

impl DateArgs {
    fn resolve(&self) -> anyhow::Result<NaiveDateTime> {
        match &self.date {
            Some(text) => parse_calendar_date(text).context("Invalid --date"),
            None => Ok(Local::now().naive_local()),
        }
    }
}

fn init_logging(cfg: &AstroConfig) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cfg.logging.level.as_str()),
    )
    .init();
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let text = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}

fn run(command: &Command, cfg: &AstroConfig, compact: bool) -> anyhow::Result<()> {
    match command {
        Command::Chart(birth) => {
            let details = birth.validate()?;
            print_json(&compute_chart(&details, &cfg.chart_config()), compact)
        }
        Command::Positions(birth) => {
            let details = birth.validate()?;
            print_json(&planet_records(&generate_positions(&details)), compact)
        }
        Command::Aspects(birth) => {
            let details = birth.validate()?;
            let aspects = detect_aspects(&generate_positions(&details));
            print_json(&aspect_records(&aspects), compact)
        }
        Command::Houses(birth) => {
            let details = birth.validate()?;
            print_json(&placeholder_house_cusps(&details), compact)
        }
        Command::Tithi(date) => print_json(&current_tithi(date.resolve()?), compact),
        Command::Ekadashis(date) => print_json(&next_five_ekadashis(date.resolve()?), compact),
        Command::Festivals(date) => print_json(&next_five_festivals(date.resolve()?), compact),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (cfg, source) = astro_config::load_config_with_source(args.config.as_deref())?;
    init_logging(&cfg);
    match source {
        Some(path) => log::debug!("loaded config from {}", path.display()),
        None => log::debug!(
            "no config found at {:?}; using defaults",
            astro_config::DEFAULT_CONFIG_PATHS
        ),
    }
    log::debug!(
        "config: observation_point={} ayanamsha={}",
        cfg.chart.observation_point,
        cfg.chart.ayanamsha
    );

    run(&args.command, &cfg, args.compact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_chart_with_negative_coordinates() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "astro", "chart", "--year", "1985", "--month", "7", "--day", "4", "--lat", "-33.9",
            "--lon", "151.2", "--tz", "10", "--compact",
        ])?;
        assert!(args.compact);
        let Command::Chart(birth) = args.command else {
            panic!("expected chart subcommand");
        };
        let details = birth.validate()?;
        assert_eq!(details.latitude, -33.9);
        assert_eq!(details.longitude, 151.2);
        assert_eq!(details.timezone_offset_hours, 10.0);
        assert_eq!(details.hour, 0);
        Ok(())
    }

    #[test]
    fn test_out_of_range_year_rejected() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "astro", "positions", "--year", "1899", "--month", "1", "--day", "1", "--lat", "0",
            "--lon", "0",
        ])?;
        let Command::Positions(birth) = args.command else {
            panic!("expected positions subcommand");
        };
        assert!(birth.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_date_argument() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["astro", "festivals", "--date", "2024-01-01"])?;
        let Command::Festivals(date) = args.command else {
            panic!("expected festivals subcommand");
        };
        let resolved = date.resolve()?;
        assert_eq!(resolved.to_string(), "2024-01-01 00:00:00");

        let bad = DateArgs { date: Some("01/01/2024".to_string()) };
        assert!(bad.resolve().is_err());
        Ok(())
    }

    #[test]
    fn test_far_future_date_is_an_error() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["astro", "tithi", "--date", "+262142-12-31"])?;
        let Command::Tithi(date) = args.command else {
            panic!("expected tithi subcommand");
        };
        assert!(date.resolve().is_err());
        Ok(())
    }
}
