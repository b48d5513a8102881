mod loader;

use std::path::PathBuf;

use chrono::Timelike;
use clap::{Parser, Subcommand};
use rand::Rng;
use saju_base::{
    ALL_ELEMENTS, Element, day_pillar, interaction_score, relation, solar_term_of, year_pillar,
    zodiac_sign,
};
use saju_engine::{BirthProfile, CategoryResult, FortuneResult, PhraseBank, calculate_fortune};
use saju_time::{CivilDate, CivilTime, Moment, correct, standard_meridian_deg};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Daily saju fortune CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Day and year pillar of a date
    Pillar {
        /// Civil date (YYYY-MM-DD)
        date: String,
    },
    /// Interaction score of two elements
    ElementScore {
        /// Subject element (wood, fire, earth, metal, water)
        subject: String,
        /// Influencing element
        other: String,
    },
    /// Solar term in effect on a date
    SolarTerm {
        /// Civil date (YYYY-MM-DD)
        date: String,
    },
    /// Zodiac sign of a birth date
    Zodiac {
        /// Civil date (YYYY-MM-DD)
        date: String,
    },
    /// Correct a clock time to local solar time
    Correct {
        /// Clock time (HH:MM)
        time: String,
        /// Longitude in degrees east
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
        /// Civil timezone of the clock time (default Asia/Seoul)
        #[arg(long)]
        timezone: Option<String>,
    },
    /// Full daily fortune
    Fortune {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: String,
        /// Birth clock time (HH:MM)
        #[arg(long)]
        time: Option<String>,
        /// Birth longitude in degrees east
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<f64>,
        /// Civil timezone of the birth clock
        #[arg(long)]
        timezone: Option<String>,
        /// Reference moment (YYYY-MM-DD or YYYY-MM-DDThh:mm); default now
        #[arg(long)]
        at: Option<String>,
        /// Directory holding JSON content tables
        #[arg(long)]
        content: Option<PathBuf>,
        /// JSON engine config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn require_date(s: &str) -> CivilDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date '{s}': {e}");
        std::process::exit(1);
    })
}

fn require_time(s: &str) -> CivilTime {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid time '{s}': {e}");
        std::process::exit(1);
    })
}

fn require_moment(s: &str) -> Moment {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid moment '{s}': {e}");
        std::process::exit(1);
    })
}

fn parse_element(s: &str) -> Element {
    ALL_ELEMENTS
        .iter()
        .copied()
        .find(|e| e.name().eq_ignore_ascii_case(s) || e.korean() == s)
        .unwrap_or_else(|| {
            eprintln!("Unknown element: {s} (wood, fire, earth, metal, water)");
            std::process::exit(1);
        })
}

fn now_moment() -> Moment {
    let now = chrono::Local::now().naive_local();
    Moment::new(
        CivilDate::from(now.date()),
        CivilTime::from_minute_of_day(now.time().num_seconds_from_midnight() / 60),
    )
}

fn print_category<R: Rng + ?Sized>(
    label: &str,
    c: &CategoryResult,
    phrases: Option<&PhraseBank>,
    rng: &mut R,
) {
    println!(
        "  {label:<8} {:>3}  {} ({})",
        c.score,
        c.keyword.korean(),
        c.keyword.name()
    );
    let text = match phrases {
        Some(p) => p.pick_or_default(c.category, c.keyword, rng),
        None => c.category.default_text(),
    };
    println!("           {text}");
}

fn print_fortune(r: &FortuneResult, phrases: Option<&PhraseBank>) {
    let mut rng = rand::thread_rng();
    println!("Reference:   {}", r.reference);
    println!(
        "Day pillar:  {} ({}) index {}",
        r.day_pillar.korean(),
        r.day_pillar.hanja(),
        r.day_pillar.cycle_index()
    );
    println!(
        "Solar term:  {} ({}, {}, energy {})",
        r.solar_term.korean(),
        r.solar_term.english(),
        r.solar_term.season().name(),
        r.solar_term.energy()
    );
    if let Some(c) = &r.solar_correction {
        println!(
            "Correction:  {:+} min -> {} (day shift {:+})",
            c.offset_minutes,
            c.time,
            c.day_shift.days()
        );
    }
    println!(
        "Day master:  {} ({}) {}",
        r.user_day_stem.korean(),
        r.user_day_stem.hanja(),
        r.user_element.name()
    );
    println!(
        "Birth year:  {} ({})",
        r.birth_year_pillar.korean(),
        r.birth_year_pillar.branch().animal()
    );
    println!(
        "Zodiac:      {} ({})",
        r.zodiac_sign.korean(),
        r.zodiac_sign.name()
    );
    println!();
    println!("Scores:");
    for c in r.categories() {
        print_category(c.category.name(), c, phrases, &mut rng);
    }
    println!();

    let l = &r.lucky;
    println!(
        "Lucky:       {} / {} {} ({})",
        l.element.name(),
        l.direction.korean(),
        l.keyword.korean(),
        l.intro
    );
    let numbers: Vec<String> = l.numbers.iter().map(u32::to_string).collect();
    println!("  numbers   {}", numbers.join(", "));
    println!("  color     {}", l.color);
    println!("  items     {}", l.items.join(", "));
    println!("  concepts  {}", l.concepts.join(", "));
    println!();

    let card = &r.card;
    println!(
        "Tarot:       {} / {}{} [{}]",
        card.name,
        card.english_name,
        if card.is_reversed { " (역방향)" } else { "" },
        card.card_id
    );
    println!("  {}", card.content);
    println!();
    println!("Horoscope:   {}", r.horoscope.content);
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Pillar { date } => {
            let d = require_date(&date);
            let p = day_pillar(d);
            let y = year_pillar(d.year());
            println!(
                "Day:  {} ({}) index {} - stem {} branch {}",
                p.korean(),
                p.hanja(),
                p.cycle_index(),
                p.stem().index(),
                p.branch().index()
            );
            println!(
                "Year: {} ({}) index {} - {}",
                y.korean(),
                y.hanja(),
                y.cycle_index(),
                y.branch().animal()
            );
        }

        Commands::ElementScore { subject, other } => {
            let a = parse_element(&subject);
            let b = parse_element(&other);
            println!(
                "{} -> {}: {:?} ({:+})",
                a.name(),
                b.name(),
                relation(a, b),
                interaction_score(a, b)
            );
        }

        Commands::SolarTerm { date } => {
            let d = require_date(&date);
            let t = solar_term_of(d);
            println!(
                "{} ({}) index {} - {} energy {}",
                t.korean(),
                t.english(),
                t.index(),
                t.season().name(),
                t.energy()
            );
        }

        Commands::Zodiac { date } => {
            let d = require_date(&date);
            let s = zodiac_sign(d.month(), d.day());
            println!("{} ({}) [{}]", s.korean(), s.name(), s.code());
        }

        Commands::Correct {
            time,
            longitude,
            timezone,
        } => {
            let t = require_time(&time);
            let meridian =
                standard_meridian_deg(timezone.as_deref(), saju_time::DEFAULT_TIMEZONE);
            let c = correct(t, longitude, meridian).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            println!(
                "{} -> {} ({:+} min, day shift {:+})",
                t,
                c.time,
                c.offset_minutes,
                c.day_shift.days()
            );
        }

        Commands::Fortune {
            birth,
            time,
            longitude,
            timezone,
            at,
            content,
            config,
            json,
        } => {
            let birth_date = require_date(&birth);
            let clock = time.as_deref().map(require_time);
            let profile = BirthProfile::from_fields(
                birth_date.year(),
                birth_date.month(),
                birth_date.day(),
                clock.map(CivilTime::hour),
                clock.map(CivilTime::minute),
                longitude,
                timezone,
            )
            .unwrap_or_else(|e| {
                eprintln!("Invalid birth profile: {e}");
                std::process::exit(1);
            });
            let moment = at.as_deref().map_or_else(now_moment, require_moment);

            let tables = match &content {
                Some(dir) => loader::load_tables(dir).unwrap_or_else(|e| {
                    eprintln!("Failed to load content: {e}");
                    std::process::exit(1);
                }),
                None => saju_engine::ContentTables::empty(),
            };
            let config = loader::load_config(config.as_deref()).unwrap_or_else(|e| {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            });

            let result =
                calculate_fortune(&profile, &moment, &tables, &config).unwrap_or_else(|e| {
                    eprintln!("Fortune failed: {e}");
                    std::process::exit(1);
                });

            if json {
                match serde_json::to_string_pretty(&result) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_fortune(&result, tables.phrases.as_ref());
            }
        }
    }
}
