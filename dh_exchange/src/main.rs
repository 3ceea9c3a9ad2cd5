use std::error::Error;

use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser};
use dh_core::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_ROUNDS, DhParams, DhError, Exchange, GeneratorConfig, KeyPair,
    SafePrime, validate_bit_length,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// DH-Demo: Erzeugt Parameter und führt einen Diffie-Hellman Schlüsselaustausch durch
#[derive(Parser, Debug)]
#[command(name = "dh_exchange")]
#[command(about = "Generiert sichere Primzahl p, Generator g und führt Diffie-Hellman Schlüsselaustausch durch")]
#[command(version = "1.0")]
struct Args {
    /// Bitlänge von q (p = 2q + 1 hat ein Bit mehr)
    #[arg(value_name = "BITLENGTH", default_value_t = 16)]
    bit_length: u32,

    /// Anzahl der Miller-Rabin Runden für Primzahltest
    #[arg(
        short = 'r',
        long = "rounds",
        default_value_t = DEFAULT_ROUNDS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    miller_rabin_rounds: usize,

    /// Maximale Anzahl gezogener Kandidaten für q
    #[arg(long = "max-attempts", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u64,

    /// Seed für reproduzierbare Läufe (sonst Zufall aus dem Betriebssystem)
    #[arg(long)]
    seed: Option<u64>,

    /// Vorgegebene sichere Primzahl p statt Generierung (schließt BITLENGTH aus)
    #[arg(long, value_name = "P", conflicts_with = "bit_length")]
    prime: Option<u64>,

    /// Alices privater Schlüssel (nur für Tests, unsicher!)
    #[arg(long = "alice-key")]
    alice_key: Option<u64>,

    /// Bobs privater Schlüssel (nur für Tests, unsicher!)
    #[arg(long = "bob-key")]
    bob_key: Option<u64>,

    /// Nur Zahlen ausgeben, eine pro Zeile
    #[arg(short, long)]
    quiet: bool,

    /// Mehr Log-Ausgabe auf stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            rounds: self.miller_rabin_rounds,
            max_attempts: self.max_attempts,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG hat Vorrang vor -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parameter erzeugen (oder übernehmen) und beide Seiten rechnen lassen
fn run<R: Rng + ?Sized>(args: &Args, rng: &mut R) -> Result<Exchange, DhError> {
    let params = match args.prime {
        Some(p) => {
            let safe_prime = SafePrime::from_prime(p, args.miller_rabin_rounds, rng)?;
            DhParams::from_safe_prime(safe_prime)?
        }
        None => {
            // Eingabe prüfen, bevor die Suche startet
            validate_bit_length(args.bit_length)?;
            DhParams::generate(args.bit_length, &args.config(), rng)?
        }
    };
    debug!(p = params.p(), q = params.q(), g = params.g(), "parameters ready");

    let alice = match args.alice_key {
        Some(a) => KeyPair::from_private(&params, a)?,
        None => KeyPair::generate(&params, rng),
    };
    let bob = match args.bob_key {
        Some(b) => KeyPair::from_private(&params, b)?,
        None => KeyPair::generate(&params, rng),
    };

    Exchange::run(params, alice, bob)
}

/// Ausgabe in fester Reihenfolge: p, g, a, b, A, B, Geheimnis (A-Seite), Geheimnis (B-Seite)
fn render(exchange: &Exchange, quiet: bool) -> String {
    let rows = [
        ("Primzahl p", exchange.params.p()),
        ("Generator g", exchange.params.g()),
        ("Privater Schlüssel a", exchange.alice.private),
        ("Privater Schlüssel b", exchange.bob.private),
        ("Öffentlicher Schlüssel A", exchange.alice.public),
        ("Öffentlicher Schlüssel B", exchange.bob.public),
        ("Gemeinsames Geheimnis (berechnet von A)", exchange.secret_alice),
        ("Gemeinsames Geheimnis (berechnet von B)", exchange.secret_bob),
    ];

    rows.iter()
        .map(|(label, value)| {
            if quiet {
                format!("{}\n", value)
            } else {
                format!("{}: {}\n", label, value)
            }
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let exchange = run(&args, &mut rng)?;
    print!("{}", render(&exchange, args.quiet));

    Ok(())
}
