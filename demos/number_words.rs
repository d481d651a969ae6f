use fst_helpers::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fst_helpers=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    println!("=== Plain ===");
    for n in [0, 1, 16, 21, 99, 101, 1_000, 1_500, 21_021, 1_000_000, 2_345_678, 1_000_000_000] {
        println!("{n:>13} = {}", number_to_words_german(n, false, Capitalize::None));
    }

    println!("\n=== Spaced, capitalized ===");
    for n in [21, -21, 1_500, 3_000_021] {
        println!("{n:>13} = {}", number_to_words_german(n, true, Capitalize::First));
    }

    println!("\n=== Sentinels ===");
    println!("{}", number_to_words_german("einundzwanzig", false, Capitalize::None));
    println!("{}", number_to_words_german("1e12", false, Capitalize::None));

    println!("\n=== Sanitize ===");
    println!("{}", sanitize_string("  Rechnung <b>2024</b> Nr. 7 ", LetterCase::Upper));
}
