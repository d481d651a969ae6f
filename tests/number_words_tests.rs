use fst_helpers::*;
use rust_decimal_macros::dec;

fn f(n: impl Into<NumberInput>) -> String {
    number_to_words_german(n, false, Capitalize::None)
}

fn spaced(n: impl Into<NumberInput>) -> String {
    number_to_words_german(n, true, Capitalize::None)
}

// --- Documented examples ---

#[test]
fn zero() {
    assert_eq!(f(0), "null");
}

#[test]
fn twenty_one() {
    assert_eq!(f(21), "einundzwanzig");
    assert_eq!(spaced(21), "ein und zwanzig");
    assert_eq!(number_to_words_german(21, false, Capitalize::First), "Einundzwanzig");
    assert_eq!(number_to_words_german(21, false, Capitalize::All), "EINUNDZWANZIG");
}

#[test]
fn hundreds() {
    assert_eq!(f(100), "einhundert");
    assert_eq!(f(200), "zweihundert");
}

#[test]
fn negatives() {
    assert_eq!(f(-21), "minuseinundzwanzig");
    assert_eq!(spaced(-21), "minus ein und zwanzig");
}

#[test]
fn thousands_and_millions() {
    assert_eq!(f(1000), "eintausend");
    assert_eq!(f(2000), "zweitausend");
    assert_eq!(f(1_000_000), "eine Million");
    assert_eq!(f(2_000_000), "zwei Millionen");
    assert_eq!(spaced(1500), "eintausend fünfhundert");
}

#[test]
fn non_numeric_input_ignores_options() {
    for (space, cap) in [
        (false, Capitalize::None),
        (true, Capitalize::First),
        (false, Capitalize::All),
    ] {
        assert_eq!(number_to_words_german("abc", space, cap), NOT_A_NUMBER);
    }
}

#[test]
fn overflow() {
    assert_eq!(f(10_i64.pow(15)), TOO_LARGE);
    assert_eq!(f(10_i64.pow(12)), TOO_LARGE);
    assert_eq!(number_to_words_german(10_i64.pow(12), true, Capitalize::All), "Zahl zu groß.");
    assert_eq!(f(10_i64.pow(12) - 1).split(' ').next(), Some("neunhundertneunundneunzig"));
}

// --- Input forms ---

#[test]
fn numeric_strings() {
    assert_eq!(f("21"), "einundzwanzig");
    assert_eq!(f(" -21 "), "minuseinundzwanzig");
    assert_eq!(f("21.7"), "einundzwanzig");
    assert_eq!(f("1e6"), "eine Million");
    assert_eq!(f(String::from("3")), "drei");
}

#[test]
fn decimal_amounts() {
    assert_eq!(f(dec!(1785.00)), "eintausendsiebenhundertfünfundachtzig");
    assert_eq!(spaced(dec!(-49.90)), "minus neun und vierzig");
}

#[test]
fn try_variant() {
    let opts = WordOptions::new().spaced().capitalize(Capitalize::First);
    assert_eq!(
        try_number_to_words_german(1_000_021, opts),
        Ok("Eine Million ein und zwanzig".to_string())
    );
    assert_eq!(
        try_number_to_words_german("x", opts),
        Err(NumberWordsError::NotANumber { input: "x".into() })
    );
}

// --- Composition ---

#[test]
fn capitalization_is_applied_once() {
    let s = number_to_words_german(1_234_567, true, Capitalize::First);
    assert_eq!(
        s,
        "Eine Million zweihundert vier und dreißigtausend fünfhundert sieben und sechzig"
    );
    let uppercase_words = s
        .split(' ')
        .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
        .count();
    // "Eine" plus the noun "Million"
    assert_eq!(uppercase_words, 2);
}

#[test]
fn all_caps_uses_german_uppercase() {
    assert_eq!(
        number_to_words_german(35, false, Capitalize::All),
        "FÜNFUNDDREISSIG"
    );
}

#[test]
fn word_table() {
    let table: Vec<String> = [1, 11, 16, 17, 30, 60, 70, 101, 111, 1001, 10_000, 100_001]
        .into_iter()
        .map(|n| format!("{n} = {}", f(n)))
        .collect();
    insta::assert_snapshot!(table.join("\n"), @r"
    1 = eins
    11 = elf
    16 = sechzehn
    17 = siebzehn
    30 = dreißig
    60 = sechzig
    70 = siebzig
    101 = einhunderteins
    111 = einhundertelf
    1001 = eintausendeins
    10000 = zehntausend
    100001 = einhunderttausendeins
    ");
}

#[test]
fn billions() {
    assert_eq!(f(1_000_000_000), "eine Milliarde");
    assert_eq!(f(2_500_000_000_i64), "zwei Milliarden fünfhundert Millionen");
    assert_eq!(
        spaced(1_000_000_001_i64),
        "eine Milliarde eins"
    );
    assert_eq!(
        number_to_words_german(-2_000_000_001_i64, true, Capitalize::All),
        "MINUS ZWEI MILLIARDEN EINS"
    );
}
