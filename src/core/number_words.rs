//! German number words ("Zahlwörter").
//!
//! Rules followed:
//! - Units in compounds use "ein" instead of "eins" ("einundzwanzig",
//!   "einhundert", "eintausend").
//! - Negative numbers are prefixed with "minus".
//! - "tausend" is written together with its multiplier; "Million" and
//!   "Milliarde" are nouns, stand apart, and have their own plural forms.

use super::error::{NOT_A_NUMBER, NumberWordsError, TOO_LARGE};
use super::input::NumberInput;
use super::options::{Capitalize, WordOptions};

/// Largest value (exclusive) that can be written out: 10^12.
pub const WORDS_LIMIT: u64 = 1_000_000_000_000;

/// Words for 0..=19.
const ONES: [&str; 20] = [
    "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
    "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn",
    "neunzehn",
];

/// Words for 20, 30, ..., 90, indexed by the tens digit.
const TENS: [&str; 10] = [
    "", "", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig",
];

/// (threshold, singular, plural) per magnitude band, smallest first.
const BANDS: [(u64, &str, &str); 3] = [
    (1_000, "tausend", "tausend"),
    (1_000_000, "Million", "Millionen"),
    (1_000_000_000, "Milliarde", "Milliarden"),
];

/// Write `number` out in German words.
///
/// Never fails: a non-numeric input yields `"Eingabe ist keine Zahl."` and
/// a value of 10^12 or more yields `"Zahl zu groß."`. Use
/// [`try_number_to_words_german`] to get those cases as an error instead.
///
/// ```
/// use fst_helpers::{Capitalize, number_to_words_german};
///
/// assert_eq!(number_to_words_german(21, false, Capitalize::None), "einundzwanzig");
/// assert_eq!(number_to_words_german(21, true, Capitalize::None), "ein und zwanzig");
/// assert_eq!(number_to_words_german("2000000", false, Capitalize::First), "Zwei Millionen");
/// assert_eq!(number_to_words_german("abc", false, Capitalize::None), "Eingabe ist keine Zahl.");
/// ```
pub fn number_to_words_german(
    number: impl Into<NumberInput>,
    space_between: bool,
    capitalize: Capitalize,
) -> String {
    let options = WordOptions {
        space_between,
        capitalize,
    };
    match try_number_to_words_german(number, options) {
        Ok(words) => words,
        Err(NumberWordsError::NotANumber { input }) => {
            tracing::debug!(%input, "number words: input is not numeric");
            NOT_A_NUMBER.to_string()
        }
        Err(NumberWordsError::TooLarge) => {
            tracing::debug!("number words: input exceeds largest magnitude");
            TOO_LARGE.to_string()
        }
    }
}

/// Write `number` out in German words, reporting unusable input as an error.
pub fn try_number_to_words_german(
    number: impl Into<NumberInput>,
    options: WordOptions,
) -> Result<String, NumberWordsError> {
    let n = number.into().to_integer()?;
    let magnitude = u64::try_from(n.unsigned_abs())
        .ok()
        .filter(|m| *m < WORDS_LIMIT)
        .ok_or(NumberWordsError::TooLarge)?;

    let words = compose(magnitude, options.space_between)?;
    let words = if n < 0 {
        let space = if options.space_between { " " } else { "" };
        format!("minus{space}{words}")
    } else {
        words
    };
    Ok(options.capitalize.apply(words))
}

/// Lowercase words for a non-negative number. Capitalization is left to the
/// caller so it happens exactly once.
fn compose(n: u64, spaced: bool) -> Result<String, NumberWordsError> {
    let space = if spaced { " " } else { "" };

    if n < 20 {
        return Ok(ONES[n as usize].to_string());
    }

    if n < 100 {
        let tens = TENS[(n / 10) as usize];
        return Ok(match n % 10 {
            0 => tens.to_string(),
            ones => {
                let connector = if spaced { " und " } else { "und" };
                format!("{}{connector}{tens}", compound_unit(ones))
            }
        });
    }

    if n < 1000 {
        let hundreds = n / 100;
        let prefix = compound_unit(hundreds);
        let rest = n % 100;
        return Ok(if rest == 0 {
            format!("{prefix}hundert")
        } else {
            format!("{prefix}hundert{space}{}", compose(rest, spaced)?)
        });
    }

    for (threshold, singular, plural) in BANDS {
        if n >= threshold * 1000 {
            continue;
        }

        let basis = n / threshold;
        let rest = n % threshold;

        let phrase = if threshold == 1000 {
            let prefix = if basis == 1 {
                "ein".to_string()
            } else {
                compose(basis, spaced)?
            };
            format!("{prefix}{singular}")
        } else {
            let prefix = if basis == 1 {
                "eine".to_string()
            } else {
                compose(basis, spaced)?
            };
            let noun = if basis > 1 { plural } else { singular };
            format!("{prefix} {noun}")
        };

        if rest == 0 {
            return Ok(phrase);
        }
        // Nouns always stand apart; after "tausend" the spacing option decides.
        let joiner = if threshold == 1000 { space } else { " " };
        return Ok(format!("{phrase}{joiner}{}", compose(rest, spaced)?));
    }

    Err(NumberWordsError::TooLarge)
}

/// Unit word as used inside a compound: "ein" for one, otherwise the plain word.
fn compound_unit(n: u64) -> &'static str {
    if n == 1 { "ein" } else { ONES[n as usize] }
}
