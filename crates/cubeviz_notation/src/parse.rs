use chumsky::prelude::*;

use crate::{Face, Move, MoveSequence, NotationError};

type ParseExtra<'src> = extra::Err<Rich<'src, char>>;

/// Trait alias for parser.
trait TokenParser<'src, O>: Clone + Parser<'src, &'src str, O, ParseExtra<'src>> {}
impl<'src, O, T> TokenParser<'src, O> for T where
    T: Clone + Parser<'src, &'src str, O, ParseExtra<'src>>
{
}

/// Move token split into its lexical parts, before any validation against a
/// puzzle size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct RawToken<'src> {
    prefix: Option<RawPrefix<'src>>,
    family: char,
    wide: bool,
    amount: Option<&'src str>,
    prime: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum RawPrefix<'src> {
    /// Example: `3Rw`
    Single(&'src str),
    /// Example: `2-3Rw`
    Range(&'src str, &'src str),
}

/// Parses a single move token for an NxNxN cube with `puzzle_size` layers.
///
/// Moves that lie mostly past the middle of the cube are rewritten relative to
/// the opposite face (see [`Move::normalized()`]).
pub fn parse_move(token: &str, puzzle_size: u16) -> Result<Move, NotationError> {
    if puzzle_size == 0 {
        return Err(NotationError::range(token, "puzzle size must be positive"));
    }

    let raw = raw_token().parse(token).into_result().map_err(|errors| {
        let reasons: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        NotationError::grammar(token, reasons.join("; "))
    })?;

    let turns = turn_amount(token, raw)?;
    let slices = resolve_slices(token, raw, puzzle_size)?;
    let face = family_face(raw.family)
        .ok_or_else(|| NotationError::grammar(token, "unknown face"))?;

    Ok(Move::new(face, slices, turns).normalized(puzzle_size))
}

/// Parses a whitespace-separated sequence of move tokens.
///
/// Parsing stops at the first invalid token.
pub fn parse_sequence(text: &str, puzzle_size: u16) -> Result<MoveSequence, NotationError> {
    text.split_whitespace()
        .map(|token| parse_move(token, puzzle_size))
        .collect()
}

/// Returns the signed number of clockwise quarter turns.
fn turn_amount(token: &str, raw: RawToken<'_>) -> Result<i64, NotationError> {
    let amount = match raw.amount {
        Some(digits) => digits
            .parse::<u32>()
            .map_err(|_| NotationError::range(token, "turn amount is too large"))?,
        None => 1,
    };
    let amount = i64::from(amount);
    Ok(if raw.prime { -amount } else { amount })
}

/// Returns the face that a move family is measured from. Whole-puzzle
/// rotations follow R, U, and F; slice moves follow L, D, and F.
fn family_face(family: char) -> Option<Face> {
    match family {
        'x' => Some(Face::R),
        'y' => Some(Face::U),
        'z' => Some(Face::F),
        'M' => Some(Face::L),
        'E' => Some(Face::D),
        'S' => Some(Face::F),
        c => Face::from_letter(c),
    }
}

/// Validates the token against the puzzle size and returns the range of
/// layers it turns, before mirroring.
fn resolve_slices(
    token: &str,
    raw: RawToken<'_>,
    n: u16,
) -> Result<[u16; 2], NotationError> {
    let range_err = |reason: String| NotationError::range(token, reason);
    let size = format!("{n}x{n}x{n}");

    match (raw.family, raw.prefix, raw.wide) {
        // Whole-puzzle rotation
        ('x' | 'y' | 'z', None, false) => Ok([1, n]),
        ('x' | 'y' | 'z', _, _) => Err(NotationError::grammar(
            token,
            "rotations cannot have a layer prefix or `w`",
        )),

        // Middle slices
        ('M' | 'E' | 'S', None | Some(RawPrefix::Single(_)), false) => {
            let count = match raw.prefix {
                Some(RawPrefix::Single(digits)) => parse_layer(token, digits)?,
                _ => 1,
            };
            if count == 0 || count >= n {
                Err(range_err(format!(
                    "{count} middle slices do not fit on a {size} cube",
                )))
            } else if (count % 2) != (n % 2) {
                Err(range_err(format!(
                    "{count} middle slices cannot be centered on a {size} cube",
                )))
            } else {
                let begin = (n - count) / 2 + 1;
                Ok([begin, begin + count - 1])
            }
        }
        ('M' | 'E' | 'S', _, _) => Err(NotationError::grammar(
            token,
            "middle slices cannot have a layer range or `w`",
        )),

        // Legacy lowercase wide move
        (c, None, false) if is_lowercase_face(c) => match n {
            0..=2 => Err(range_err(format!(
                "lowercase wide moves need at least 3 layers, not a {size} cube",
            ))),
            3 => Ok([1, 1]),
            _ => Ok([1, 2]),
        },
        (c, _, _) if is_lowercase_face(c) => Err(NotationError::grammar(
            token,
            "lowercase wide moves cannot have a layer prefix or `w`",
        )),

        // Outer layer
        (_, None, false) => {
            if n < 2 {
                Err(range_err(format!("a {size} cube has no outer layers")))
            } else {
                Ok([1, 1])
            }
        }

        // Wide move
        (_, None | Some(RawPrefix::Single(_)), true) => {
            let count = match raw.prefix {
                Some(RawPrefix::Single(digits)) => parse_layer(token, digits)?,
                _ => 2,
            };
            if count < 2 || count >= n {
                Err(range_err(format!(
                    "a wide move must turn between 2 and {} layers on a {size} cube",
                    n.saturating_sub(1),
                )))
            } else {
                Ok([1, count])
            }
        }

        // Single inner slice
        (_, Some(RawPrefix::Single(digits)), false) => {
            let layer = parse_layer(token, digits)?;
            check_inner_layer(token, layer, n)?;
            Ok([layer, layer])
        }

        // Inner slice range
        (_, Some(RawPrefix::Range(a, b)), true) => {
            let a = parse_layer(token, a)?;
            let b = parse_layer(token, b)?;
            check_inner_layer(token, a, n)?;
            check_inner_layer(token, b, n)?;
            Ok([a.min(b), a.max(b)])
        }
        (_, Some(RawPrefix::Range(..)), false) => Err(NotationError::grammar(
            token,
            "a layer range must be followed by a wide move",
        )),
    }
}

fn check_inner_layer(token: &str, layer: u16, n: u16) -> Result<(), NotationError> {
    if (2..n).contains(&layer) {
        Ok(())
    } else {
        Err(NotationError::range(
            token,
            format!("layer {layer} is not an inner layer of a {n}x{n}x{n} cube"),
        ))
    }
}

fn parse_layer(token: &str, digits: &str) -> Result<u16, NotationError> {
    digits
        .parse()
        .map_err(|_| NotationError::range(token, format!("layer number {digits} is too large")))
}

fn is_lowercase_face(c: char) -> bool {
    matches!(c, 'u' | 'f' | 'r' | 'd' | 'b' | 'l')
}

fn is_family_char(c: char) -> bool {
    matches!(
        c,
        'U' | 'F' | 'R' | 'D' | 'B' | 'L'
            | 'u' | 'f' | 'r' | 'd' | 'b' | 'l'
            | 'M' | 'E' | 'S'
            | 'x' | 'y' | 'z'
    )
}

fn raw_token<'src>() -> impl TokenParser<'src, RawToken<'src>> {
    layer_prefix()
        .or_not()
        .then(family())
        .then(just('w').or_not().map(|w| w.is_some()))
        .then(multiplier())
        .then_ignore(end())
        .map(|(((prefix, family), wide), (amount, prime))| RawToken {
            prefix,
            family,
            wide,
            amount,
            prime,
        })
}

fn layer_prefix<'src>() -> impl TokenParser<'src, RawPrefix<'src>> {
    choice((
        uint()
            .then_ignore(just('-'))
            .then(uint())
            .map(|(a, b)| RawPrefix::Range(a, b)),
        uint().map(RawPrefix::Single),
    ))
    .labelled("layer prefix")
}

fn family<'src>() -> impl TokenParser<'src, char> {
    any()
        .filter(|&c| is_family_char(c))
        .labelled("move family")
}

/// Turn amount and whether it is inverted.
fn multiplier<'src>() -> impl TokenParser<'src, (Option<&'src str>, bool)> {
    uint()
        .or_not()
        .then(just('\'').or_not().map(|prime| prime.is_some()))
}

/// Unsigned integer, as a string of digits.
fn uint<'src>() -> impl TokenParser<'src, &'src str> {
    // allow leading zeros
    one_of('0'..='9').repeated().at_least(1).to_slice()
}
