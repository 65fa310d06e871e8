use super::{Axis, Coordinates};
use log::debug;
use thiserror::Error;

/// Unit glyphs for degrees, minutes and seconds, in the order the parts of a
/// coordinate appear.
const UNITS: [&str; 3] = ["°", "'", "\""];

const MAX_NUMBER_LEN: usize = 14;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected a number")]
    MissingNumber,
    #[error("malformed number")]
    MalformedNumber,
    #[error("missing hemisphere, expected {expected}")]
    MissingHemisphere { expected: &'static str },
    #[error("unexpected trailing characters")]
    TrailingGarbage,
}

/// Failure to parse a coordinate string, with the byte offset where parsing
/// stopped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
}

impl ParseError {
    /// Renders `input` with a caret under the position of the error.
    ///
    /// ```
    /// let input = "N 48 S";
    /// let err = gp102_poi::coord::parse_coordinates(input).unwrap_err();
    /// assert_eq!(err.caret(input), "N 48 S\n     ^");
    /// ```
    pub fn caret(&self, input: &str) -> String {
        let column = input
            .get(..self.offset)
            .map_or(self.offset, |prefix| prefix.chars().count());
        format!("{input}\n{:>width$}", "^", width = column + 1)
    }
}

/// Parses a latitude followed by a longitude.
///
/// Each coordinate is made of up to three numbers (degrees, minutes,
/// seconds), each optionally followed by its unit glyph, and exactly one
/// hemisphere letter either in front of the first number or after any of
/// them. The two coordinates may be separated by `,` or `;`.
pub fn parse_coordinates(input: &str) -> Result<Coordinates, ParseError> {
    let mut cursor = Cursor::new(input);

    let latitude = parse_coordinate(&mut cursor, Axis::Latitude)?;
    cursor.skip_whitespace();
    if !cursor.eat(",") {
        cursor.eat(";");
    }
    let longitude = parse_coordinate(&mut cursor, Axis::Longitude)?;

    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        return Err(cursor.error(ParseErrorKind::TrailingGarbage));
    }

    debug!("parsed {input:?} as {latitude}, {longitude}");
    Ok(Coordinates {
        latitude,
        longitude,
    })
}

fn parse_coordinate(cursor: &mut Cursor<'_>, axis: Axis) -> Result<f64, ParseError> {
    let hemispheres = axis.hemispheres();

    cursor.skip_whitespace();
    let mut negative = cursor.eat_hemisphere(hemispheres);

    let mut value = 0.0;
    let mut divisor = 1.0;
    for (index, unit) in UNITS.iter().enumerate() {
        cursor.skip_whitespace();
        if !cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            if index == 0 {
                return Err(cursor.error(ParseErrorKind::MissingNumber));
            }
            break;
        }

        value += parse_number(cursor)? / divisor;
        divisor *= 60.0;

        cursor.skip_whitespace();
        cursor.eat(unit);
        cursor.skip_whitespace();
        // a second letter is left in place and ends the coordinate
        if negative.is_none() {
            negative = cursor.eat_hemisphere(hemispheres);
        }
    }

    match negative {
        Some(true) => Ok(-value),
        Some(false) => Ok(value),
        None => Err(cursor.error(ParseErrorKind::MissingHemisphere {
            expected: match axis {
                Axis::Latitude => "N or S",
                Axis::Longitude => "E or W",
            },
        })),
    }
}

fn parse_number(cursor: &mut Cursor<'_>) -> Result<f64, ParseError> {
    let start = cursor.pos;
    let text = cursor.take_while(|c| c.is_ascii_digit() || c == '.');
    let malformed = ParseError {
        kind: ParseErrorKind::MalformedNumber,
        offset: start,
    };

    if text.len() > MAX_NUMBER_LEN {
        return Err(malformed);
    }
    let (integer, fraction) = text.split_once('.').unwrap_or((text, "0"));
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(integer) || !is_digits(fraction) {
        return Err(malformed);
    }

    text.parse().map_err(|_| malformed)
}

/// Position in the input string.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn is_at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    fn eat(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Consumes one of the two hemisphere letters and returns whether it
    /// was the negative one.
    fn eat_hemisphere(&mut self, [positive, negative]: [char; 2]) -> Option<bool> {
        let c = self.peek()?;
        let is_negative = if c == positive {
            false
        } else if c == negative {
            true
        } else {
            return None;
        };
        self.pos += c.len_utf8();
        Some(is_negative)
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !predicate(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn skip_whitespace(&mut self) {
        self.take_while(|c| c.is_ascii_whitespace());
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            offset: self.pos,
        }
    }
}
