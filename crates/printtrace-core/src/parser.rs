//! Toolpath command parser with running-position tracking.
//!
//! Turns raw toolpath text into an ordered sequence of absolute [`Movement`]s.
//! Only controlled linear moves (`G1`/`G01`) are considered; every other line
//! is silently ignored. Axis words are optional and independent, so the parser
//! keeps a running absolute position that unset axes inherit from.

use std::io::BufRead;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Movement, PartialPosition, Position};

/// Toolpath parser with running-position tracking
///
/// The parser is stateful: the running absolute position advances on every
/// linear move, whether or not the move is recorded, so that unset axes keep
/// propagating correctly.
pub struct ToolpathParser {
    position: Position,
    line_number: u32,
}

impl ToolpathParser {
    /// Create a new parser seeded at the machine origin
    pub fn new() -> Self {
        Self {
            position: Position::origin(),
            line_number: 0,
        }
    }

    /// Parse a full toolpath source into its ordered movement sequence
    pub fn parse(&mut self, source: &str) -> Result<Vec<Movement>> {
        let mut movements = Vec::new();
        for line in source.lines() {
            if let Some(movement) = self.parse_line(line)? {
                movements.push(movement);
            }
        }
        debug!(
            lines = self.line_number,
            movements = movements.len(),
            "parsed toolpath source"
        );
        Ok(movements)
    }

    /// Parse a toolpath from a buffered reader, consuming it fully
    pub fn parse_reader<R: BufRead>(&mut self, reader: R) -> Result<Vec<Movement>> {
        let mut movements = Vec::new();
        for line in reader.lines() {
            if let Some(movement) = self.parse_line(&line?)? {
                movements.push(movement);
            }
        }
        Ok(movements)
    }

    /// Parse a single command line
    ///
    /// Returns `Ok(Some(movement))` when the line is a linear move that either
    /// extrudes material or changes at least one axis, `Ok(None)` for every
    /// other line. The running position advances regardless of whether the
    /// movement was recorded.
    pub fn parse_line(&mut self, line: &str) -> Result<Option<Movement>> {
        self.line_number += 1;
        let cleaned = self.remove_comments(line);

        if !is_linear_move(&cleaned) {
            return Ok(None);
        }

        let mut words = PartialPosition::new();
        let mut extrusion: Option<f64> = None;
        for caps in word_regex().captures_iter(&cleaned) {
            // The letter group is a single ASCII character by construction.
            let letter = (caps[1].as_bytes()[0]).to_ascii_uppercase() as char;
            let slot = match letter {
                'X' => &mut words.x,
                'Y' => &mut words.y,
                'Z' => &mut words.z,
                'E' => &mut extrusion,
                _ => continue,
            };
            // First occurrence of each word wins.
            if slot.is_none() {
                *slot = Some(self.parse_word(letter, &caps[2])?);
            }
        }

        let candidate = words.apply_to(self.position);
        let recorded = extrusion.unwrap_or(0.0) > 0.0 || !words.is_empty();
        self.position = candidate;
        Ok(recorded.then_some(candidate))
    }

    /// Current running absolute position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Remove comments from a command line
    fn remove_comments(&self, line: &str) -> String {
        static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex =
            COMMENT_REGEX.get_or_init(|| Regex::new(r"[;(].*").expect("invalid regex pattern"));
        regex.replace(line, "").to_string()
    }

    fn parse_word(&self, letter: char, raw: &str) -> Result<f64> {
        if !value_regex().is_match(raw) {
            return Err(Error::InvalidParameter {
                line_number: self.line_number,
                word: format!("{}{}", letter, raw),
                reason: "expected a signed decimal with optional fraction".to_string(),
            });
        }
        raw.parse::<f64>().map_err(|e| Error::InvalidParameter {
            line_number: self.line_number,
            word: format!("{}{}", letter, raw),
            reason: e.to_string(),
        })
    }
}

impl Default for ToolpathParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Check whether a cleaned line is a controlled linear move (`G1`/`G01`)
fn is_linear_move(line: &str) -> bool {
    static MOVE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = MOVE_REGEX
        .get_or_init(|| Regex::new(r"^\s*[Gg]0?1(?:[^0-9]|$)").expect("invalid regex pattern"));
    regex.is_match(line)
}

/// Axis/extrusion word regex: a word letter and the numeric text right after
///
/// The value group greedily takes every number-like character following the
/// letter, so compact toolpaths without whitespace between words
/// (`G1X10Y20E5`) split correctly. Validity of the captured text is checked
/// separately against [`value_regex`].
fn word_regex() -> &'static Regex {
    static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
    WORD_REGEX
        .get_or_init(|| Regex::new(r"([XYZExyze])([-+0-9.]*)").expect("invalid regex pattern"))
}

/// Numeric word grammar: signed decimal with optional fractional part
///
/// Deliberately narrower than `f64::from_str`: exponent forms, `inf`/`NaN`
/// and bare signs or dots are malformed words, not values.
fn value_regex() -> &'static Regex {
    static VALUE_REGEX: OnceLock<Regex> = OnceLock::new();
    VALUE_REGEX.get_or_init(|| Regex::new(r"^-?\d+\.?\d*$").expect("invalid regex pattern"))
}
