//! Typed view of one line of multi-bleu output.
//!
//! The scorer prints a single summary line:
//!
//! ```text
//! BLEU = 23.45, 60.0/30.0/15.0/5.0 (BP=0.850, ratio=0.900, hyp_len=50, ref_len=55)
//! ```
//!
//! Decoding is positional: four n-gram precisions after the overall score and
//! four `key=value` fields inside the parentheses, in that fixed order. The key
//! names are not checked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BleuError, Result};

const NGRAM_ORDERS: usize = 4;
const BREAKDOWN_FIELDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BleuResult {
    /// Overall BLEU, as a percentage.
    pub overall: f64,
    pub bleu1: f64,
    pub bleu2: f64,
    pub bleu3: f64,
    pub bleu4: f64,
    pub brevity_penalty: f64,
    pub length_ratio: f64,
    /// Candidate token count (`hyp_len`).
    pub candidate_length: u64,
    /// Reference token count (`ref_len`).
    pub reference_length: u64,
}

impl BleuResult {
    pub fn ngram_precisions(&self) -> [f64; NGRAM_ORDERS] {
        [self.bleu1, self.bleu2, self.bleu3, self.bleu4]
    }

    /// Scorer-shaped line with every float at full precision, so
    /// `parse_output(&r.to_exact_line()) == Ok(r)` for any parsed result.
    /// [`Display`](fmt::Display) rounds like the scorer does.
    pub fn to_exact_line(&self) -> String {
        format!(
            "BLEU = {:?}, {:?}/{:?}/{:?}/{:?} (BP={:?}, ratio={:?}, hyp_len={}, ref_len={})",
            self.overall,
            self.bleu1,
            self.bleu2,
            self.bleu3,
            self.bleu4,
            self.brevity_penalty,
            self.length_ratio,
            self.candidate_length,
            self.reference_length
        )
    }
}

/// Same layout the scorer prints, so a formatted result parses back to itself
/// up to the printed precision.
impl fmt::Display for BleuResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BLEU = {:.2}, {:.1}/{:.1}/{:.1}/{:.1} (BP={:.3}, ratio={:.3}, hyp_len={}, ref_len={})",
            self.overall,
            self.bleu1,
            self.bleu2,
            self.bleu3,
            self.bleu4,
            self.brevity_penalty,
            self.length_ratio,
            self.candidate_length,
            self.reference_length
        )
    }
}

impl FromStr for BleuResult {
    type Err = BleuError;

    fn from_str(s: &str) -> Result<Self> {
        parse_output(s)
    }
}

/// Decode raw scorer output into a [`BleuResult`].
///
/// Anything after the first `)` is ignored, which also swallows a trailing
/// newline or the `\n'` left behind when output was rendered as a byte-string
/// literal (`b'BLEU = ...\n'`).
pub fn parse_output(raw: &str) -> Result<BleuResult> {
    let (head, tail) = raw
        .split_once('(')
        .ok_or_else(|| BleuError::malformed("missing '('", raw))?;

    // head: "BLEU = <overall>, <b1>/<b2>/<b3>/<b4> "
    let (overall_section, ngram_section) = head
        .split_once(',')
        .ok_or_else(|| BleuError::malformed("missing ',' after overall score", raw))?;
    let overall = overall_section
        .split('=')
        .nth(1)
        .ok_or_else(|| BleuError::malformed("missing '=' before overall score", raw))?;
    let overall: f64 = parse_number(overall, "overall score", raw)?;

    let subscores = ngram_section
        .trim()
        .split('/')
        .map(|s| parse_number::<f64>(s, "n-gram precision", raw))
        .collect::<Result<Vec<_>>>()?;
    if subscores.len() < NGRAM_ORDERS {
        return Err(BleuError::malformed(
            format!(
                "expected {} n-gram precisions, found {}",
                NGRAM_ORDERS,
                subscores.len()
            ),
            raw,
        ));
    }

    // tail: "BP=<bp>, ratio=<ratio>, hyp_len=<n>, ref_len=<n>)..."
    let (breakdown, _) = tail
        .split_once(')')
        .ok_or_else(|| BleuError::malformed("missing ')'", raw))?;
    let pieces: Vec<&str> = breakdown.split(',').map(str::trim).collect();
    if pieces.len() < BREAKDOWN_FIELDS {
        return Err(BleuError::malformed(
            format!(
                "expected {} fields in parentheses, found {}",
                BREAKDOWN_FIELDS,
                pieces.len()
            ),
            raw,
        ));
    }

    Ok(BleuResult {
        overall,
        bleu1: subscores[0],
        bleu2: subscores[1],
        bleu3: subscores[2],
        bleu4: subscores[3],
        brevity_penalty: field_value(pieces[0], "brevity penalty", raw)?,
        length_ratio: field_value(pieces[1], "length ratio", raw)?,
        candidate_length: field_value(pieces[2], "candidate length", raw)?,
        reference_length: field_value(pieces[3], "reference length", raw)?,
    })
}

fn field_value<T: FromStr>(piece: &str, what: &str, raw: &str) -> Result<T> {
    let value = piece
        .split('=')
        .nth(1)
        .ok_or_else(|| BleuError::malformed(format!("{} has no '=' in {:?}", what, piece), raw))?;
    parse_number(value, what, raw)
}

fn parse_number<T: FromStr>(s: &str, what: &str, raw: &str) -> Result<T> {
    s.trim()
        .parse()
        .map_err(|_| BleuError::malformed(format!("cannot parse {} from {:?}", what, s), raw))
}
