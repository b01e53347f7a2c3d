//! Identifier allocation for new records
//!
//! The default strategy hands out `max(numeric id) + 1`. Ids that do not
//! start with an integer are skipped. This only stays collision-free while
//! every id is sequential; a record whose id was edited by hand can still
//! collide. `Uuid` avoids that and is opt-in.

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown id strategy '{0}' (expected 'sequential' or 'uuid')")]
pub struct UnknownIdStrategy(pub String);

impl FromStr for IdStrategy {
    type Err = UnknownIdStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "uuid" => Ok(Self::Uuid),
            _ => Err(UnknownIdStrategy(s.to_string())),
        }
    }
}

impl IdStrategy {
    /// Produce an id that does not clash with `existing`
    pub fn allocate<'a, I>(&self, existing: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            Self::Sequential => next_sequential_id(existing),
            Self::Uuid => uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// `max(leading integer of each id, 0) + 1`, stringified
///
/// Works on the decimal digits directly, so ids of any length are counted
/// and the result never repeats an existing numeric id.
pub fn next_sequential_id<'a, I>(existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = existing
        .into_iter()
        .filter_map(leading_magnitude)
        .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        .unwrap_or("0");

    increment(max)
}

/// Non-negative integer at the start of `s`, as digits without leading
/// zeros: optional whitespace, optional sign, digits. `"12abc"` gives
/// `"12"`; `"abc"` and negative values give `None` since they never raise
/// the floor of 0.
fn leading_magnitude(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let rest = match s.as_bytes().first() {
        Some(b'-') => return None,
        Some(b'+') => &s[1..],
        _ => s,
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let digits = rest[..end].trim_start_matches('0');
    Some(if digits.is_empty() { "0" } else { digits })
}

/// Add one to a string of decimal digits
fn increment(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    let mut carry = true;
    for b in out.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            carry = false;
            break;
        }
    }
    if carry {
        out.insert(0, b'1');
    }
    out.into_iter().map(char::from).collect()
}
