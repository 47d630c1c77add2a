use regex::Regex;

use crate::numeric::{clean_numeric, is_close};
use crate::re::{BARE_TOKEN_REGEX, PERCENT_TOKEN_REGEX};

/// Inputs for rewriting a single upgrade label inside a text.
#[derive(Debug, Clone)]
pub struct Substitution<'a> {
    pub values: &'a [String],
    pub target: &'a str,
    pub clean_target: String,
    pub clean_base: String,
    pub tolerance: f64,
}

impl<'a> Substitution<'a> {
    /// `None` when either the target or the level 1 value carries no digits.
    pub fn new(values: &'a [String], target: &'a str, tolerance: f64) -> Option<Self> {
        let clean_target = clean_numeric(target);
        let clean_base = clean_numeric(values.first()?);
        if clean_target.is_empty() || clean_base.is_empty() {
            return None;
        }
        Some(Self {
            values,
            target,
            clean_target,
            clean_base,
            tolerance,
        })
    }

    fn target_has_percent(&self) -> bool {
        self.target.contains('%')
    }

    fn with_percent(&self) -> String {
        if self.target_has_percent() {
            self.target.to_string()
        } else {
            format!("{}%", self.target)
        }
    }
}

pub type StrategyFn = fn(&str, &Substitution) -> Option<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    ExactToken,
    SpacedDigits,
    LiteralBase,
    NearestNumber,
}

impl Strategy {
    pub const CASCADE: [Strategy; 4] = [
        Strategy::ExactToken,
        Strategy::SpacedDigits,
        Strategy::LiteralBase,
        Strategy::NearestNumber,
    ];

    fn handler(&self) -> StrategyFn {
        match self {
            Strategy::ExactToken => exact_token,
            Strategy::SpacedDigits => spaced_digits,
            Strategy::LiteralBase => literal_base,
            Strategy::NearestNumber => nearest_number,
        }
    }

    pub fn try_apply(&self, text: &str, substitution: &Substitution) -> Option<String> {
        (self.handler())(text, substitution)
    }

    /// First strategy of the cascade that matches, along with its output.
    pub fn first_match(text: &str, substitution: &Substitution) -> Option<(Strategy, String)> {
        Self::CASCADE
            .iter()
            .find_map(|s| s.try_apply(text, substitution).map(|out| (*s, out)))
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::ExactToken => write!(f, "exact token"),
            Strategy::SpacedDigits => write!(f, "spaced digits"),
            Strategy::LiteralBase => write!(f, "literal base"),
            Strategy::NearestNumber => write!(f, "nearest number"),
        }
    }
}

/// Looks for any level's value, since base texts do not always show level 1.
fn exact_token(text: &str, s: &Substitution) -> Option<String> {
    for value in s.values {
        let clean = clean_numeric(value);
        if clean.is_empty() {
            continue;
        }
        let percent = format!("{clean}%");
        if text.contains(&percent) {
            return Some(text.replacen(&percent, s.target, 1));
        }
        let plus = format!("+{clean}%");
        if text.contains(&plus) {
            return Some(text.replacen(&plus, &format!("+{}", s.with_percent()), 1));
        }
    }
    None
}

/// Repairs source text such as `+1 0%` where the digits got split apart.
fn spaced_digits(text: &str, s: &Substitution) -> Option<String> {
    let digits: Vec<String> = s
        .clean_base
        .chars()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    let pattern = Regex::new(&format!(r"\+?{}%", digits.join(r"\s+"))).ok()?;
    if !pattern.is_match(text) {
        return None;
    }
    let replacement = s.with_percent();
    Some(
        pattern
            .replace_all(text, regex::NoExpand(&replacement))
            .into_owned(),
    )
}

fn literal_base(text: &str, s: &Substitution) -> Option<String> {
    let percent = format!("{}%", s.clean_base);
    if text.contains(&percent) {
        return Some(text.replacen(&percent, s.target, 1));
    }
    let plus = format!("+{}%", s.clean_base);
    if text.contains(&plus) {
        return Some(text.replacen(&plus, &format!("+{}", s.with_percent()), 1));
    }
    None
}

/// Falls back to the first number within tolerance of the level 1 value.
fn nearest_number(text: &str, s: &Substitution) -> Option<String> {
    if s.target_has_percent() {
        let token = PERCENT_TOKEN_REGEX
            .find_iter(text)
            .map(|m| m.as_str())
            .find(|token| is_close(token.trim_end_matches('%'), &s.clean_base, s.tolerance))?;
        return Some(text.replacen(token, s.target, 1));
    }
    let token = BARE_TOKEN_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|token| is_close(token, &s.clean_base, s.tolerance))?;
    let bounded = Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(token))).ok()?;
    Some(
        bounded
            .replace_all(text, regex::NoExpand(&s.clean_target))
            .into_owned(),
    )
}
