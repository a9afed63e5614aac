use std::sync::OnceLock;
use regex::Regex;

use crate::util::format::superscript;

// A single term `c*X^d` of a polynomial, as read by the parser.

pub(crate) const LITERAL_PATTERN: &str = r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$";

fn literal_regex() -> &'static Regex { 
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LITERAL_PATTERN).unwrap())
}

pub(crate) fn parse_literal(s: &str) -> Result<f64, String> { 
    if !literal_regex().is_match(s) { 
        return Err(format!("'{s}' is not a number"))
    }
    s.parse::<f64>().map_err(|e| e.to_string())
}

pub(crate) fn parse_mono(x: char, s: &str) -> Result<usize, String> { 
    let Some(rest) = s.strip_prefix(x) else { 
        return Err(format!("'{s}' is not a power of {x}"))
    };

    if rest.is_empty() { 
        Ok(1)
    } else if let Some(d) = rest.strip_prefix('^') { 
        if !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()) { 
            d.parse::<usize>().map_err(|e| format!("invalid exponent '{d}': {e}"))
        } else { 
            Err(format!("invalid exponent '{d}'"))
        }
    } else { 
        Err(format!("'{s}' is not a power of {x}"))
    }
}

// Parses an unsigned term: `c`, `X`, `X^d`, `c*X` or `c*X^d`.
// Returns `(d, c)`.
pub(crate) fn parse_term(x: char, s: &str) -> Result<(usize, f64), String> { 
    if let Ok(c) = parse_literal(s) { 
        return Ok((0, c))
    }

    let (c, m) = match s.split_once('*') { 
        Some((c, m)) => (parse_literal(c)?, m),
        None => (1.0, s)
    };
    let d = parse_mono(x, m)?;

    Ok((d, c))
}

pub(crate) fn fmt_mono(x: char, d: usize, unicode: bool) -> String { 
    if d == 0 { 
        "1".to_string()
    } else if d == 1 { 
        x.to_string()
    } else if unicode {
        let e = superscript(d); 
        format!("{x}{e}")
    } else { 
        format!("{x}^{{{d}}}")
    }
}
