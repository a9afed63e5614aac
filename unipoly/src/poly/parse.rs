use std::str::FromStr;
use itertools::Itertools;
use log::trace;

use crate::{Error, Result, Sign};
use super::mono::parse_term;
use super::Poly;

// Parsed exponents beyond this are rejected,
// since the dense coefficient vector is allocated up front.
pub const MAX_PARSE_DEG: usize = 1 << 20;

// A signed term `± body`, where `pos` is the byte offset
// of the term (or of its sign) in the original input.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Token {
    pub sign: Sign,
    pub body: String,
    pub pos: usize
}

// Splits an expression into signed terms.
// Whitespace is ignored, and `+` / `-` separate terms
// unless they are the exponent sign of a literal as in `1e-3`.
pub(crate) fn split_terms(s: &str) -> Result<Vec<Token>> {
    let chars = s.char_indices().filter(|(_, c)| !c.is_whitespace()).collect_vec();

    if chars.is_empty() {
        return Err(Error::parse(s, 0, "empty expression"))
    }

    let is_separator = |k: usize| -> bool {
        let c = chars[k].1;
        if !(c == '+' || c == '-') {
            return false
        }
        // `e`, `E` and the sign must be adjacent in the raw input.
        let adjacent = |j: usize| chars[j].0 + 1 == chars[j + 1].0;
        let exp_sign = k >= 2
            && matches!(chars[k - 1].1, 'e' | 'E')
            && (chars[k - 2].1.is_ascii_digit() || chars[k - 2].1 == '.')
            && adjacent(k - 2)
            && adjacent(k - 1);
        !exp_sign
    };

    let mut res = vec![];
    let mut sign = Sign::Pos;
    let mut pos = chars[0].0;
    let mut body = String::new();

    let mut push = |sign: Sign, pos: usize, body: &str| -> Result<()> {
        if body.is_empty() {
            return Err(Error::parse(&s[pos..], pos, format!("missing operand after '{sign}'")))
        }
        res.push(Token { sign, body: body.to_string(), pos });
        Ok(())
    };

    for (k, &(i, c)) in chars.iter().enumerate() {
        if is_separator(k) {
            if k > 0 {
                push(sign, pos, &body)?;
            }
            sign = Sign::from_char(c).unwrap_or_default();
            pos = i;
            body.clear();
        } else {
            body.push(c);
        }
    }

    push(sign, pos, &body)?;

    Ok(res)
}

impl<const X: char> Poly<X> {
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl<const X: char> FromStr for Poly<X> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let terms = split_terms(s)?.into_iter().map(|t| {
            let (d, a) = parse_term(X, &t.body).map_err(|msg|
                Error::parse(&t.body, t.pos, msg)
            )?;

            if d > MAX_PARSE_DEG {
                let msg = format!("exponent {d} exceeds {MAX_PARSE_DEG}");
                return Err(Error::parse(&t.body, t.pos, msg))
            }

            trace!("term: {}{}*{X}^{d}", t.sign, a);

            Ok((d, t.sign.apply(a)))
        }).collect::<Result<Vec<_>>>()?;

        Ok(Self::from_iter(terms))
    }
}
