use crate::IntoDigits;

// Lays out `(x, r)` terms as `r₀x₀ + r₁x₁ - ...`, 
// dropping unit coefficients and constant monomials `1`.
pub fn lc<X, R, S>(mut terms: S) -> String
where 
    X: ToString, 
    R: ToString, 
    S: Iterator<Item = (X, R)>
{ 
    let mut res: Vec<String> = vec![];
    
    if let Some((x, r)) = terms.next() {
        let r = r.to_string();
        let x = x.to_string();

        let term = if r == "1" { 
            x
        } else if r == "-1" && x != "1" { 
            format!("-{x}")
        } else if x == "1" {
            r
        } else { 
            format!("{r}{x}")
        };

        res.push(term)
    };

    for (x, r) in terms {
        let r = r.to_string();
        let x = x.to_string();

        let (op, r) = if let Some(r) = r.strip_prefix('-') { 
            ("-", r.to_owned()) 
        } else { 
            ("+", r)
        };

        let term = if x == "1" { 
            r
        } else if r == "1" { 
            x
        } else { 
            format!("{r}{x}")
        };

        res.push(op.to_string());
        res.push(term);
    }

    if res.is_empty() { 
        "0".to_string()
    } else { 
        res.join(" ")
    }
}

pub fn superscript(i: usize) -> String { 
    if i == 0 { 
        return '\u{2070}'.into()
    }

    i.into_digits().into_iter().fold(String::new(), |mut res, d| {
        let c = match d { 
            1 => '\u{00B9}',
            2 => '\u{00B2}',
            3 => '\u{00B3}',
            _ => char::from_u32(('\u{2070}' as u32) + (d as u32)).unwrap_or('?')
        };
        res.push(c);
        res
    })
}
