use derive_more::Display;

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Error { 
    #[display("parse error at {pos}: {msg} ('{token}')")]
    Parse { 
        token: String,
        pos: usize,
        msg: String
    },

    #[display("invalid argument: {_0}")]
    InvalidArgument(String),

    #[display("division by zero: {_0}")]
    DivisionByZero(String)
}

impl Error { 
    pub fn parse<S1, S2>(token: S1, pos: usize, msg: S2) -> Self
    where S1: ToString, S2: ToString {
        Error::Parse { token: token.to_string(), pos, msg: msg.to_string() }
    }

    pub fn is_parse(&self) -> bool { 
        matches!(self, Error::Parse { .. })
    }

    pub fn is_invalid_argument(&self) -> bool { 
        matches!(self, Error::InvalidArgument(_))
    }

    pub fn is_division_by_zero(&self) -> bool { 
        matches!(self, Error::DivisionByZero(_))
    }
}

impl std::error::Error for Error {}

pub type Result<T, E = Error> = std::result::Result<T, E>;

macro_rules! err {
    ($kind:ident, $($arg:tt)*) => {{
        let e = $crate::Error::$kind(format!($($arg)*));
        Err(e)
    }}
}

macro_rules! ensure {
    ($cond:expr, $kind:ident, $($arg:tt)*) => {{
        if !$cond { 
            return $crate::err::err!($kind, $($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
