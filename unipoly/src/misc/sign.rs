use std::ops::Neg;
use derive_more::{Display, Debug};
use num_traits::Signed;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Display, Debug)]
pub enum Sign { 
    #[default]
    #[display("+")]
    #[debug("+")]
    Pos,

    #[display("-")]
    #[debug("-")]
    Neg
}

impl Sign { 
    pub fn is_positive(&self) -> bool { 
        self == &Sign::Pos
    }

    pub fn is_negative(&self) -> bool { 
        !self.is_positive()
    }

    pub fn from_char(c: char) -> Option<Self> { 
        match c { 
            '+' => Some(Sign::Pos),
            '-' => Some(Sign::Neg),
             _  => None
        }
    }

    pub fn apply(&self, a: f64) -> f64 { 
        match self { 
            Sign::Pos =>  a,
            Sign::Neg => -a
        }
    }
}

impl Neg for Sign {
    type Output = Self;
    fn neg(self) -> Self {
        use Sign::*;
        match self { 
            Neg => Pos,
            Pos => Neg
        }
    }
}

pub trait GetSign { 
    fn sign(&self) -> Sign;
}

impl<T> GetSign for T where T: Signed {
    fn sign(&self) -> Sign {
        if self.is_negative() { 
            Sign::Neg 
        } else { 
            Sign::Pos 
        }
    }
}
