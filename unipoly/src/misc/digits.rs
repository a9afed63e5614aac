pub trait IntoDigits: Sized { 
    type Digit;
    fn into_digits(self) -> Vec<Self::Digit> { 
        self.into_rev_digits().into_iter().rev().collect()
    }

    fn into_rev_digits(self) -> Vec<Self::Digit>;
}

impl IntoDigits for usize { 
    type Digit = u8;
    fn into_rev_digits(self) -> Vec<u8> {
        if self == 0 { return vec![0] }

        let mut num = self;
        (0..).map_while(|_| { 
            if num > 0 { 
                let d = (num % 10) as u8;
                num /= 10;
                Some(d)
            } else {
                None
            }
        }).collect()
    }
}
