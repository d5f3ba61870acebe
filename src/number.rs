//! Representation of minischeme numbers.

use std::cmp::Ordering;
use std::fmt;
use std::ops;
use std::str;

use self::Number::*;


#[derive(Clone, Copy, Debug)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

#[derive(Debug)]
pub struct ParseNumberError(String);


impl From<Number> for f64 {
    fn from(num: Number) -> f64 {
        match num {
            Integer(i) => i as f64,
            Float(f) => f,
        }
    }
}

impl str::FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let integer = s.parse::<i64>();
        if let Ok(int) = integer {
            return Ok(Integer(int));
        }

        let float = s.parse::<f64>();
        if let Ok(f) = float {
            return Ok(Float(f));
        }

        Err(ParseNumberError(s.to_string()))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Integer(0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(i) => write!(f, "{}", i),
            Float(ff) => write!(f, "{}", ff),
        }
    }
}


// Mixed-subtype arithmetic promotes to Float; division always produces one.
impl ops::Add for Number {
    type Output = Number;

    fn add(self, other: Number) -> Number {
        match (self, other) {
            (Integer(a), Integer(b)) => Integer(a + b),
            (a, b) => Float(f64::from(a) + f64::from(b)),
        }
    }
}

impl ops::Sub for Number {
    type Output = Number;

    fn sub(self, other: Number) -> Number {
        match (self, other) {
            (Integer(a), Integer(b)) => Integer(a - b),
            (a, b) => Float(f64::from(a) - f64::from(b)),
        }
    }
}

impl ops::Mul for Number {
    type Output = Number;

    fn mul(self, other: Number) -> Number {
        match (self, other) {
            (Integer(a), Integer(b)) => Integer(a * b),
            (a, b) => Float(f64::from(a) * f64::from(b)),
        }
    }
}

impl ops::Div for Number {
    type Output = Number;

    fn div(self, other: Number) -> Number {
        Float(f64::from(self) / f64::from(other))
    }
}

impl ops::Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Integer(i) => Integer(-i),
            Float(f) => Float(-f),
        }
    }
}


// Equality and ordering are numeric, not structural: Integer(1) == Float(1.).
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Integer(a), Integer(b)) => a == b,
            (a, b) => f64::from(*a) == f64::from(*b),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Integer(a), Integer(b)) => a.partial_cmp(b),
            (a, b) => f64::from(*a).partial_cmp(&f64::from(*b)),
        }
    }
}
