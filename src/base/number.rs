/// A PDF number, which can be integer or real.
///
/// The specification does not require particular bit widths, so `i64` and `f64` were chosen,
/// respectively. The variant is kept as found so that `3` and `3.0` stay distinguishable.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Number {
    Int(i64),
    Real(f64)
}

impl Number {
    /// The value as an integer. Reals are truncated towards zero.
    pub fn as_i64(&self) -> i64 {
        match *self {
            Number::Int(x) => x,
            Number::Real(x) => x as i64
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(x) => x as f64,
            Number::Real(x) => x
        }
    }
}

impl From<i64> for Number {
    fn from(x: i64) -> Number {
        Number::Int(x)
    }
}

impl From<u32> for Number {
    fn from(x: u32) -> Number {
        Number::Int(x.into())
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Number {
        Number::Real(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Number::Int(7).as_i64(), 7);
        assert_eq!(Number::Real(7.9).as_i64(), 7);
        assert_eq!(Number::Real(-2.5).as_i64(), -2);
        assert_eq!(Number::Int(3).as_f64(), 3.);
        assert_eq!(Number::from(5u32), Number::Int(5));
        assert_ne!(Number::from(3i64), Number::from(3.));
    }
}
