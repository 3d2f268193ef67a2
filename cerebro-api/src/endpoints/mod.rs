pub mod auth;
pub mod categories;
pub mod commitments;
pub mod dashboard;
pub mod expenses;

use serde::{Deserialize, Serialize};

/// A money amount in whole currency units.
///
/// The server stores integers but computed totals sometimes come back as
/// floats, so decoding accepts both and rounds.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "f64", into = "i64")]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value.round() as i64)
    }
}

impl From<Amount> for i64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl std::ops::Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), |acc, x| acc + x)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_decodes_integers_and_floats() {
        let amounts: Vec<Amount> = serde_json::from_str("[330, 299.6, -30, 0.4]").unwrap();
        assert_eq!(
            amounts,
            vec![Amount::new(330), Amount::new(300), Amount::new(-30), Amount::ZERO]
        );
    }

    #[test]
    fn amount_encodes_as_integer() {
        assert_eq!(serde_json::to_string(&Amount::new(1500)).unwrap(), "1500");
    }

    #[test]
    fn amount_arithmetic() {
        let total: Amount = [Amount::new(100), Amount::new(250)].into_iter().sum();
        assert_eq!(total, Amount::new(350));
        assert_eq!((Amount::new(300) - Amount::new(330)).abs(), Amount::new(30));
        assert!((Amount::new(300) - Amount::new(330)).is_negative());
    }
}
