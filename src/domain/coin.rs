use crate::domain::money::Cents;
use crate::error::SessionError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A coin the payphone accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    TwoEuros,
    OneEuro,
    FiftyCents,
    TwentyCents,
    TenCents,
    FiveCents,
    TwoCents,
    OneCent,
}

impl Coin {
    pub const ALL: [Coin; 8] = [
        Coin::TwoEuros,
        Coin::OneEuro,
        Coin::FiftyCents,
        Coin::TwentyCents,
        Coin::TenCents,
        Coin::FiveCents,
        Coin::TwoCents,
        Coin::OneCent,
    ];

    pub fn value(self) -> Cents {
        let cents = match self {
            Coin::TwoEuros => 200,
            Coin::OneEuro => 100,
            Coin::FiftyCents => 50,
            Coin::TwentyCents => 20,
            Coin::TenCents => 10,
            Coin::FiveCents => 5,
            Coin::TwoCents => 2,
            Coin::OneCent => 1,
        };
        Cents::new(cents)
    }

    pub fn label(self) -> &'static str {
        match self {
            Coin::TwoEuros => "2e",
            Coin::OneEuro => "1e",
            Coin::FiftyCents => "50c",
            Coin::TwentyCents => "20c",
            Coin::TenCents => "10c",
            Coin::FiveCents => "5c",
            Coin::TwoCents => "2c",
            Coin::OneCent => "1c",
        }
    }

    /// Resolves a whole batch of labels, failing on the first unknown one.
    pub fn parse_batch<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Coin>, SessionError> {
        labels.iter().map(|label| label.as_ref().parse()).collect()
    }
}

impl FromStr for Coin {
    type Err = SessionError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Coin::ALL
            .into_iter()
            .find(|coin| coin.label() == label)
            .ok_or_else(|| SessionError::InvalidCoin(label.to_string()))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Coin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
