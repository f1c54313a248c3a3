use crate::domain::money::Cents;
use crate::error::{NumberRejection, PayphoneError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every dialable number has exactly this many digits.
pub const NUMBER_LENGTH: usize = 9;

/// A number that passed the length and digit checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DialedNumber(String);

impl DialedNumber {
    pub fn parse(raw: &str) -> std::result::Result<Self, NumberRejection> {
        if raw.len() != NUMBER_LENGTH || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumberRejection::Malformed);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DialedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A prefix and the flat cost of any call whose number starts with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffRule {
    prefix: String,
    cost: Cents,
}

impl TariffRule {
    pub fn new(prefix: impl Into<String>, cost: Cents) -> Self {
        Self {
            prefix: prefix.into(),
            cost,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn cost(&self) -> Cents {
        self.cost
    }

    pub fn matches(&self, number: &DialedNumber) -> bool {
        number.as_str().starts_with(&self.prefix)
    }
}

/// The dialing plan: numbers that may never be called and the ordered
/// prefix rules that price everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tariff {
    blocked: Vec<String>,
    rules: Vec<TariffRule>,
}

impl Default for Tariff {
    fn default() -> Self {
        Self::new(
            vec!["601".to_string(), "641".to_string()],
            vec![
                // International
                TariffRule::new("00", Cents::new(150)),
                // National
                TariffRule::new("2", Cents::new(25)),
                // Toll-free
                TariffRule::new("800", Cents::ZERO),
                // Shared cost
                TariffRule::new("808", Cents::new(10)),
            ],
        )
    }
}

impl Tariff {
    pub fn new(blocked: Vec<String>, rules: Vec<TariffRule>) -> Self {
        Self { blocked, rules }
    }

    pub fn rules(&self) -> &[TariffRule] {
        &self.rules
    }

    /// Blocked numbers are compared exactly, not by prefix.
    pub fn is_blocked(&self, raw: &str) -> bool {
        self.blocked.iter().any(|b| b == raw)
    }

    /// Cost of a call to `number`: the first matching rule wins.
    pub fn resolve(&self, number: &DialedNumber) -> Option<Cents> {
        self.rules
            .iter()
            .find(|rule| rule.matches(number))
            .map(TariffRule::cost)
    }

    /// Validates a raw number and prices it.
    ///
    /// Checks run in a fixed order: blocked list, then length and digits,
    /// then tariff lookup. A number no rule prices is unsupported.
    pub fn quote(&self, raw: &str) -> std::result::Result<(DialedNumber, Cents), NumberRejection> {
        if self.is_blocked(raw) {
            return Err(NumberRejection::Blocked);
        }
        let number = DialedNumber::parse(raw)?;
        let cost = self
            .resolve(&number)
            .ok_or(NumberRejection::Unsupported)?;
        Ok((number, cost))
    }

    /// Builds a tariff from configuration rows, keeping their order as the
    /// rule priority.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = TariffRecord>,
    {
        let mut blocked = Vec::new();
        let mut rules = Vec::new();

        for record in records {
            if record.pattern.is_empty() || !record.pattern.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PayphoneError::ConfigError(format!(
                    "pattern '{}' must be a non-empty string of digits",
                    record.pattern
                )));
            }
            match (record.kind, record.cost) {
                (RuleKind::Blocked, None) => blocked.push(record.pattern),
                (RuleKind::Blocked, Some(_)) => {
                    return Err(PayphoneError::ConfigError(format!(
                        "blocked number '{}' cannot carry a cost",
                        record.pattern
                    )));
                }
                (RuleKind::Prefix, Some(cost)) => {
                    rules.push(TariffRule::new(record.pattern, Cents::new(cost)))
                }
                (RuleKind::Prefix, None) => {
                    return Err(PayphoneError::ConfigError(format!(
                        "prefix '{}' is missing a cost",
                        record.pattern
                    )));
                }
            }
        }

        if rules.is_empty() {
            return Err(PayphoneError::ConfigError(
                "at least one prefix rule is required".to_string(),
            ));
        }

        Ok(Self::new(blocked, rules))
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Prefix,
    Blocked,
}

/// One row of a tariff file: `kind,pattern,cost`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct TariffRecord {
    pub kind: RuleKind,
    pub pattern: String,
    pub cost: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(raw: &str) -> DialedNumber {
        DialedNumber::parse(raw).unwrap()
    }

    #[test]
    fn test_dialed_number_requires_nine_digits() {
        assert!(DialedNumber::parse("212345678").is_ok());
        assert_eq!(
            DialedNumber::parse("00123456"),
            Err(NumberRejection::Malformed)
        );
        assert_eq!(
            DialedNumber::parse("2123456789"),
            Err(NumberRejection::Malformed)
        );
        assert_eq!(
            DialedNumber::parse("21234567a"),
            Err(NumberRejection::Malformed)
        );
    }

    #[test]
    fn test_default_rules_in_priority_order() {
        let tariff = Tariff::default();
        assert_eq!(tariff.resolve(&number("001234567")), Some(Cents::new(150)));
        assert_eq!(tariff.resolve(&number("212345678")), Some(Cents::new(25)));
        assert_eq!(tariff.resolve(&number("800123456")), Some(Cents::ZERO));
        assert_eq!(tariff.resolve(&number("808123456")), Some(Cents::new(10)));
        assert_eq!(tariff.resolve(&number("912345678")), None);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let tariff = Tariff::new(
            vec![],
            vec![
                TariffRule::new("80", Cents::new(5)),
                TariffRule::new("800", Cents::ZERO),
            ],
        );
        assert_eq!(tariff.resolve(&number("800123456")), Some(Cents::new(5)));
    }

    #[test]
    fn test_quote_checks_blocked_before_length() {
        let tariff = Tariff::default();
        assert_eq!(tariff.quote("601"), Err(NumberRejection::Blocked));
        assert_eq!(tariff.quote("641"), Err(NumberRejection::Blocked));
        // Blocked numbers are exact matches, not prefixes
        assert_eq!(tariff.quote("601234567"), Err(NumberRejection::Unsupported));
    }

    #[test]
    fn test_quote_checks_length_before_tariff() {
        let tariff = Tariff::default();
        assert_eq!(tariff.quote("00123456"), Err(NumberRejection::Malformed));
        assert_eq!(
            tariff.quote("212345678"),
            Ok((number("212345678"), Cents::new(25)))
        );
    }

    #[test]
    fn test_from_records_keeps_order() {
        let records = vec![
            TariffRecord {
                kind: RuleKind::Blocked,
                pattern: "112".into(),
                cost: None,
            },
            TariffRecord {
                kind: RuleKind::Prefix,
                pattern: "9".into(),
                cost: Some(40),
            },
        ];
        let tariff = Tariff::from_records(records).unwrap();
        assert!(tariff.is_blocked("112"));
        assert!(!tariff.is_blocked("601"));
        assert_eq!(tariff.rules(), &[TariffRule::new("9", Cents::new(40))]);
        assert_eq!(tariff.rules()[0].prefix(), "9");
    }

    #[test]
    fn test_from_records_rejects_bad_rows() {
        let missing_cost = vec![TariffRecord {
            kind: RuleKind::Prefix,
            pattern: "2".into(),
            cost: None,
        }];
        assert!(matches!(
            Tariff::from_records(missing_cost),
            Err(PayphoneError::ConfigError(_))
        ));

        let bad_pattern = vec![TariffRecord {
            kind: RuleKind::Prefix,
            pattern: "2x".into(),
            cost: Some(1),
        }];
        assert!(matches!(
            Tariff::from_records(bad_pattern),
            Err(PayphoneError::ConfigError(_))
        ));

        let only_blocked = vec![TariffRecord {
            kind: RuleKind::Blocked,
            pattern: "601".into(),
            cost: None,
        }];
        assert!(matches!(
            Tariff::from_records(only_blocked),
            Err(PayphoneError::ConfigError(_))
        ));
    }
}
