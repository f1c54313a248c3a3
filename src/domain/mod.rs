//! Domain layer: the payphone state machine and the values it works with.

pub mod coin;
pub mod command;
pub mod journal;
pub mod machine;
pub mod money;
pub mod ports;
pub mod tariff;
