#![allow(dead_code)]

use payphone::application::payphone::PayphoneService;
use payphone::domain::machine::{Machine, Outcome};
use payphone::error::{PayphoneError, SessionError};
use payphone::infrastructure::in_memory::InMemoryJournal;

pub fn new_service() -> PayphoneService {
    PayphoneService::new(Machine::default(), Box::new(InMemoryJournal::new()))
}

/// Feeds `lines` in order and returns each result, panicking on anything
/// other than a session rejection.
pub async fn feed(
    service: &mut PayphoneService,
    lines: &[&str],
) -> Vec<Result<Outcome, SessionError>> {
    let mut results = Vec::with_capacity(lines.len());
    for line in lines {
        let result = match service.handle_line(line).await {
            Ok(outcome) => Ok(outcome),
            Err(PayphoneError::Session(err)) => Err(err),
            Err(err) => panic!("unexpected infrastructure error: {err}"),
        };
        results.push(result);
    }
    results
}
