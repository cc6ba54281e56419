//! Request sequencing for overlapping metadata loads.
//!
//! Every load is stamped with a monotonically increasing token. A completion
//! is only applied when its token is still the latest one issued, so a slow
//! earlier request can never overwrite the result of a later one.

#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps a new request and returns its token.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether `token` belongs to the most recently issued request.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_request_is_current() {
        let mut seq = RequestSequencer::new();
        let token = seq.issue();
        assert!(seq.is_current(token));
    }

    #[test]
    fn stale_token_is_discarded() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn one_signal_means_one_current_load() {
        // A submit-outcome signal issues exactly one token; a completion for
        // that token is applied once and any earlier in-flight load is dropped.
        let mut seq = RequestSequencer::new();
        let in_flight = seq.issue();
        let reload = seq.issue();
        assert!(seq.is_current(reload));
        assert!(!seq.is_current(in_flight));
    }
}
