use std::fmt;

/// Identifier of a dealer in the external inventory service.
///
/// Dealers themselves are never modelled locally, they travel as opaque JSON.
/// Only the id is typed, so that handlers can reject falsy ids (empty,
/// non-numeric or zero) before anything goes upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerId(i64);

impl DealerId {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse::<i64>() {
            Ok(0) | Err(_) => None,
            Ok(id) => Some(DealerId(id)),
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for DealerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
