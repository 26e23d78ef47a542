use std::fmt;

/// Surrogate key of a facility row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FacilityId(i64);

impl FacilityId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn to_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for FacilityId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<FacilityId> for i64 {
    fn from(from: FacilityId) -> Self {
        from.0
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
