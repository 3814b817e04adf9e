//! Opaque identifier for text fields held in an [`InputValueStore`](crate::InputValueStore).
//!
//! Kept as a plain `u64` so the store stays independent of the DOM; the
//! `html::Id` conversions below are the only interop point.

/// Handle for one text field. Carries no meaning beyond being a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<html::Id> for InputId {
    #[inline]
    fn from(id: html::Id) -> Self {
        Self::from_raw(u64::from(id.0))
    }
}

impl TryFrom<InputId> for html::Id {
    type Error = std::num::TryFromIntError;

    fn try_from(id: InputId) -> Result<Self, Self::Error> {
        u32::try_from(id.as_raw()).map(html::Id)
    }
}
