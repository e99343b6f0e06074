use serde::{Deserialize, Serialize};

use crate::LabelError;

/// Closed inclusive port interval reserved for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EprPorts {
    pub min: u16,
    pub max: u16,
}

/// How a room exposes its WebRTC endpoints.
///
/// - `Single`: one multiplexed port (stored as the `mux` label).
/// - `Range` : a dedicated port interval (stored as `epr.min` / `epr.max`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PortConfig {
    Single(u16),
    Range { min: u16, max: u16 },
}

impl PortConfig {
    /// Single multiplexed port.
    pub const fn single(port: u16) -> Self {
        Self::Single(port)
    }

    /// Port range, rejecting `min > max`.
    pub fn range(min: u16, max: u16) -> Result<Self, LabelError> {
        if min > max {
            return Err(LabelError::InvalidRange { min, max });
        }
        Ok(Self::Range { min, max })
    }

    /// Build from the legacy `mux` flag plus interval pair.
    ///
    /// Only `mux && min == max` collapses into [`PortConfig::Single`]; a mux flag with a wider
    /// interval is kept as a range.
    pub fn from_parts(mux: bool, epr: EprPorts) -> Result<Self, LabelError> {
        if mux && epr.min == epr.max {
            return Ok(Self::Single(epr.min));
        }
        Self::range(epr.min, epr.max)
    }

    /// Returns `true` for the single-port form.
    pub const fn is_mux(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// The interval covered by this configuration; `min == max` for a single port.
    pub const fn epr(&self) -> EprPorts {
        match *self {
            Self::Single(port) => EprPorts {
                min: port,
                max: port,
            },
            Self::Range { min, max } => EprPorts { min, max },
        }
    }

    /// Number of simultaneous connections the ports allow: `max - min + 1`.
    ///
    /// Widened to `u32` because a full `0..=65535` range holds 65536 ports.
    pub const fn max_connections(&self) -> u32 {
        let epr = self.epr();
        (epr.max as u32).saturating_sub(epr.min as u32) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_covers_one_port() {
        let p = PortConfig::single(52100);
        assert!(p.is_mux());
        assert_eq!(p.epr(), EprPorts { min: 52100, max: 52100 });
        assert_eq!(p.max_connections(), 1);
    }

    #[test]
    fn range_counts_inclusive_bounds() {
        let p = PortConfig::range(52000, 52009).unwrap();
        assert!(!p.is_mux());
        assert_eq!(p.max_connections(), 10);
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        let err = PortConfig::range(10, 9).unwrap_err();
        assert_eq!(err, LabelError::InvalidRange { min: 10, max: 9 });
    }

    #[test]
    fn full_range_does_not_overflow() {
        let p = PortConfig::range(0, u16::MAX).unwrap();
        assert_eq!(p.max_connections(), 65536);
    }

    #[test]
    fn from_parts_collapses_only_equal_mux_bounds() {
        let equal = EprPorts { min: 5, max: 5 };
        let wide = EprPorts { min: 5, max: 8 };

        assert_eq!(PortConfig::from_parts(true, equal).unwrap(), PortConfig::Single(5));
        assert_eq!(
            PortConfig::from_parts(true, wide).unwrap(),
            PortConfig::Range { min: 5, max: 8 }
        );
        assert_eq!(
            PortConfig::from_parts(false, equal).unwrap(),
            PortConfig::Range { min: 5, max: 5 }
        );
    }
}
