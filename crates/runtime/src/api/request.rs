//! Compare requests as clients send them.
use calc_core::{CompareError, Loadout, Monster, XAxis, YAxis};
use serde::Deserialize;
use tracing::error;

use super::errors::{Result, RuntimeError};

/// One comparison to run: what to compare and along which axes.
#[derive(Clone, Debug, PartialEq)]
pub struct CompareRequest {
    pub loadouts: Vec<Loadout>,
    pub monster: Monster,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
}

impl CompareRequest {
    pub fn new(loadouts: Vec<Loadout>, monster: Monster, x_axis: XAxis, y_axis: YAxis) -> Self {
        Self {
            loadouts,
            monster,
            x_axis,
            y_axis,
        }
    }

    /// Decodes `{ "loadouts": [...], "monster": {...}, "axes": { "x": 0, "y": 6 } }`.
    pub fn from_json(payload: &str) -> Result<Self> {
        let raw: RawCompareRequest =
            serde_json::from_str(payload).map_err(RuntimeError::InvalidRequest)?;
        let (x_axis, y_axis) = raw.axes.resolve()?;

        Ok(Self::new(raw.loadouts, raw.monster, x_axis, y_axis))
    }
}

/// Axis selection by wire code, before resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct RawAxes {
    pub x: u8,
    pub y: u8,
}

impl RawAxes {
    /// Resolves both codes, failing on the first unknown one.
    pub fn resolve(self) -> std::result::Result<(XAxis, YAxis), CompareError> {
        let x = XAxis::try_from(self.x)
            .inspect_err(|err| error!(code = self.x, %err, "rejecting compare request"))?;
        let y = YAxis::try_from(self.y)
            .inspect_err(|err| error!(code = self.y, %err, "rejecting compare request"))?;
        Ok((x, y))
    }
}

#[derive(Deserialize)]
struct RawCompareRequest {
    loadouts: Vec<Loadout>,
    monster: Monster,
    axes: RawAxes,
}
