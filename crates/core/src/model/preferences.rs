/// Shuffle-speed preference shown on the table.
///
/// The value is tracked and displayed but does not drive any timer; the draw
/// cadence is fixed at `time::DRAW_POLL_INTERVAL`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShuffleSpeed {
    #[default]
    Normal,
    Fast,
}

impl ShuffleSpeed {
    #[must_use]
    pub const fn millis(self) -> u64 {
        match self {
            Self::Normal => 1000,
            Self::Fast => 500,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Fast,
            Self::Fast => Self::Normal,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Fast => "Fast",
        }
    }
}
