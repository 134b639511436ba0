//! Split-screen configuration: how many panels, and which way they stack.

use std::fmt;
use std::str::FromStr;

/// Direction panels are laid out in when the screen is split.
///
/// This is the only layout preference persisted across runs, stored in the
/// config as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitDirection {
    /// Panels side by side, left to right.
    #[default]
    Horizontal,
    /// Panels stacked top to bottom.
    Vertical,
}

impl SplitDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitDirection::Horizontal => "horizontal",
            SplitDirection::Vertical => "vertical",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SplitDirection::Horizontal => SplitDirection::Vertical,
            SplitDirection::Vertical => SplitDirection::Horizontal,
        }
    }
}

impl FromStr for SplitDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(SplitDirection::Horizontal),
            "vertical" => Ok(SplitDirection::Vertical),
            _ => Err(format!("Unknown split direction: {}", s)),
        }
    }
}

impl fmt::Display for SplitDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared degree of split: how many panels the workspace shows, 1 to 5.
///
/// Out-of-range values clamp instead of failing, so every `ScreenCount` in
/// the program is valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScreenCount(u8);

impl ScreenCount {
    pub const MIN: ScreenCount = ScreenCount(1);
    pub const MAX: ScreenCount = ScreenCount(5);

    pub fn new(n: u8) -> Self {
        Self(n.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// True when more than one panel is shown.
    pub fn is_split(self) -> bool {
        self.0 > 1
    }
}

impl Default for ScreenCount {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for ScreenCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
