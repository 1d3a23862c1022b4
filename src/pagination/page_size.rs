/// Page size always requested for the position-functions listing
pub const POSITION_FUNCTIONS_PAGE_SIZE: u32 = 100;

/// Page sizes the job feed accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageSize {
    /// Everything the feed shows on one page (100)
    All,
    TwentyFive,
    #[default]
    Five,
}

impl PageSize {
    /// Map the symbolic input used by the feed UI.
    /// Returns `None` for anything other than "all", "25" or "5".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "25" => Some(Self::TwentyFive),
            "5" => Some(Self::Five),
            _ => None,
        }
    }

    pub fn value(self) -> u32 {
        match self {
            Self::All => 100,
            Self::TwentyFive => 25,
            Self::Five => 5,
        }
    }
}
