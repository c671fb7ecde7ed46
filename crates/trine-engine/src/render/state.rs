/// Render loop state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    /// Terminal. Teardown follows.
    Closing,
}

impl LoopState {
    /// Next state given the window's close flag.
    #[inline]
    pub fn advance(self, close_requested: bool) -> Self {
        match self {
            Self::Closing => Self::Closing,
            Self::Running if close_requested => Self::Closing,
            Self::Running => Self::Running,
        }
    }
}
