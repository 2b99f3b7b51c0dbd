use chrono::{DateTime, Local};
use std::fmt;

/// Top-level frame id; navigations in other frames are ignored.
pub const MAIN_FRAME_ID: i64 = 0;

/// A navigation committed in a tab.
#[derive(Debug, Clone)]
pub struct NavigationCommitted {
    pub tab_id: i64,
    pub frame_id: i64,
    pub url: String,
    pub timestamp: DateTime<Local>,
}

impl NavigationCommitted {
    pub fn is_main_frame(&self) -> bool {
        self.frame_id == MAIN_FRAME_ID
    }
}

/// A tab was brought to the foreground.
#[derive(Debug, Clone, Copy)]
pub struct TabActivated {
    pub tab_id: i64,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Not a candidate for blocking (sub-frame, internal page, tab gone)
    Ignored,
    Allowed,
    Redirected,
    /// Verdict was block but the tab could not be redirected
    RedirectFailed,
}

impl NavigationOutcome {
    pub fn to_str(&self) -> &'static str {
        match self {
            NavigationOutcome::Ignored => "ignored",
            NavigationOutcome::Allowed => "allowed",
            NavigationOutcome::Redirected => "redirected",
            NavigationOutcome::RedirectFailed => "redirect_failed",
        }
    }
}

impl fmt::Display for NavigationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
