use std::time::{Duration, Instant};

pub const DEFAULT_NOTICE: &str = "Fill in the title, category and image URL.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub deadline: Instant,
}

/// Single-slot transient message. A new notice replaces the old one along with its deadline.
#[derive(Debug, Clone)]
pub struct NoticeSlot {
    current: Option<Notice>,
    duration: Duration,
    default_text: String,
}

impl NoticeSlot {
    pub fn new(duration: Duration, default_text: impl Into<String>) -> Self {
        Self {
            current: None,
            duration,
            default_text: default_text.into(),
        }
    }

    pub fn show(&mut self, text: Option<&str>, now: Instant) {
        let text = match text {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => self.default_text.clone(),
        };
        self.current = Some(Notice {
            text,
            deadline: now + self.duration,
        });
    }

    /// Clears the notice once its deadline has passed. Returns true if it was dismissed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(notice) if now >= notice.deadline => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

impl Default for NoticeSlot {
    fn default() -> Self {
        Self::new(Duration::from_millis(1800), DEFAULT_NOTICE)
    }
}
