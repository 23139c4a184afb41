use crate::gallery::ArtifactDraft;

/// Add-form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub category: String,
    pub image: String,
}

impl FormState {
    pub fn draft(&self) -> ArtifactDraft {
        ArtifactDraft::new(&self.title, &self.category, &self.image)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.category.clear();
        self.image.clear();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}
