use crate::gallery::Card;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetail {
    pub title: String,
    pub category: String,
    pub image: String,
}

impl From<&Card> for CardDetail {
    fn from(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            category: card.category.clone(),
            image: card.image.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(CardDetail),
}

impl ModalState {
    pub fn open(&mut self, detail: CardDetail) {
        *self = Self::Open(detail);
    }

    /// Returns false when already closed. Dropping the detail releases the image reference.
    pub fn close(&mut self) -> bool {
        if matches!(self, Self::Closed) {
            return false;
        }
        *self = Self::Closed;
        true
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn detail(&self) -> Option<&CardDetail> {
        match self {
            Self::Open(detail) => Some(detail),
            Self::Closed => None,
        }
    }

    pub fn image(&self) -> Option<&str> {
        self.detail().map(|detail| detail.image.as_str())
    }
}
