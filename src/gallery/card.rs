use std::fmt::{Display, Formatter};

pub const FAVORITE_LABEL: &str = "Add to favorites";
pub const UNFAVORITE_LABEL: &str = "Remove from favorites";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u64);

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub category: String,
    pub image: String,
    pub favorite: bool,
    pub visible: bool,
}

impl Card {
    pub fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }

    pub fn favorite_label(&self) -> &'static str {
        if self.favorite {
            UNFAVORITE_LABEL
        } else {
            FAVORITE_LABEL
        }
    }
}

/// Live cards in insertion order. Ids are never reused.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
    next_id: u64,
}

impl CardStore {
    pub fn insert(&mut self, title: String, category: String, image: String) -> CardId {
        self.next_id += 1;
        let id = CardId(self.next_id);
        self.cards.push(Card {
            id,
            title,
            category,
            image,
            favorite: false,
            visible: true,
        });
        id
    }

    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id == id)?;
        Some(self.cards.remove(index))
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.cards.iter().any(|card| card.category == category)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
