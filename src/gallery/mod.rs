//! In-memory gallery core: cards, category tabs and the filter pass over them.

pub mod card;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod registry;

pub use card::{Card, CardId};
pub use error::GalleryError;
pub use registry::{TabKey, TabView};

use card::CardStore;
use error::FormField;
use filter::apply_filters;
use normalize::normalize;
use registry::{CategoryRegistry, Unregister};

/// Raw add-form input before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactDraft {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl ArtifactDraft {
    pub fn new(title: &str, category: &str, image: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            category: Some(category.to_string()),
            image: Some(image.to_string()),
        }
    }
}

/// Single owner of the card store, the category registry and the search term.
/// Every mutation leaves the registry invariant intact and visibility re-evaluated.
#[derive(Debug, Default)]
pub struct Gallery {
    store: CardStore,
    registry: CategoryRegistry,
    search: String,
}

impl Gallery {
    pub fn add_card(&mut self, draft: &ArtifactDraft) -> Result<CardId, GalleryError> {
        let title = normalize(draft.title.as_deref());
        let category = normalize(draft.category.as_deref());
        let image = normalize(draft.image.as_deref());

        let missing: Vec<FormField> = [
            (FormField::Title, &title),
            (FormField::Category, &category),
            (FormField::Image, &image),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(GalleryError::IncompleteSubmission { missing });
        }

        self.registry.register_category(&category);
        let id = self.store.insert(title, category, image);
        self.apply_filters();
        Ok(id)
    }

    /// Removes the card and drops its category tab when it was the last one.
    pub fn delete_card(&mut self, id: CardId) -> Option<Card> {
        let card = self.store.remove(id)?;
        self.registry.release_card(&card.category);
        self.cleanup_category(&card.category);
        Some(card)
    }

    pub fn toggle_favorite(&mut self, id: CardId) -> Option<bool> {
        self.store.get_mut(id).map(Card::toggle_favorite)
    }

    pub fn select_tab(&mut self, tab: TabKey) -> bool {
        if !self.registry.select(tab) {
            return false;
        }
        self.apply_filters();
        true
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.apply_filters();
    }

    pub fn apply_filters(&mut self) -> usize {
        apply_filters(&mut self.store, self.registry.active(), &self.search)
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.store.get(id)
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.store.iter()
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.store.iter().filter(|card| card.visible)
    }

    pub fn card_count(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn active_tab(&self) -> &TabKey {
        self.registry.active()
    }

    pub fn tabs(&self) -> Vec<TabView> {
        self.registry.tabs()
    }

    fn cleanup_category(&mut self, category: &str) {
        debug_assert_eq!(
            self.store.has_category(category),
            self.registry.live_cards(category) > 0
        );
        match self.registry.unregister_if_empty(category) {
            Unregister::Removed { was_active: true } => {
                self.select_tab(TabKey::All);
            }
            Unregister::Removed { was_active: false } | Unregister::Kept => {
                self.apply_filters();
            }
        }
    }
}
