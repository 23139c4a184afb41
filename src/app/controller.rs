use std::time::Instant;

use crate::app::events::AppEvent;
use crate::app::modal::{CardDetail, ModalState};
use crate::app::notice::NoticeSlot;
use crate::app::state::{FormState, Theme};
use crate::gallery::{ArtifactDraft, CardId, Gallery, GalleryError};
use crate::infra::config::AppConfig;

/// Owns all mutable gallery state. Intents are applied one at a time.
pub struct GalleryController {
    gallery: Gallery,
    form: FormState,
    modal: ModalState,
    notice: NoticeSlot,
    theme: Theme,
}

impl GalleryController {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            gallery: Gallery::default(),
            form: FormState::default(),
            modal: ModalState::default(),
            notice: NoticeSlot::new(config.notice_duration(), config.default_notice.clone()),
            theme: Theme::default(),
        }
    }

    pub fn seed(&mut self, drafts: &[ArtifactDraft]) {
        for draft in drafts {
            if let Err(error) = self.gallery.add_card(draft) {
                log::warn!("skipping seed artifact: {error}");
            }
        }
        log::info!(
            "gallery seeded with {} cards in {} categories",
            self.gallery.card_count(),
            self.gallery.registry().categories().count()
        );
    }

    pub fn dispatch(&mut self, event: AppEvent, now: Instant) {
        log::trace!("dispatch {event:?}");
        match event {
            AppEvent::Add => self.submit_form(now),
            AppEvent::Delete(id) => {
                if let Some(card) = self.gallery.delete_card(id) {
                    log::debug!("deleted card {id} from {:?}", card.category);
                }
            }
            AppEvent::ToggleFavorite(id) => {
                self.gallery.toggle_favorite(id);
            }
            AppEvent::SelectTab(tab) => {
                if !self.gallery.select_tab(tab.clone()) {
                    log::debug!("ignoring selection of unknown tab {tab}");
                }
            }
            AppEvent::Search(term) => self.gallery.set_search(&term),
            AppEvent::OpenDetail(id) => self.open_detail(id),
            AppEvent::CloseDetail => {
                self.modal.close();
            }
            AppEvent::ToggleTheme => self.theme = self.theme.toggled(),
        }
    }

    /// Expires the notice when its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        self.notice.tick(now);
    }

    fn submit_form(&mut self, now: Instant) {
        match self.gallery.add_card(&self.form.draft()) {
            Ok(id) => {
                log::debug!("added card {id}");
                self.form.clear();
            }
            Err(error @ GalleryError::IncompleteSubmission { .. }) => {
                log::info!("rejected artifact: {error}");
                self.notice.show(None, now);
            }
        }
    }

    fn open_detail(&mut self, id: CardId) {
        if let Some(card) = self.gallery.card(id) {
            self.modal.open(CardDetail::from(card));
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn notice(&self) -> &NoticeSlot {
        &self.notice
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}
