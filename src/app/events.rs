use crate::gallery::{CardId, TabKey};

/// User intents emitted by the render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Add,
    Delete(CardId),
    ToggleFavorite(CardId),
    SelectTab(TabKey),
    Search(String),
    OpenDetail(CardId),
    CloseDetail,
    ToggleTheme,
}
