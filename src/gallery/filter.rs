use crate::gallery::card::CardStore;
use crate::gallery::registry::TabKey;

/// Visibility of a card in `card_category` under the active tab and search term.
/// Search matches the category text only, never the title.
pub fn is_visible(card_category: &str, active: &TabKey, search_term: &str) -> bool {
    let category = card_category.to_lowercase();

    let by_tab = match active {
        TabKey::All => true,
        TabKey::Category(name) => category == name.to_lowercase(),
    };

    let search = search_term.trim().to_lowercase();
    let by_search = search.is_empty() || category.contains(&search);

    by_tab && by_search
}

/// Re-evaluates every live card. Returns how many are visible.
pub fn apply_filters(store: &mut CardStore, active: &TabKey, search_term: &str) -> usize {
    let mut visible = 0;
    for card in store.iter_mut() {
        card.visible = is_visible(&card.category, active, search_term);
        if card.visible {
            visible += 1;
        }
    }
    visible
}
