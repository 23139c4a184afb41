use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

pub const ALL_TAB_LABEL: &str = "All";

/// A tab key. `All` is the sentinel that disables category filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TabKey {
    #[default]
    All,
    Category(String),
}

impl TabKey {
    pub fn category(name: impl Into<String>) -> Self {
        Self::Category(name.into())
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_TAB_LABEL,
            Self::Category(name) => name,
        }
    }
}

impl Display for TabKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub key: TabKey,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unregister {
    /// Sentinel, unknown category or one that still has live cards.
    Kept,
    Removed { was_active: bool },
}

/// Known categories in order of first appearance with their live card counts.
/// The sentinel is implicit and always present.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    tabs: IndexMap<String, usize>,
    active: TabKey,
}

impl CategoryRegistry {
    /// Counts one more live card for `name`. Returns true when this created the tab.
    pub fn register_category(&mut self, name: &str) -> bool {
        if let Some(count) = self.tabs.get_mut(name) {
            *count += 1;
            return false;
        }
        self.tabs.insert(name.to_string(), 1);
        log::debug!("registered category tab {name:?}");
        true
    }

    /// Counts one live card of `name` as gone. The tab itself stays until
    /// [`Self::unregister_if_empty`] runs.
    pub fn release_card(&mut self, name: &str) {
        if let Some(count) = self.tabs.get_mut(name) {
            *count = count.saturating_sub(1);
        }
    }

    pub fn unregister_if_empty(&mut self, name: &str) -> Unregister {
        match self.tabs.get(name) {
            Some(0) => {}
            _ => return Unregister::Kept,
        }

        self.tabs.shift_remove(name);
        let was_active = matches!(&self.active, TabKey::Category(active) if active == name);
        if was_active {
            self.active = TabKey::All;
        }
        log::debug!("removed empty category tab {name:?} (was_active={was_active})");
        Unregister::Removed { was_active }
    }

    /// Activates `tab` if it is a member of the registry.
    pub fn select(&mut self, tab: TabKey) -> bool {
        if !self.contains(&tab) {
            return false;
        }
        self.active = tab;
        true
    }

    pub fn contains(&self, tab: &TabKey) -> bool {
        match tab {
            TabKey::All => true,
            TabKey::Category(name) => self.tabs.contains_key(name),
        }
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.tabs.contains_key(name)
    }

    pub fn live_cards(&self, name: &str) -> usize {
        self.tabs.get(name).copied().unwrap_or_default()
    }

    pub fn active(&self) -> &TabKey {
        &self.active
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.tabs.keys().map(String::as_str)
    }

    /// Sentinel first, then categories in registration order.
    pub fn tabs(&self) -> Vec<TabView> {
        std::iter::once(TabKey::All)
            .chain(self.tabs.keys().cloned().map(TabKey::Category))
            .map(|key| TabView {
                active: key == self.active,
                key,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_follow_first_appearance_order() {
        let mut registry = CategoryRegistry::default();
        assert!(registry.register_category("Космос"));
        assert!(registry.register_category("История"));
        assert!(!registry.register_category("Космос"));

        let labels: Vec<String> = registry
            .tabs()
            .into_iter()
            .map(|tab| tab.key.label().to_string())
            .collect();
        assert_eq!(labels, vec!["All", "Космос", "История"]);
        assert_eq!(registry.live_cards("Космос"), 2);
    }

    #[test]
    fn unregister_keeps_categories_with_live_cards() {
        let mut registry = CategoryRegistry::default();
        registry.register_category("Космос");
        registry.register_category("Космос");
        registry.release_card("Космос");

        assert_eq!(registry.unregister_if_empty("Космос"), Unregister::Kept);
        assert!(registry.contains_category("Космос"));
    }

    #[test]
    fn unregister_active_category_falls_back_to_sentinel() {
        let mut registry = CategoryRegistry::default();
        registry.register_category("Космос");
        assert!(registry.select(TabKey::category("Космос")));
        registry.release_card("Космос");

        assert_eq!(
            registry.unregister_if_empty("Космос"),
            Unregister::Removed { was_active: true }
        );
        assert_eq!(registry.active(), &TabKey::All);
        assert!(!registry.contains_category("Космос"));
    }

    #[test]
    fn unregister_inactive_category_leaves_active_tab() {
        let mut registry = CategoryRegistry::default();
        registry.register_category("Космос");
        registry.register_category("История");
        registry.select(TabKey::category("История"));
        registry.release_card("Космос");

        assert_eq!(
            registry.unregister_if_empty("Космос"),
            Unregister::Removed { was_active: false }
        );
        assert_eq!(registry.active(), &TabKey::category("История"));
    }

    #[test]
    fn unregister_unknown_category_is_noop() {
        let mut registry = CategoryRegistry::default();
        assert_eq!(registry.unregister_if_empty("nope"), Unregister::Kept);
    }

    #[test]
    fn selecting_unknown_category_is_rejected() {
        let mut registry = CategoryRegistry::default();
        assert!(!registry.select(TabKey::category("ghost")));
        assert_eq!(registry.active(), &TabKey::All);
        assert!(registry.select(TabKey::All));
    }

    #[test]
    fn exactly_one_tab_is_active() {
        let mut registry = CategoryRegistry::default();
        registry.register_category("a");
        registry.register_category("b");
        registry.select(TabKey::category("b"));

        let active: Vec<TabKey> = registry
            .tabs()
            .into_iter()
            .filter(|tab| tab.active)
            .map(|tab| tab.key)
            .collect();
        assert_eq!(active, vec![TabKey::category("b")]);
    }
}
