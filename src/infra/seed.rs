use crate::gallery::ArtifactDraft;

const DEMO_ARTIFACTS: [(&str, &str, &str); 3] = [
    ("Карта", "История", "images/map.webp"),
    ("Космический модуль", "Космос", "images/space.webp"),
    ("Архитектурный макет", "Архитектура", "images/arch.webp"),
];

/// Startup cards, fed through the same add path as the form.
pub fn demo_artifacts() -> Vec<ArtifactDraft> {
    DEMO_ARTIFACTS
        .iter()
        .map(|(title, category, image)| ArtifactDraft::new(title, category, image))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_artifacts_are_complete_drafts() {
        let drafts = demo_artifacts();
        assert_eq!(drafts.len(), 3);
        assert_eq!(
            drafts[0],
            ArtifactDraft::new("Карта", "История", "images/map.webp")
        );
        assert!(drafts
            .iter()
            .all(|draft| draft.title.is_some() && draft.category.is_some() && draft.image.is_some()));
    }
}
