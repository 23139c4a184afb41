use eframe::egui::{self, load::SizedTexture, Color32, RichText, Sense, Stroke};

use crate::app::events::AppEvent;
use crate::gallery::{Card, CardId};

/// Plain data handed to the card widget, detached from the gallery borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: CardId,
    pub title: String,
    pub category: String,
    pub image: String,
    pub favorite: bool,
    pub favorite_label: &'static str,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            title: card.title.clone(),
            category: card.category.clone(),
            image: card.image.clone(),
            favorite: card.favorite,
            favorite_label: card.favorite_label(),
        }
    }
}

const FAVORITE_STROKE: Color32 = Color32::from_rgb(230, 180, 40);

/// Fixed-width artifact card. Clicking the image or the text opens the detail view;
/// the action buttons only emit their own intents.
pub fn artifact_card(
    ui: &mut egui::Ui,
    view: &CardView,
    texture: Option<&egui::TextureHandle>,
    width: f32,
    events: &mut Vec<AppEvent>,
) {
    // Hover state from the previous frame decides the outline before drawing.
    let hover_id = egui::Id::new(("artifact_card_hovered", view.id));
    let hovered = ui
        .ctx()
        .memory(|memory| memory.data.get_temp::<bool>(hover_id))
        .unwrap_or(false);
    let stroke = if view.favorite {
        Stroke::new(2.0, FAVORITE_STROKE)
    } else if hovered {
        Stroke::new(1.5, ui.visuals().selection.bg_fill)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };

    let frame = egui::Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
        let inner_width = width - 16.0;
        ui.set_width(inner_width);
        let image_size = egui::vec2(inner_width, inner_width * 0.66);

        let image_response = match texture {
            Some(texture) => ui.add(
                egui::Image::new(SizedTexture::from_handle(texture))
                    .fit_to_exact_size(image_size)
                    .sense(Sense::click()),
            ),
            None => placeholder(ui, image_size),
        };
        let title_response =
            ui.add(egui::Label::new(RichText::new(&view.title).strong()).sense(Sense::click()));
        let category_response = ui.add(
            egui::Label::new(RichText::new(&view.category).weak()).sense(Sense::click()),
        );

        ui.horizontal(|ui| {
            if ui.small_button(view.favorite_label).clicked() {
                events.push(AppEvent::ToggleFavorite(view.id));
            }
            if ui.small_button("Delete").clicked() {
                events.push(AppEvent::Delete(view.id));
            }
        });

        image_response.clicked() || title_response.clicked() || category_response.clicked()
    });

    if frame.inner {
        events.push(AppEvent::OpenDetail(view.id));
    }
    let now_hovered = frame.response.contains_pointer();
    if now_hovered != hovered {
        ui.ctx()
            .memory_mut(|memory| memory.data.insert_temp(hover_id, now_hovered));
    }
}

fn placeholder(ui: &mut egui::Ui, size: egui::Vec2) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "No image",
        egui::FontId::proportional(14.0),
        ui.visuals().weak_text_color(),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::card::{FAVORITE_LABEL, UNFAVORITE_LABEL};
    use crate::gallery::{ArtifactDraft, Gallery};

    #[test]
    fn card_view_mirrors_card_state() {
        let mut gallery = Gallery::default();
        let id = gallery
            .add_card(&ArtifactDraft::new("Карта", "История", "images/map.webp"))
            .expect("card should be added");

        let view = CardView::from(gallery.card(id).expect("card should exist"));
        assert_eq!(view.title, "Карта");
        assert_eq!(view.favorite_label, FAVORITE_LABEL);

        gallery.toggle_favorite(id);
        let view = CardView::from(gallery.card(id).expect("card should exist"));
        assert!(view.favorite);
        assert_eq!(view.favorite_label, UNFAVORITE_LABEL);
    }
}
