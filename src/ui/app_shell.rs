use std::time::Instant;

use eframe::egui::{self, load::SizedTexture, Color32, RichText, TextEdit};

use crate::app::controller::GalleryController;
use crate::app::events::AppEvent;
use crate::app::state::Theme;
use crate::cache::images::ImageCache;
use crate::infra::config::AppConfig;
use crate::ui::card_view::{artifact_card, CardView};

pub struct GalleryApp {
    controller: GalleryController,
    images: ImageCache,
    card_width: f32,
    search: String,
    applied_theme: Option<Theme>,
}

impl GalleryApp {
    pub fn new(controller: GalleryController, config: &AppConfig) -> Self {
        Self {
            controller,
            images: ImageCache::new(&config.image_root),
            card_width: config.card_width,
            search: String::new(),
            applied_theme: None,
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.controller.theme();
        if self.applied_theme == Some(theme) {
            return;
        }
        ctx.set_visuals(if theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        self.applied_theme = Some(theme);
    }

    fn top_bar(&mut self, ctx: &egui::Context, events: &mut Vec<AppEvent>) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Artifact gallery");
                ui.separator();
                let search = ui.add(
                    TextEdit::singleline(&mut self.search)
                        .hint_text("Search by category")
                        .desired_width(220.0),
                );
                if search.changed() {
                    events.push(AppEvent::Search(self.search.clone()));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.controller.theme().is_dark() {
                        "Light theme"
                    } else {
                        "Dark theme"
                    };
                    if ui.button(label).clicked() {
                        events.push(AppEvent::ToggleTheme);
                    }
                });
            });
        });
    }

    fn notice_bar(&self, ctx: &egui::Context, now: Instant) {
        let Some(notice) = self.controller.notice().current() else {
            return;
        };
        egui::TopBottomPanel::bottom("notice").show(ctx, |ui| {
            ui.label(RichText::new(&notice.text).color(Color32::from_rgb(200, 60, 60)));
        });
        ctx.request_repaint_after(notice.deadline.saturating_duration_since(now));
    }

    fn add_form(&mut self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        ui.horizontal_wrapped(|ui| {
            let form = self.controller.form_mut();
            ui.add(
                TextEdit::singleline(&mut form.title)
                    .hint_text("Title")
                    .desired_width(180.0),
            );
            ui.add(
                TextEdit::singleline(&mut form.category)
                    .hint_text("Category")
                    .desired_width(160.0),
            );
            ui.add(
                TextEdit::singleline(&mut form.image)
                    .hint_text("Image URL or path")
                    .desired_width(220.0),
            );
            if ui.button("Add artifact").clicked() {
                events.push(AppEvent::Add);
            }
        });
    }

    fn tabs_row(&self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        ui.horizontal_wrapped(|ui| {
            for tab in self.controller.gallery().tabs() {
                if ui.selectable_label(tab.active, tab.key.label()).clicked() {
                    events.push(AppEvent::SelectTab(tab.key));
                }
            }
        });
    }

    fn card_grid(&mut self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        if self.controller.gallery().is_empty() {
            ui.weak("No artifacts yet. Add one with the form above.");
            return;
        }

        let views: Vec<CardView> = self
            .controller
            .gallery()
            .visible_cards()
            .map(CardView::from)
            .collect();
        let ctx = ui.ctx().clone();
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for view in &views {
                    let texture = self.images.texture(&ctx, &view.image);
                    ui.vertical(|ui| {
                        ui.set_min_width(self.card_width);
                        ui.set_max_width(self.card_width);
                        artifact_card(ui, view, texture.as_ref(), self.card_width, events);
                    });
                }
            });
        });
    }

    fn evict_unused_images(&mut self) {
        let gallery = self.controller.gallery();
        let live = gallery
            .cards()
            .map(|card| card.image.as_str())
            .chain(self.controller.modal().image());
        self.images.retain_live(live);
    }

    fn detail_modal(&mut self, ctx: &egui::Context, events: &mut Vec<AppEvent>) {
        let Some(detail) = self.controller.modal().detail().cloned() else {
            return;
        };
        let texture = self.images.texture(ctx, &detail.image);

        let modal = egui::Modal::new(egui::Id::new("artifact_detail")).show(ctx, |ui| {
            ui.set_max_width(520.0);
            match &texture {
                Some(texture) => {
                    ui.add(egui::Image::new(SizedTexture::from_handle(texture)).max_width(500.0));
                }
                None => {
                    ui.weak("Image unavailable");
                }
            }
            ui.heading(&detail.title);
            ui.label(&detail.category);
            ui.separator();
            ui.button("Close").clicked()
        });

        // should_close covers Escape and clicks on the backdrop.
        if modal.inner || modal.should_close() {
            events.push(AppEvent::CloseDetail);
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.tick(now);
        self.images.poll(ctx);
        self.apply_theme(ctx);

        let mut events = Vec::new();
        self.top_bar(ctx, &mut events);
        self.notice_bar(ctx, now);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.add_form(ui, &mut events);
            ui.separator();
            self.tabs_row(ui, &mut events);
            ui.separator();
            self.card_grid(ui, &mut events);
        });
        self.detail_modal(ctx, &mut events);

        let drops_images = events
            .iter()
            .any(|event| matches!(event, AppEvent::Delete(_) | AppEvent::CloseDetail));
        for event in events {
            self.controller.dispatch(event, now);
        }
        if drops_images {
            self.evict_unused_images();
        }
    }
}

pub fn launch_gallery_window(
    controller: GalleryController,
    config: &AppConfig,
) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };
    let app = GalleryApp::new(controller, config);

    eframe::run_native(
        "Artifact gallery",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
