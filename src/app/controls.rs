use eframe::egui::{self, RichText, Ui};

use crate::encode::recall_color;
use crate::retrieval::RetrievalMode;
use crate::util::hex_color;

use super::{AppState, CaseRecallApp};

const MODES: [RetrievalMode; 3] = [
    RetrievalMode::Vector,
    RetrievalMode::Semantic,
    RetrievalMode::GraphRag,
];

impl CaseRecallApp {
    pub(super) fn draw_controls(&mut self, ui: &mut Ui, rescore_requested: &mut bool) {
        ui.add_space(6.0);
        ui.heading("Question");
        ui.add(
            egui::TextEdit::multiline(&mut self.question)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        let is_fetching = self.fetcher.in_flight();
        ui.horizontal(|ui| {
            let rescore = ui.add_enabled(!is_fetching, egui::Button::new("Re-score"));
            if rescore.clicked() {
                *rescore_requested = true;
            }
            if is_fetching {
                ui.spinner();
                ui.label("scoring...");
            }
        });

        ui.separator();
        ui.heading("Retrieval mode");
        ui.label("Highlights which cases the declared strategy would surface; switching never re-fetches.");
        for mode in MODES {
            ui.radio_value(&mut self.active_mode, mode, mode.label());
        }

        ui.separator();
        ui.heading("Request overrides");
        ui.label(format!("strategy sent: {}", self.config.retrieval_mode.label()));
        ui.label(format!("top k: {}", self.config.top_k));
        ui.label(format!("temperature: {}", self.config.temperature));
        ui.label(format!("advanced flow: {}", self.config.use_advanced_flow));

        ui.separator();
        ui.heading("Search");
        ui.add(
            egui::TextEdit::singleline(&mut self.search)
                .hint_text("fuzzy match case names")
                .desired_width(f32::INFINITY),
        );

        ui.separator();
        self.draw_score(ui);
    }

    fn draw_score(&self, ui: &mut Ui) {
        let AppState::Ready(model) = &self.state else {
            ui.label("Waiting for the first scoring response...");
            return;
        };

        if let Some(error) = &model.backend_error {
            ui.colored_label(
                egui::Color32::from_rgb(235, 110, 100),
                "Retrieval results not loaded",
            );
            ui.label(error.as_str());
            ui.add_space(4.0);
        }

        let recall_text = format!("Recall: {:.0}%", model.recall);
        ui.horizontal(|ui| {
            ui.heading(
                RichText::new(recall_text).color(hex_color(&recall_color(model.recall))),
            );
        });
        ui.label(format!(
            "{} of {} gold-standard cases retrieved ({} ids returned)",
            model
                .retrieved
                .iter()
                .filter(|id| self.gold_standard.contains(id.as_str()))
                .count(),
            self.gold_standard.len(),
            model.retrieved.len()
        ));
    }
}
