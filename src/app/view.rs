use std::collections::HashSet;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2, vec2};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::elements::{Element, build_elements};
use crate::graph::CaseGraph;
use crate::util::{hex_color, truncate_label};

use super::{AppState, CaseRecallApp};

/// Border color for the actual-retrieval channel.
const RETRIEVED_BORDER: Color32 = Color32::from_rgba_premultiplied(15, 212, 6, 178);
/// Border color for the declared-mode channel, kept visually distinct so
/// false negatives and false positives stay readable.
const MODE_BORDER: Color32 = Color32::from_rgba_premultiplied(86, 156, 214, 178);
const CASE_FILL: Color32 = Color32::from_rgb(96, 110, 128);
const REFERENCE_FILL: Color32 = Color32::from_rgb(58, 64, 74);

fn dataset_center(graph: &CaseGraph) -> Vec2 {
    let mut min = vec2(f32::MAX, f32::MAX);
    let mut max = vec2(f32::MIN, f32::MIN);
    for case in graph.cases() {
        min = min.min(vec2(case.position.0, case.position.1));
        max = max.max(vec2(case.position.0, case.position.1));
    }
    for reference in graph.references() {
        min = min.min(vec2(reference.position.0, reference.position.1));
        max = max.max(vec2(reference.position.0, reference.position.1));
    }
    (min + max) * 0.5
}

fn world_to_screen(rect: Rect, pan: Vec2, zoom: f32, center: Vec2, world: Vec2) -> Pos2 {
    rect.center() + pan + (world - center) * zoom
}

fn draw_background(painter: &egui::Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));
}

fn draw_arrowhead(painter: &egui::Painter, from: Pos2, to: Pos2, stroke: Stroke) {
    let direction = to - from;
    if direction.length_sq() < 1.0 {
        return;
    }
    let direction = direction.normalized();
    let normal = vec2(-direction.y, direction.x);
    let tip = to;
    let left = tip - direction * 7.0 + normal * 3.5;
    let right = tip - direction * 7.0 - normal * 3.5;
    painter.line_segment([tip, left], stroke);
    painter.line_segment([tip, right], stroke);
}

fn search_matches(elements: &[Element], query: &str) -> HashSet<String> {
    let matcher = SkimMatcherV2::default();
    elements
        .iter()
        .filter_map(|element| {
            let id = element.data.id.as_deref()?;
            let label = element.data.label.as_deref()?;
            let hit = matcher.fuzzy_match(label, query).is_some()
                || matcher.fuzzy_match(id, query).is_some();
            hit.then(|| id.to_owned())
        })
        .collect()
}

impl CaseRecallApp {
    pub(super) fn draw_graph(&mut self, ui: &mut Ui) {
        let AppState::Ready(model) = &self.state else {
            return;
        };

        let elements = build_elements(
            &self.graph,
            self.active_mode,
            &model.retrieved,
            &self.gold_standard,
        );

        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        draw_background(&painter, rect);

        if response.dragged() {
            self.pan += response.drag_delta();
        }
        if response.hovered() {
            let scroll = ui.input(|input| input.raw_scroll_delta.y);
            if scroll.abs() > 0.0 {
                self.zoom = (self.zoom * (1.0 + scroll * 0.0015)).clamp(0.3, 4.0);
            }
        }

        let center = dataset_center(&self.graph);
        let pan = self.pan;
        let zoom = self.zoom;

        let query = self.search.trim();
        let matches = (!query.is_empty()).then(|| search_matches(&elements, query));

        for element in &elements {
            let (Some(source), Some(target)) =
                (element.data.source.as_deref(), element.data.target.as_deref())
            else {
                continue;
            };
            let (Some(from), Some(to)) = (self.graph.position(source), self.graph.position(target))
            else {
                continue;
            };

            let from = world_to_screen(rect, pan, zoom, center, vec2(from.0, from.1));
            let to = world_to_screen(rect, pan, zoom, center, vec2(to.0, to.1));
            let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(120, 126, 136, 160));
            painter.line_segment([from, to], stroke);
            draw_arrowhead(&painter, from, to, stroke);
        }

        let pointer = response.hover_pos();
        let mut hovered: Option<(String, u32)> = None;

        for element in &elements {
            let Some(id) = element.data.id.as_deref() else {
                continue;
            };
            let Some(position) = element.position else {
                continue;
            };

            let screen = world_to_screen(rect, pan, zoom, center, vec2(position.x, position.y));
            let diameter = element.data.refs.unwrap_or(15.0);
            let radius = (diameter * 0.5 * zoom).max(3.0);

            let is_case = element.data.label.is_some();
            let mut fill = if is_case {
                element
                    .data
                    .color
                    .as_deref()
                    .map_or(CASE_FILL, hex_color)
            } else {
                REFERENCE_FILL
            };

            if let Some(matches) = &matches
                && !matches.contains(id)
            {
                fill = fill.gamma_multiply(0.35);
            }

            painter.circle_filled(screen, radius, fill);

            // Retrieval and mode channels draw at different radii so both
            // stay visible when a node is on in both.
            if let Some(width) = element.data.selection
                && width > 0.0
            {
                painter.circle_stroke(screen, radius + 2.0, Stroke::new(width * 0.5, RETRIEVED_BORDER));
            }
            if let Some(width) = element.data.mode_selection
                && width > 0.0
            {
                painter.circle_stroke(
                    screen,
                    radius + 2.0 + 4.0,
                    Stroke::new(width * 0.5, MODE_BORDER),
                );
            }

            if let Some(label) = element.data.label.as_deref()
                && (zoom > 0.55 || radius > 12.0)
            {
                painter.text(
                    screen + vec2(radius + 5.0, 0.0),
                    Align2::LEFT_CENTER,
                    truncate_label(label, 34),
                    FontId::proportional(12.0),
                    Color32::from_gray(225),
                );
            }

            if let Some(pointer) = pointer
                && (pointer - screen).length() <= radius
                && is_case
            {
                let citations = self
                    .graph
                    .case(id)
                    .map(|case| case.reference_count)
                    .unwrap_or(0);
                hovered = Some((element.data.label.clone().unwrap_or_default(), citations));
            }
        }

        if let Some((label, citations)) = hovered {
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                format!("{label}  |  cited {citations} times"),
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }
    }
}
