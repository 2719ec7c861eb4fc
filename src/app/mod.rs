use std::collections::BTreeSet;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context, Vec2};

use crate::graph::CaseGraph;
use crate::retrieval::{
    RetrievalConfig, RetrievalMode, RetrievedIdSet, ScoringClient, gold_standard_ids,
    recall_percentage,
};

mod controls;
mod view;

pub struct CaseRecallApp {
    question: String,
    endpoint: String,
    config: RetrievalConfig,
    graph: CaseGraph,
    gold_standard: BTreeSet<String>,
    active_mode: RetrievalMode,
    search: String,
    pan: Vec2,
    zoom: f32,
    fetcher: ScoreFetcher,
    state: AppState,
}

enum AppState {
    /// A fetch is pending and nothing has been scored yet; no graph data
    /// is rendered until the fetch settles.
    Loading,
    Ready(ScoreModel),
}

/// Scoring result for the most recent settled fetch. Owned exclusively by
/// the view; replaced wholesale when a newer fetch settles.
struct ScoreModel {
    retrieved: RetrievedIdSet,
    recall: f64,
    backend_error: Option<String>,
}

impl ScoreModel {
    fn scored(retrieved: RetrievedIdSet, gold_standard: &BTreeSet<String>) -> Self {
        let recall = recall_percentage(&retrieved, gold_standard);
        Self {
            retrieved,
            recall,
            backend_error: None,
        }
    }

    /// Backend failure degrades to "nothing retrieved" with the error
    /// surfaced, never to stale or partial results.
    fn failed(message: String) -> Self {
        Self {
            retrieved: RetrievedIdSet::new(),
            recall: 0.0,
            backend_error: Some(message),
        }
    }
}

struct FetchOutcome {
    generation: u64,
    result: Result<RetrievedIdSet, String>,
}

/// One in-flight scoring fetch at most, tagged with a monotonically
/// increasing generation. A newer `start` supersedes the old fetch; an
/// outcome whose generation is not current is dropped, so a slow response
/// can never overwrite state for a more recent question.
struct ScoreFetcher {
    generation: u64,
    rx: Option<Receiver<FetchOutcome>>,
}

impl ScoreFetcher {
    fn new() -> Self {
        Self {
            generation: 0,
            rx: None,
        }
    }

    fn start(&mut self, endpoint: String, question: String, config: RetrievalConfig) {
        self.generation += 1;
        let generation = self.generation;
        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);

        thread::spawn(move || {
            let result = ScoringClient::new(endpoint)
                .and_then(|client| client.fetch_retrieved_ids(&question, config))
                .map_err(|error| error.to_string());
            let _ = tx.send(FetchOutcome { generation, result });
        });
    }

    fn in_flight(&self) -> bool {
        self.rx.is_some()
    }

    fn poll(&mut self) -> Option<Result<RetrievedIdSet, String>> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) if outcome.generation == self.generation => {
                self.rx = None;
                Some(outcome.result)
            }
            // Stale generation: ignore and keep waiting for the current one.
            Ok(_) => None,
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                Some(Err("scoring worker disconnected".to_owned()))
            }
        }
    }
}

/// Moves the view out of its pending state once the current-generation
/// fetch settles, whatever the outcome.
fn settle_fetch(fetcher: &mut ScoreFetcher, state: &mut AppState, gold_standard: &BTreeSet<String>) {
    if let Some(result) = fetcher.poll() {
        *state = AppState::Ready(match result {
            Ok(retrieved) => ScoreModel::scored(retrieved, gold_standard),
            Err(message) => ScoreModel::failed(message),
        });
    }
}

impl CaseRecallApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        graph: CaseGraph,
        question: String,
        endpoint: String,
        config: RetrievalConfig,
    ) -> Self {
        let mut fetcher = ScoreFetcher::new();
        fetcher.start(endpoint.clone(), question.clone(), config);

        Self {
            question,
            endpoint,
            active_mode: config.retrieval_mode,
            config,
            graph,
            gold_standard: gold_standard_ids(),
            search: String::new(),
            pan: Vec2::ZERO,
            zoom: 1.0,
            fetcher,
            state: AppState::Loading,
        }
    }

    /// Issues a superseding fetch. The previous score stays on screen
    /// until the new one settles; the controls panel marks the pending
    /// state.
    fn start_rescore(&mut self) {
        self.fetcher
            .start(self.endpoint.clone(), self.question.clone(), self.config);
    }
}

impl eframe::App for CaseRecallApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        settle_fetch(&mut self.fetcher, &mut self.state, &self.gold_standard);

        if self.fetcher.in_flight() {
            ctx.request_repaint();
        }

        let mut rescore_requested = false;

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("case-recall");
                    ui.separator();
                    ui.label(format!(
                        "cases: {}  citations: {}  edges: {}",
                        self.graph.cases().len(),
                        self.graph.references().len(),
                        self.graph.edges().len()
                    ));
                    ui.label(format!("endpoint: {}", self.endpoint));
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                self.draw_controls(ui, &mut rescore_requested);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if matches!(self.state, AppState::Loading) {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("Scoring retrieval against the case graph...");
                    ui.add_space(8.0);
                    ui.spinner();
                });
            } else {
                self.draw_graph(ui);
            }
        });

        if rescore_requested {
            self.start_rescore();
        }
    }
}
