mod app;
mod elements;
mod encode;
mod graph;
mod retrieval;
mod util;

use anyhow::{Context, anyhow};
use clap::Parser;

use crate::retrieval::{BENCHMARK_QUESTION, RetrievalConfig, RetrievalMode};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Question to score retrieval quality for.
    #[arg(long, default_value = BENCHMARK_QUESTION)]
    question: String,

    /// Scoring endpoint of the retrieval backend.
    #[arg(long, default_value = "http://localhost:50505/chat/get_graph_ui_results")]
    endpoint: String,

    /// Retrieval strategy sent with the scoring request.
    #[arg(long, value_enum, default_value_t = RetrievalMode::GraphRag)]
    retrieval_mode: RetrievalMode,

    /// How many cases the backend should retrieve.
    #[arg(long, default_value_t = 10)]
    top_k: u32,

    #[arg(long, default_value_t = 0.3)]
    temperature: f64,

    /// Route the question through the backend's advanced flow.
    #[arg(long)]
    advanced_flow: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // The citation topology is static; an integrity violation is a data
    // bug and fails startup instead of surfacing mid-render.
    let case_graph = graph::load_case_graph().context("case citation dataset is invalid")?;

    let config = RetrievalConfig {
        use_advanced_flow: args.advanced_flow,
        top_k: args.top_k,
        retrieval_mode: args.retrieval_mode,
        temperature: args.temperature,
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "case-recall",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::CaseRecallApp::new(
                cc,
                case_graph,
                args.question,
                args.endpoint,
                config,
            )))
        }),
    )
    .map_err(|error| anyhow!("failed to start UI: {error}"))
}
