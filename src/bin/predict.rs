//! One-shot prediction against a local model artifact.
//!
//! Runs the same pipeline as the server and prints the JSON response body.
//! Every feature defaults to the built-in smoke-test subject.

use anyhow::{Context, Result};
use clap::Parser;
use piu_severity::application::ml::ModelLoader;
use piu_severity::application::prediction_service::PredictionService;
use piu_severity::domain::types::{PredictionRequest, PredictionResult};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Predict a severity class from five features")]
struct Args {
    /// Path to the model artifact (.onnx or smartcore JSON)
    #[arg(long, default_value = "stacking_model.json")]
    model: PathBuf,

    /// Intra-op threads for ONNX models
    #[arg(long, default_value_t = 1)]
    onnx_threads: usize,

    /// Weighted screening score
    #[arg(long, default_value_t = PredictionRequest::sample().sds_score_weighted)]
    sds_score_weighted: f64,

    /// Internet hours divided by age
    #[arg(long, default_value_t = PredictionRequest::sample().internet_hours_age)]
    internet_hours_age: f64,

    /// Height divided by age
    #[arg(long, default_value_t = PredictionRequest::sample().physical_height_age)]
    physical_height_age: f64,

    /// Sex indicator (0 or 1)
    #[arg(long, default_value_t = PredictionRequest::sample().basic_demos_sex)]
    basic_demos_sex: f64,

    /// Fitness-gram curl-up / push-up count
    #[arg(long, default_value_t = PredictionRequest::sample().preint_fgc_cu_pu)]
    preint_fgc_cu_pu: f64,

    /// Also print the raw regression score to stderr
    #[arg(long)]
    raw: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let request = PredictionRequest {
        sds_score_weighted: args.sds_score_weighted,
        internet_hours_age: args.internet_hours_age,
        physical_height_age: args.physical_height_age,
        basic_demos_sex: args.basic_demos_sex,
        preint_fgc_cu_pu: args.preint_fgc_cu_pu,
    };

    let predictor = ModelLoader::new(args.onnx_threads)
        .load(&args.model)
        .with_context(|| format!("Failed to load model from {:?}", args.model))?;
    let service = PredictionService::new(predictor);

    let prediction = service.predict(&request).context("Prediction failed")?;
    if args.raw {
        eprintln!("raw score: {:.6}", prediction.raw_score);
    }

    println!(
        "{}",
        serde_json::to_string(&PredictionResult::success(prediction.class))?
    );
    Ok(())
}
