//! Fits a sequence of increasingly rich linear models on one train/test split
//! and scores each of them on both sides of the split.

use tracing::info;

use crate::config::{ExperimentConfig, ModelSpec};
use crate::error::Result;
use crate::evaluation::RegressionReport;
use crate::linear::{FittedLinearRegression, LinearRegression};
use crate::statistics::split::train_test_split;
use crate::table::{synthetic, Table};
use crate::timed::{timed, TimedContext};

#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutcome {
    pub name: String,
    pub features: Vec<String>,
    pub model: FittedLinearRegression,
    pub train: RegressionReport,
    pub test: RegressionReport,
    pub fit_seconds: f32,
}

/// Loads the configured data and runs every model in order.
pub fn run(config: &ExperimentConfig) -> Result<Vec<ModelOutcome>> {
    config.validate()?;
    let mut context = TimedContext::new();

    let table = match &config.data {
        Some(path) => Table::from_csv_path(path)?,
        None => synthetic::housing(config.synthetic_rows, config.seed)?,
    };
    info!(seconds = context.checkpoint(), shape = ?table.shape(), "data ready");

    run_on_table(config, &table)
}

/// Runs every configured model against an already loaded table.
pub fn run_on_table(config: &ExperimentConfig, table: &Table) -> Result<Vec<ModelOutcome>> {
    let mut needed: Vec<&str> = vec![config.target.as_str()];
    for feature in config.models.iter().flat_map(|spec| spec.features.iter()) {
        if !needed.contains(&feature.as_str()) {
            needed.push(feature);
        }
    }

    let complete = table.drop_missing(&needed)?;
    let dropped = table.row_count() - complete.row_count();
    if dropped > 0 {
        info!(dropped, "dropped rows with missing values");
    }

    let (train, test) = train_test_split(&complete, config.test_fraction, config.seed)?;
    info!(train = train.row_count(), test = test.row_count(), "split data");

    config.models.iter()
        .map(|spec| fit_and_score(spec, &config.target, &train, &test))
        .collect()
}

fn fit_and_score(
    spec: &ModelSpec,
    target: &str,
    train: &Table,
    test: &Table,
) -> Result<ModelOutcome> {
    let features: Vec<&str> = spec.features.iter().map(String::as_str).collect();

    let x_train = train.design_matrix(&features)?;
    let y_train = train.target(target)?;
    let (model, fit_seconds) = timed(|| LinearRegression::new().fit(&x_train, &y_train));
    let model = model?;

    let train_report = RegressionReport::compute(&y_train, &model.predict(&x_train)?)?;

    let x_test = test.design_matrix(&features)?;
    let y_test = test.target(target)?;
    let test_report = RegressionReport::compute(&y_test, &model.predict(&x_test)?)?;

    info!(
        model = %spec.name, fit_seconds, train = %train_report, test = %test_report,
        "evaluated model"
    );

    Ok(ModelOutcome {
        name: spec.name.clone(),
        features: spec.features.clone(),
        model,
        train: train_report,
        test: test_report,
        fit_seconds,
    })
}
