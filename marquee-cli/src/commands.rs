use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use marquee_core::traits::Recommender;
use marquee_core::{EvaluationReport, MarqueeConfig, Recommendation};
use marquee_recommend::{QualityEvaluator, RecommendationEngine};

use crate::cli::{Cli, Command};

pub fn run(cli: &Cli, config: &MarqueeConfig) -> anyhow::Result<()> {
    match &cli.command {
        Command::Titles => titles(cli, config),
        Command::Recommend { title, top_n } => {
            let top_n = top_n.unwrap_or(config.recommend.default_top_n);
            let recommendations = build_engine(config)?.recommend(title, top_n)?;
            print_recommendations(cli.json, &recommendations)
        }
        Command::Evaluate { title, top_n, k } => {
            let top_n = top_n.unwrap_or(config.recommend.default_top_n);
            let k = k.unwrap_or(config.recommend.default_k);
            evaluate(cli.json, config, title, top_n, k)
        }
        Command::ConvertMatrix { input, output } => convert_matrix(input, output),
    }
}

fn build_engine(config: &MarqueeConfig) -> anyhow::Result<RecommendationEngine> {
    let dataset = marquee_storage::load_dataset(&config.storage).with_context(|| {
        format!(
            "loading catalog {} and matrix {}",
            config.storage.catalog_path, config.storage.matrix_path
        )
    })?;
    let resolver = marquee_assets::resolver_from_config(&config.assets);
    Ok(RecommendationEngine::new(
        dataset,
        resolver,
        config.recommend.clone(),
    )?)
}

fn titles(cli: &Cli, config: &MarqueeConfig) -> anyhow::Result<()> {
    let catalog = marquee_storage::load_catalog_json(Path::new(&config.storage.catalog_path))?;
    if cli.json {
        let titles: Vec<&str> = catalog.titles().collect();
        println!("{}", serde_json::to_string_pretty(&titles)?);
    } else {
        for title in catalog.titles() {
            println!("{title}");
        }
    }
    Ok(())
}

fn print_recommendations(json: bool, recommendations: &[Recommendation]) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recommendations)?);
        return Ok(());
    }
    for rec in recommendations {
        println!(
            "{:>2}. {} (score {:.3})\n    {}",
            rec.rank, rec.title, rec.score, rec.asset
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct EvaluationOutput<'a> {
    title: &'a str,
    recommendations: Vec<&'a str>,
    report: EvaluationReport,
}

fn evaluate(
    json: bool,
    config: &MarqueeConfig,
    title: &str,
    top_n: usize,
    k: usize,
) -> anyhow::Result<()> {
    let engine = build_engine(config)?;
    let dataset = engine.dataset();
    let query = dataset.catalog().resolve(title)?;
    let ranking = engine.rank_title(title, top_n)?;
    let report =
        QualityEvaluator::new(dataset.catalog().clone()).evaluate_ranking(query, &ranking, k)?;

    let recommendations = ranking
        .iter()
        .filter_map(|r| dataset.catalog().get(r.position))
        .map(|item| item.title.as_str())
        .collect();
    let output = EvaluationOutput {
        title,
        recommendations,
        report,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Recommendations for {title}:");
        for (i, rec) in output.recommendations.iter().enumerate() {
            println!("{:>2}. {rec}", i + 1);
        }
        println!("Genre overlap score: {:.3}", output.report.genre_overlap);
        println!("Precision@{}: {:.3}", k, output.report.precision_at_k);
    }
    Ok(())
}

fn convert_matrix(input: &Path, output: &Path) -> anyhow::Result<()> {
    let matrix = marquee_storage::load_matrix_json(input)
        .with_context(|| format!("reading {}", input.display()))?;
    marquee_storage::write_matrix_binary(&matrix, output)
        .with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(
        size = matrix.size(),
        output = %output.display(),
        "matrix converted"
    );
    Ok(())
}
