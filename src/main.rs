mod config;

use crate::config::RunConfig;

use liqmodel::plot::{format_pct, format_usd, plot_ratio_vs_tvl};
use liqmodel::sampler::{DEFAULT_MAX_TVL, DEFAULT_POINT_COUNT};
use liqmodel::simulation::DEFAULT_SIMULATION_TVL;
use liqmodel::verifier::verify_curve;
use liqmodel::{
    evaluate, sample_curve, CurvePoint, Evaluation, LiquidityModelUpdate, SimulationState,
    ValidatedParams,
};

use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "liqmodel",
    version,
    about = "TVL-driven liquidity buffer model: target ratio, triggers and curves"
)]
struct Args {
    /// JSON file with a partial parameter set, simulated TVL and sampling domain
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, allow_hyphen_values = true)]
    min_ratio_bp: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    tvl_factor_bp: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    tvl_exponent_bp: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    low_offset_bp: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    high_offset_bp: Option<i64>,

    /// Simulated vault TVL in USD (clamped to $1K..$1B)
    #[arg(long, allow_hyphen_values = true)]
    tvl: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    max_tvl: Option<f64>,
    #[arg(long)]
    points: Option<usize>,
    /// Linear instead of logarithmic TVL spacing
    #[arg(long, action = clap::ArgAction::SetTrue)]
    linear: bool,

    #[arg(long, default_value = "out")]
    out_dir: String,
    #[arg(long = "no-draw", action = clap::ArgAction::SetFalse, default_value_t = true)]
    draw: bool,
    /// Print the point evaluation as JSON
    #[arg(long, action = clap::ArgAction::SetTrue)]
    json: bool,
    #[arg(long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

impl Args {
    fn param_overrides(&self) -> LiquidityModelUpdate {
        LiquidityModelUpdate {
            min_ratio_bp: self.min_ratio_bp,
            tvl_factor_bp: self.tvl_factor_bp,
            tvl_exponent_bp: self.tvl_exponent_bp,
            low_offset_bp: self.low_offset_bp,
            high_offset_bp: self.high_offset_bp,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Row {
    tvl: f64,
    low_bp: f64,
    target_bp: f64,
    high_bp: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    liquidity_model: &'a ValidatedParams,
    evaluation: &'a Evaluation,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        debug!(%err, "tracing subscriber already installed");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let cfg = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    let update = cfg.liquidity_model.merge(args.param_overrides());
    let params = update.apply(&ValidatedParams::default());
    if !update.is_empty() {
        debug!(?params, "applied parameter overrides");
    }

    let requested_tvl = args.tvl.or(cfg.liquidity_tvl).unwrap_or(DEFAULT_SIMULATION_TVL);
    let sim = SimulationState::new(requested_tvl);
    if sim.liquidity_tvl != requested_tvl {
        warn!(requested = requested_tvl, used = sim.liquidity_tvl, "simulated TVL clamped");
    }

    let max_tvl = args.max_tvl.or(cfg.sampling.max_tvl).unwrap_or(DEFAULT_MAX_TVL);
    let point_count = args.points.or(cfg.sampling.point_count).unwrap_or(DEFAULT_POINT_COUNT);
    let logarithmic = !args.linear && cfg.sampling.logarithmic.unwrap_or(true);

    let eval = evaluate(&params, sim.liquidity_tvl);
    if args.json {
        let out = JsonOutput { liquidity_model: &params, evaluation: &eval };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "For TVL = {}: low={} target={} high={}",
            format_usd(eval.tvl),
            format_pct(eval.triggers.low_trigger),
            format_pct(eval.target),
            format_pct(eval.triggers.high_trigger)
        );
    }

    let curve = sample_curve(&params, max_tvl, point_count, logarithmic)?;
    let rep = verify_curve(&curve)?;
    if args.verbose {
        println!(
            "[curve] points={} tvl_increasing={} target_monotone={} band_ordered={}",
            rep.points, rep.tvl_increasing, rep.target_monotone, rep.band_ordered
        );
        if let Some((lo, hi)) = rep.step_ratio_range {
            println!("  consecutive TVL ratio in [{:.6}, {:.6}]", lo, hi);
        }
    }
    if !rep.ok() {
        warn!(?rep, "sampled curve failed shape checks");
    }

    create_dir_all(&args.out_dir)?;
    write_curve_csv(&args.out_dir, &params, &curve, logarithmic)?;
    if args.draw {
        let path = format!("{}/ratio_vs_tvl.png", &args.out_dir);
        plot_ratio_vs_tvl(&curve, logarithmic, Some(sim.liquidity_tvl), &path)?;
        info!(path = %path, "chart written");
    }
    Ok(())
}

fn write_curve_csv(
    out_dir: &str,
    params: &ValidatedParams,
    curve: &[CurvePoint],
    logarithmic: bool,
) -> Result<()> {
    let file_path = format!("{}/curve.csv", out_dir);
    let mut file = File::create(&file_path)?;

    let p = params.params();
    writeln!(file, "# Liquidity Buffer Curve")?;
    writeln!(file, "# r = b + (1-b) * (1 + T*f)^(-e)")?;
    writeln!(
        file,
        "# min_ratio_bp={} tvl_factor_bp={} tvl_exponent_bp={}",
        p.min_ratio_bp, p.tvl_factor_bp, p.tvl_exponent_bp
    )?;
    writeln!(
        file,
        "# low_offset_bp={} high_offset_bp={}",
        p.low_offset_bp, p.high_offset_bp
    )?;
    writeln!(
        file,
        "# Spacing: {}, domain {}..{}",
        if logarithmic { "logarithmic" } else { "linear" },
        curve.first().map(|c| c.tvl).unwrap_or_default(),
        curve.last().map(|c| c.tvl).unwrap_or_default()
    )?;

    let mut wtr = csv::Writer::from_writer(file);
    for c in curve {
        wtr.serialize(Row {
            tvl: c.tvl,
            low_bp: c.low.value(),
            target_bp: c.target.value(),
            high_bp: c.high.value(),
        })?;
    }
    wtr.flush()?;
    info!(path = %file_path, rows = curve.len(), "curve written");
    Ok(())
}
