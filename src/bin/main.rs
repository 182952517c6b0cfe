//! smosvm command line interface
//!
//! Train, evaluate, and apply binary SVM models on dense CSV data.

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{debug, error, info};
use smosvm::api::Svm;
use smosvm::core::{Result, TrainingObserver};
use smosvm::data::{load_labeled, load_unlabeled, train_test_split, write_labels, write_labels_to};
use smosvm::kernel::KernelKind;
use smosvm::TrainedModel;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "smosvm")]
#[command(about = "Binary SVM classifier trained with a simplified SMO solver")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a new SVM model
    Train(TrainArgs),
    /// Make predictions using a trained model
    Predict(PredictArgs),
    /// Evaluate a model on labeled data
    Evaluate(EvaluateArgs),
}

#[derive(Args)]
struct TrainArgs {
    /// Training data file (CSV, last column is the {0,1} label)
    #[arg(long)]
    data: PathBuf,

    /// Output model file (JSON)
    #[arg(short, long)]
    output: PathBuf,

    /// Kernel: linear or gaussian
    #[arg(short, long, default_value = "linear")]
    kernel: String,

    /// Gaussian kernel bandwidth (required for kernel=gaussian)
    #[arg(long)]
    sigma: Option<f64>,

    /// Regularization parameter C
    #[arg(short = 'C', long, default_value = "1.0")]
    c: f64,

    /// Numerical tolerance
    #[arg(short, long, default_value = "0.001")]
    tol: f64,

    /// Consecutive zero-change passes required to stop
    #[arg(short, long, default_value = "5")]
    max_stalled_passes: usize,

    /// Seed for the second-index generator (omit for OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Hold out this fraction of the data for a validation accuracy report
    #[arg(long)]
    holdout: Option<f64>,

    /// Seed for the holdout shuffle
    #[arg(long, default_value = "0")]
    holdout_seed: u64,
}

#[derive(Args)]
struct PredictArgs {
    /// Trained model file
    #[arg(short, long)]
    model: PathBuf,

    /// Input data file (CSV, features only)
    #[arg(long)]
    data: PathBuf,

    /// Output labels file, one integer per line (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct EvaluateArgs {
    /// Trained model file
    #[arg(short, long)]
    model: PathBuf,

    /// Labeled test data file (CSV, last column is the {0,1} label)
    #[arg(long)]
    data: PathBuf,
}

/// Forwards per-pass progress to the log
struct LogObserver;

impl TrainingObserver for LogObserver {
    fn on_pass_completed(&mut self, pass: usize, changed: usize) {
        debug!("pass {} completed, {} pairs changed", pass, changed);
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Train(args) => cmd_train(args),
        Commands::Predict(args) => cmd_predict(args),
        Commands::Evaluate(args) => cmd_evaluate(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn cmd_train(args: TrainArgs) -> Result<()> {
    let kernel = KernelKind::parse(&args.kernel, args.sigma)?;
    let (x, y) = load_labeled(&args.data)?;
    info!(
        "loaded {} examples with {} features from {}",
        x.rows(),
        x.cols(),
        args.data.display()
    );

    let (train_x, train_y, holdout) = match args.holdout {
        Some(fraction) => {
            let split = train_test_split(&x, &y, fraction, args.holdout_seed)?;
            info!(
                "holding out {} of {} examples for validation",
                split.test_x.rows(),
                x.rows()
            );
            (
                split.train_x,
                split.train_y,
                Some((split.test_x, split.test_y)),
            )
        }
        None => (x, y, None),
    };

    let mut svm = Svm::new()
        .with_kernel(kernel)
        .with_c(args.c)
        .with_tol(args.tol)
        .with_max_stalled_passes(args.max_stalled_passes);
    if let Some(seed) = args.seed {
        svm = svm.with_seed(seed);
    }

    let start = Instant::now();
    let model = svm.train_with_observer(&train_x, &train_y, &mut LogObserver)?;
    info!("training took {:.3}s", start.elapsed().as_secs_f64());

    println!(
        "Trained {} model with {} support vectors",
        kernel.name(),
        model.model().n_support_vectors()
    );
    println!(
        "Training accuracy: {:.2}%",
        model.accuracy(&train_x, &train_y)? * 100.0
    );
    if let Some((test_x, test_y)) = holdout {
        println!(
            "Validation accuracy: {:.2}%",
            model.accuracy(&test_x, &test_y)? * 100.0
        );
    }

    model.save(&args.output)?;
    println!("Model saved to {}", args.output.display());
    Ok(())
}

fn cmd_predict(args: PredictArgs) -> Result<()> {
    let model = TrainedModel::load(&args.model)?;
    let x = load_unlabeled(&args.data)?;
    info!("predicting {} examples", x.rows());

    let predictions = model.predict(&x)?;
    match args.output {
        Some(path) => {
            write_labels(&path, &predictions)?;
            println!("Wrote {} labels to {}", predictions.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout();
            write_labels_to(&mut stdout, &predictions)?;
        }
    }
    Ok(())
}

fn cmd_evaluate(args: EvaluateArgs) -> Result<()> {
    let model = TrainedModel::load(&args.model)?;
    let (x, y) = load_labeled(&args.data)?;

    let accuracy = model.accuracy(&x, &y)?;
    println!(
        "Accuracy: {:.2}% ({} examples)",
        accuracy * 100.0,
        x.rows()
    );
    Ok(())
}
