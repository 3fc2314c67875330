use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seqnet::{fit, Linear, Sequential, Sigmoid, TrainConfig};

/// Train a 2-1-2 sigmoid network on a single sample.
#[derive(Parser, Debug)]
#[command(name = "seqnet")]
#[command(about = "Train a small feed-forward network with plain gradient descent")]
struct Args {
    /// Number of forward/backward iterations
    #[arg(short, long, default_value = "100000")]
    epochs: usize,

    /// Gradient descent step size
    #[arg(short, long, default_value = "0.05")]
    learning_rate: f32,

    /// Report the loss every N epochs (0 disables reports)
    #[arg(long, default_value = "1000")]
    log_every: usize,

    /// Seed for weight initialization
    #[arg(short, long)]
    seed: Option<u64>,
}

impl From<&Args> for TrainConfig {
    fn from(args: &Args) -> Self {
        TrainConfig {
            epochs: args.epochs,
            learning_rate: args.learning_rate,
            log_every: args.log_every,
            seed: args.seed,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = TrainConfig::from(&args);
    config.validate()?;

    let mut rng = config.rng();
    let mut seq = Sequential::new();
    seq.add_layer(Linear::new(2, 1, false, &mut rng));
    seq.add_layer(Sigmoid::new(1));
    seq.add_layer(Linear::new(1, 2, false, &mut rng));
    seq.add_layer(Sigmoid::new(2));

    let x: [f32; 2] = [0.59, 0.1];
    let y: [f32; 2] = [1.0, 0.0];

    println!("Starting Training...");
    let report = fit(&mut seq, &x, &y, &config)?;

    println!("Training complete!");
    if let (Some(initial), Some(last)) = (report.initial_loss(), report.final_loss()) {
        println!("Loss: {:.6} -> {:.6}", initial, last);
    }
    println!("Prediction: {:?}", seq.forward(&x)?);
    seq.display();

    Ok(())
}
