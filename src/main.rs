use std::fs;
use std::path::PathBuf;

use chronoflux::{
    logger, ChronoFluxError, FluxClient, FluxConfig, GenerationForm, Result,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate images with the Black Forest Labs Flux API",
    long_about = None
)]
struct Args {
    /// Text prompt describing the image to generate
    #[arg(short, long)]
    prompt: String,

    /// What you DON'T want in the image (comma separated)
    #[arg(short, long, default_value = "")]
    negative_prompt: String,

    /// Quality steps, 20-50 (more steps, higher quality but slower)
    #[arg(short, long, default_value_t = 28)]
    steps: u32,

    /// Creativity vs precision, 0-10 (lower is more creative)
    #[arg(short, long, default_value_t = 3.0)]
    guidance_scale: f64,

    /// Sampling method: euler_a, euler, heun, dpm_2, dpm_2_a or lms
    #[arg(long, default_value = "euler_a")]
    sampler: String,

    /// Seed for reproducible results (server picks one when omitted)
    #[arg(long)]
    seed: Option<String>,

    /// Aspect ratio preset, e.g. "Square (1:1)" or "Landscape (4:3)"
    #[arg(short, long, default_value = "Square (1:1)")]
    aspect_ratio: String,

    /// Where to write the generated image (default: timestamped PNG)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_level = if args.verbose {
        logger::LogLevel::Debug
    } else {
        logger::LogLevel::Info
    };
    if let Err(e) = logger::init_with_config(logger::LoggerConfig::default().with_level(log_level))
    {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args).await {
        log::error!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    match dotenv::dotenv() {
        Ok(_) => log::debug!("✅ .env file loaded successfully"),
        Err(_) => log::debug!("No .env file found, using system environment variables"),
    }

    let config = FluxConfig::from_env();
    match &config.api_key {
        Some(key) => log::debug!("✅ BFL API key found ({} characters)", key.len()),
        None => log::warn!("⚠️  BFL_API_KEY is not set"),
    }

    let endpoint = config
        .base_url
        .clone()
        .unwrap_or_else(|| chronoflux::config::DEFAULT_BASE_URL.to_string());
    logger::log_startup_info("chronoflux", env!("CARGO_PKG_VERSION"), &endpoint);

    // Fails here, before any form handling, when the key is missing.
    let client = FluxClient::new(config)?;

    let mut form = GenerationForm::new()
        .with_prompt(args.prompt)
        .with_negative_prompt(args.negative_prompt)
        .with_steps(args.steps)
        .with_guidance_scale(args.guidance_scale)
        .with_sampler(args.sampler)
        .with_aspect_ratio(args.aspect_ratio);
    if let Some(seed) = args.seed {
        form = form.with_seed(seed);
    }

    let request = form.collect()?;
    log::info!(
        "🖼  Prompt: \"{}\" ({}x{}, {} steps, guidance {}, sampler {}, seed {})",
        request.prompt,
        request.width,
        request.height,
        request.steps,
        request.guidance_scale,
        request.sampler.as_str(),
        request
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string())
    );

    let image = {
        let _timer = logger::timer("image generation");
        client.image().generate(&request).await?
    };

    log::info!("✅ Received {} bytes from {}", image.bytes.len(), image.source);

    let output = args.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "chronoflux_{}.png",
            chrono::Utc::now().timestamp()
        ))
    });
    fs::write(&output, &image.bytes).map_err(ChronoFluxError::IoError)?;

    log::info!("💾 Image saved to: {}", output.display());
    Ok(())
}
