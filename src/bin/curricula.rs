//! curricula — curriculum generation CLI
//!
//! Front end for the generation pipeline. Reads `GOOGLE_API_KEY` from the
//! environment (a `.env` file in the working directory works too), renders
//! the generated document as Markdown on stdout or into a file, and prints
//! the validation report on stderr.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use curricula::config::Config;
use curricula::llm::GeminiClient;
use curricula::retrieval::MemoryStore;
use curricula::{
    CareerPathRequest, CurriculumGenerator, CurriculumRequest, RecommendationRequest, render,
    validate,
};

/// Curricula CLI
#[derive(Parser)]
#[command(name = "curricula")]
#[command(version = curricula::PKG_VERSION)]
#[command(about = "Generate curricula, career paths and course recommendations")]
struct Args {
    /// Config file path (default: ~/.curricula/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the Markdown document to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an academic curriculum
    Curriculum {
        /// Subject or skill area, e.g. "Machine Learning"
        skill: String,
        /// Education level
        #[arg(short, long, default_value = "Undergraduate")]
        level: String,
        /// Programme length in semesters
        #[arg(short, long, default_value_t = 4)]
        semesters: u32,
        /// Specialization within the subject
        #[arg(long)]
        specialization: Option<String>,
        /// Focus area to emphasise (repeatable)
        #[arg(long = "focus")]
        focus_areas: Vec<String>,
        /// Generate without knowledge-base context
        #[arg(long)]
        no_knowledge_base: bool,
    },

    /// Plan a career-oriented learning path
    Career {
        /// Target role, e.g. "Machine Learning Engineer"
        role: String,
        /// Current education/experience level
        #[arg(short = 'l', long, default_value = "Beginner")]
        current_level: String,
        /// Available timeframe in months
        #[arg(short, long, default_value_t = 6)]
        months: u32,
        /// Educational or professional background
        #[arg(long)]
        background: Option<String>,
        /// Learning preference, e.g. "hands-on projects" (repeatable)
        #[arg(long = "preference")]
        preferences: Vec<String>,
    },

    /// Recommend next courses for a learner
    Recommend {
        /// Area of interest (repeatable, at least one)
        #[arg(long = "interest", required = true)]
        interests: Vec<String>,
        /// Completed course (repeatable)
        #[arg(long = "completed")]
        completed: Vec<String>,
        /// Career goal to align recommendations with
        #[arg(long)]
        goal: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Pick up GOOGLE_API_KEY from a .env file if one is present.
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let client = GeminiClient::from_env(config.generation.model.clone())?;
    let mut builder = CurriculumGenerator::builder()
        .generator(Arc::new(client))
        .retry(config.retry.to_retry_config());
    if let Some(dir) = &config.knowledge.dir {
        builder = builder.context_store(Arc::new(MemoryStore::from_dir(dir)?));
    }
    let generator = builder.build()?;

    let markdown = match args.command {
        Command::Curriculum {
            skill,
            level,
            semesters,
            specialization,
            focus_areas,
            no_knowledge_base,
        } => {
            let mut request = CurriculumRequest::new(skill, level, semesters)
                .use_knowledge_base(!no_knowledge_base);
            if let Some(specialization) = specialization {
                request = request.specialization(specialization);
            }
            if !focus_areas.is_empty() {
                request = request.focus_areas(focus_areas);
            }

            let curriculum = generator.generate(&request).await?;
            report_validation(&curriculum);
            render::curriculum_markdown(&curriculum)
        }

        Command::Career {
            role,
            current_level,
            months,
            background,
            preferences,
        } => {
            let mut request = CareerPathRequest::new(role, current_level, months);
            if let Some(background) = background {
                request = request.background(background);
            }
            if !preferences.is_empty() {
                request = request.preferences(preferences);
            }

            let curriculum = generator.career_path(&request).await?;
            report_validation(&curriculum);
            render::career_path_markdown(&curriculum)
        }

        Command::Recommend {
            interests,
            completed,
            goal,
        } => {
            let mut request = RecommendationRequest::new(interests).completed_courses(completed);
            if let Some(goal) = goal {
                request = request.career_goal(goal);
            }

            let recommendations = generator.recommend(&request).await?;
            render::recommendations_markdown(&recommendations)
        }
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, markdown)?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{markdown}"),
    }

    Ok(())
}

/// Print the validation report on stderr.
fn report_validation(curriculum: &curricula::Curriculum) {
    let report = validate(curriculum);
    for error in &report.errors {
        eprintln!("error: {error}");
    }
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
    if !report.is_valid() {
        eprintln!("validation: {}", report.summary());
    }
}
