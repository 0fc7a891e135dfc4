//! Name Forge - company name availability checker and generator
//!
//! Checks a proposed company name against the registry of taken names and
//! suggests alternatives when it collides.

use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Select, Text};
use name_forge::{
    AppConfig, Attributes, Language, Messages, NameCheckOutcome, NameForgeError, Pipeline, Result,
    Suggestions,
};
use std::env;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    name: Option<String>,
    language: Option<Language>,
    industry: Option<String>,
    unique_feature: Option<String>,
    json: bool,
    help: bool,
}

#[tokio::main]
async fn main() {
    // Initialize the library
    if let Err(e) = name_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "name_forge=warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(2);
        }
    };

    if cli.help {
        print_help();
        return;
    }

    if let Err(e) = run(cli).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut words = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "--json" => cli.json = true,
            "--lang" => {
                let value = iter.next().ok_or_else(|| NameForgeError::cli("--lang needs a value (en or ar)"))?;
                let language = Language::from_code(value)
                    .ok_or_else(|| NameForgeError::cli(format!("Unknown language '{}', use en or ar", value)))?;
                cli.language = Some(language);
            }
            "--industry" => {
                let value = iter.next().ok_or_else(|| NameForgeError::cli("--industry needs a value"))?;
                cli.industry = Some(value.clone());
            }
            "--feature" => {
                let value = iter.next().ok_or_else(|| NameForgeError::cli("--feature needs a value"))?;
                cli.unique_feature = Some(value.clone());
            }
            flag if flag.starts_with("--") => {
                return Err(NameForgeError::cli(format!("Unknown option '{}'", flag)));
            }
            word => words.push(word.to_string()),
        }
    }

    if !words.is_empty() {
        cli.name = Some(words.join(" "));
    }
    Ok(cli)
}

async fn run(cli: CliArgs) -> Result<()> {
    let config = AppConfig::from_env()?;
    let pipeline = config.build_pipeline()?;

    if cli.json {
        return run_json(&pipeline, cli).await;
    }

    // UI language is picked by the user; prompt language follows the name's script.
    let ui_language = match cli.language {
        Some(language) => language,
        None => Select::new("Select Language / اختر اللغة", Language::ALL.to_vec()).prompt()?,
    };
    let text = pipeline.generator().catalog().get(ui_language).clone();

    println!("🏢 {}", text.title);
    println!("═══════════════════════════════════════════════════");
    println!("{}", text.instruction);
    println!();

    let name = match cli.name {
        Some(name) => name,
        None => Text::new(text.proposed_name).prompt()?,
    };

    if !pipeline.generator().is_ready() {
        println!("⚠️  No LLM provider configured; set GEMINI_API_KEY, OPENAI_API_KEY or ANTHROPIC_API_KEY for suggestions.");
    }

    let outcome = with_spinner(text.generating_names, pipeline.resolve(&name)).await?;

    let language = match &outcome {
        NameCheckOutcome::Available { .. } => {
            println!("✅ {}", text.name_available);
            return Ok(());
        }
        NameCheckOutcome::Taken {
            language,
            similar_names,
            groups,
            warnings,
            ..
        } => {
            println!("❌ {}", text.name_taken);
            println!("{}", text.similar_names);
            print_list(similar_names);

            for group in groups {
                println!();
                println!("💡 {} '{}':", text.updated_suggestions, group.similar_to);
                print_list(&group.candidates);
            }
            print_warnings(warnings);
            *language
        }
    };

    println!();
    println!("{}", text.additional_info);
    let industry = match cli.industry {
        Some(industry) => industry,
        None => Text::new(text.industry).prompt()?,
    };
    let unique_feature = match cli.unique_feature {
        Some(feature) => feature,
        None => Text::new(text.unique_feature).prompt()?,
    };

    let attributes = Attributes::new(industry, unique_feature);
    if !attributes.is_complete() {
        return Ok(());
    }

    let suggestions = with_spinner("🤖", pipeline.suggest(language, &attributes)).await?;
    print_suggestions(&text, &suggestions);

    let metrics = pipeline.generator().get_metrics_snapshot();
    tracing::info!(
        api_calls = metrics.api_calls,
        errors = metrics.errors,
        candidates_extracted = metrics.candidates_extracted,
        candidates_rejected = metrics.candidates_rejected,
        avg_generation_ms = metrics.avg_generation_time_ms(),
        "Session summary"
    );
    Ok(())
}

/// Non-interactive mode: one JSON document on stdout
async fn run_json(pipeline: &Pipeline, cli: CliArgs) -> Result<()> {
    let name = cli
        .name
        .ok_or_else(|| NameForgeError::cli("--json needs a NAME argument"))?;

    let outcome = pipeline.resolve(&name).await?;
    let suggestions = match (&outcome, cli.industry, cli.unique_feature) {
        (NameCheckOutcome::Taken { language, .. }, Some(industry), Some(feature)) => {
            Some(pipeline.suggest(*language, &Attributes::new(industry, feature)).await?)
        }
        _ => None,
    };

    let document = serde_json::json!({
        "outcome": outcome,
        "suggestions": suggestions,
        "metrics": pipeline.generator().get_metrics_snapshot(),
    });
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

async fn with_spinner<T>(message: &str, work: impl std::future::Future<Output = T>) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = work.await;
    spinner.finish_and_clear();
    result
}

fn print_list(names: &[String]) {
    for (i, name) in names.iter().enumerate() {
        println!("  {:2}. {}", i + 1, name);
    }
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        println!("⚠️  {}", warning);
    }
}

fn print_suggestions(text: &Messages, suggestions: &Suggestions) {
    println!();
    if suggestions.is_empty() {
        println!("😔 {}", text.no_suggestions);
    } else {
        println!("🎉 {}", text.suggested_names);
        print_list(&suggestions.names);
    }
    print_warnings(&suggestions.warnings);
}

/// Print help information
fn print_help() {
    println!("🏢 Name Forge - company name availability checker & generator");
    println!("═══════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    name-forge [NAME] [--lang en|ar] [--industry TEXT --feature TEXT] [--json]");
    println!();
    println!("EXAMPLES:");
    println!("    name-forge                                   # Interactive session");
    println!("    name-forge \"Emaar Property\" --lang en        # Check a name");
    println!("    name-forge ADNOC --json --industry energy --feature \"solar focus\"");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    GEMINI_API_KEY           Google Gemini API key (default provider)");
    println!("    OPENAI_API_KEY           OpenAI API key");
    println!("    ANTHROPIC_API_KEY        Anthropic API key");
    println!("    OLLAMA_MODEL             Enables a local Ollama model");
    println!("    NAME_FORGE_PROVIDER      Preferred provider (gemini, openai, anthropic, ollama)");
    println!();
    println!("    NAME_FORGE_REGISTRY      Registry file: JSON array or one name per line");
    println!("    NAME_FORGE_THRESHOLD     Similarity threshold (default: 0.8)");
    println!("    NAME_FORGE_TIMEOUT_SECS  Timeout per model call (default: 30)");
    println!("    RUST_LOG                 Log filter, e.g. name_forge=info");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_name_and_flags() {
        let cli = parse_args(&args(&["Emaar", "Property", "--lang", "ar", "--json"])).unwrap();
        assert_eq!(cli.name.as_deref(), Some("Emaar Property"));
        assert_eq!(cli.language, Some(Language::Arabic));
        assert!(cli.json);
    }

    #[test]
    fn test_parse_attributes() {
        let cli = parse_args(&args(&["ADNOC", "--industry", "energy", "--feature", "solar"])).unwrap();
        assert_eq!(cli.industry.as_deref(), Some("energy"));
        assert_eq!(cli.unique_feature.as_deref(), Some("solar"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--lang"])).is_err());
        assert!(parse_args(&args(&["--lang", "fr"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }
}
