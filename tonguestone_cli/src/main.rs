// CLI entry point for the Tonguestone language generator.
//
// Generates a complete constructed language from a seed and an optional
// divergence target, prints its descriptive stone and a lexicon sample,
// and optionally translates English text into it.
//
// Usage:
//   tonguestone [OPTIONS]
//     --seed <N>            Integer seed (default: 0)
//     --seed-text <TEXT>    Text seed (hashed; overrides --seed)
//     --divergence <D>      Drift target in [0, 1] (default: unguided)
//     --translate <TEXT>    English text to translate into the language
//     --json                Dump the full language as JSON instead

use tonguestone_lang::{Config, Engine, Language};
use tonguestone_translate::Translator;

#[derive(Default)]
struct CliConfig {
    seed: u64,
    seed_text: Option<String>,
    divergence: Option<f64>,
    translate: Option<String>,
    json: bool,
}

fn main() {
    let cli = parse_args();

    let engine = match &cli.seed_text {
        Some(text) => Engine::from_text(text, cli.divergence),
        None => Engine::new(Config {
            seed: cli.seed,
            divergence: cli.divergence,
        }),
    };
    let engine = match engine {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let language = engine.generate();

    if cli.json {
        match serde_json::to_string_pretty(&language) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize language: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{}", language.stone);
    print_lexicon_sample(&language);

    if let Some(text) = &cli.translate {
        let translator = Translator::new(&language);
        match translator.translate_to_conlang(text) {
            Ok(result) => {
                println!();
                println!("{text}");
                println!("  => {}", result.target);
                println!();
                for line in result.gloss.lines() {
                    println!("  {line}");
                }
            }
            Err(e) => {
                eprintln!("Cannot translate: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn print_lexicon_sample(language: &Language) {
    println!();
    println!("Lexicon sample:");
    for entry in language.lexicon.all().iter().take(12) {
        println!("  {:<12} {}", entry.form, entry.gloss);
    }
    let total = language.lexicon.all().len();
    if total > 12 {
        println!("  ... {total} entries total");
    }
}

/// Parse command-line arguments. Uses simple `std::env::args()` matching —
/// no clap dependency.
fn parse_args() -> CliConfig {
    let mut config = CliConfig::default();
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                config.seed = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--seed requires an unsigned integer");
                    std::process::exit(1);
                });
            }
            "--seed-text" => {
                i += 1;
                config.seed_text = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--seed-text requires a value");
                    std::process::exit(1);
                }));
            }
            "--divergence" => {
                i += 1;
                let d = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--divergence requires a number in [0, 1]");
                    std::process::exit(1);
                });
                config.divergence = Some(d);
            }
            "--translate" => {
                i += 1;
                config.translate = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--translate requires a value");
                    std::process::exit(1);
                }));
            }
            "--json" => {
                config.json = true;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_usage() {
    println!("Usage: tonguestone [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --seed <N>            Integer seed (default: 0)");
    println!("  --seed-text <TEXT>    Text seed (hashed; overrides --seed)");
    println!("  --divergence <D>      Drift target in [0, 1] (default: unguided)");
    println!("  --translate <TEXT>    English text to translate into the language");
    println!("  --json                Dump the full language as JSON");
    println!("  --help, -h            Show this help");
}
