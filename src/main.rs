use std::io::Read;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qazmorph_rs::analyzer::Analyzer;
use qazmorph_rs::config::Config;
use qazmorph_rs::decoder::DetectedForm;
use qazmorph_rs::lookup::HttpLookupClient;
use qazmorph_rs::session::AnalyzedPart;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let text = input_text()?;
    let config = Config::load_from_default();

    tracing::info!(service = %config.service.effective_base_url(), "starting analysis");

    let client = HttpLookupClient::new(&config.service)?;
    let mut analyzer = Analyzer::new(client, &config.analysis);

    let outcome = analyzer.start(&text).await;

    for part in analyzer.session().breakdown() {
        print_part(part);
    }

    outcome?;
    Ok(())
}

/// Command-line arguments joined, or stdin when none are given.
fn input_text() -> Result<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn print_part(part: &AnalyzedPart) {
    if !part.token.is_word {
        return;
    }

    println!("{}", part.token.content);
    if part.detected_forms.is_empty() {
        println!("  (not recognized)");
        return;
    }

    for form in &part.detected_forms {
        println!("  {}", describe_form(form));
        for gloss in &form.glosses.ru {
            println!("    ru: {gloss}");
        }
        for gloss in &form.glosses.en {
            println!("    en: {gloss}");
        }
    }
}

/// One-line feature summary of a decoded form.
fn describe_form(form: &DetectedForm) -> String {
    let mut line = format!("{} [{:?}", form.base, form.part_of_speech);

    if form.exceptional_verb {
        line.push_str(", exceptional");
    }
    if let Some(tense) = &form.tense {
        line.push_str(&format!(", {tense}"));
    }
    if let Some(person) = form.person {
        line.push_str(&format!(", {person:?}"));
    }
    if let Some(number) = form.number {
        line.push_str(&format!(", {number:?}"));
    }
    if let Some(septik) = form.septik {
        line.push_str(&format!(", {septik:?} septik"));
    }
    line.push_str(&format!(", {:?}]", form.sentence_type));

    line
}
