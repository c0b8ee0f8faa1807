//! Interactive analysis form.
//!
//! One text input with Enter to submit; results replace whatever was
//! shown before. Empty input is rejected by the validator and never
//! reaches the analyzer; analysis failures are shown as styled messages
//! and the form keeps running.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};

use listing_analysis::{AnalysisReport, CompletionBackend, ListingAnalyzer, PageSource};

/// Run the form loop until the process is interrupted.
pub async fn run<S, C>(analyzer: &ListingAnalyzer<S, C>) -> Result<()>
where
    S: PageSource,
    C: CompletionBackend,
{
    let term = Term::stdout();
    print_banner(&term)?;

    loop {
        println!();
        // allow_empty lets the validator see empty submissions, so the
        // user gets the validation message instead of a silent re-prompt.
        let phrase: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter a title for analysis")
            .allow_empty(true)
            .validate_with(|input: &String| validate_phrase(input))
            .interact_text()?;

        println!(
            "{}",
            "Fetching listings and asking the pricing model...".dimmed()
        );

        match analyzer.analyze(&phrase, false).await {
            Ok(report) => render_report(&term, &phrase, &report)?,
            Err(e) => println!(
                "{} {}",
                "✗".bright_red(),
                format!("analysis failed: {}", e).bright_red()
            ),
        }
    }
}

/// Reject empty input with a user-facing message.
fn validate_phrase(input: &str) -> Result<(), String> {
    if input.is_empty() {
        Err("Please enter a title.".to_string())
    } else {
        Ok(())
    }
}

fn print_banner(term: &Term) -> Result<()> {
    term.clear_screen()?;
    println!(
        "{}",
        "╔══════════════════════════════════════╗".bright_cyan()
    );
    println!(
        "{}",
        "║         Pricescout Analysis          ║".bright_cyan()
    );
    println!(
        "{}",
        "╚══════════════════════════════════════╝".bright_cyan()
    );
    println!();
    Ok(())
}

fn render_report(term: &Term, phrase: &str, report: &AnalysisReport) -> Result<()> {
    print_banner(term)?;

    println!("{} {}", "Results for:".bold(), phrase);
    println!();
    println!(
        "{}",
        format!("Average Sold Price: ${:.2}", report.average_sold_price)
            .bright_green()
            .bold()
    );
    println!();
    println!("{}", "Analysis:".bright_yellow());
    println!("----------------");
    println!("{}", report.analysis_text);

    Ok(())
}
