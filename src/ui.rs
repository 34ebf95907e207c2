//! Terminal output formatting for search results.

use colored::Colorize;

use crate::types::FeatureRecord;

/// One feature rendered as a block: name line, description, category, path.
pub fn format_feature(record: &FeatureRecord) -> String {
    format!(
        "📍 {}\n   {}\n   {} {}\n   {} {}",
        record.name.bold(),
        record.description,
        "Category:".dimmed(),
        record.category.cyan(),
        "Path:".dimmed(),
        record.path
    )
}

pub fn print_results(results: &[FeatureRecord]) {
    println!("\n{}", "=== Features Found ===".green().bold());
    for record in results {
        println!("\n{}", format_feature(record));
    }
}

pub fn print_no_matches(query: &str) {
    println!("\n{} No feature found for '{}'", "❌".red(), query);
}

pub fn print_query_too_short(min: usize) {
    println!(
        "\n{}  Type at least {} characters to search",
        "⚠️".yellow(),
        min
    );
}

pub fn print_not_found(name: &str) {
    println!("\n{} No feature named '{}'", "❌".red(), name);
}

pub fn print_interactive_header() {
    println!("\n{}", "=========== Feature Search 🔍 ===========".bold());
    println!("Type 'back' to leave the search prompt");
}
