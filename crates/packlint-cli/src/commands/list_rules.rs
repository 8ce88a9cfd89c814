//! List rules command implementation.

use packlint_core::{DenylistRule, ImportRule, PrivateImportRule};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<20} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    print_rule(&PrivateImportRule::new());
    if let Ok(denylist) = DenylistRule::new(std::iter::empty::<&str>()) {
        print_rule(&denylist);
    }

    println!("\nThe privacy rule is on by default; disable it with:");
    println!("  [rules.private-import]");
    println!("  enabled = false");
    println!("\nThe denylist rule activates when patterns are configured:");
    println!("  [rules.import-denylist]");
    println!("  patterns = [\"^gui_package\"]");
}

fn print_rule(rule: &dyn ImportRule) {
    println!(
        "{:<10} {:<20} {}",
        rule.code(),
        rule.name(),
        rule.description()
    );
}
