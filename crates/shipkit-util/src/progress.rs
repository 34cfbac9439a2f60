//! Status lines for deploy commands.
//!
//! All status output goes to stderr so that command data (module listings,
//! JSON) stays clean on stdout.

use std::io::Write;

use console::Style;

fn emit(label_style: Style, label: &str, message: &str) {
    // Right-align the label to 12 columns so consecutive lines read as a table.
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        label_style.apply_to(label),
    );
}

/// Green action line, e.g. `    Deployed android project for 'mygame'`.
pub fn status(label: &str, message: &str) {
    emit(Style::new().green().bold(), label, message);
}

/// Cyan informational line, e.g. the output directory after a deploy.
pub fn status_info(label: &str, message: &str) {
    emit(Style::new().cyan().bold(), label, message);
}

/// Yellow warning line, e.g. a module entry that cannot be deployed.
pub fn status_warn(label: &str, message: &str) {
    emit(Style::new().yellow().bold(), label, message);
}
