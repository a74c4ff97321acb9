//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::config::{MatchMode, RoutesConfig};
use crate::session::SessionClaims;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Print the configured route classification table
pub fn print_routes_table(routes: &RoutesConfig) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Pattern").fg(Color::Cyan),
            Cell::new("Class").fg(Color::Cyan),
        ]);

    for pattern in &routes.public {
        table.add_row(vec![
            Cell::new(pattern),
            Cell::new("public").fg(Color::Green),
        ]);
    }
    for pattern in &routes.protected {
        table.add_row(vec![
            Cell::new(pattern),
            Cell::new("protected").fg(Color::Yellow),
        ]);
    }
    for pattern in &routes.exclude {
        table.add_row(vec![
            Cell::new(pattern),
            Cell::new("excluded").fg(Color::DarkGrey),
        ]);
    }

    println!("{table}");

    let mode = match routes.match_mode {
        MatchMode::Prefix => "prefix",
        MatchMode::Substring => "substring",
    };
    info(&format!(
        "Match mode: {}, login redirect: {}",
        mode, routes.login_path
    ));
}

/// Print decoded token claims and expiry status
pub fn print_claims(claims: &SessionClaims) {
    println!("{}", "Token Claims".bold().underline());
    println!();
    println!(
        "  {} {}",
        "Subject:".bold(),
        claims.sub.as_deref().unwrap_or("-")
    );
    if let Some(iat) = claims.iat {
        println!("  {} {}", "Issued:".bold(), iat);
    }
    match claims.exp {
        Some(exp) => {
            let status = if claims.is_expired() {
                "expired".red().to_string()
            } else {
                "valid".green().to_string()
            };
            println!("  {} {} ({})", "Expires:".bold(), exp, status);
        }
        None => println!("  {} {}", "Expires:".bold(), "no exp claim".yellow()),
    }
}
