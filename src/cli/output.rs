//! Plain-text rendering of command results.

use rust_decimal::Decimal;

use crate::error::is_blank;
use crate::models::Kitchen;
use crate::startup::StartScreen;

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Title followed by a separator line.
///
/// ```text
/// KITCHENS
/// ════════════════════════════════════════════════════════════
/// ```
pub fn header(title: &str) -> String {
    format!("{}\n{}", title, "═".repeat(LINE_WIDTH))
}

/// One catalog row.
///
/// ```text
///   #3    Sushi Bar                  $15.25  ★ 4.5 (12)  25 min
/// ```
pub fn kitchen_line(kitchen: &Kitchen) -> String {
    let price = kitchen
        .unit_price()
        .map(format_money)
        .unwrap_or_else(|| kitchen.price.clone());
    format!(
        "  #{:<4} {:<26} {:>8}  ★ {:.1} ({})  {}",
        kitchen.id, kitchen.name, price, kitchen.rating, kitchen.review_count, kitchen.delivery_time
    )
}

/// The whole catalog listing, with a count footer.
pub fn catalog_listing(kitchens: &[&Kitchen], query: Option<&str>) -> String {
    let title = match query {
        Some(query) if !is_blank(query) => format!("KITCHENS MATCHING \"{}\"", query.trim()),
        _ => "KITCHENS".to_string(),
    };
    let mut out = header(&title);
    out.push('\n');
    for kitchen in kitchens {
        out.push_str(&kitchen_line(kitchen));
        out.push('\n');
    }
    let noun = if kitchens.len() == 1 { "kitchen" } else { "kitchens" };
    out.push_str(&format!("{}\n{} {}", "─".repeat(LINE_WIDTH), kitchens.len(), noun));
    out
}

/// Status summary for the remembered session.
pub fn status_line(screen: &StartScreen) -> String {
    match screen {
        StartScreen::Login => "Not logged in. The app opens on the login screen.".to_string(),
        StartScreen::Home { username } => {
            format!("Logged in as {}. The app opens on the home screen.", username)
        }
    }
}

/// `$` amount with two decimals.
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::kitchen::fixtures::kitchen;
    use std::str::FromStr;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::from_str("8.5").unwrap()), "$8.50");
        assert_eq!(format_money(Decimal::from(12)), "$12.00");
    }

    #[test]
    fn test_kitchen_line_shows_price_and_rating() {
        let line = kitchen_line(&kitchen(3, "Sushi Bar", "15.25"));
        assert!(line.contains("#3"));
        assert!(line.contains("Sushi Bar"));
        assert!(line.contains("$15.25"));
        assert!(line.contains("★ 4.5 (12)"));
    }

    #[test]
    fn test_unparseable_price_is_shown_raw() {
        let line = kitchen_line(&kitchen(1, "Mystery", "ask"));
        assert!(line.contains("ask"));
    }

    #[test]
    fn test_catalog_listing_footer() {
        let a = kitchen(1, "Taco Hub", "8.50");
        let b = kitchen(2, "Pasta Place", "12.00");
        let listing = catalog_listing(&[&a, &b], None);
        assert!(listing.starts_with("KITCHENS\n"));
        assert!(listing.ends_with("2 kitchens"));

        let listing = catalog_listing(&[&a], Some("taco"));
        assert!(listing.starts_with("KITCHENS MATCHING \"taco\""));
        assert!(listing.ends_with("1 kitchen"));
    }

    #[test]
    fn test_blank_query_uses_plain_title() {
        let a = kitchen(1, "Taco Hub", "8.50");
        for query in ["", "   "] {
            let listing = catalog_listing(&[&a], Some(query));
            assert!(listing.starts_with("KITCHENS\n"), "query {:?}", query);
        }
    }

    #[test]
    fn test_status_line() {
        assert!(status_line(&StartScreen::Login).starts_with("Not logged in"));
        assert!(status_line(&StartScreen::Home {
            username: "maria".to_string()
        })
        .contains("maria"));
    }
}
