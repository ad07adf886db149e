use crate::data::model::PlayerRecord;

/// `₹12.50 crore`
pub fn crore(value: f64) -> String {
    format!("₹{value:.2} crore")
}

/// Bare two-decimal amount for metric tiles and axis labels.
pub fn amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Base price cell; retained players have none.
pub fn base_price(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), crore)
}

/// Name with the retained marker appended for retained players.
pub fn display_name(player: &PlayerRecord, retained_marker: &str) -> String {
    if player.is_retained() {
        format!("{}{}", player.name, retained_marker)
    } else {
        player.name.clone()
    }
}

/// Heading for a ranked list, e.g. `Top 5 Expensive Players`.
pub fn top_title(n: usize, subject: &str) -> String {
    format!("Top {n} {subject}")
}

/// Selection control label, "All" for no choice.
pub fn or_all<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| "All".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_formatting() {
        assert_eq!(crore(27.0), "₹27.00 crore");
        assert_eq!(crore(0.756), "₹0.76 crore");
        assert_eq!(base_price(None), "-");
        assert_eq!(base_price(Some(2.0)), "₹2.00 crore");
    }

    #[test]
    fn retained_marker_is_display_only() {
        let retained = PlayerRecord::new("Kohli", "RCB", "BAT", None, 21.0);
        let bought = PlayerRecord::new("Pant", "LSG", "BAT", Some(2.0), 27.0);

        assert_eq!(display_name(&retained, " (R)"), "Kohli (R)");
        assert_eq!(display_name(&bought, " (R)"), "Pant");
        assert_eq!(retained.name, "Kohli");
    }

    #[test]
    fn ranked_titles_follow_the_configured_length() {
        assert_eq!(top_title(5, "Players by Spending"), "Top 5 Players by Spending");
        assert_eq!(top_title(3, "Expensive Retentions"), "Top 3 Expensive Retentions");
    }

    #[test]
    fn all_label() {
        assert_eq!(or_all::<String>(None), "All");
        assert_eq!(or_all(Some(&"BAT".to_string())), "BAT");
    }
}
