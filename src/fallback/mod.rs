//! # Fallback Data Provider
//!
//! Pure substitution policy keeping the demo usable when the backends are
//! unreachable: a failed or empty read is replaced by canned data, a
//! non-empty successful response is never overridden. This is a decision
//! function, not a cache. No memoization, trivially testable.
//!
//! Substitution applies to read paths only. Order submission failures must
//! surface as errors (they may be real saga compensations) and never come
//! through here.

use crate::gateway::GatewayError;
use crate::model::{MenuItem, Restaurant};

/// Built-in demo restaurants shown when the catalog is unreachable or empty.
pub fn demo_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: "resto-roma".to_string(),
            name: "La Trattoria Roma".to_string(),
            status: "ONLINE".to_string(),
        },
        Restaurant {
            id: "resto-kyoto".to_string(),
            name: "Sakura Sushi Kyoto".to_string(),
            status: "ONLINE".to_string(),
        },
    ]
}

/// Built-in demo menu for `restaurant_id`, empty for unknown restaurants.
pub fn demo_menu(restaurant_id: &str) -> Vec<MenuItem> {
    match restaurant_id {
        "resto-roma" => vec![
            menu_item(
                "roma-carbonara",
                "Pasta Carbonara",
                Some("Mit Pancetta und Pecorino"),
                12.5,
            ),
            menu_item(
                "roma-margherita",
                "Pizza Margherita",
                Some("San-Marzano-Tomaten & Büffelmozzarella"),
                10.0,
            ),
        ],
        "resto-kyoto" => vec![
            menu_item("kyoto-salmon", "Lachs Nigiri Set", Some("8 Stück Nigiri"), 15.5),
            menu_item("kyoto-ramen", "Shoyu Ramen", Some("Sojasud mit Hühnchen"), 13.0),
        ],
        _ => Vec::new(),
    }
}

fn menu_item(id: &str, name: &str, description: Option<&str>, price: f64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.map(ToString::to_string),
        price,
        available: true,
    }
}

/// Applies the substitution policy to a restaurant-list fetch outcome.
pub fn resolve_restaurants(
    outcome: Result<Vec<Restaurant>, GatewayError>,
) -> Vec<Restaurant> {
    match outcome {
        Ok(restaurants) if !restaurants.is_empty() => restaurants,
        _ => demo_restaurants(),
    }
}

/// Applies the substitution policy to a menu fetch outcome for the selected
/// restaurant.
pub fn resolve_menu(
    outcome: Result<Vec<MenuItem>, GatewayError>,
    restaurant_id: &str,
) -> Vec<MenuItem> {
    match outcome {
        Ok(items) if !items.is_empty() => items,
        _ => demo_menu(restaurant_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_restaurant_list_yields_the_two_demo_entries() {
        let resolved = resolve_restaurants(Ok(Vec::new()));
        assert_eq!(resolved, demo_restaurants());
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn failed_restaurant_fetch_yields_demo_entries() {
        let resolved = resolve_restaurants(Err(GatewayError::Transport(
            "connection refused".to_string(),
        )));
        assert_eq!(resolved, demo_restaurants());
    }

    #[test]
    fn non_empty_success_is_never_overridden() {
        let real = vec![Restaurant {
            id: "resto-real".to_string(),
            name: "Echtes Restaurant".to_string(),
            status: "ONLINE".to_string(),
        }];
        assert_eq!(resolve_restaurants(Ok(real.clone())), real);
    }

    #[test]
    fn menu_fallback_is_keyed_by_restaurant() {
        let failed = Err(GatewayError::RequestFailed {
            status: 503,
            message: "unavailable".to_string(),
        });
        let roma = resolve_menu(failed, "resto-roma");
        assert_eq!(roma.len(), 2);
        assert_eq!(roma[0].id, "roma-carbonara");

        let unknown = resolve_menu(
            Err(GatewayError::Transport("down".to_string())),
            "resto-unknown",
        );
        assert!(unknown.is_empty());
    }
}
