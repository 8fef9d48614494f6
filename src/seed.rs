//! Hardcoded menu and fallback content.
//!
//! The menu is always served from here. Reviews and branches fall back to
//! these records whenever the store returns nothing, so the public site never
//! renders an empty section.

use crate::schemas::{Branch, MenuItem, Review};

fn unsplash(id: &str) -> Option<String> {
    Some(format!(
        "https://images.unsplash.com/{id}?q=80&w=1200&auto=format&fit=crop"
    ))
}

/// The full menu, in display order.
pub fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            name: "Chicken Biryani (Plate)".to_string(),
            description: Some("Aromatic basmati rice, tender chicken, signature masala.".to_string()),
            price: 420.0,
            photo_url: unsplash("photo-1606491956689-2ea866880c84"),
            category: "Chicken Biryani".to_string(),
        },
        MenuItem {
            name: "Beef Biryani (Plate)".to_string(),
            description: Some("Slow-cooked beef with robust spices.".to_string()),
            price: 520.0,
            photo_url: unsplash("photo-1625944520878-2986441aa5fb"),
            category: "Beef Biryani".to_string(),
        },
        MenuItem {
            name: "Chicken Daig (20 ppl)".to_string(),
            description: Some("Perfect for small gatherings.".to_string()),
            price: 8500.0,
            photo_url: unsplash("photo-1544025162-d76694265947"),
            category: "Daigs".to_string(),
        },
        MenuItem {
            name: "Chicken Daig (50 ppl)".to_string(),
            description: Some("Family events & mehndi.".to_string()),
            price: 18500.0,
            photo_url: unsplash("photo-1544025162-36f6ad47d34f"),
            category: "Daigs".to_string(),
        },
        MenuItem {
            name: "Raita (500ml)".to_string(),
            description: Some("Cooling mint raita.".to_string()),
            price: 250.0,
            photo_url: unsplash("photo-1606755456203-231e3d8ff4b8"),
            category: "Sides".to_string(),
        },
        MenuItem {
            name: "Kachumber Salad".to_string(),
            description: Some("Fresh onions, cucumbers, tomatoes.".to_string()),
            price: 250.0,
            photo_url: unsplash("photo-1526318472351-c75fcf070305"),
            category: "Sides".to_string(),
        },
        MenuItem {
            name: "Cold Drink 1.5L".to_string(),
            description: Some("Chilled soft drink bottle.".to_string()),
            price: 320.0,
            photo_url: unsplash("photo-1554866585-cd94860890b7"),
            category: "Drinks".to_string(),
        },
    ]
}

/// Reviews shown until real ones land in the store.
pub fn fallback_reviews() -> Vec<Review> {
    vec![
        Review {
            name: "Maham A.".to_string(),
            rating: 5,
            comment: "Hands down the best Karachi biryani! Perfect spice.".to_string(),
            source: Some("Google".to_string()),
            photo_url: None,
        },
        Review {
            name: "Ali R.".to_string(),
            rating: 5,
            comment: "Ordered daig for mehndi. Fresh, hot, on time.".to_string(),
            source: Some("Foodpanda".to_string()),
            photo_url: None,
        },
        Review {
            name: "Sana K.".to_string(),
            rating: 4,
            comment: "Aroma is unreal. Beef is super tender.".to_string(),
            source: Some("Google".to_string()),
            photo_url: None,
        },
    ]
}

/// Branches shown until real ones land in the store.
pub fn fallback_branches() -> Vec<Branch> {
    vec![
        Branch {
            name: "Saddar".to_string(),
            address: "Saddar, Karachi".to_string(),
            phone: Some("+92 300 1234567".to_string()),
            hours: Some("11am - 11pm".to_string()),
            lat: Some(24.853),
            lng: Some(67.018),
            areas: Some(vec![
                "Saddar".to_string(),
                "PECHS".to_string(),
                "Garden".to_string(),
            ]),
        },
        Branch {
            name: "Gulshan-e-Iqbal".to_string(),
            address: "Block 10, Gulshan-e-Iqbal".to_string(),
            phone: Some("+92 333 7654321".to_string()),
            hours: Some("11am - 11pm".to_string()),
            lat: Some(24.923),
            lng: Some(67.089),
            areas: Some(vec![
                "Gulshan".to_string(),
                "Gulistan-e-Johar".to_string(),
                "Bahadurabad".to_string(),
            ]),
        },
    ]
}
