/// A browse category a listing can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { label: "Beach", icon: "🏖️", description: "This property is close to the beach!" },
    Category { label: "Windmills", icon: "🌬️", description: "This property has windmills!" },
    Category { label: "Modern", icon: "🏙️", description: "This property is modern!" },
    Category { label: "Countryside", icon: "⛰️", description: "This property is in the countryside!" },
    Category { label: "Pools", icon: "🏊", description: "This property has a beautiful pool!" },
    Category { label: "Islands", icon: "🏝️", description: "This property is on an island!" },
    Category { label: "Lake", icon: "🛶", description: "This property is near a lake!" },
    Category { label: "Skiing", icon: "⛷️", description: "This property has skiing activities!" },
    Category { label: "Castles", icon: "🏰", description: "This property is an ancient castle!" },
    Category { label: "Caves", icon: "🦇", description: "This property is in a spooky cave!" },
    Category { label: "Camping", icon: "🏕️", description: "This property offers camping activities!" },
    Category { label: "Arctic", icon: "❄️", description: "This property is in an arctic environment!" },
    Category { label: "Desert", icon: "🌵", description: "This property is in the desert!" },
    Category { label: "Barns", icon: "🛖", description: "This property is in a barn!" },
    Category { label: "Lux", icon: "💎", description: "This property is brand new and luxurious!" },
];

/// Exact, case-sensitive label lookup.
pub fn find_category(label: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_label() {
        let category = find_category("Lake").unwrap();
        assert_eq!(category.description, "This property is near a lake!");
    }

    #[test]
    fn unknown_or_miscased_label_has_no_category() {
        assert!(find_category("Treehouse").is_none());
        assert!(find_category("lake").is_none());
        assert!(find_category("").is_none());
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            assert!(CATEGORIES[i + 1..].iter().all(|b| b.label != a.label));
        }
    }
}
