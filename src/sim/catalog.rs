//! Collectible food and drink definitions
//!
//! The catalog is a fixed table; segments pick entries from it uniformly.

use rand::Rng;
use serde::Serialize;

/// Food or drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemCategory {
    Food,
    Drink,
}

/// A catalog entry (immutable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ItemCategory,
    pub calories: i32,
    /// Signed: some drinks dehydrate
    pub hydration: i32,
    pub energy: i32,
    /// Presentation lookup key (hex color)
    pub color: &'static str,
    pub emoji: &'static str,
}

/// Encyclopedia remarks about an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemNote {
    Hydrating,
    SolidFood,
    HighCalorie,
    Dehydrating,
    EnergyBoost,
}

impl ItemNote {
    pub fn describe(&self) -> &'static str {
        match self {
            ItemNote::Hydrating => "Hydrating beverage.",
            ItemNote::SolidFood => "Solid food source.",
            ItemNote::HighCalorie => "High calorie content, watch out!",
            ItemNote::Dehydrating => "Causes dehydration!",
            ItemNote::EnergyBoost => "Great energy boost!",
        }
    }
}

impl ItemDef {
    /// Notes shown in the food encyclopedia, in display order
    pub fn notes(&self) -> Vec<ItemNote> {
        let mut notes = vec![match self.category {
            ItemCategory::Drink => ItemNote::Hydrating,
            ItemCategory::Food => ItemNote::SolidFood,
        }];
        if self.calories > 100 {
            notes.push(ItemNote::HighCalorie);
        }
        if self.hydration < 0 {
            notes.push(ItemNote::Dehydrating);
        }
        if self.energy > 20 {
            notes.push(ItemNote::EnergyBoost);
        }
        notes
    }
}

static CATALOG: [ItemDef; 5] = [
    ItemDef {
        id: "banana",
        name: "Banana",
        category: ItemCategory::Food,
        calories: 105,
        hydration: 0,
        energy: 15,
        color: "#FFE135",
        emoji: "🍌",
    },
    ItemDef {
        id: "water",
        name: "Water Bottle",
        category: ItemCategory::Drink,
        calories: 0,
        hydration: 30,
        energy: 5,
        color: "#00BFFF",
        emoji: "💧",
    },
    ItemDef {
        id: "soda",
        name: "Soda",
        category: ItemCategory::Drink,
        calories: 150,
        hydration: -10,
        energy: 40,
        color: "#FF4500",
        emoji: "🥤",
    },
    ItemDef {
        id: "apple",
        name: "Apple",
        category: ItemCategory::Food,
        calories: 95,
        hydration: 5,
        energy: 10,
        color: "#FF0000",
        emoji: "🍎",
    },
    ItemDef {
        id: "coconut",
        name: "Coconut Water",
        category: ItemCategory::Drink,
        calories: 45,
        hydration: 40,
        energy: 10,
        color: "#F0F8FF",
        emoji: "🥥",
    },
];

/// Every collectible, in catalog order
pub fn all_items() -> &'static [ItemDef] {
    &CATALOG
}

/// Look up an entry by id
pub fn find_item(id: &str) -> Option<&'static ItemDef> {
    CATALOG.iter().find(|item| item.id == id)
}

/// An item with its encyclopedia notes, as shown to the player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub item: ItemDef,
    pub notes: Vec<&'static str>,
}

/// Food encyclopedia, in catalog order
pub fn encyclopedia() -> Vec<CatalogEntry> {
    CATALOG
        .iter()
        .map(|item| CatalogEntry {
            item: *item,
            notes: item.notes().iter().map(ItemNote::describe).collect(),
        })
        .collect()
}

/// Uniform pick from the catalog
pub fn random_item<R: Rng + ?Sized>(rng: &mut R) -> ItemDef {
    CATALOG[rng.random_range(0..CATALOG.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_catalog_ids_unique() {
        let items = all_items();
        assert!(!items.is_empty());
        for (i, a) in items.iter().enumerate() {
            assert!(items[i + 1..].iter().all(|b| b.id != a.id), "duplicate id {}", a.id);
        }
    }

    #[test]
    fn test_random_item_covers_catalog() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = vec![false; all_items().len()];
        for _ in 0..500 {
            let item = random_item(&mut rng);
            let idx = CATALOG.iter().position(|c| c.id == item.id).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_soda_notes() {
        let soda = find_item("soda").unwrap();
        assert_eq!(
            soda.notes(),
            vec![ItemNote::Hydrating, ItemNote::HighCalorie, ItemNote::Dehydrating, ItemNote::EnergyBoost]
        );
        assert_eq!(ItemNote::Dehydrating.describe(), "Causes dehydration!");
        let apple = find_item("apple").unwrap();
        assert_eq!(apple.notes(), vec![ItemNote::SolidFood]);
    }

    #[test]
    fn test_encyclopedia_carries_notes() {
        let entries = encyclopedia();
        assert_eq!(entries.len(), all_items().len());

        let json = serde_json::to_value(&entries).unwrap();
        let soda = json
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["id"] == "soda")
            .unwrap();
        assert_eq!(soda["name"], "Soda");
        assert_eq!(soda["hydration"], -10);
        assert_eq!(
            soda["notes"],
            serde_json::json!([
                "Hydrating beverage.",
                "High calorie content, watch out!",
                "Causes dehydration!",
                "Great energy boost!"
            ])
        );
    }
}
