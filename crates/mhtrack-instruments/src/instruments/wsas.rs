use crate::scoring::{items_from, Item, ScoreRange};
use crate::{Instrument, InstrumentKind};

/// WSAS: Work and Social Adjustment Scale, functional impairment.
/// 5 items, each rated 0–8. Total 0–40. Reported as a raw total only.
pub struct Wsas;

impl Instrument for Wsas {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Wsas
    }

    fn name(&self) -> &str {
        "WSAS"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            items_from(
                ScoreRange::new(0, 8),
                &[
                    ("work", "Ability to work"),
                    ("home_management", "Home management"),
                    ("social_leisure", "Social leisure activities"),
                    ("private_leisure", "Private leisure activities"),
                    ("relationships", "Ability to form and maintain close relationships"),
                ],
            )
        });
        &ITEMS
    }

    fn threshold(&self) -> Option<u32> {
        None
    }

    fn chart_color(&self) -> &str {
        "#f59e0b"
    }
}
