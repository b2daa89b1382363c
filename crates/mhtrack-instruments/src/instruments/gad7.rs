use crate::scoring::{items_from, Item, ScoreRange};
use crate::{Instrument, InstrumentKind};

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each rated 0–3. Total 0–21, clinical threshold 8.
pub struct Gad7;

impl Instrument for Gad7 {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Gad7
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            items_from(
                ScoreRange::new(0, 3),
                &[
                    ("nervous", "Feeling nervous, anxious, or on edge"),
                    ("uncontrolled_worry", "Not being able to stop or control worrying"),
                    ("excessive_worry", "Worrying too much about different things"),
                    ("trouble_relaxing", "Trouble relaxing"),
                    ("restless", "Being so restless that it is hard to sit still"),
                    ("irritable", "Becoming easily annoyed or irritable"),
                    ("afraid", "Feeling afraid as if something awful might happen"),
                ],
            )
        });
        &ITEMS
    }

    fn threshold(&self) -> Option<u32> {
        Some(8)
    }

    fn chart_color(&self) -> &str {
        "#10b981"
    }
}
