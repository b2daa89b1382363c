use crate::scoring::{items_from, Item, ScoreRange};
use crate::{Instrument, InstrumentKind};

/// PHQ-9: Patient Health Questionnaire, depression severity.
/// 9 items, each rated 0–3. Total 0–27, clinical threshold 10.
pub struct Phq9;

/// Item 9 asks about thoughts of self-harm. The tracker's ideation
/// indicator is entered separately and is not derived from it.
pub const SELF_HARM_ITEM: &str = "self_harm_thoughts";

impl Instrument for Phq9 {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Phq9
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            items_from(
                ScoreRange::new(0, 3),
                &[
                    ("anhedonia", "Little interest or pleasure in doing things"),
                    ("depressed_mood", "Feeling down, depressed, or hopeless"),
                    ("sleep", "Trouble falling or staying asleep, or sleeping too much"),
                    ("fatigue", "Feeling tired or having little energy"),
                    ("appetite", "Poor appetite or overeating"),
                    ("self_worth", "Feeling bad about yourself"),
                    ("concentration", "Trouble concentrating on things"),
                    ("psychomotor", "Moving or speaking slowly, or being fidgety or restless"),
                    (SELF_HARM_ITEM, "Thoughts that you would be better off dead or of hurting yourself"),
                ],
            )
        });
        &ITEMS
    }

    fn threshold(&self) -> Option<u32> {
        Some(10)
    }

    fn chart_color(&self) -> &str {
        "#3b82f6"
    }
}
