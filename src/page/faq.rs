//! FAQ entries shared by the visible page and the JSON-LD payload.

/// One question with its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

impl FaqItem {
    pub const fn new(question: &'static str, answer: &'static str) -> Self {
        Self { question, answer }
    }
}

pub const FAQ_ITEMS: [FaqItem; 5] = [
    FaqItem::new(
        "Is TypingStories free to use?",
        "Yes. All basic typing stories, speed tests, and writing prompts are free. Optional premium packs may be added later.",
    ),
    FaqItem::new(
        "Can beginners use TypingStories?",
        "Absolutely. The stories start with slow-paced easy words and grow in difficulty as your typing improves.",
    ),
    FaqItem::new(
        "Is it kid-friendly?",
        "Yes. TypingStories includes family-safe stories, fairy-tale typing adventures, and classroom-friendly content.",
    ),
    FaqItem::new(
        "Do I need to install any software?",
        "No downloads needed. TypingStories works online in your browser on desktop, tablet, and mobile.",
    ),
    FaqItem::new(
        "Can I track my typing progress?",
        "You can save your scores, monitor speed (WPM), and revisit stories to beat your personal best.",
    ),
];
