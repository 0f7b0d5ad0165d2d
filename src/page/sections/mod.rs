//! Visible page sections, in document order.
//!
//! Each function returns one self-contained block of markup. Only the top
//! bar, the FAQ and the footer take data; the rest is fixed copy.

mod advanced;
mod longform;

pub use advanced::advanced;
pub use longform::longform;

use super::FaqItem;
use maud::{Markup, html};

/// Element ids of the anchored sections, in render order.
pub const SECTION_IDS: [&str; 8] = [
    "hero",
    "stories",
    "speed-test",
    "prompts",
    "typingstories-longform",
    "typingstories-advanced",
    "faq",
    "footer",
];

pub fn top_bar(date_label: &str) -> Markup {
    html! {
        div id="top-bar" {
            "Fun typing practice • Last updated " (date_label)
        }
    }
}

pub fn hero() -> Markup {
    html! {
        section id="hero" {
            h1 { "Make Typing Practice Fun with Interactive Stories" }
            p {
                strong { "TypingStories" } " transforms boring drills into "
                strong { "storytelling adventures" }
                ". Improve typing speed and accuracy by typing along with fairy tales, \
                 mystery quests, sci-fi adventures, and custom writing prompts. Great for \
                 students, hobby writers, and anyone wanting to boost keyboard skills."
            }
            nav {
                a href="#stories" { "Explore Stories" }
                " "
                a href="#speed-test" { "Take a Speed Test" }
            }
            aside {
                h2 { "Highlights" }
                ul {
                    li { "📚 Typing adventure stories" }
                    li { "🎮 Typing games for all ages" }
                    li { "⚡ Speed & accuracy tracking" }
                    li { "✍️ Creative writing prompts" }
                }
            }
        }
    }
}

pub fn stories() -> Markup {
    const CARDS: [(&str, &str); 3] = [
        (
            "Fairy Tale Adventures",
            "Perfect for younger learners, featuring short, fun stories with gradual speed progression.",
        ),
        (
            "Mystery & Detective Quests",
            "Solve riddles and unlock clues by typing dialogue and action scenes with increasing pace.",
        ),
        (
            "Sci-Fi Galaxy Missions",
            "Blast through alien worlds and star-ships while practicing speed typing with vivid storylines.",
        ),
    ];

    html! {
        section id="stories" {
            h2 { "Interactive Typing Stories" }
            p {
                "Type your way through fairy-tales, thrilling mysteries, and \
                 choose-your-own-adventure quests. Every typed word advances the story \
                 and improves your muscle memory."
            }
            @for (title, blurb) in CARDS {
                article {
                    h3 { (title) }
                    p { (blurb) }
                }
            }
        }
    }
}

pub fn speed_test() -> Markup {
    html! {
        section id="speed-test" {
            h2 { "Typing Speed Tests & Drills" }
            p {
                "Challenge yourself with timed tests, accuracy drills, and leaderboard \
                 competitions. Track "
                strong { "WPM (words per minute)" }
                ", accuracy percentage, and aim for new personal bests every week."
            }
        }
    }
}

pub fn prompts() -> Markup {
    html! {
        section id="prompts" {
            h2 { "Creative Writing Prompts" }
            p {
                "Build both typing skills and imagination. Use daily prompts for poetry, \
                 micro-fiction, essays, or journaling while developing rhythm and speed on \
                 the keyboard."
            }
        }
    }
}

/// Question then answer for every item, in slice order.
pub fn faq(items: &[FaqItem]) -> Markup {
    html! {
        section id="faq" {
            h2 { "Frequently Asked Questions" }
            dl {
                @for item in items {
                    div {
                        dt { (item.question) }
                        dd { (item.answer) }
                    }
                }
            }
        }
    }
}

pub fn footer(year: u16) -> Markup {
    html! {
        footer id="footer" {
            "© " (year) " TypingStories • Type Faster, Tell Stories Better"
        }
    }
}
