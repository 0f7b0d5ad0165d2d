use maud::{Markup, html};

pub fn advanced() -> Markup {
    html! {
        section id="typingstories-advanced" {
            div {
                h2 { "The Psychology Behind Faster Typing" }
                p {
                    "Typing improvement depends not only on muscle memory but also on "
                    strong { "mindset, focus, and motivation" }
                    ". Studies show that gamified repetition creates "
                    strong { "positive reinforcement loops" }
                    "-as players see scores rise, dopamine release encourages them to practice \
                     longer. Using "
                    strong { "story-driven practice" }
                    " also reduces mental fatigue by keeping the brain engaged in narrative \
                     context rather than abstract drills."
                }
                p {
                    "Learners who set " strong { "specific measurable goals" }
                    "-like adding 5 WPM each month-progress 30-50% faster than those without \
                     milestones. Keeping a "
                    strong { "practice journal" }
                    " or using TypingStories’ streak tracker sustains motivation over time."
                }
            }

            div {
                h3 { "Muscle Memory and Visualization Tricks" }
                p {
                    "Speed gains come from converting keystrokes into "
                    strong { "automatic muscle memory" }
                    ". Visualization techniques-like mentally picturing the keyboard while away \
                     from the computer-help reinforce neural pathways. Short five-minute \
                     visualization sessions combined with "
                    strong { "daily 10-15 minute typing bursts" }
                    " accelerate progress without long tiring sessions."
                }
            }

            div {
                h3 { "Accessibility-Friendly Typing Practice" }
                p {
                    "TypingStories is designed to be " strong { "inclusive" }
                    " for learners with varied needs. Large-font story mode, dark-theme \
                     options, adjustable color contrast, and "
                    strong { "screen-reader compatible UI" }
                    " support low-vision users. Break timers and ergonomic reminders reduce \
                     strain for people prone to repetitive-stress injuries."
                }
                p {
                    "This inclusive approach ensures that typing improvement is open to \
                     students, seniors, and those in rehabilitation programs alike."
                }
            }

            div {
                h3 { "Typing Practice in Multiple Languages" }
                p {
                    "Beyond English, TypingStories plans to include "
                    strong { "multilingual stories" }
                    " such as Spanish, French, German, Hindi, and Japanese romaji. Practicing \
                     in different languages introduces new letter patterns, punctuation habits, \
                     and accent marks that boost "
                    strong { "keyboard agility" }
                    " and benefit polyglot learners or international typists preparing for \
                     language-specific tests."
                }
            }

            div {
                h3 { "Competitive Typing Challenges & Leaderboards" }
                p {
                    "Many learners thrive on a competitive spark. Weekly "
                    strong { "speed races" }
                    " let players type identical passages to rank on global "
                    strong { "WPM leaderboards" }
                    ". Public challenges encourage consistency, while "
                    strong { "accuracy bonuses" }
                    " reward clean typing over reckless speed. These events gamify improvement \
                     for students and hobby typists aiming for 100+ WPM milestones."
                }
            }

            div {
                h3 { "Finger & Wrist Health: Stretching Routines" }
                p { "Preventing fatigue keeps practice sustainable. Experts recommend:" }
                ul {
                    li { "🖐️ Finger spreads and clenches every 15 minutes." }
                    li { "💪 Wrist rotations clockwise and counter-clockwise during breaks." }
                    li { "🧘 Shoulder shrugs and neck rolls to avoid upper-body stiffness." }
                    li { "⏱️ Micro-breaks: 20-second pauses for every 10 minutes of typing." }
                }
                p {
                    "These stretches are simple but reduce the risk of repetitive-strain \
                     injuries, especially for marathon writing sessions or long gaming nights."
                }
            }

            div {
                h3 { "Why Story-Based Typing Improves Retention" }
                p {
                    "Cognitive science shows that humans remember "
                    strong { "contextual words" }
                    " inside stories far better than random strings. By associating keystrokes \
                     with a narrative, TypingStories encourages "
                    strong { "deeper encoding" }
                    " in memory and improves both accuracy and recall of tricky punctuation \
                     patterns."
                }
                p {
                    "Teachers using story-based lessons in class report improved student \
                     engagement and longer sustained focus compared to standard typing drills."
                }
            }

            div {
                h3 { "Keyboard Shortcuts for Power Typists" }
                p {
                    "Improving speed isn’t limited to letters. Mastering "
                    strong { "common OS and editor shortcuts" }
                    " saves time:"
                }
                ul {
                    li { "Ctrl/⌘ + Backspace to delete whole words efficiently." }
                    li { "Alt/Option + Arrow Keys for quick cursor navigation." }
                    li { "Shift + Ctrl/⌘ + Arrow Keys to select text by word or line." }
                    li { "Custom hotkeys in writing software for inserting frequent symbols." }
                }
                p {
                    "Practicing these within story mode can boost overall workflow productivity \
                     for students, programmers, and writers."
                }
            }

            div {
                h3 { "Comparing Typing Styles & Layouts" }
                p {
                    "Advanced learners may experiment with alternative layouts like "
                    strong { "Dvorak" } " or " strong { "Colemak" }
                    " to reduce finger travel. Touch typists can also test split mechanical \
                     keyboards or ortholinear boards for ergonomic benefits. TypingStories will \
                     soon allow users to pick "
                    strong { "layout-specific lessons" }
                    " to ease the transition and measure speed gains."
                }
            }

            div {
                h3 { "Join the Writing & Typing Community" }
                p {
                    "A supportive community accelerates skill development. TypingStories \
                     encourages users to share "
                    strong { "custom prompts, story scripts, and personal WPM progress" }
                    ". Community challenges keep learners engaged, and collaborative \
                     storytelling games make practice both social and educational."
                }
            }

            div {
                h3 { "Building Lifelong Typing Confidence" }
                p {
                    "By combining " strong { "psychology-driven practice" }
                    ", ergonomic awareness, multilingual support, community engagement, and fun \
                     story contexts, "
                    strong { "TypingStories" }
                    " helps learners turn daily exercises into a rewarding lifelong skill. The \
                     platform proves that typing practice can be as entertaining as any casual \
                     game while offering real-world benefits for school, work, and creative \
                     hobbies."
                }
            }
        }
    }
}
