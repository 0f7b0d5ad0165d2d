use maud::{Markup, html};

pub fn longform() -> Markup {
    html! {
        section id="typingstories-longform" {
            div {
                h2 { "Boost Your Typing Skills While Enjoying Stories" }
                p {
                    strong { "TypingStories" }
                    " is more than just a typing test site. It blends "
                    strong { "interactive storytelling" } ", "
                    strong { "touch typing drills" } ", and "
                    strong { "creative writing prompts" }
                    " into a single platform that helps you type faster while having fun. \
                     Instead of dull repetitive words, you practice through "
                    strong { "meaningful sentences" }
                    " that hold your attention. This approach keeps learners engaged, whether \
                     they’re beginners discovering the keyboard or advanced users polishing \
                     their speed and accuracy."
                }
            }

            div {
                h3 { "Why Improving Typing Speed and Accuracy Matters" }
                ul {
                    li {
                        strong { "Productivity boost:" }
                        " Faster typing saves hours for students, professionals, and writers."
                    }
                    li {
                        strong { "Better focus:" }
                        " Touch typing lets your eyes stay on the screen and your thoughts on \
                         your ideas."
                    }
                    li {
                        strong { "Creative flow:" }
                        " The quicker your fingers keep up with your brain, the more fluid \
                         your writing."
                    }
                    li {
                        strong { "Competitive edge:" }
                        " High WPM (words per minute) is an advantage in data entry jobs, \
                         coding, and real-time communication."
                    }
                    li {
                        strong { "Accessibility:" }
                        " Practicing through stories motivates even reluctant learners and kids."
                    }
                }
            }

            div {
                h3 { "Ergonomic Tips for Healthy Typing" }
                p {
                    "Practicing typing for long sessions should never cause discomfort. Proper \
                     posture and ergonomics protect your wrists, shoulders, and back:"
                }
                ul {
                    li { "🪑 Sit with feet flat on the ground and elbows at 90 degrees." }
                    li {
                        "⌨️ Keep wrists straight, hovering slightly above the keyboard, not \
                         resting heavily."
                    }
                    li { "🖥️ Position the monitor at eye level to reduce neck strain." }
                    li {
                        "💡 Ensure good lighting to prevent eye fatigue during late-night \
                         practice sessions."
                    }
                    li { "⏱️ Take a 2-minute break every 20 minutes to stretch hands and fingers." }
                }
            }

            div {
                h3 { "Mastering Touch Typing Basics" }
                p {
                    "Learning to type without looking at the keyboard is the foundation of "
                    strong { "touch typing" } ". Focus on:"
                }
                ul {
                    li {
                        "Start with the " strong { "home row keys" }
                        " (ASDF JKL;), keeping fingers lightly anchored."
                    }
                    li {
                        "Memorize the " strong { "correct finger placement" }
                        " for each letter to reduce unnecessary movement."
                    }
                    li { "Use short typing stories and drills to reinforce muscle memory." }
                    li { "Track your WPM and accuracy weekly to see progress." }
                }
            }

            div {
                h3 { "How Gamified Story Practice Keeps You Motivated" }
                p {
                    "TypingStories uses " strong { "interactive narratives" }
                    " where each word typed advances a story scene. Gamification boosts \
                     motivation:"
                }
                ul {
                    li { "🏆 Score points for completing stories quickly and accurately." }
                    li {
                        "🎯 Progress through levels-fairy tales for beginners, mysteries for \
                         intermediate learners, sci-fi quests for pros."
                    }
                    li { "🎮 Unlock achievements and badges for consistent practice streaks." }
                    li { "📈 Visual charts help track typing speed improvements over time." }
                }
                p {
                    "This game-like structure keeps learners excited and encourages daily \
                     practice, which is key to building typing stamina."
                }
            }

            div {
                h3 { "Enhance Creativity with Writing Prompts" }
                p {
                    "Practicing with " strong { "creative writing prompts" }
                    " helps users not only type faster but also improve storytelling skills. \
                     Teachers often use writing prompts to encourage students to write \
                     paragraphs and essays, and TypingStories integrates them into typing \
                     sessions for dual benefits."
                }
                ul {
                    li { "✍️ Daily micro-fiction prompts spark imagination while improving rhythm." }
                    li {
                        "📝 Themed prompts such as sci-fi battles or fairy-tale endings keep \
                         practice fun."
                    }
                    li {
                        "🧠 Writing practice enhances vocabulary and critical thinking alongside \
                         typing skills."
                    }
                }
            }

            div {
                h3 { "Tips to Improve Accuracy Before Speed" }
                p {
                    "It’s better to type slower with fewer errors than to race ahead with \
                     mistakes. Accuracy builds the foundation for later speed increases:"
                }
                ul {
                    li { "👀 Keep your eyes on the screen, not the keyboard." }
                    li { "⌨️ Focus on finger memory to reduce missed keys." }
                    li { "🔁 Repeat tricky words or phrases until they become second nature." }
                    li {
                        "📊 Use accuracy charts to identify weak spots-like punctuation or \
                         numbers."
                    }
                    li { "🧘 Slow down during complex passages to maintain control." }
                }
            }

            div {
                h3 { "A Brief History of Typing and Keyboards" }
                p {
                    "The journey of typing began with the invention of mechanical typewriters \
                     in the late 19th century. Early typists practiced on manual QWERTY layouts \
                     that shaped modern keyboard standards. With the digital revolution, touch \
                     typing became essential for computers, smartphones, and workplace \
                     communication."
                }
                p {
                    "Understanding the origins of typing helps learners appreciate the progress \
                     from typewriters to ergonomic split keyboards and customizable key layouts \
                     like "
                    strong { "Dvorak" } " and " strong { "Colemak" }
                    ", often preferred by advanced typists for efficiency."
                }
            }

            div {
                h3 { "Choosing the Right Keyboard Setup" }
                p { "A comfortable keyboard setup can make a significant difference:" }
                ul {
                    li {
                        "⌨️ Opt for a keyboard with tactile feedback or mechanical switches for \
                         better control."
                    }
                    li { "💡 Ensure good backlighting for night practice sessions." }
                    li { "🖐️ Use wrist rests and adjustable stands to prevent strain." }
                    li {
                        "⚙️ Experiment with alternative layouts if you’re aiming for competitive \
                         typing speeds."
                    }
                }
            }

            div {
                h3 { "Typing Skills for Exams, Work & Careers" }
                p {
                    "Students benefit from typing speed when writing essays under timed \
                     conditions, while professionals save valuable minutes in email and \
                     documentation tasks. Careers in transcription, content writing, and data \
                     entry highly value strong typing skills. Competitive typists can even \
                     participate in online typing competitions and earn recognition for their \
                     WPM milestones."
                }
            }

            div {
                h3 { "Consistency Is Key to Improvement" }
                p {
                    "The fastest way to reach 80–100+ WPM is through "
                    strong { "short, consistent practice" }
                    " every day rather than rare marathon sessions. Using TypingStories’ \
                     streak trackers and daily goals helps learners develop a sustainable habit \
                     that leads to lasting progress."
                }
            }

            div {
                h3 { "Transform Your Typing Journey" }
                p {
                    "With " strong { "TypingStories" }
                    ", you’ll never have to endure boring drills again. By blending gamified \
                     stories, accurate touch typing drills, ergonomic guidance, and creative \
                     writing exercises, the platform makes typing practice enjoyable for all \
                     ages. Every story you complete takes you a step closer to mastering the \
                     keyboard while unlocking your inner storyteller."
                }
            }
        }
    }
}
