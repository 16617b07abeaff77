use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    rating: &'static str,
}

struct Stat {
    number: &'static str,
    label: &'static str,
}

static FEATURES: [Feature; 6] = [
    Feature {
        title: "Interactive Code Examples",
        description: "Practice with real JavaScript code snippets and see live examples for every concept.",
    },
    Feature {
        title: "Comprehensive Topics",
        description: "Cover all essential JavaScript topics from basics to advanced concepts like closures and async programming.",
    },
    Feature {
        title: "Interview-Focused",
        description: "Questions curated from real technical interviews at top tech companies.",
    },
    Feature {
        title: "Progress Tracking",
        description: "Track your learning progress and identify areas that need more practice.",
    },
    Feature {
        title: "Difficulty Levels",
        description: "Questions organized by difficulty from beginner to expert level.",
    },
    Feature {
        title: "Quick Practice",
        description: "Jump into practice sessions with randomized questions for efficient learning.",
    },
];

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Frontend Developer at Google",
        content: "This platform helped me ace my JavaScript interviews. The code examples are incredibly helpful!",
        rating: "★★★★★",
    },
    Testimonial {
        name: "Mike Rodriguez",
        role: "Full Stack Engineer at Meta",
        content: "The best resource I've found for JavaScript interview prep. Comprehensive and well-organized.",
        rating: "★★★★★",
    },
    Testimonial {
        name: "Emily Johnson",
        role: "Senior Developer at Netflix",
        content: "Love the interactive approach. Made complex concepts like closures finally click for me.",
        rating: "★★★★★",
    },
];

static STATS: [Stat; 4] = [
    Stat { number: "500+", label: "Interview Questions" },
    Stat { number: "50+", label: "Code Examples" },
    Stat { number: "10K+", label: "Developers Helped" },
    Stat { number: "95%", label: "Success Rate" },
];

const CLOSURE_PREVIEW: &str = r"// Closure Example
function createCounter() {
  let count = 0;
  return function() {
    return ++count;
  };
}
const counter = createCounter();
console.log(counter()); // 1
console.log(counter()); // 2";

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page page--home",
            section { class: "hero",
                span { class: "hero__badge", "🚀 Trusted by 10,000+ developers" }
                h1 { class: "hero__title",
                    "Master JavaScript "
                    span { class: "hero__accent", "Interview Questions" }
                }
                p { class: "hero__lead",
                    "Comprehensive preparation platform with interactive code examples, detailed explanations, and real interview questions from top tech companies."
                }
                div { class: "hero__actions",
                    Link { class: "cta", to: Route::all_questions(), "Start Learning" }
                    Link { class: "cta cta--outline", to: Route::Practice {}, "Quick Practice" }
                }
            }

            section { class: "stats",
                for stat in STATS.iter() {
                    div { class: "stat",
                        div { class: "stat__number", "{stat.number}" }
                        div { class: "stat__label", "{stat.label}" }
                    }
                }
            }

            section { class: "features", id: "features",
                h2 { "Everything You Need to Succeed" }
                div { class: "grid",
                    for feature in FEATURES.iter() {
                        div { class: "card feature",
                            h3 { "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }
            }

            section { class: "code-preview",
                h2 { "Learn with Interactive Code Examples" }
                pre { code { "{CLOSURE_PREVIEW}" } }
            }

            section { class: "testimonials", id: "testimonials",
                h2 { "Loved by Developers Worldwide" }
                div { class: "grid",
                    for testimonial in TESTIMONIALS.iter() {
                        div { class: "card testimonial",
                            div { class: "testimonial__rating", "{testimonial.rating}" }
                            p { "\"{testimonial.content}\"" }
                            div { class: "testimonial__name", "{testimonial.name}" }
                            div { class: "testimonial__role", "{testimonial.role}" }
                        }
                    }
                }
            }

            section { class: "closing",
                h2 { "Ready to Ace Your Next Interview?" }
                div { class: "hero__actions",
                    Link { class: "cta", to: Route::all_questions(), "Start Your Journey" }
                    Link { class: "cta cta--outline", to: Route::Topics {}, "Browse Topics" }
                }
            }
        }
    }
}
