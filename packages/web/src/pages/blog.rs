//! Blog page

use dioxus::prelude::*;

struct Article {
    title: &'static str,
    summary: &'static str,
}

const ARTICLES: &[Article] = &[
    Article {
        title: "Writing a job post that gets read",
        summary: "Lead with the work, not the perks, and say what a great first month looks like.",
    },
    Article {
        title: "Preparing for your first interview",
        summary: "Research the team, bring questions, and practise talking through past projects.",
    },
    Article {
        title: "Remote, hybrid or on-site?",
        summary: "How to decide which arrangement suits you before you start applying.",
    },
];

/// Blog index with career and hiring articles
#[component]
pub fn Blog() -> Element {
    rsx! {
        section {
            class: "page",
            h1 { class: "page-title", "Blog" }
            div {
                class: "article-list",
                for post in ARTICLES {
                    article {
                        key: "{post.title}",
                        class: "article",
                        h2 { class: "article-title", "{post.title}" }
                        p { "{post.summary}" }
                    }
                }
            }
        }
    }
}
