//! Static page content: the posts list and the home page cards.

use serde::Serialize;

/// A blog post teaser on the posts page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Post {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub tags: &'static [&'static str],
}

/// A link card on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub date: &'static str,
    pub tags: &'static [&'static str],
}

const POSTS: &[Post] = &[
    Post {
        title: "Getting Started with Rsbuild",
        excerpt: "A comprehensive guide to building React applications with Rsbuild, featuring fast development and optimized production builds.",
        date: "2025-12-11",
        tags: &["Rsbuild", "React", "Webpack"],
    },
    Post {
        title: "Teek Theme Design Philosophy",
        excerpt: "The minimalist design approach behind the Teek theme, focusing on readability and clean aesthetics.",
        date: "2025-12-10",
        tags: &["Design", "Theme", "Minimalism"],
    },
    Post {
        title: "Modern React Development Practices",
        excerpt: "Best practices for building scalable and maintainable React applications in 2025.",
        date: "2025-12-09",
        tags: &["React", "Best Practices", "Development"],
    },
    Post {
        title: "CSS Grid Mastery",
        excerpt: "Advanced techniques for creating responsive layouts with CSS Grid.",
        date: "2025-12-08",
        tags: &["CSS", "Grid", "Layout"],
    },
    Post {
        title: "TypeScript for React Developers",
        excerpt: "How to leverage TypeScript to build type-safe React applications.",
        date: "2025-12-07",
        tags: &["TypeScript", "React", "Type Safety"],
    },
    Post {
        title: "Optimizing React Performance",
        excerpt: "Proven strategies to make your React applications faster and more efficient.",
        date: "2025-12-06",
        tags: &["React", "Performance", "Optimization"],
    },
];

const CARDS: &[Card] = &[
    Card {
        id: "card-1",
        title: "React",
        description: "A JavaScript library for building user interfaces.",
        link: "https://reactjs.org/",
        date: "2025-12-11",
        tags: &["JavaScript", "Library", "Frontend"],
    },
    Card {
        id: "card-2",
        title: "TypeScript",
        description: "A superset of JavaScript that adds static typing.",
        link: "https://www.typescriptlang.org/",
        date: "2025-12-12",
        tags: &["JavaScript", "Superset", "Static Typing"],
    },
    Card {
        id: "card-3",
        title: "Next.js",
        description: "A React framework for server-rendered applications.",
        link: "https://nextjs.org/",
        date: "2025-12-13",
        tags: &["React", "Framework", "Server Rendering"],
    },
];

/// Posts, newest first.
pub fn posts() -> &'static [Post] {
    POSTS
}

/// Home page cards, in display order.
pub fn cards() -> &'static [Card] {
    CARDS
}
