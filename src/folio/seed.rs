//! Built-in posts the store falls back to when nothing usable is persisted.

use crate::model::Post;

struct SeedPost {
    id: &'static str,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    date: &'static str,
    read_time: &'static str,
    image: &'static str,
    tags: &'static [&'static str],
    slug: &'static str,
}

const SEED_AUTHOR: &str = "Shaan";

const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        id: "1",
        title: "Understanding Data Visualization Techniques",
        excerpt: "A comprehensive guide to choosing the right data visualization method for your dataset. Learn how to effectively communicate your data insights.",
        content: "<p>Data visualization is a powerful tool for understanding complex information at a glance. In this article, we'll explore various techniques for effectively visualizing data to communicate insights clearly.</p>",
        date: "April 15, 2023",
        read_time: "6 min read",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=2070",
        tags: &["Data Science", "Visualization", "Tutorial"],
        slug: "understanding-data-visualization-techniques",
    },
    SeedPost {
        id: "2",
        title: "Building a Full-Stack Application with Next.js and Node",
        excerpt: "Step by step tutorial on creating a modern web application using Next.js for the frontend and Node.js for the backend.",
        content: "<p>Building a full-stack application requires understanding both frontend and backend technologies. In this tutorial, we'll create a complete application using Next.js and Node.js.</p>",
        date: "March 22, 2023",
        read_time: "10 min read",
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?q=80&w=2070",
        tags: &["Web Development", "Next.js", "Node.js"],
        slug: "building-full-stack-application-nextjs-node",
    },
    SeedPost {
        id: "3",
        title: "Introduction to Machine Learning for Beginners",
        excerpt: "A beginner-friendly introduction to machine learning concepts and applications. Learn the basics of ML algorithms and how to get started.",
        content: "<p>Machine learning can seem intimidating for beginners, but with the right approach, anyone can understand the core concepts. This article provides a gentle introduction to machine learning fundamentals.</p>",
        date: "February 18, 2023",
        read_time: "8 min read",
        image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?q=80&w=2070",
        tags: &["Machine Learning", "AI", "Beginners"],
        slug: "introduction-machine-learning-beginners",
    },
];

/// The fixed seed set, in display order.
pub fn seed_posts() -> Vec<Post> {
    SEED_POSTS
        .iter()
        .map(|seed| Post {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            excerpt: seed.excerpt.to_string(),
            content: seed.content.to_string(),
            date: seed.date.to_string(),
            author: SEED_AUTHOR.to_string(),
            read_time: seed.read_time.to_string(),
            image: seed.image.to_string(),
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            slug: seed.slug.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_ordered_and_unique() {
        let ids: Vec<String> = seed_posts().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn seed_slugs_are_unique() {
        let posts = seed_posts();
        let slugs: HashSet<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), posts.len());
    }
}
