use colored::Colorize;
use folio::api::{CmdMessage, MessageLevel};
use folio::config::FolioConfig;
use folio::error::Result;
use folio::model::{strip_html, Post, DEFAULT_FALLBACK_IMAGE};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DEFAULT_LINE_WIDTH: usize = 100;
const MAX_LINE_WIDTH: usize = 120;
const DATE_WIDTH: usize = 20;
const ID_WIDTH: usize = 15;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_json(posts: &[Post]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(posts)?);
    Ok(())
}

pub(super) fn print_post_list(posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }

    let line_width = line_width();
    for (i, post) in posts.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);
        let id_str = format!("{:<width$}", post.id, width = ID_WIDTH);
        let date_str = format!("{:>width$}", post.date, width = DATE_WIDTH);

        let fixed = idx_str.width() + ID_WIDTH + 1 + DATE_WIDTH;
        let available = line_width.saturating_sub(fixed);
        let title = truncate_to_width(&post.title, available);
        let padding = available.saturating_sub(title.width());

        println!(
            "{}{} {}{}{}",
            idx_str.yellow(),
            id_str.dimmed(),
            title,
            " ".repeat(padding),
            date_str.dimmed()
        );
    }
}

pub(super) fn print_full_post(post: &Post) {
    println!("{}", post.title.bold());
    println!(
        "{}",
        format!(
            "{} · {} · {} · id {}",
            post.author, post.date, post.read_time, post.id
        )
        .dimmed()
    );
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{}", tags.join(" ").cyan());
    }
    println!("--------------------------------");
    if !post.excerpt.is_empty() {
        println!("{}", post.excerpt.italic());
        println!();
    }
    println!("{}", strip_html(&post.content).trim());
    println!();
    println!(
        "{} {}",
        "image:".dimmed(),
        post.image_or(DEFAULT_FALLBACK_IMAGE)
    );
}

pub(super) fn print_config(config: &FolioConfig) {
    for key in FolioConfig::KEYS {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn line_width() -> usize {
    let term = console::Term::stdout();
    if !term.is_term() {
        return DEFAULT_LINE_WIDTH;
    }
    let (_rows, cols) = term.size();
    (cols as usize).clamp(40, MAX_LINE_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
