//! Rendering for the terminal client.
//!
//! Every output shape is a minijinja template (see `templates.rs`) styled
//! through a `style` filter backed by [`BLOG_THEME`]. Data structs here are
//! the template contexts.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they
//! require unicode-aware measuring that templates cannot express.

use super::styles::{names, Theme, BLOG_THEME};
use super::templates::{
    DETAIL_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, TAGS_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use blogview::api::{CmdMessage, MessageLevel};
use blogview::config::BlogConfig;
use blogview::helpers::{format_date, format_date_short, truncate_text};
use blogview::model::EnrichedPost;
use chrono::{DateTime, Utc};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const INDEX_WIDTH: usize = 6;
const RULE_WIDTH: usize = 60;
const ALL_TAGS: &str = "All";
const SELECTED_MARKER: &str = "●";
const UNSELECTED_MARKER: &str = "○";

#[derive(Serialize)]
struct CardData {
    index: String,
    title: String,
    padding: String,
    time_ago: String,
    indent: String,
    preview: String,
    tags: Vec<String>,
    author: String,
    read_time: u32,
    date: String,
}

#[derive(Serialize)]
struct ListData {
    cards: Vec<CardData>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct AuthorCardData {
    badge: String,
    name: String,
    handle: String,
    email: String,
}

#[derive(Serialize)]
struct DetailPostData {
    title: String,
    tags: Vec<String>,
    date: String,
    read_time: u32,
    body: String,
    author: Option<AuthorCardData>,
}

#[derive(Serialize)]
struct DetailData {
    posts: Vec<DetailPostData>,
    rule: String,
}

#[derive(Serialize)]
struct TagData {
    name: String,
    marker: String,
    style: String,
}

#[derive(Serialize)]
struct TagsData {
    tags: Vec<TagData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders `template` against `data`, applying theme styles through the
/// `style` filter. With `use_color` off the filter passes text through.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_style_filter(&mut env, theme.clone(), use_color);

    env.add_template_owned("_inline".to_string(), template.to_string())?;
    let tmpl = env.get_template("_inline")?;
    tmpl.render(data)
}

fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
}

/// Post cards for the listing view.
pub fn render_post_list(
    posts: &[EnrichedPost],
    empty_message: &str,
    preview_length: usize,
    use_color: bool,
) -> String {
    let cards: Vec<CardData> = posts
        .iter()
        .map(|post| card_for(post, preview_length))
        .collect();

    let data = ListData {
        empty: cards.is_empty(),
        cards,
        empty_message: empty_message.to_string(),
    };

    render_with_color(LIST_TEMPLATE, &data, &BLOG_THEME, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

fn card_for(post: &EnrichedPost, preview_length: usize) -> CardData {
    let index = format!("{:<width$}", format!("#{}", post.id()), width = INDEX_WIDTH);
    let title_width = LINE_WIDTH - INDEX_WIDTH - TIME_WIDTH - 2;
    let title = truncate_to_width(post.title(), title_width);
    let used = index.width() + title.width();
    let padding = " ".repeat(LINE_WIDTH.saturating_sub(used + TIME_WIDTH));

    CardData {
        index,
        title,
        padding,
        time_ago: format_time_ago(post.created_at),
        indent: " ".repeat(INDEX_WIDTH),
        preview: truncate_text(&flatten(post.body()), preview_length),
        tags: post.tags.iter().map(|t| format!("[{}]", t)).collect(),
        author: post.author_name().to_string(),
        read_time: post.display_read_time(),
        date: format_date_short(post.created_at),
    }
}

/// Full article view, one block per post.
pub fn render_post_detail(posts: &[EnrichedPost], use_color: bool) -> String {
    let data = DetailData {
        posts: posts
            .iter()
            .map(|post| DetailPostData {
                title: post.title().to_string(),
                tags: post.tags.iter().map(|t| format!("[{}]", t)).collect(),
                date: format_date(post.created_at),
                read_time: post.display_read_time(),
                body: post.body().to_string(),
                author: post.author.as_ref().map(|a| AuthorCardData {
                    badge: format!("({})", a.initial()),
                    name: a.name.clone(),
                    handle: format!("@{}", a.username),
                    email: a.email.clone(),
                }),
            })
            .collect(),
        rule: "─".repeat(RULE_WIDTH),
    };

    render_with_color(DETAIL_TEMPLATE, &data, &BLOG_THEME, use_color).unwrap_or_else(|_| {
        posts
            .iter()
            .map(|p| format!("{}\n\n{}\n", p.title(), p.body()))
            .collect()
    })
}

/// The tag picker: "All" followed by every known tag, with the active one marked.
pub fn render_tags(tags: &[String], selected: Option<&str>, use_color: bool) -> String {
    let entry = |name: &str, is_selected: bool| TagData {
        name: name.to_string(),
        marker: if is_selected {
            SELECTED_MARKER
        } else {
            UNSELECTED_MARKER
        }
        .to_string(),
        style: if is_selected {
            names::TAG_SELECTED
        } else {
            names::TAG
        }
        .to_string(),
    };

    let mut entries = vec![entry(ALL_TAGS, selected.is_none())];
    entries.extend(
        tags.iter()
            .map(|tag| entry(tag, selected == Some(tag.as_str()))),
    );

    let data = TagsData { tags: entries };
    render_with_color(TAGS_TEMPLATE, &data, &BLOG_THEME, use_color).unwrap_or_else(|_| {
        std::iter::once(ALL_TAGS)
            .chain(tags.iter().map(String::as_str))
            .map(|t| format!("{}\n", t))
            .collect()
    })
}

pub fn render_config(config: &BlogConfig, use_color: bool) -> String {
    let lines: Vec<String> = config
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{} = {}", key, value))
        .collect();
    render_text_list(&lines, "No configuration.", use_color)
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };
    render_with_color(TEXT_LIST_TEMPLATE, &data, &BLOG_THEME, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render_with_color(MESSAGES_TEMPLATE, &data, &BLOG_THEME, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn flatten(body: &str) -> String {
    body.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogview::model::{Author, Post};
    use chrono::Duration;

    fn make_post(id: u64, title: &str, body: &str, author: Option<Author>) -> EnrichedPost {
        EnrichedPost {
            post: Post::new(id, 1, title, body),
            author,
            tags: vec!["React".to_string(), "Web Dev".to_string()],
            read_time: 1,
            created_at: Utc::now() - Duration::days(3),
        }
    }

    fn leanne() -> Author {
        Author::new(1, "Leanne Graham", "Sincere@april.biz", "Bret")
    }

    #[test]
    fn empty_list_shows_message() {
        let output = render_post_list(&[], "Nothing here.", 150, false);
        assert_eq!(output, "Nothing here.\n");
    }

    #[test]
    fn list_card_contains_summary_fields() {
        let post = make_post(7, "Hooks in depth", "useState hooks", Some(leanne()));
        let output = render_post_list(&[post], "", 150, false);

        assert!(output.contains("#7"));
        assert!(output.contains("Hooks in depth"));
        assert!(output.contains("useState hooks"));
        assert!(output.contains("[React] [Web Dev]"));
        assert!(output.contains("Leanne Graham"));
        assert!(output.contains("1 min read"));
        assert!(output.contains("3 days ago"));
    }

    #[test]
    fn list_card_falls_back_to_anonymous() {
        let post = make_post(1, "Untitled", "body", None);
        let output = render_post_list(&[post], "", 150, false);
        assert!(output.contains("Anonymous"));
    }

    #[test]
    fn list_preview_is_truncated_and_single_line() {
        let post = make_post(1, "Long", "alpha beta\ngamma delta epsilon", None);
        let output = render_post_list(&[post], "", 16, false);
        assert!(output.contains("alpha beta gamma..."));
        assert!(!output.contains("epsilon"));
    }

    #[test]
    fn list_separates_cards_with_blank_line() {
        let posts = vec![
            make_post(1, "First", "a", None),
            make_post(2, "Second", "b", None),
        ];
        let output = render_post_list(&posts, "", 150, false);
        assert!(output.contains("\n\n#2"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn long_titles_fit_the_line() {
        let title = "x".repeat(200);
        let post = make_post(1, &title, "b", None);
        let output = render_post_list(&[post], "", 150, false);
        let first = output.lines().next().unwrap();
        assert_eq!(first.width(), LINE_WIDTH);
        assert!(first.contains('…'));
    }

    #[test]
    fn color_output_includes_ansi() {
        let post = make_post(1, "Styled", "b", None);
        let output = render_post_list(&[post], "", 150, true);
        assert!(output.contains("\u{1b}["));
    }

    #[test]
    fn detail_includes_body_and_author_card() {
        let post = make_post(2, "Guide", "Full body text here.", Some(leanne()));
        let output = render_post_detail(&[post], false);

        assert!(output.starts_with("[React] [Web Dev]\n\nGuide\n"));
        assert!(output.contains(" · 1 min read"));
        assert!(output.contains("Full body text here.\n"));
        assert!(output.contains("(L) Leanne Graham @Bret\n"));
        assert!(output.contains("Sincere@april.biz"));
    }

    #[test]
    fn detail_without_author_has_no_card() {
        let post = make_post(2, "Guide", "Body", None);
        let output = render_post_detail(&[post], false);
        assert!(!output.contains("Anonymous"));
        assert!(output.ends_with("Body\n"));
    }

    #[test]
    fn tags_mark_all_when_nothing_selected() {
        let tags = vec!["React".to_string(), "Testing".to_string()];
        let output = render_tags(&tags, None, false);
        assert_eq!(output, "Filter by Tag\n  ● All\n  ○ React\n  ○ Testing\n");
    }

    #[test]
    fn tags_mark_selected_tag() {
        let tags = vec!["React".to_string(), "Testing".to_string()];
        let output = render_tags(&tags, Some("Testing"), false);
        assert!(output.contains("  ○ All\n"));
        assert!(output.contains("  ● Testing\n"));
    }

    #[test]
    fn config_lists_every_key() {
        let output = render_config(&BlogConfig::default(), false);
        assert!(output.contains("api-url = https://jsonplaceholder.typicode.com"));
        assert!(output.contains("words-per-minute = 200"));
        assert!(output.contains("preview-length = 150"));
    }

    #[test]
    fn messages_render_one_per_line() {
        let messages = vec![CmdMessage::success("Saved"), CmdMessage::error("Broken")];
        assert_eq!(render_messages(&messages, false), "Saved\nBroken\n");
        assert_eq!(render_messages(&[], false), "");
    }

    #[test]
    fn time_ago_is_right_aligned() {
        let output = format_time_ago(Utc::now() - Duration::hours(2));
        assert_eq!(output.len(), TIME_WIDTH);
        assert!(output.ends_with("2 hours ago"));
    }
}
