//! # CLI Templates
//!
//! Minijinja templates for terminal output. Layout math (widths, truncation,
//! padding) is done in Rust; templates pick styles and structure.
//!
//! Line breaks are explicit (`{{ "\n" -}}`) so the template source can stay
//! readable without leaking its own newlines into the output. Where a style
//! depends on state, Rust passes the style name in rather than branching here.

pub const LIST_TEMPLATE: &str = r#"
{%- if empty -%}
{{ empty_message | style("muted") }}{{ "\n" -}}
{%- else -%}
{%- for card in cards -%}
{%- if not loop.first %}{{ "\n" }}{% endif -%}
{{ card.index | style("index") }}{{ card.title | style("title") }}{{ card.padding }}{{ card.time_ago | style("time") }}{{ "\n" -}}
{{ card.indent }}{{ card.preview | style("preview") }}{{ "\n" -}}
{{ card.indent }}{% for tag in card.tags %}{{ tag | style("tag") }}{% if not loop.last %} {% endif %}{% endfor %}{{ "\n" -}}
{{ card.indent }}{{ card.author | style("author") }}{{ " · " | style("muted") }}{{ card.read_time }} min read{{ " · " | style("muted") }}{{ card.date | style("muted") }}{{ "\n" -}}
{%- endfor -%}
{%- endif -%}
"#;

pub const DETAIL_TEMPLATE: &str = r#"
{%- for post in posts -%}
{%- if not loop.first %}{{ "\n" ~ rule ~ "\n\n" }}{% endif -%}
{% for tag in post.tags %}{{ tag | style("tag") }}{% if not loop.last %} {% endif %}{% endfor %}{{ "\n\n" -}}
{{ post.title | style("detail_title") }}{{ "\n" -}}
{{ post.date | style("muted") }}{{ " · " | style("muted") }}{{ post.read_time }} min read{{ "\n" -}}
{{ rule | style("muted") }}{{ "\n\n" -}}
{{ post.body }}{{ "\n" -}}
{%- if post.author -%}
{{ "\n" }}{{ rule | style("muted") }}{{ "\n" -}}
{{ post.author.badge | style("avatar") }} {{ post.author.name | style("author") }} {{ post.author.handle | style("muted") }}{{ "\n" -}}
{{ "    " }}{{ post.author.email | style("muted") }}{{ "\n" -}}
{%- endif -%}
{%- endfor -%}
"#;

pub const TAGS_TEMPLATE: &str = r#"
{{- "Filter by Tag" | style("heading") }}{{ "\n" -}}
{%- for tag in tags -%}
{{ "  " ~ tag.marker ~ " " }}{{ tag.name | style(tag.style) }}{{ "\n" -}}
{%- endfor -%}
"#;

pub const TEXT_LIST_TEMPLATE: &str = r#"
{%- if lines -%}
{%- for line in lines -%}
{{ line }}{{ "\n" -}}
{%- endfor -%}
{%- else -%}
{{ empty_message | style("muted") }}{{ "\n" -}}
{%- endif -%}
"#;

pub const MESSAGES_TEMPLATE: &str = r#"
{%- for msg in messages -%}
{{ msg.content | style(msg.style) }}{{ "\n" -}}
{%- endfor -%}
"#;
