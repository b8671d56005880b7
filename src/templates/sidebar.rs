//! Sidebar panels: tag list, usage statistics and the activity calendar.

use crate::calendar::CalendarCell;
use crate::models::{Statistics, Tag};
use crate::sanitize::html_escape;

pub const NO_DATA_PLACEHOLDER: &str = r#"<p class="no-data">No data</p>"#;

pub fn render_tags(tags: &[Tag]) -> String {
    let list = if tags.is_empty() {
        NO_DATA_PLACEHOLDER.to_string()
    } else {
        let items: String = tags
            .iter()
            .map(|tag| {
                let name = html_escape(&tag.name);
                format!(
                    r#"<li>
                    <a href="/search?tags={query}">{name}</a>
                    <form method="post" action="/tags/{id}/delete" onsubmit="return confirm('Delete this tag and every note that uses it?')">
                        <button type="submit" class="danger" title="Delete tag">&times;</button>
                    </form>
                </li>"#,
                    query = html_escape(&encode_query_value(&tag.name)),
                    name = name,
                    id = tag.id,
                )
            })
            .collect();
        format!(r#"<ul class="tag-list">{items}</ul>"#)
    };

    format!(
        r#"<section class="tags">
            <h3>Tags</h3>
            {list}
            <form class="add-tag" method="post" action="/tags">
                <input type="text" name="name" placeholder="New tag">
                <button type="submit">Add</button>
            </form>
        </section>"#
    )
}

pub fn render_statistics(stats: Option<&Statistics>) -> String {
    let body = match stats {
        None => NO_DATA_PLACEHOLDER.to_string(),
        Some(stats) => format!(
            r#"<dl>
                <dt>Notes</dt><dd>{}</dd>
                <dt>Tags</dt><dd>{}</dd>
                <dt>Days tracked</dt><dd>{}</dd>
            </dl>"#,
            stats.total_notes, stats.total_tags, stats.days_tracked
        ),
    };
    format!(r#"<section class="stats"><h3>Statistics</h3>{body}</section>"#)
}

pub fn render_calendar(cells: &[CalendarCell]) -> String {
    let body = if cells.is_empty() {
        NO_DATA_PLACEHOLDER.to_string()
    } else {
        let days: String = cells
            .iter()
            .map(|cell| {
                let date = html_escape(&cell.date.format("%Y-%m-%d").to_string());
                let class = if cell.active { "day active" } else { "day" };
                format!(r#"<div class="{class}" title="{date}"></div>"#)
            })
            .collect();
        format!(r#"<div class="calendar">{days}</div>"#)
    };
    format!(r#"<section class="activity"><h3>Last 100 days</h3>{body}</section>"#)
}

fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
