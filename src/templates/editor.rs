//! Note form with a rich-text editing surface.
//!
//! The editor shows sanitized markup. The raw stored content travels in a
//! hidden field and is only replaced when the user actually edits, so loading
//! a note for edit and saving it untouched keeps the content byte-for-byte.

use crate::form::{FormMode, FormatCommand, NoteForm};
use crate::sanitize::{html_escape, sanitize_html};

fn toolbar() -> String {
    FormatCommand::ALL
        .iter()
        .map(|cmd| {
            format!(
                r#"<button type="button" data-command="{command}" title="{title}">{label}</button>"#,
                command = cmd.browser_command(),
                title = cmd.title(),
                label = html_escape(cmd.label()),
            )
        })
        .collect()
}

pub fn render_note_form(form: &NoteForm) -> String {
    let cancel = match form.mode() {
        FormMode::Creating => String::new(),
        FormMode::Editing(_) => r#"<form method="post" action="/notes/cancel">
                    <button type="submit">Cancel</button>
                </form>"#
            .to_string(),
    };
    let submit_label = match form.mode() {
        FormMode::Creating => "Save",
        FormMode::Editing(_) => "Update",
    };

    format!(
        r#"<section class="note-form-section">
            <h2>{heading}</h2>
            <form id="noteForm" method="post" action="/notes">
                <div class="toolbar">{toolbar}</div>
                <div id="content" class="editor" contenteditable="true">{display}</div>
                <textarea id="contentField" name="content" hidden>{raw}</textarea>
                <input type="text" id="tags" name="tags" placeholder="Tags, separated by , or 、" value="{tags}">
            </form>
            <div class="form-actions">
                <button type="submit" form="noteForm">{submit_label}</button>
                {cancel}
            </div>
        </section>
        <script>
        (function() {{
            const editor = document.getElementById('content');
            const field = document.getElementById('contentField');
            let dirty = false;
            editor.addEventListener('input', () => {{ dirty = true; }});
            document.querySelectorAll('.toolbar button').forEach(btn => {{
                btn.addEventListener('click', () => {{
                    document.execCommand(btn.dataset.command, false, null);
                    dirty = true;
                    editor.focus();
                }});
            }});
            document.getElementById('noteForm').addEventListener('submit', () => {{
                if (dirty) field.value = editor.innerHTML;
            }});
        }})();
        </script>"#,
        heading = form.heading(),
        toolbar = toolbar(),
        display = sanitize_html(form.content()),
        raw = html_escape(form.content()),
        tags = html_escape(form.tags()),
        submit_label = submit_label,
        cancel = cancel,
    )
}
