//! CSS styles for the note client.
//!
//! Contains the main STYLE constant with all CSS for the web interface.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base01: #586e75;
    --base00: #657b83;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --accent: var(--base2);
    --active-day: #30cf79;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 1rem;
    display: grid;
    grid-template-columns: 1fr 260px;
    gap: 1.5rem;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

h1, h2, h3 { font-weight: 600; margin-bottom: 0.5em; color: var(--base01); }
h2 { font-size: 1.2rem; }
h3 { font-size: 1rem; }

.nav-bar {
    position: sticky;
    top: 0;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
    display: flex;
    gap: 1rem;
    align-items: center;
    flex-wrap: wrap;
    z-index: 100;
}
.nav-bar .spacer { flex: 1; }
.search-box { display: flex; gap: 0.25rem; }
.search-box input { padding: 0.25rem 0.5rem; border: 1px solid var(--border); border-radius: 4px; }

button, .btn {
    padding: 0.3rem 0.8rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--accent);
    color: var(--base01);
    cursor: pointer;
    font-size: 0.9rem;
}
button:hover, .btn:hover { border-color: var(--link); text-decoration: none; }
button.danger, .btn.danger { color: var(--red); }
.btn.disabled { opacity: 0.5; pointer-events: none; }

/* Note form */
.note-form-section { margin-bottom: 1.5rem; }
.toolbar { display: flex; gap: 0.25rem; margin-bottom: 0.25rem; }
.editor {
    min-height: 120px;
    padding: 0.5rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: white;
}
.note-form-section input[type=text] {
    width: 100%;
    margin: 0.5rem 0;
    padding: 0.3rem 0.5rem;
    border: 1px solid var(--border);
    border-radius: 4px;
}
.form-actions { display: flex; gap: 0.5rem; }
.form-actions form { display: inline; }

/* Notes */
.note-card {
    border: 1px solid var(--border);
    border-radius: 6px;
    padding: 0.75rem 1rem;
    margin-bottom: 0.75rem;
    background: white;
}
.note-content ol, .note-content ul { margin-left: 1.5rem; }
.note-meta { font-size: 0.8rem; color: var(--muted); display: flex; gap: 1rem; margin-top: 0.5rem; }
.note-tags { margin-top: 0.4rem; display: flex; gap: 0.3rem; flex-wrap: wrap; }
.tag {
    font-size: 0.75rem;
    padding: 0.1rem 0.5rem;
    border-radius: 10px;
    background: var(--accent);
}
.note-actions { margin-top: 0.5rem; display: flex; gap: 0.5rem; }
.note-actions form { display: inline; }
.no-notes, .no-data { color: var(--muted); font-style: italic; padding: 1rem 0; }

/* Pagination */
.pagination { display: flex; gap: 0.5rem; align-items: center; flex-wrap: wrap; margin: 1rem 0; }
.pagination-info { width: 100%; font-size: 0.85rem; color: var(--muted); }

/* Sidebar */
.sidebar section { margin-bottom: 1.5rem; }
.tag-list { list-style: none; }
.tag-list li { display: flex; justify-content: space-between; align-items: center; padding: 0.15rem 0; }
.tag-list form { display: inline; }
.tag-list button { padding: 0 0.4rem; font-size: 0.75rem; }
.add-tag { display: flex; gap: 0.25rem; margin-top: 0.5rem; }
.add-tag input { flex: 1; padding: 0.2rem 0.4rem; border: 1px solid var(--border); border-radius: 4px; }
.stats dl { display: grid; grid-template-columns: 1fr auto; gap: 0.2rem 1rem; }
.stats dd { font-weight: 600; text-align: right; }
.calendar { display: grid; grid-template-columns: repeat(10, 1fr); gap: 3px; }
.calendar .day { aspect-ratio: 1; border-radius: 2px; background: var(--border); }
.calendar .day.active { background: var(--active-day); }

/* Notices */
.toast {
    position: fixed;
    top: 20px;
    right: 20px;
    background: var(--active-day);
    color: white;
    padding: 15px 20px;
    border-radius: 6px;
    box-shadow: 0 4px 12px rgba(0,0,0,0.15);
    z-index: 1000;
    font-weight: 500;
    animation: toast-fade 3s forwards;
}
@keyframes toast-fade { 0%, 80% { opacity: 1; } 100% { opacity: 0; visibility: hidden; } }
.alert-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0,0,0,0.35);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1001;
}
.alert-overlay:target { display: none; }
.alert-dialog {
    background: white;
    border-radius: 6px;
    padding: 1.25rem 1.5rem;
    max-width: 420px;
    box-shadow: 0 4px 18px rgba(0,0,0,0.25);
}
.alert-dialog p { color: var(--red); margin-bottom: 1rem; }

@media (max-width: 800px) {
    .container { grid-template-columns: 1fr; }
}
"#;
