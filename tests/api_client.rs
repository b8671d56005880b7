//! Backend client and controllers against the in-process backend.

mod common;

use pretty_assertions::assert_eq;

use tagnote::api::ApiClient;
use tagnote::templates::render_notes;
use tagnote::{
    ClientError, FormMode, Listing, MarkupSurface, NoteForm, SubmitTarget,
};

#[tokio::test]
async fn test_create_render_and_edit_round_trip() {
    let (store, config) = common::start_backend().await;
    let api = ApiClient::new(&config).unwrap();

    let raw = "<script>x</script><b>hi</b>";
    let form = NoteForm::new();
    let submission = form
        .prepare(&MarkupSurface::from_html(raw), "x,y")
        .unwrap();
    assert_eq!(submission.target, SubmitTarget::Create);
    let created = api.create_note(&submission.payload).await.unwrap();
    assert_eq!(created.tags, vec!["x", "y"]);

    let listing = Listing::new(config.page_size);
    let page = api
        .list_notes(&listing.current().build_query())
        .await
        .unwrap();
    let html = render_notes(&page.content);
    assert!(html.contains(r#"<div class="note-content"><b>hi</b></div>"#));
    assert!(!html.contains("script"));

    let fetched = api.get_note(created.id).await.unwrap();
    let mut form = NoteForm::new();
    form.begin_edit(&fetched);
    assert_eq!(form.mode(), FormMode::Editing(created.id));
    assert_eq!(form.content(), raw);
    assert_eq!(store.lock().unwrap().notes[0].content, raw);
}

#[tokio::test]
async fn test_update_targets_edited_note() {
    let (store, config) = common::start_backend().await;
    let id = store.lock().unwrap().insert("old", &["a"]);
    let api = ApiClient::new(&config).unwrap();

    let mut form = NoteForm::new();
    form.begin_edit(&api.get_note(id).await.unwrap());
    let submission = form
        .prepare(&MarkupSurface::from_html("<b>new</b>"), "a、b")
        .unwrap();
    assert_eq!(submission.target, SubmitTarget::Update(id));

    let updated = api.update_note(id, &submission.payload).await.unwrap();
    assert_eq!(updated.content, "<b>new</b>");
    assert_eq!(updated.tags, vec!["a", "b"]);
    assert_eq!(store.lock().unwrap().notes.len(), 1);
}

#[tokio::test]
async fn test_pagination_and_tag_search() {
    let (store, config) = common::start_backend().await;
    {
        let mut store = store.lock().unwrap();
        for i in 0..12 {
            let tag = if i % 2 == 0 { "even" } else { "odd" };
            store.insert(&format!("note {i}"), &[tag]);
        }
    }
    let api = ApiClient::new(&config).unwrap();
    let mut listing = Listing::new(5);

    let candidate = listing.current().clone();
    let ticket = listing.issue();
    let first = api.list_notes(&candidate.build_query()).await.unwrap();
    assert!(listing.commit(ticket, candidate, &first));
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.content.len(), 5);
    assert!(first.has_next);
    assert!(!first.has_previous);

    let last = listing.current().at_page(2).unwrap();
    let ticket = listing.issue();
    let page = api.list_notes(&last.build_query()).await.unwrap();
    assert!(listing.commit(ticket, last, &page));
    assert_eq!(page.content.len(), 2);
    assert_eq!(listing.current().range_label(page.total_elements), "11 to 12 of 12");
    assert!(listing.current().at_page(3).is_none());

    let filtered = listing.current().with_tag_filter("even");
    assert_eq!(filtered.page, 0);
    let ticket = listing.issue();
    let page = api.list_notes(&filtered.build_query()).await.unwrap();
    assert!(listing.commit(ticket, filtered, &page));
    assert_eq!(page.total_elements, 6);
    assert!(page.content.iter().all(|n| n.tags == vec!["even"]));
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let (store, config) = common::start_backend().await;
    let api = ApiClient::new(&config).unwrap();

    let err = api.get_note(404).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status, .. } if status.as_u16() == 404));

    store.lock().unwrap().fail_listings = true;
    let listing = Listing::new(5);
    let err = api
        .list_notes(&listing.current().build_query())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Status { .. }));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let config = tagnote::ClientConfig::for_api_base(&format!("http://{addr}/api")).unwrap();
    let api = ApiClient::new(&config).unwrap();
    assert!(matches!(
        api.statistics().await,
        Err(ClientError::Transport(_))
    ));
}

#[tokio::test]
async fn test_tags_statistics_and_dates() {
    let (store, config) = common::start_backend().await;
    store.lock().unwrap().insert("one", &["work", "home"]);
    store.lock().unwrap().insert("two", &["home"]);
    let api = ApiClient::new(&config).unwrap();

    let created = api.create_tag("misc").await.unwrap();
    let tags = api.list_tags().await.unwrap();
    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["work", "home", "misc"]);

    let stats = api.statistics().await.unwrap();
    assert_eq!(stats.total_notes, 2);
    assert_eq!(stats.total_tags, 3);

    let dates = tagnote::parse_activity_dates(api.note_dates().await.unwrap());
    assert_eq!(dates.len(), 1);

    api.delete_tag(created.id).await.unwrap();
    let home = tags.iter().find(|t| t.name == "home").unwrap();
    api.delete_tag(home.id).await.unwrap();
    assert!(store.lock().unwrap().notes.is_empty());
}
