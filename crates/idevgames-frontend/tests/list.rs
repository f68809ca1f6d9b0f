mod support;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use idevgames_frontend::list::{FetchOutcome, ListFooter, ListParams, ListState, SnippetListView};

use support::StubApi;

fn view(api: &Arc<StubApi>, footer: ListFooter) -> SnippetListView {
    SnippetListView::new(api.clone(), footer)
}

#[tokio::test]
async fn starts_loading_without_fetching() {
    let api = Arc::new(StubApi::with_one_link());
    let list = view(&api, ListFooter::Pager);

    assert_eq!(list.state().await, ListState::Loading);
    assert_eq!(list.params().await, None);
    assert_eq!(list.pager().await, None);
    assert_eq!(api.list_calls(), 0);
}

#[tokio::test]
async fn single_item_is_shown_on_first_page() {
    let api = Arc::new(StubApi::with_one_link());
    let list = view(&api, ListFooter::Pager);

    let outcome = list.set_params(ListParams::new("links", 0, false)).await;
    assert_eq!(outcome, FetchOutcome::Applied);

    let ListState::Loaded(page) = list.state().await else {
        panic!("expected a loaded page");
    };
    assert_eq!(page.current_page, 0);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.snippets.len(), 1);
    assert_eq!(page.snippets[0].title, "Blender 2.82 released");
}

#[tokio::test]
async fn identical_params_do_not_refetch() {
    let api = Arc::new(StubApi::with_one_link());
    let list = view(&api, ListFooter::Pager);

    list.set_params(ListParams::first_page("links")).await;
    let outcome = list.set_params(ListParams::new("links", 0, false)).await;

    assert_eq!(outcome, FetchOutcome::Unchanged);
    assert_eq!(api.list_calls(), 1);
}

#[tokio::test]
async fn changing_any_param_refetches() {
    let api = Arc::new(StubApi::with_links(12));
    let list = view(&api, ListFooter::Pager);

    list.set_params(ListParams::new("links", 0, false)).await;
    list.set_params(ListParams::new("links", 0, true)).await;
    list.set_params(ListParams::new("links", 1, true)).await;
    list.set_params(ListParams::new("udevgames", 1, true)).await;

    assert_eq!(api.list_calls(), 4);
}

#[tokio::test]
async fn go_to_page_keeps_taxonomy() {
    let api = Arc::new(StubApi::with_links(12));
    let list = view(&api, ListFooter::Pager);

    assert_eq!(list.go_to_page(1).await, FetchOutcome::Unchanged);

    list.set_params(ListParams::first_page("links")).await;
    list.go_to_page(2).await;

    assert_eq!(list.params().await, Some(ListParams::new("links", 2, false)));
    let ListState::Loaded(page) = list.state().await else {
        panic!("expected a loaded page");
    };
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.snippets.len(), 2);

    let pager = list.pager().await.unwrap();
    assert_eq!(pager.pages, vec![0, 1, 2]);
    assert!(pager.is_current(2));
}

#[tokio::test]
async fn stale_first_page_does_not_overwrite_second() {
    let (api, _gate) = StubApi::with_links(7).gated();
    let api = Arc::new(api);
    let list = view(&api, ListFooter::Pager);

    let (first, second) = tokio::join!(
        list.set_params(ListParams::new("links", 0, false)),
        list.set_params(ListParams::new("links", 1, false)),
    );

    assert_eq!(first, FetchOutcome::Superseded);
    assert_eq!(second, FetchOutcome::Applied);
    assert_eq!(api.list_calls(), 2);

    let ListState::Loaded(page) = list.state().await else {
        panic!("expected a loaded page");
    };
    assert_eq!(page.current_page, 1);
    assert_eq!(page.snippets.len(), 2);
    assert_eq!(list.params().await, Some(ListParams::new("links", 1, false)));
}

#[tokio::test]
async fn failure_is_exposed_and_retry_recovers() {
    let api = Arc::new(StubApi::with_one_link());
    api.fail_lists.store(true, Ordering::SeqCst);
    let list = view(&api, ListFooter::Pager);

    list.set_params(ListParams::first_page("links")).await;
    let ListState::Failed(message) = list.state().await else {
        panic!("expected a failure");
    };
    assert!(message.contains("500"), "{message}");
    assert_eq!(list.pager().await, None);

    api.fail_lists.store(false, Ordering::SeqCst);
    assert_eq!(list.retry().await, FetchOutcome::Applied);

    let ListState::Loaded(page) = list.state().await else {
        panic!("expected retry to load");
    };
    assert_eq!(page.snippets.len(), 1);
    assert_eq!(api.list_calls(), 2);
}

#[tokio::test]
async fn retry_without_params_does_nothing() {
    let api = Arc::new(StubApi::with_one_link());
    let list = view(&api, ListFooter::MoreLink);

    assert_eq!(list.retry().await, FetchOutcome::Unchanged);
    assert_eq!(api.list_calls(), 0);
}

#[tokio::test]
async fn more_link_lists_have_no_pager() {
    let api = Arc::new(StubApi::with_one_link());
    let list = view(&api, ListFooter::MoreLink);

    list.set_params(ListParams::first_page("links")).await;

    assert_eq!(list.footer(), ListFooter::MoreLink);
    assert!(matches!(list.state().await, ListState::Loaded(_)));
    assert_eq!(list.pager().await, None);
}

#[tokio::test]
async fn hidden_snippets_need_show_hidden() {
    let api = Arc::new(StubApi::with_one_link());
    api.insert(support::fields("links", "Draft", true));
    let list = view(&api, ListFooter::Pager);

    list.set_params(ListParams::new("links", 0, false)).await;
    let ListState::Loaded(page) = list.state().await else {
        panic!("expected a loaded page");
    };
    assert_eq!(page.snippets.len(), 1);

    list.set_params(ListParams::new("links", 0, true)).await;
    let ListState::Loaded(page) = list.state().await else {
        panic!("expected a loaded page");
    };
    assert_eq!(page.snippets.len(), 2);
}

#[tokio::test]
async fn adopts_page_served_by_server() {
    let api = Arc::new(StubApi::with_links(7));
    let list = view(&api, ListFooter::Pager);

    list.set_params(ListParams::new("links", 9, false)).await;

    let ListState::Loaded(page) = list.state().await else {
        panic!("expected a loaded page");
    };
    assert_eq!(page.current_page, 1);
    assert_eq!(list.params().await, Some(ListParams::new("links", 1, false)));
    assert!(list.pager().await.unwrap().is_current(1));

    assert_eq!(list.go_to_page(1).await, FetchOutcome::Unchanged);
    assert_eq!(api.list_calls(), 1);
}
