use idevgames_core::wire_date::{format_date, parse_date, parse_datetime};
use idevgames_core::{Icon, Snippet, SnippetFields, SnippetPage};
use jiff::civil::date;

fn blender_json() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "creatorId": 1,
        "taxonomy": "links",
        "hidden": false,
        "title": "www.blender.org: Blender 2.82 released",
        "icon": "blender.png",
        "sharedBy": "mysteriouspants",
        "sharedOn": "2020-02-14T00:00:00",
        "summary": "The Blender Foundation has released version 2.82.",
        "description": "",
        "href": "https://www.blender.org/press/blender-2-82-released/",
        "createdAt": "2020-02-15T18:30:00",
        "updatedAt": "2020-02-16T09:00:00.123456"
    })
}

#[test]
fn decodes_wire_snippet() {
    let snippet: Snippet = serde_json::from_value(blender_json()).unwrap();
    assert_eq!(snippet.id, 1);
    assert_eq!(snippet.creator_id, 1);
    assert_eq!(snippet.icon, Icon::Blender3D);
    assert_eq!(snippet.shared_on, date(2020, 2, 14));
    assert_eq!(snippet.created_at, date(2020, 2, 15).at(18, 30, 0, 0));
    assert_eq!(snippet.updated_at.date(), date(2020, 2, 16));
    assert!(snippet.shared_before_created());
}

#[test]
fn dates_survive_a_round_trip_without_drift() {
    for (y, m, d) in [(2020, 2, 14), (2021, 1, 23), (2019, 12, 31), (2024, 2, 29)] {
        let mut snippet: Snippet = serde_json::from_value(blender_json()).unwrap();
        snippet.shared_on = date(y, m, d);

        let encoded = serde_json::to_string(&snippet).unwrap();
        let decoded: Snippet = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.shared_on, date(y, m, d));
        assert_eq!(decoded, snippet);
    }
}

#[test]
fn writes_naive_datetimes() {
    let snippet: Snippet = serde_json::from_value(blender_json()).unwrap();
    let value = serde_json::to_value(snippet.fields()).unwrap();
    assert_eq!(value["sharedOn"], "2020-02-14T00:00:00");
    assert_eq!(value["icon"], "blender.png");
    assert_eq!(value["sharedBy"], "mysteriouspants");
    assert!(value.get("id").is_none());
    assert!(value.get("createdAt").is_none());
}

#[test]
fn accepts_bare_dates_and_utc_timestamps() {
    assert_eq!(parse_date("2021-01-23").unwrap(), date(2021, 1, 23));
    assert_eq!(parse_date("2021-01-23T00:00:00").unwrap(), date(2021, 1, 23));
    assert_eq!(parse_date("2021-01-23T23:59:59Z").unwrap(), date(2021, 1, 23));
    assert_eq!(
        parse_datetime(" 2020-02-14T08:15:00 ").unwrap(),
        date(2020, 2, 14).at(8, 15, 0, 0)
    );
    assert!(parse_date("sometime").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn formats_simple_dates() {
    assert_eq!(format_date(date(2020, 2, 14)), "2020-02-14");
    assert_eq!(format_date(date(2021, 1, 3)), "2021-01-03");
}

#[test]
fn unknown_icon_is_rejected() {
    let mut json = blender_json();
    json["icon"] = serde_json::json!("clippy.gif");
    assert!(serde_json::from_value::<Snippet>(json).is_err());
}

#[test]
fn apply_keeps_server_fields() {
    let mut snippet: Snippet = serde_json::from_value(blender_json()).unwrap();
    let mut fields = snippet.fields();
    fields.title = "Blender 2.83".to_string();
    fields.hidden = true;

    snippet.apply(fields);
    assert_eq!(snippet.title, "Blender 2.83");
    assert!(snippet.hidden);
    assert_eq!(snippet.id, 1);
    assert_eq!(snippet.created_at, date(2020, 2, 15).at(18, 30, 0, 0));
}

#[test]
fn blank_fields_are_hidden_with_default_icon() {
    let fields = SnippetFields::blank("udevgames", date(2021, 1, 23));
    assert!(fields.hidden);
    assert_eq!(fields.icon, Icon::Safari);
    assert_eq!(fields.taxonomy, "udevgames");
    assert_eq!(fields.shared_on, date(2021, 1, 23));
}

#[test]
fn decodes_page_result() {
    let page: SnippetPage = serde_json::from_value(serde_json::json!({
        "snippets": [blender_json()],
        "currentPage": 0,
        "totalPages": 3
    }))
    .unwrap();
    assert_eq!(page.snippets.len(), 1);
    assert_eq!(page.pager().pages, vec![0, 1, 2]);
}
