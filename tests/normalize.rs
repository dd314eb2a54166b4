use pretty_assertions::assert_eq;
use serde_json::json;

use bookscout::{
    normalize::*,
    openlib_schema::{
        AuthorDoc, SearchDoc, SearchResponse, SubjectResponse, SubjectWork, WikiSummary, WorkDoc,
    },
    types::{build_cover_url, Book, CoverRef, CoverSize, WorkAuthor},
};

fn search_doc(value: serde_json::Value) -> SearchDoc {
    serde_json::from_value(value).unwrap()
}

fn subject_work(value: serde_json::Value) -> SubjectWork {
    serde_json::from_value(value).unwrap()
}

#[test]
fn search_hit_dune() {
    let raw = search_doc(json!({
        "key": "/works/OL1W",
        "title": "Dune",
        "author_name": ["Frank Herbert"],
        "first_publish_year": 1965,
        "cover_i": 1,
        "subject": ["a", "b", "c", "d"]
    }));
    assert_eq!(
        normalize_search_hit(&raw),
        Book {
            work_key:      "OL1W".into(),
            title:         Some("Dune".into()),
            author:        Some("Frank Herbert".into()),
            year:          Some(1965),
            cover:         Some(CoverRef::Id(1)),
            edition_count: None,
            subjects:      vec!["a".into(), "b".into(), "c".into()],
        }
    );
}

#[test]
fn search_hit_scalar_author_and_string_cover() {
    let raw = search_doc(json!({
        "key": "OL2W",
        "author_name": "Ursula K. Le Guin",
        "cover_i": "abc",
        "edition_count": 7
    }));
    let book = normalize_search_hit(&raw);
    assert_eq!(book.work_key, "OL2W");
    assert_eq!(book.author.as_deref(), Some("Ursula K. Le Guin"));
    assert_eq!(book.cover, Some(CoverRef::Key("abc".into())));
    assert_eq!(book.edition_count, Some(7));
}

#[test]
fn missing_fields_default_to_absent() {
    let search = normalize_search_hit(&search_doc(json!({"key": "/works/OL3W", "title": "Bare"})));
    assert_eq!(search.author, None);
    assert_eq!(search.cover, None);
    assert!(search.subjects.is_empty());

    let work = normalize_work_hit(&subject_work(json!({"key": "/works/OL3W", "title": "Bare"})));
    assert_eq!(work.author, None);
    assert_eq!(work.cover, None);
    assert!(work.subjects.is_empty());
    assert_eq!(search, work);
}

#[test]
fn wrong_typed_fields_default_to_absent() {
    let raw = search_doc(json!({
        "key": "/works/OL4W",
        "title": ["not", "a", "string"],
        "author_name": {"name": "x"},
        "first_publish_year": "1965",
        "cover_i": null,
        "subject": "Fiction"
    }));
    let book = normalize_search_hit(&raw);
    assert_eq!(
        book,
        Book {
            work_key: "OL4W".into(),
            ..Book::default()
        }
    );
}

#[test]
fn missing_key_gives_unusable_book() {
    let book = normalize_search_hit(&search_doc(json!({"title": "Keyless"})));
    assert_eq!(book.work_key, "");
    assert!(!book.is_usable());
}

#[test]
fn normalizers_are_idempotent() {
    let raw = search_doc(json!({
        "key": "/works/OL1W",
        "title": "Dune",
        "author_name": ["Frank Herbert", "Someone Else"],
        "subject": ["a", "b", "c", "d"]
    }));
    assert_eq!(normalize_search_hit(&raw), normalize_search_hit(&raw));

    let raw = subject_work(json!({
        "key": "/works/OL1W",
        "title": "Dune",
        "authors": [{"key": "/authors/OL1A", "name": "Frank Herbert"}],
        "cover_id": 11
    }));
    assert_eq!(normalize_work_hit(&raw), normalize_work_hit(&raw));
}

#[test]
fn both_raw_shapes_agree_on_the_same_work() {
    let search = search_doc(json!({
        "key": "/works/OL1W",
        "title": "Dune",
        "author_name": ["Frank Herbert"],
        "first_publish_year": 1965,
        "cover_i": 11,
        "edition_count": 3,
        "subject": ["a", "b", "c", "d"]
    }));
    let work = subject_work(json!({
        "key": "/works/OL1W",
        "title": "Dune",
        "authors": [{"key": "/authors/OL1A", "name": "Frank Herbert"}],
        "first_publish_year": 1965,
        "cover_id": 11,
        "edition_count": 3,
        "subject": ["a", "b", "c", "d"]
    }));
    assert_eq!(normalize_search_hit(&search), normalize_work_hit(&work));
}

#[test]
fn work_hit_author_needs_a_name() {
    let raw = subject_work(json!({"key": "/works/OL5W", "authors": [{"key": "/authors/OL1A"}]}));
    assert_eq!(normalize_work_hit(&raw).author, None);
    let raw = subject_work(json!({"key": "/works/OL5W", "authors": "Frank Herbert"}));
    assert_eq!(normalize_work_hit(&raw).author, None);
}

#[test]
fn responses_drop_keyless_results() {
    let search: SearchResponse = serde_json::from_value(json!({
        "numFound": 2,
        "docs": [{"key": "/works/OL1W"}, {"title": "Keyless"}]
    }))
    .unwrap();
    let books = normalize_search_response(&search);
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].work_key, "OL1W");

    let subject: SubjectResponse = serde_json::from_value(json!({"works": "nope"})).unwrap();
    assert!(normalize_subject_response(&subject).is_empty());
}

#[test]
fn work_detail_flattens_description() {
    let plain: WorkDoc =
        serde_json::from_value(json!({"key": "/works/OL1W", "description": "Spice."})).unwrap();
    assert_eq!(normalize_work_detail(&plain).description, "Spice.");

    let typed: WorkDoc = serde_json::from_value(json!({
        "key": "/works/OL1W",
        "description": {"type": "/type/text", "value": "Arrakis."}
    }))
    .unwrap();
    assert_eq!(normalize_work_detail(&typed).description, "Arrakis.");

    for description in [json!(null), json!(42), json!({"type": "/type/text"})] {
        let raw: WorkDoc =
            serde_json::from_value(json!({"key": "/works/OL1W", "description": description}))
                .unwrap();
        assert_eq!(normalize_work_detail(&raw).description, "");
    }
}

#[test]
fn work_detail_maps_authors() {
    let raw: WorkDoc = serde_json::from_value(json!({
        "key": "/works/OL1W",
        "title": "Dune",
        "authors": [
            {"author": {"key": "/authors/OL1A"}, "type": {"key": "/type/author_role"}},
            {"name": "Ghost Writer"}
        ],
        "subjects": ["s1", "s2", "s3", "s4"],
        "covers": [-1, 42]
    }))
    .unwrap();
    let detail = normalize_work_detail(&raw);
    assert_eq!(
        detail.authors,
        vec![
            WorkAuthor {
                author_ref: Some("/authors/OL1A".into()),
                name:       None,
            },
            WorkAuthor {
                author_ref: None,
                name:       Some("Ghost Writer".into()),
            },
        ]
    );
    assert_eq!(detail.subjects.len(), 4);
    assert_eq!(detail.cover, Some(CoverRef::Id(42)));
    assert_eq!(detail.work_key(), "OL1W");
    assert_eq!(detail.first_author_ref(), Some("/authors/OL1A"));

    let book = detail.to_book(Some("Frank Herbert".into()));
    assert_eq!(book.work_key, "OL1W");
    assert_eq!(book.author.as_deref(), Some("Frank Herbert"));
    assert_eq!(book.subjects, vec!["s1", "s2", "s3"]);
}

#[test]
fn work_detail_tolerates_non_array_authors() {
    for authors in [json!(null), json!("Frank Herbert"), json!({"name": "x"})] {
        let raw: WorkDoc =
            serde_json::from_value(json!({"key": "/works/OL1W", "authors": authors})).unwrap();
        assert!(normalize_work_detail(&raw).authors.is_empty());
    }
}

#[test]
fn keyless_work_takes_the_requested_key() {
    let raw: WorkDoc = serde_json::from_value(json!({"title": "Dune"})).unwrap();
    let detail = normalize_work_detail(&raw);
    assert!(!detail.to_book(None).is_usable());

    let detail = detail.or_requested_key("/works/OL1W");
    assert_eq!(detail.work_key(), "OL1W");
    assert_eq!(detail.to_book(None).work_key, "OL1W");

    let raw: WorkDoc =
        serde_json::from_value(json!({"key": "/works/OL2W", "title": "Dune"})).unwrap();
    let detail = normalize_work_detail(&raw).or_requested_key("/works/OL1W");
    assert_eq!(detail.work_key(), "OL2W");
}

#[test]
fn array_shaped_records_are_not_read_in_field_order() {
    let raw: WorkDoc = serde_json::from_value(json!({
        "key": "/works/OL1W",
        "description": ["hello"],
        "authors": [["/authors/OL9A"], {"author": ["/authors/OL8A"], "name": "Ghost"}]
    }))
    .unwrap();
    let detail = normalize_work_detail(&raw);
    assert_eq!(detail.description, "");
    assert_eq!(
        detail.authors,
        vec![WorkAuthor {
            author_ref: None,
            name:       Some("Ghost".into()),
        }]
    );

    let search: SearchResponse = serde_json::from_value(json!({
        "docs": [["/works/OL7W", "Dune"], {"key": "/works/OL1W"}]
    }))
    .unwrap();
    let keys: Vec<String> = normalize_search_response(&search)
        .into_iter()
        .map(|b| b.work_key)
        .collect();
    assert_eq!(keys, vec!["OL1W"]);

    let subject: SubjectResponse = serde_json::from_value(json!({
        "works": [["/works/OL7W", "Dune"], {"key": "/works/OL2W", "authors": [["Frank"]]}]
    }))
    .unwrap();
    let books = normalize_subject_response(&subject);
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].work_key, "OL2W");
    assert_eq!(books[0].author, None);

    let author: AuthorDoc = serde_json::from_value(json!({"bio": ["A writer."]})).unwrap();
    assert_eq!(normalize_author(&author).bio, "");
}

#[test]
fn author_bio_is_flattened() {
    let raw: AuthorDoc = serde_json::from_value(json!({
        "key": "/authors/OL1A",
        "name": "Frank Herbert",
        "birth_date": "8 October 1920",
        "bio": {"type": "/type/text", "value": "American author."}
    }))
    .unwrap();
    let author = normalize_author(&raw);
    assert_eq!(author.name.as_deref(), Some("Frank Herbert"));
    assert_eq!(author.bio, "American author.");
    assert_eq!(author.death_date, None);
}

#[test]
fn wiki_summary_is_passed_through() {
    let raw: WikiSummary = serde_json::from_value(json!({
        "type": "standard",
        "title": "Frank Herbert",
        "description": "American science fiction author",
        "extract": "Franklin Patrick Herbert Jr. was...",
        "thumbnail": {"source": "https://upload.wikimedia.org/fh.jpg"},
        "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Frank_Herbert"}}
    }))
    .unwrap();
    let summary = normalize_wiki_summary(&raw, "Frank Herbert").unwrap();
    assert_eq!(summary.name, "Frank Herbert");
    assert_eq!(summary.image_url.as_deref(), Some("https://upload.wikimedia.org/fh.jpg"));
    assert_eq!(
        summary.page_url.as_deref(),
        Some("https://en.wikipedia.org/wiki/Frank_Herbert")
    );

    let bare = normalize_wiki_summary(&WikiSummary::default(), "Nobody").unwrap();
    assert_eq!(bare.name, "Nobody");
    assert_eq!(bare.extract, None);
}

#[test]
fn wiki_disambiguation_is_dropped() {
    let raw: WikiSummary =
        serde_json::from_value(json!({"type": "disambiguation", "title": "John Smith"})).unwrap();
    assert_eq!(normalize_wiki_summary(&raw, "John Smith"), None);
}

#[test]
fn cover_urls_are_deterministic() {
    let placeholder = build_cover_url(None, CoverSize::L);
    assert_eq!(placeholder, "https://via.placeholder.com/256x384?text=No+Cover");
    let cover = CoverRef::Id(42);
    assert_eq!(
        build_cover_url(Some(&cover), CoverSize::L),
        build_cover_url(Some(&cover), CoverSize::L)
    );
    assert_eq!(
        build_cover_url(Some(&cover), CoverSize::S),
        "https://covers.openlibrary.org/b/id/42-S.jpg"
    );
}
