use rolodex::{
    handle_event, initialize, Action, AppState, Config, DirectoryError, Event, InputMode,
    LoadStatus, NavigationScope,
};

const BODY: &str = r#"{"results": [
    {"name": {"first": "alice", "last": "smith"}, "email": "alice@example.com",
     "phone": "555-0100", "dob": {"date": "1990-01-02T00:00:00.000Z"},
     "location": {"street": {"number": 1, "name": "elm st"}, "city": "boston",
                  "state": "massachusetts", "postcode": 2101},
     "picture": {"thumbnail": "t0.jpg", "medium": "m0.jpg", "large": "l0.jpg"}},
    {"name": {"first": "bob", "last": "jones"}, "email": "bob@example.com",
     "phone": "555-0101", "dob": {"date": "1985-06-07T00:00:00.000Z"},
     "location": {"street": {"number": 2, "name": "oak ave"}, "city": "denver",
                  "state": "colorado", "postcode": "80201"},
     "picture": {"thumbnail": "t1.jpg", "medium": "m1.jpg", "large": "l1.jpg"}},
    {"name": {"first": "carol", "last": "danvers"}, "email": "carol@example.com",
     "phone": "555-0102", "dob": {"date": "1979-11-30T00:00:00.000Z"},
     "location": {"street": {"number": 3, "name": "pine rd"}, "city": "dallas",
                  "state": "texas", "postcode": 75201},
     "picture": {"thumbnail": "t2.jpg", "medium": "m2.jpg", "large": "l2.jpg"}}
]}"#;

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn loaded(config: &Config) -> AppState {
    let mut state = initialize(config);
    state.set_viewport(40, 120);

    let (_, actions) = send(&mut state, Event::PermissionsGranted);
    assert!(matches!(actions.as_slice(), [Action::FetchProfiles(_)]));

    send(
        &mut state,
        Event::ProfilesFetched {
            status: 200,
            body: BODY.as_bytes().to_vec(),
        },
    );
    state
}

fn type_query(state: &mut AppState, query: &str) {
    send(state, Event::SearchMode);
    for c in query.chars() {
        send(state, Event::Char(c));
    }
}

#[test]
fn fetch_request_targets_configured_batch() {
    let config = Config {
        results: 3,
        nationality: "gb".to_string(),
        ..Config::default()
    };
    let mut state = initialize(&config);

    let (_, actions) = send(&mut state, Event::PermissionsGranted);
    let [Action::FetchProfiles(request)] = actions.as_slice() else {
        panic!("expected a single fetch, got {actions:?}");
    };
    assert!(request.url.starts_with("https://randomuser.me/api/"));
    assert!(request.url.contains("results=3"));
    assert!(request.url.contains("nat=gb"));
    assert!(rolodex::client::FetchRequest::is_profile_response(
        &request.context
    ));
}

#[test]
fn loaded_batch_shows_every_card() {
    let state = loaded(&Config::default());

    assert_eq!(state.load_status, LoadStatus::Loaded);
    assert_eq!(state.store.len(), 3);
    assert_eq!(state.gallery.indices(), vec![0, 1, 2]);

    let vm = state.compute_viewmodel(40, 120);
    assert!(vm.empty_state.is_none());
    assert_eq!(vm.cards.len(), 3);
    assert_eq!(vm.cards[1].name, "Bob Jones");
    assert!(vm.header.title.contains("(3/3)"));
}

#[test]
fn search_narrows_gallery_and_escape_restores_it() {
    let mut state = loaded(&Config::default());

    type_query(&mut state, "^d");
    assert_eq!(state.gallery.indices(), vec![1, 2]);

    send(&mut state, Event::SubmitSearch);
    assert!(matches!(state.input_mode, InputMode::Search(_)));
    assert!(!state.input_mode.is_typing());

    send(&mut state, Event::Escape);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.search.query(), "");
    assert_eq!(state.gallery.indices(), vec![0, 1, 2]);
}

#[test]
fn search_without_matches_shows_empty_state() {
    let mut state = loaded(&Config::default());
    type_query(&mut state, "zzz");

    assert!(state.gallery.is_empty());
    let vm = state.compute_viewmodel(40, 120);
    let empty = vm.empty_state.expect("empty state");
    assert!(empty.message.contains("zzz"));
    assert!(!empty.is_error);
}

#[test]
fn modal_walks_whole_store_by_default() {
    let mut state = loaded(&Config::default());
    type_query(&mut state, "dallas");
    send(&mut state, Event::SubmitSearch);
    assert_eq!(state.gallery.indices(), vec![2]);

    send(&mut state, Event::OpenSelected);
    assert_eq!(state.modal.current(), Some(2));

    let (moved, _) = send(&mut state, Event::ModalNext);
    assert!(!moved);

    send(&mut state, Event::ModalPrev);
    assert_eq!(state.modal.current(), Some(1));
    send(&mut state, Event::ModalPrev);
    assert_eq!(state.modal.current(), Some(0));

    let (moved, _) = send(&mut state, Event::ModalPrev);
    assert!(!moved);
    assert_eq!(state.modal.current(), Some(0));

    send(&mut state, Event::ModalClose);
    assert!(!state.modal.is_open());
}

#[test]
fn modal_walks_filtered_cards_when_configured() {
    let config = Config {
        navigation: NavigationScope::Filtered,
        ..Config::default()
    };
    let mut state = loaded(&config);
    type_query(&mut state, "^d");
    send(&mut state, Event::SubmitSearch);

    send(&mut state, Event::OpenSelected);
    assert_eq!(state.modal.current(), Some(1));

    send(&mut state, Event::ModalNext);
    assert_eq!(state.modal.current(), Some(2));
    assert_eq!(state.selected_index, 1);

    let (moved, _) = send(&mut state, Event::ModalNext);
    assert!(!moved);
}

#[test]
fn clicking_card_and_modal_buttons() {
    let mut state = loaded(&Config::default());

    let layout = state.gallery_layout();
    let (row, col) = layout.card_origin(1).expect("second card on screen");
    send(&mut state, Event::Click { row: row + 1, col: col + 1 });
    assert_eq!(state.modal.current(), Some(1));

    let modal = state.modal_layout();
    send(
        &mut state,
        Event::Click {
            row: modal.button_row(),
            col: modal.next_col(),
        },
    );
    assert_eq!(state.modal.current(), Some(2));

    let vm = state.compute_viewmodel(40, 120);
    let view = vm.modal.expect("modal view");
    assert_eq!(view.name, "Carol Danvers");
    assert_eq!(view.birthday, "11-30-1979");
    assert!(!view.has_next);

    send(
        &mut state,
        Event::Click {
            row: modal.top,
            col: modal.close_col(),
        },
    );
    assert!(!state.modal.is_open());
}

#[test]
fn failed_fetch_surfaces_error() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::PermissionsGranted);
    send(
        &mut state,
        Event::ProfilesFetched {
            status: 200,
            body: b"<html>rate limited</html>".to_vec(),
        },
    );

    assert!(matches!(
        state.load_status,
        LoadStatus::Failed(DirectoryError::Parse(_))
    ));
    assert!(state.gallery.is_empty());

    let vm = state.compute_viewmodel(24, 80);
    assert!(vm.cards.is_empty());
    assert!(vm.empty_state.expect("error panel").is_error);
}

#[test]
fn close_focus_requests_hide() {
    let mut state = initialize(&Config::default());
    let (_, actions) = send(&mut state, Event::CloseFocus);
    assert!(matches!(actions.as_slice(), [Action::CloseFocus]));
}

#[test]
fn filter_click_and_navigate_boston_batch() {
    let person = |first: &str, city: &str, state: &str| {
        format!(
            r#"{{"name": {{"first": "{first}", "last": "smith"}},
                "email": "{first}@example.com", "phone": "555-0199",
                "dob": {{"date": "1990-05-17T00:00:00Z"}},
                "location": {{"street": {{"number": 9, "name": "main st"}},
                              "city": "{city}", "state": "{state}", "postcode": 1}},
                "picture": {{"medium": "m.jpg", "large": "l.jpg"}}}}"#
        )
    };
    let body = format!(
        r#"{{"results": [{}, {}, {}]}}"#,
        person("alice", "Boston", "Massachusetts"),
        person("bob", "Austin", "Texas"),
        person("carol", "Boston", "Massachusetts"),
    );

    let mut state = initialize(&Config::default());
    state.set_viewport(40, 120);
    send(&mut state, Event::PermissionsGranted);
    send(
        &mut state,
        Event::ProfilesFetched {
            status: 200,
            body: body.into_bytes(),
        },
    );

    type_query(&mut state, "BOSTON");
    assert_eq!(state.gallery.indices(), vec![0, 2]);

    let layout = state.gallery_layout();
    let (row, col) = layout.card_origin(1).expect("carol's card on screen");
    send(&mut state, Event::Click { row: row + 1, col: col + 1 });
    assert_eq!(state.modal.current(), Some(2));

    let generation = state.modal.generation();
    let (moved, _) = send(&mut state, Event::ModalNext);
    assert!(!moved);
    assert_eq!(state.modal.current(), Some(2));
    assert_eq!(state.modal.generation(), generation);
}
