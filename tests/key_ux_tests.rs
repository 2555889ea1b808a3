//! End-to-end behavior of the public keyux API

use std::sync::{Arc, Mutex};

use keyux::{
    format_hint, likely_with_keyboard, start_key_ux, Environment, EventType, KeyEvent, Overrides,
    Plugin, Teardown,
};

fn win() -> Environment {
    Environment::new("Mozilla/5.0 (Windows NT 10.0; Win64; x64)", "Win32")
}

fn mac() -> Environment {
    Environment::new("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)", "MacIntel")
}

#[test]
fn hint_scenarios() {
    assert_eq!(format_hint(&win(), "ctrl+shift+s", &Overrides::new()), "Ctrl + Shift + S");
    assert_eq!(format_hint(&mac(), "meta+s", &Overrides::new()), "⌘ S");
    assert_eq!(
        format_hint(&mac(), "ctrl+alt+shift+meta+s", &Overrides::new()),
        "⌃ ⌥ ⇧ ⌘ S"
    );
}

#[test]
fn overrides_from_json_resolve_in_document_order() {
    let overrides: Overrides =
        serde_json::from_str(r#"{"alt+n": "ctrl+n", "meta+n": "ctrl+n"}"#).unwrap();
    assert_eq!(format_hint(&win(), "ctrl+n", &overrides), "Alt + N");
    assert_eq!(format_hint(&mac(), "ctrl+n", &overrides), "⌥ N");
}

#[test]
fn keyboard_detection() {
    assert!(likely_with_keyboard(&win()));
    assert!(!likely_with_keyboard(&Environment::new(
        "Mozilla/5.0 (Linux; ANDROID 13)",
        "Linux armv8l"
    )));
}

/// Counts presses while attached, like a press-detection behavior would
fn press_counter(presses: Arc<Mutex<Vec<String>>>) -> impl Fn(&Environment) -> Teardown {
    move |env: &Environment| {
        let presses = Arc::clone(&presses);
        let id = env.add_listener(EventType::KeyDown, move |event: &KeyEvent| {
            if let Some(key) = event.key() {
                presses.lock().unwrap().push(key.to_string());
            }
        });
        let env = env.clone();
        Teardown::new(move || {
            env.remove_listener(id);
        })
    }
}

#[test]
fn plugins_attach_and_detach() {
    let env = win();
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));
    let plugins: Vec<Box<dyn Plugin>> = vec![
        Box::new(press_counter(Arc::clone(&first))),
        Box::new(press_counter(Arc::clone(&second))),
    ];

    let stop = start_key_ux(&env, &plugins).unwrap();
    assert_eq!(env.dispatch(&KeyEvent::key_down("alt+j")), 2);

    stop.stop();
    assert_eq!(env.dispatch(&KeyEvent::key_down("alt+k")), 0);
    assert_eq!(*first.lock().unwrap(), ["alt+j"]);
    assert_eq!(*second.lock().unwrap(), ["alt+j"]);
}
