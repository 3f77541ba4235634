//! Page bridge.
//!
//! The webview owns layout and scrolling, so a small script reports page
//! events (scroll snapshots, key presses, mouse presses, card clicks) back
//! over the eval channel. Cards are rendered from markup, so their clicks are
//! delegated here by `data-index`. Everything the page needs done to the document (scroll to a
//! position, lock scrolling, toggle a body class) goes out the same way.

use dioxus::prelude::*;
use folio_core::ScrollSnapshot;
use serde::Deserialize;

use crate::context::PageContext;

/// Event reported by the page script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageEvent {
    Scroll(ScrollSnapshot),
    Key { key: String },
    MouseDown,
    OpenProject { index: usize },
    OpenPreview { index: usize },
}

/// Listens for scroll, resize, keydown, mousedown and card clicks and
/// forwards them. Reveal targets are only reported until they carry the
/// `revealed` class.
const BRIDGE_JS: &str = r#"
const snapshot = () => {
    const doc = document.documentElement;
    const sections = Array.from(document.querySelectorAll('.section[id]')).map((el) => ({
        id: el.id,
        top: el.offsetTop,
        height: el.offsetHeight,
    }));
    const elements = Array.from(document.querySelectorAll('[data-reveal]:not(.revealed)')).map((el) => {
        const r = el.getBoundingClientRect();
        return { id: el.dataset.reveal, x: r.left, y: r.top, width: r.width, height: r.height };
    });
    return {
        kind: 'scroll',
        scroll_top: window.pageYOffset || doc.scrollTop,
        document_height: doc.scrollHeight,
        viewport_width: window.innerWidth,
        viewport_height: window.innerHeight,
        sections,
        elements,
    };
};

window.addEventListener('scroll', () => dioxus.send(snapshot()), { passive: true });
window.addEventListener('resize', () => dioxus.send(snapshot()));
const cardIndex = (el) => {
    const index = Number.parseInt(el.dataset.index, 10);
    return Number.isInteger(index) && index >= 0 ? index : null;
};
const openProject = (card) => {
    const index = cardIndex(card);
    if (index !== null) dioxus.send({ kind: 'open_project', index });
};

document.addEventListener('keydown', (e) => {
    dioxus.send({ kind: 'key', key: e.key });
    const card = e.target.closest && e.target.closest('.project-card');
    if (e.key === 'Enter' && card) openProject(card);
});
document.addEventListener('mousedown', () => dioxus.send({ kind: 'mouse_down' }));
document.addEventListener('click', (e) => {
    // Links inside cards keep their own behaviour
    if (!e.target.closest || e.target.closest('a')) return;
    const thumb = e.target.closest('.cert-card .thumb-btn');
    if (thumb) {
        const index = cardIndex(thumb.closest('.cert-card'));
        if (index !== null) dioxus.send({ kind: 'open_preview', index });
        return;
    }
    const card = e.target.closest('.project-card');
    if (card) openProject(card);
});

dioxus.send(snapshot());
await new Promise(() => {});
"#;

/// Install the page script and feed its events to the context until the
/// page goes away
pub async fn listen(ctx: PageContext) {
    let mut eval = document::eval(BRIDGE_JS);
    tracing::debug!("Page bridge installed");

    loop {
        match eval.recv::<PageEvent>().await {
            Ok(event) => ctx.handle_page_event(event),
            Err(e) => {
                tracing::warn!("Page bridge closed: {:?}", e);
                break;
            }
        }
    }
}

/// Smooth-scroll the window to `top`
pub fn scroll_to(top: f64) {
    let top = top.max(0.0);
    document::eval(&format!(
        "window.scrollTo({{ top: {top}, behavior: 'smooth' }});"
    ));
}

fn section_top_script(id: &str) -> String {
    let id = serde_json::Value::from(id);
    format!("const el = document.getElementById({id});\ndioxus.send(el ? el.offsetTop : null);")
}

/// Current document offset of a section, read from the live layout
pub async fn section_top(id: &str) -> Option<f64> {
    let mut eval = document::eval(&section_top_script(id));
    match eval.recv::<Option<f64>>().await {
        Ok(top) => top,
        Err(e) => {
            tracing::warn!(section = id, "Cannot read section offset: {:?}", e);
            None
        }
    }
}

/// Lock or release page scrolling while an overlay is open
pub fn set_scroll_locked(locked: bool) {
    let overflow = if locked { "hidden" } else { "" };
    document::eval(&format!("document.body.style.overflow = '{overflow}';"));
}

/// Add or remove a class on the page body
pub fn set_page_class(class: &str, enabled: bool) {
    let class = serde_json::Value::from(class);
    document::eval(&format!(
        "document.body.classList.toggle({class}, {enabled});"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_event_parses() {
        let event: PageEvent = serde_json::from_str(
            r#"{
                "kind": "scroll",
                "scroll_top": 640,
                "document_height": 4000,
                "viewport_width": 1280,
                "viewport_height": 800,
                "sections": [{ "id": "about", "top": 600, "height": 700 }],
                "elements": [{ "id": "project-0", "x": 0, "y": 200, "width": 300, "height": 200 }]
            }"#,
        )
        .unwrap();

        let PageEvent::Scroll(snapshot) = event else {
            panic!("expected a scroll event");
        };
        assert_eq!(snapshot.scroll_top, 640.0);
        assert_eq!(snapshot.sections[0].id, "about");
        assert_eq!(snapshot.elements[0].id, "project-0");
    }

    #[test]
    fn test_key_and_mouse_events_parse() {
        let key: PageEvent = serde_json::from_str(r#"{ "kind": "key", "key": "Escape" }"#).unwrap();
        assert_eq!(
            key,
            PageEvent::Key {
                key: "Escape".to_string()
            }
        );

        let mouse: PageEvent = serde_json::from_str(r#"{ "kind": "mouse_down" }"#).unwrap();
        assert_eq!(mouse, PageEvent::MouseDown);
    }

    #[test]
    fn test_card_events_parse() {
        let project: PageEvent =
            serde_json::from_str(r#"{ "kind": "open_project", "index": 3 }"#).unwrap();
        assert_eq!(project, PageEvent::OpenProject { index: 3 });

        let preview: PageEvent =
            serde_json::from_str(r#"{ "kind": "open_preview", "index": 0 }"#).unwrap();
        assert_eq!(preview, PageEvent::OpenPreview { index: 0 });

        assert!(serde_json::from_str::<PageEvent>(r#"{ "kind": "open_project", "index": -1 }"#).is_err());
    }

    #[test]
    fn test_section_top_reads_live_offset() {
        let script = section_top_script("projects");
        assert!(script.contains(r#"document.getElementById("projects")"#));
        assert!(script.contains("offsetTop"));

        // Ids are quoted, never spliced into the script
        let script = section_top_script("a\"); alert(1); (\"");
        assert!(script.contains(r#"getElementById("a\"); alert(1); (\"")"#));
    }
}
