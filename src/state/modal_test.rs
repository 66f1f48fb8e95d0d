use super::*;

const REPO: &str = "https://github.com/example";

fn modal() -> ProjectModal {
    ProjectModal::new(ProjectCatalog::builtin(), REPO)
}

#[test]
fn starts_hidden_and_empty() {
    let m = modal();
    assert!(!m.is_visible());
    assert_eq!(m.aria_hidden(), "true");
    assert_eq!(m.content(), None);
}

#[test]
fn unknown_id_leaves_hidden_modal_unchanged() {
    let mut m = modal();
    assert!(!m.open("99"));
    assert!(!m.is_visible());
    assert_eq!(m.content(), None);
}

#[test]
fn unknown_id_leaves_open_modal_unchanged() {
    let mut m = modal();
    m.open("1");
    let before = m.content().map(str::to_owned);
    assert!(!m.open("nope"));
    assert!(m.is_visible());
    assert_eq!(m.content().map(str::to_owned), before);
}

#[test]
fn open_renders_title_body_and_repository_link() {
    let mut m = modal();
    assert!(m.open("1"));
    assert_eq!(m.aria_hidden(), "false");
    let html = m.content().unwrap();
    assert!(html.starts_with("<h3>Learning Compass</h3><p>"));
    assert!(html.contains(r#"<a href="https://github.com/example" target="_blank" rel="noreferrer">View repository</a>"#));
}

#[test]
fn reopening_replaces_content() {
    let mut m = modal();
    m.open("1");
    m.open("3");
    assert!(m.content().unwrap().contains("Healthcare Data Integration"));
    assert!(!m.content().unwrap().contains("Learning Compass"));
}

#[test]
fn close_hides_regardless_of_open_count() {
    let mut m = modal();
    for _ in 0..3 {
        m.open("2");
    }
    m.close();
    assert!(!m.is_visible());
    assert_eq!(m.aria_hidden(), "true");
}

#[test]
fn only_backdrop_clicks_close() {
    let mut m = modal();
    m.open("2");
    assert!(!m.click(false));
    assert!(m.is_visible());
    assert!(m.click(true));
    assert!(!m.is_visible());
}

#[test]
fn clicks_that_change_nothing_report_false() {
    let mut m = modal();
    m.open("1");
    let before = m.content().map(str::to_owned);
    for _ in 0..3 {
        assert!(!m.click(false));
    }
    assert_eq!(m.content().map(str::to_owned), before);

    m.close();
    assert!(!m.click(true));
}

#[test]
fn render_escapes_title() {
    let record = ProjectRecord { id: "x", title: "A <b> & C", body_html: "<p>ok</p>" };
    let html = render_project(&record, REPO);
    assert!(html.starts_with("<h3>A &lt;b&gt; &amp; C</h3><p>ok</p>"));
}
