//! Browser tests for the generated page's behaviour script.
//!
//! Run with: `cargo test --test browser_page -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_site_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(env!("CARGO_BIN_EXE_tutor-landing"))
            .args([
                "build",
                "--content",
                root.join("fixtures/data.json").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run tutor-landing");
        assert!(status.success(), "site generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_index() -> Arc<Tab> {
    ensure_site_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join("index.html");
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval_string(tab: &Tab, js: &str) -> String {
    tab.evaluate(js, false)
        .unwrap()
        .value
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn eval_bool(tab: &Tab, js: &str) -> bool {
    tab.evaluate(js, false)
        .unwrap()
        .value
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn indicator_click_moves_track() {
    let tab = load_index();
    tab.evaluate(
        "document.querySelectorAll('.carousel-indicator')[2].click()",
        false,
    )
    .unwrap();
    let transform = eval_string(&tab, "document.getElementById('carousel-track').style.transform");
    assert_eq!(transform, "translateX(-200%)");
    assert!(eval_bool(
        &tab,
        "document.querySelectorAll('.carousel-indicator')[2].classList.contains('w-6')"
    ));
}

#[test]
#[ignore]
fn carousel_advances_on_its_own() {
    let tab = load_index();
    std::thread::sleep(Duration::from_millis(2800));
    let transform = eval_string(&tab, "document.getElementById('carousel-track').style.transform");
    assert_eq!(transform, "translateX(-100%)");
}

// ---------------------------------------------------------------------------
// Navbar
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn mobile_menu_toggles() {
    let tab = load_index();
    let hidden = "document.getElementById('mobile-menu').classList.contains('hidden')";
    assert!(eval_bool(&tab, hidden));
    tab.evaluate("document.getElementById('mobile-menu-btn').click()", false)
        .unwrap();
    assert!(!eval_bool(&tab, hidden));
    tab.evaluate(
        "document.querySelector('#mobile-menu a').click()",
        false,
    )
    .unwrap();
    assert!(eval_bool(&tab, hidden));
}

#[test]
#[ignore]
fn navbar_turns_dark_past_hero() {
    let tab = load_index();
    let dark = "document.querySelector('.nav-logo').classList.contains('text-gray-900')";
    assert!(!eval_bool(&tab, dark));
    tab.evaluate(
        r#"document.body.style.minHeight = '6000px';
           window.scrollTo(0, document.getElementById('hero').offsetHeight);
           window.dispatchEvent(new Event('scroll'));"#,
        false,
    )
    .unwrap();
    assert!(eval_bool(&tab, dark));
}

#[test]
#[ignore]
fn navbar_hides_after_downward_scroll_settles() {
    let tab = load_index();
    tab.evaluate(
        r#"document.body.style.minHeight = '6000px';
           window.scrollTo(0, 1500);
           window.dispatchEvent(new Event('scroll'));"#,
        false,
    )
    .unwrap();
    let hidden = "document.getElementById('navbar').classList.contains('nav-hidden')";
    assert!(!eval_bool(&tab, hidden));
    std::thread::sleep(Duration::from_millis(300));
    assert!(eval_bool(&tab, hidden));
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn copyright_shows_viewing_year() {
    let tab = load_index();
    let text = eval_string(&tab, "document.getElementById('footer-copyright').textContent");
    let year = eval_string(&tab, "String(new Date().getFullYear())");
    assert!(text.starts_with(&format!("© {year} ")), "{text}");
}
