//! tubemark — popup core for saving and reopening timestamped YouTube bookmarks.
//!
//! Entry point: runs an interactive console demo of the popup flows against
//! an in-memory database and a scripted host browser.

use tubemark::app::App;
use tubemark::managers::bookmark_store::BookmarkStoreTrait;
use tubemark::managers::popup_controller::PopupControllerTrait;
use tubemark::services::host_browser::HostBrowser;
use tubemark::types::errors::HostError;
use tubemark::types::video::VideoInfo;

/// Scripted host standing in for the real browser glue.
struct DemoHost {
    tab_url: String,
    video: VideoInfo,
}

impl HostBrowser for DemoHost {
    fn active_tab_url(&self) -> Result<String, HostError> {
        Ok(self.tab_url.clone())
    }

    fn query_video(&self) -> Result<VideoInfo, HostError> {
        Ok(self.video.clone())
    }

    fn open_tab(&self, url: &str) -> Result<(), HostError> {
        println!("  (host) opening new tab: {}", url);
        Ok(())
    }
}

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                tubemark v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║      Timestamped YouTube bookmarks, popup core only          ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut app = App::open_in_memory().expect("in-memory database should open");
    app.startup();

    let host = DemoHost {
        tab_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        video: VideoInfo {
            title: "Rust in 100 Seconds".to_string(),
            url: "https://www.youtube.com/watch?v=5C_HPTJg5ek".to_string(),
            timestamp_seconds: 42,
        },
    };

    demo_fetch_and_save(&mut app, &host);
    demo_list_and_select(&mut app);
    demo_edit(&mut app);
    demo_open(&mut app, &host);
    demo_delete(&mut app);

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All popup flows demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_fetch_and_save(app: &mut App, host: &dyn HostBrowser) {
    section("Fetch from YouTube + Save");

    app.popup.fetch_from_host(host).expect("demo host is a watch page");
    let buffer = app.popup.edit_buffer();
    println!(
        "  Fetched: '{}' @ {}s",
        buffer.title,
        buffer.timestamp_seconds.unwrap_or(0)
    );

    let id = app.popup.save_new().expect("buffer is fully populated");
    println!("  Saved bookmark {}", id);
    println!("  ✓ Fetch + save OK");
}

fn demo_list_and_select(app: &mut App) {
    section("Show Bookmarks + Select");

    let visible = app.popup.toggle_list_visible().expect("refresh succeeds");
    println!("  List visible: {}", visible);
    for bookmark in app.popup.bookmarks() {
        println!(
            "  - {} '{}' @ {}s",
            bookmark.id, bookmark.title, bookmark.timestamp_seconds
        );
    }

    let id = app.popup.bookmarks()[0].id.clone();
    app.popup.select_bookmark(&id).expect("record is present");
    println!("  Selected {}", id);
    println!("  ✓ List + select OK");
}

fn demo_edit(app: &mut App) {
    section("Update Selected");

    let buffer = app.popup.edit_buffer_mut();
    buffer.title = format!("{} (edited)", buffer.title);
    buffer.timestamp_seconds = Some(90);

    app.popup.commit_edit().expect("selection is active");
    let updated = &app.popup.bookmarks()[0];
    println!("  Now: '{}' @ {}s", updated.title, updated.timestamp_seconds);
    println!("  ✓ Update OK");
}

fn demo_open(app: &mut App, host: &dyn HostBrowser) {
    section("Open at Timestamp");

    let id = app.popup.bookmarks()[0].id.clone();
    app.popup.select_bookmark(&id).expect("record is present");
    let url = app.popup.open_current(host).expect("buffer holds url + timestamp");
    println!("  Opened {}", url);
    println!("  ✓ Open OK");
}

fn demo_delete(app: &mut App) {
    section("Delete Selected");

    app.popup.remove_selected().expect("selection is active");
    let remaining = app.popup.store().count().expect("count succeeds");
    println!("  Bookmarks remaining: {}", remaining);
    println!("  ✓ Delete OK");
}
