use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};
use zbus::{Connection, interface, proxy};

use crate::{config::UiConfig, degraded};

const ITEM_PATH: &str = "/StatusNotifierItem";

#[proxy(
    interface = "org.kde.StatusNotifierWatcher",
    default_service = "org.kde.StatusNotifierWatcher",
    default_path = "/StatusNotifierWatcher"
)]
trait StatusNotifierWatcher {
    fn register_status_notifier_item(&self, service: &str) -> zbus::Result<()>;
}

/// Tray icon exported on the session bus
///
/// Clicks on the icon are forwarded as `()` on the activation channel.
pub struct StatusNotifierItem {
    title: String,
    icon_name: String,
    activations: UnboundedSender<()>,
}

#[interface(name = "org.kde.StatusNotifierItem")]
impl StatusNotifierItem {
    async fn activate(&self, x: i32, y: i32) {
        debug!(x, y, "Tray icon activated");
        self.activations.send(()).ok();
    }

    async fn secondary_activate(&self, x: i32, y: i32) {
        debug!(x, y, "Tray icon secondary activation ignored");
    }

    async fn context_menu(&self, x: i32, y: i32) {
        debug!(x, y, "Tray context menu ignored");
    }

    async fn scroll(&self, delta: i32, orientation: String) {
        debug!(delta, %orientation, "Tray scroll ignored");
    }

    #[zbus(property)]
    async fn category(&self) -> String {
        "ApplicationStatus".to_string()
    }

    #[zbus(property)]
    async fn id(&self) -> String {
        env!("CARGO_PKG_NAME").to_string()
    }

    #[zbus(property)]
    async fn title(&self) -> String {
        self.title.clone()
    }

    #[zbus(property)]
    async fn status(&self) -> String {
        "Active".to_string()
    }

    #[zbus(property)]
    async fn icon_name(&self) -> String {
        self.icon_name.clone()
    }

    #[zbus(property)]
    async fn item_is_menu(&self) -> bool {
        false
    }
}

/// Export the tray icon and announce it to the status notifier watcher.
///
/// Best effort: returns `None` and logs a degraded feature when the icon
/// cannot be exported or no watcher is running. Closing the window then
/// quits the application instead of hiding it.
pub async fn register(bus: &Connection, ui: &UiConfig) -> Option<UnboundedReceiver<()>> {
    let (activations, receiver) = mpsc::unbounded_channel();
    let item = StatusNotifierItem {
        title: ui.title.clone(),
        icon_name: ui.icon_name.clone(),
        activations,
    };

    if let Err(e) = bus.object_server().at(ITEM_PATH, item).await {
        degraded!("tray", e);
        return None;
    }

    let name = format!("org.kde.StatusNotifierItem-{}-1", std::process::id());
    if let Err(e) = bus.request_name(name.as_str()).await {
        degraded!("tray", e);
        return None;
    }

    let registered = match StatusNotifierWatcherProxy::new(bus).await {
        Ok(watcher) => watcher.register_status_notifier_item(&name).await,
        Err(e) => Err(e),
    };
    if let Err(e) = registered {
        degraded!("tray", e);
        return None;
    }

    info!(%name, "Tray icon registered");
    Some(receiver)
}
