use std::path::{Path, PathBuf};

use futures::StreamExt;
use relm4::{
    ComponentParts, ComponentSender, RelmWidgetExt, SimpleComponent,
    gtk::{self, gdk, gio, glib, prelude::*},
};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::{
    config::UiConfig,
    controller::{
        Action, ControllerHandle, Expander, ToggleIcon, UiState, WindowCommand, WindowLifecycle,
    },
    degraded,
    services::player::{POSITION_MAX, VOLUME_MAX},
};

const NO_FOLDER: &str = "No folder selected";

/// Everything the window needs at startup
pub struct AppInit {
    /// Window settings
    pub ui: UiConfig,
    /// Initial folder of the chooser, when it exists
    pub library: Option<PathBuf>,
    /// Running controller
    pub controller: ControllerHandle,
    /// Tray activations, when the tray icon is available
    pub tray: Option<UnboundedReceiver<()>>,
}

/// Window messages
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// New controller state to render
    State(UiState),
    /// Forward an action to the controller
    Control(Action),
    /// Add button pressed with the location field's text
    AddTrack(String),
    /// Folder picked in the chooser
    FolderChosen(PathBuf),
    /// Window close button
    CloseRequested,
    /// Escape key
    EscapePressed,
    /// Tray icon clicked
    TrayActivated,
    /// Close the application
    Quit,
}

/// Main window of the remote controller
pub struct App {
    controller: ControllerHandle,
    state: UiState,
    window: WindowLifecycle,
    chooser: Option<PathBuf>,
}

/// Widgets updated after each message
pub struct AppWidgets {
    window: gtk::Window,
    text: gtk::Label,
    toggle: gtk::Button,
    volume: gtk::Scale,
    position: gtk::Scale,
    folder: gtk::Label,
    _chooser: gtk::FileChooserNative,
}

impl SimpleComponent for App {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();
    type Root = gtk::Window;
    type Widgets = AppWidgets;

    fn init_root() -> Self::Root {
        gtk::Window::new()
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            ui,
            library,
            controller,
            tray,
        } = init;

        root.set_title(Some(&ui.title));
        root.set_icon_name(Some(&ui.icon_name));
        root.set_default_width(360);
        check_icon(&ui.icon_name);

        let content = gtk::Box::new(gtk::Orientation::Vertical, 6);
        content.set_margin_all(8);

        let header = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        let icon = gtk::Image::from_icon_name(&ui.icon_name);
        icon.set_pixel_size(32);
        let click = gtk::GestureClick::new();
        {
            let sender = sender.clone();
            click.connect_released(move |_, _, _, _| {
                sender.input(AppMsg::Control(Action::Update));
            });
        }
        icon.add_controller(click);
        let text = gtk::Label::new(None);
        text.set_hexpand(true);
        text.set_xalign(0.0);
        text.set_ellipsize(gtk::pango::EllipsizeMode::End);
        header.append(&icon);
        header.append(&text);

        let buttons = gtk::Box::new(gtk::Orientation::Horizontal, 4);
        let toggle = control_button(
            ToggleIcon::Play.icon_name(),
            "Play/Pause",
            &sender,
            AppMsg::Control(Action::TogglePause),
        );
        buttons.append(&control_button(
            "media-skip-backward",
            "Previous",
            &sender,
            AppMsg::Control(Action::Prev),
        ));
        buttons.append(&toggle);
        buttons.append(&control_button(
            "media-playback-stop",
            "Stop",
            &sender,
            AppMsg::Control(Action::Stop),
        ));
        buttons.append(&control_button(
            "media-skip-forward",
            "Next",
            &sender,
            AppMsg::Control(Action::Next),
        ));
        buttons.append(&control_button(
            "system-shutdown",
            "Quit player",
            &sender,
            AppMsg::Control(Action::Quit),
        ));
        buttons.append(&control_button("window-close", "Close", &sender, AppMsg::Quit));

        let volume = slider(VOLUME_MAX, &sender, Action::SetVolume);
        let position = slider(POSITION_MAX, &sender, Action::SetPosition);

        let expander = gtk::Expander::new(Some(Expander::toggled(false)));
        expander.connect_expanded_notify(|expander| {
            expander.set_label(Some(Expander::toggled(expander.is_expanded())));
        });

        let extra = gtk::Box::new(gtk::Orientation::Vertical, 4);
        let entry = gtk::Entry::new();
        entry.set_placeholder_text(Some("File, URL or directory:// location"));
        {
            let sender = sender.clone();
            entry.connect_activate(move |entry| {
                sender.input(AppMsg::AddTrack(entry.text().to_string()));
            });
        }

        let chooser = folder_chooser(&root, library.as_deref(), &sender);
        let folder_row = gtk::Box::new(gtk::Orientation::Horizontal, 4);
        let folder = gtk::Label::new(Some(NO_FOLDER));
        folder.set_hexpand(true);
        folder.set_xalign(0.0);
        folder.set_ellipsize(gtk::pango::EllipsizeMode::Start);
        let choose = gtk::Button::from_icon_name("folder-open");
        choose.set_tooltip_text(Some("Choose folder"));
        {
            let chooser = chooser.clone();
            choose.connect_clicked(move |_| chooser.show());
        }
        let add = gtk::Button::with_label("Add");
        {
            let sender = sender.clone();
            let entry = entry.clone();
            add.connect_clicked(move |_| {
                sender.input(AppMsg::AddTrack(entry.text().to_string()));
            });
        }
        folder_row.append(&folder);
        folder_row.append(&choose);
        folder_row.append(&add);
        extra.append(&entry);
        extra.append(&folder_row);
        expander.set_child(Some(&extra));

        content.append(&header);
        content.append(&buttons);
        content.append(&gtk::Label::new(Some("Volume")));
        content.append(&volume);
        content.append(&gtk::Label::new(Some("Position")));
        content.append(&position);
        content.append(&expander);
        root.set_child(Some(&content));

        {
            let sender = sender.clone();
            root.connect_close_request(move |_| {
                sender.input(AppMsg::CloseRequested);
                glib::Propagation::Stop
            });
        }
        let keys = gtk::EventControllerKey::new();
        {
            let sender = sender.clone();
            keys.connect_key_pressed(move |_, key, _, _| {
                if key == gdk::Key::Escape {
                    sender.input(AppMsg::EscapePressed);
                    glib::Propagation::Stop
                } else {
                    glib::Propagation::Proceed
                }
            });
        }
        root.add_controller(keys);

        forward_state(&controller, &sender);
        let has_tray = tray.is_some();
        if let Some(tray) = tray {
            forward_tray(tray, &sender);
        }
        controller.send(Action::Update);

        let model = App {
            controller,
            state: UiState::default(),
            window: WindowLifecycle::new(true, has_tray),
            chooser: None,
        };
        let widgets = AppWidgets {
            window: root,
            text,
            toggle,
            volume,
            position,
            folder,
            _chooser: chooser,
        };

        ComponentParts { model, widgets }
    }

    fn update(&mut self, message: Self::Input, _sender: ComponentSender<Self>) {
        match message {
            AppMsg::State(state) => self.state = state,
            AppMsg::Control(action) => self.controller.send(action),
            AppMsg::AddTrack(text) => self.controller.send(Action::AddTrack {
                text: Some(text),
                chooser: self.chooser.clone(),
            }),
            AppMsg::FolderChosen(path) => self.chooser = Some(path),
            // GTK4 cannot report or move top-level windows, so no position is saved.
            AppMsg::CloseRequested => apply(self.window.close_requested(None)),
            AppMsg::EscapePressed => apply(self.window.escape_pressed(None)),
            AppMsg::TrayActivated => apply(self.window.tray_activated(None)),
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }

    fn update_view(&self, widgets: &mut Self::Widgets, _sender: ComponentSender<Self>) {
        widgets.text.set_label(self.state.display_text());
        widgets
            .toggle
            .set_icon_name(self.state.toggle_icon().icon_name());
        sync_slider(&widgets.volume, self.state.volume());
        sync_slider(&widgets.position, self.state.position());

        let folder = self
            .chooser
            .as_ref()
            .map_or_else(|| NO_FOLDER.to_string(), |path| path.display().to_string());
        widgets.folder.set_label(&folder);

        if widgets.window.is_visible() != self.window.is_visible() {
            widgets.window.set_visible(self.window.is_visible());
        }
    }
}

fn control_button(
    icon_name: &str,
    tooltip: &str,
    sender: &ComponentSender<App>,
    message: AppMsg,
) -> gtk::Button {
    let button = gtk::Button::from_icon_name(icon_name);
    button.set_tooltip_text(Some(tooltip));
    let sender = sender.clone();
    button.connect_clicked(move |_| sender.input(message.clone()));
    button
}

fn slider(max: i32, sender: &ComponentSender<App>, action: fn(i32) -> Action) -> gtk::Scale {
    let scale = gtk::Scale::with_range(gtk::Orientation::Horizontal, 0.0, f64::from(max), 1.0);
    scale.set_hexpand(true);
    scale.set_draw_value(false);

    // change-value only fires for user input, never for set_value
    let sender = sender.clone();
    scale.connect_change_value(move |_, _, value| {
        let value = value.clamp(0.0, f64::from(max)).round() as i32;
        sender.input(AppMsg::Control(action(value)));
        glib::Propagation::Proceed
    });
    scale
}

fn sync_slider(scale: &gtk::Scale, value: i32) {
    if scale.value().round() as i32 != value {
        scale.set_value(f64::from(value));
    }
}

/// Acts on window commands the visibility flag alone does not cover.
fn apply(command: WindowCommand) {
    match command {
        WindowCommand::Show { restore } => debug!(?restore, "Showing window"),
        WindowCommand::Hide => debug!("Hiding window"),
        WindowCommand::Quit => relm4::main_application().quit(),
    }
}

#[allow(deprecated)]
fn folder_chooser(
    parent: &gtk::Window,
    library: Option<&Path>,
    sender: &ComponentSender<App>,
) -> gtk::FileChooserNative {
    let chooser = gtk::FileChooserNative::new(
        Some("Select a folder"),
        Some(parent),
        gtk::FileChooserAction::SelectFolder,
        Some("_Select"),
        Some("_Cancel"),
    );

    if let Some(directory) = library
        && let Err(e) = chooser.set_current_folder(Some(&gio::File::for_path(directory)))
    {
        degraded!("library", e);
    }

    let sender = sender.clone();
    chooser.connect_response(move |chooser, response| {
        if response == gtk::ResponseType::Accept
            && let Some(path) = chooser.file().and_then(|file| file.path())
        {
            sender.input(AppMsg::FolderChosen(path));
        }
        chooser.hide();
    });

    chooser
}

fn check_icon(icon_name: &str) {
    let Some(display) = gdk::Display::default() else {
        return;
    };

    if !gtk::IconTheme::for_display(&display).has_icon(icon_name) {
        degraded!("icon", format!("icon '{icon_name}' not in the current theme"));
    }
}

fn forward_state(controller: &ControllerHandle, sender: &ComponentSender<App>) {
    let mut states = Box::pin(controller.state().watch());
    let input = sender.input_sender().clone();

    relm4::spawn(async move {
        while let Some(state) = states.next().await {
            if input.send(AppMsg::State(state)).is_err() {
                break;
            }
        }
    });
}

fn forward_tray(mut activations: UnboundedReceiver<()>, sender: &ComponentSender<App>) {
    let input = sender.input_sender().clone();

    relm4::spawn(async move {
        while activations.recv().await.is_some() {
            if input.send(AppMsg::TrayActivated).is_err() {
                break;
            }
        }
    });
}
