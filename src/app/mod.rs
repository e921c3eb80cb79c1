// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toaster in a real Iced window.
//!
//! The `App` owns the toaster and mounts it into a registry on boot.
//! Buttons never touch the toaster directly: they go through a
//! [`Notifier`], the same way unrelated parts of a larger application would.

mod message;

pub use message::{Flags, Message};

use crate::config;
use crate::dispatch::{Notifier, Registry};
use crate::toast::{self, Position, ToastContent, Toaster, ToasterHandle, Variant};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{time, window, Element, Length, Subscription, Task};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Interval at which delivered expiries are applied.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Root state of the demo.
pub struct App {
    registry: Rc<Registry>,
    toaster: ToasterHandle,
    notifier: Notifier,
    /// How many toasts were shown so far, used to number them.
    shown: u32,
    /// How many times an "Undo" action ran.
    undone: Rc<Cell<u32>>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("shown", &self.shown)
            .field("undone", &self.undone.get())
            .finish_non_exhaustive()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the app from flags, falling back to the saved configuration.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        if let Some(position) = flags.position {
            config.toaster.position = position;
        }
        if let Some(max_toasts) = flags.max_toasts {
            config.toaster.max_toasts = max_toasts;
        }

        let registry = Rc::new(Registry::new());
        let toaster = ToasterHandle::new(Toaster::from_config(&config.toaster));
        toaster.mount(&registry);

        let app = App {
            notifier: Notifier::new(Rc::clone(&registry)),
            registry,
            toaster,
            shown: 0,
            undone: Rc::new(Cell::new(0)),
        };

        if let Some(warning) = config_warning {
            app.notifier.warning("Configuration ignored", Some(&warning));
        }

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("Toaster demo ({})", self.toaster.borrow().position())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => {
                self.toaster.handle_message(toast_message);
            }
            Message::Show(variant) => {
                self.shown += 1;
                let title = format!("{} #{}", capitalize(variant.as_str()), self.shown);
                let description = sample_description(variant);
                match variant {
                    Variant::Info => self.notifier.info(title, Some(description)),
                    Variant::Success => self.notifier.success(title, Some(description)),
                    Variant::Warning => self.notifier.warning(title, Some(description)),
                    Variant::Error => self.notifier.error(title, Some(description)),
                };
            }
            Message::ShowWithAction => {
                self.shown += 1;
                let undone = Rc::clone(&self.undone);
                let notifier = self.notifier.clone();
                self.notifier.notify(
                    ToastContent::info()
                        .title(format!("Item #{} deleted", self.shown))
                        .duration_ms(8000)
                        .action("Undo", move || {
                            undone.set(undone.get() + 1);
                            notifier.success("Item restored", None);
                        }),
                );
            }
            Message::Clear => self.notifier.clear(),
            Message::CyclePosition => {
                let mut toaster = self.toaster.borrow_mut();
                let next = next_position(toaster.position());
                toaster.set_position(next);
            }
            Message::Tick(_) => {
                self.toaster.handle_message(toast::Message::Tick);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut controls = Row::new().spacing(spacing::XS);
        for variant in Variant::ALL {
            controls = controls.push(
                button(Text::new(capitalize(variant.as_str())).size(typography::BODY))
                    .on_press(Message::Show(variant)),
            );
        }
        controls = controls
            .push(button(Text::new("With action").size(typography::BODY)).on_press(Message::ShowWithAction))
            .push(button(Text::new("Move stack").size(typography::BODY)).on_press(Message::CyclePosition))
            .push(button(Text::new("Clear").size(typography::BODY)).on_press(Message::Clear));

        let toaster = self.toaster.borrow();
        let status = Text::new(format!(
            "{} of {} toasts at {}, undo pressed {} times",
            toaster.len(),
            toaster.max_toasts(),
            toaster.position(),
            self.undone.get()
        ))
        .size(typography::BODY);

        let content = Column::new()
            .spacing(spacing::MD)
            .push(Text::new("Toaster demo").size(typography::TITLE_MD))
            .push(controls)
            .push(status);

        let base = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(spacing::LG);

        let overlay = crate::ui::toast::view_overlay(&toaster).map(Message::Toast);

        Stack::new().push(base).push(overlay).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.toaster.borrow().is_empty() {
            Subscription::none()
        } else {
            time::every(TICK_INTERVAL).map(Message::Tick)
        }
    }

    /// Returns the toaster owned by the app.
    #[must_use]
    pub fn toaster(&self) -> &ToasterHandle {
        &self.toaster
    }

    /// Returns the notifier the app dispatches through.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.toaster.unmount(&self.registry);
    }
}

fn next_position(position: Position) -> Position {
    let index = Position::ALL
        .iter()
        .position(|candidate| *candidate == position)
        .unwrap_or(0);
    Position::ALL[(index + 1) % Position::ALL.len()]
}

fn sample_description(variant: Variant) -> &'static str {
    match variant {
        Variant::Info => "A new version is available.",
        Variant::Success => "Your changes have been saved.",
        Variant::Warning => "The disk is almost full.",
        Variant::Error => "The upload failed, try again later.",
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_app(flags: Flags) -> App {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
            ..flags
        };
        App::new(flags).0
    }

    #[test]
    fn flags_override_config() {
        let app = test_app(Flags {
            position: Some(Position::TopLeft),
            max_toasts: Some(2),
            ..Flags::default()
        });

        let toaster = app.toaster().borrow();
        assert_eq!(toaster.position(), Position::TopLeft);
        assert_eq!(toaster.max_toasts(), 2);
        assert!(toaster.is_mounted());
    }

    #[test]
    fn show_messages_respect_capacity() {
        let mut app = test_app(Flags {
            max_toasts: Some(3),
            ..Flags::default()
        });

        for variant in Variant::ALL {
            let _ = app.update(Message::Show(variant));
        }

        assert_eq!(app.toaster().borrow().len(), 3);
        assert!(app.notifier().is_available());
    }

    #[test]
    fn undo_action_restores_and_counts() {
        let mut app = test_app(Flags::default());
        let _ = app.update(Message::ShowWithAction);
        let id = app.toaster().borrow().ids()[0];

        let _ = app.update(Message::Toast(toast::Message::Action(id)));
        let _ = app.update(Message::Toast(toast::Message::Action(id)));

        assert_eq!(app.undone.get(), 1);
        let toaster = app.toaster().borrow();
        assert!(!toaster.contains(id));
        assert_eq!(toaster.len(), 1);
    }

    #[test]
    fn cycle_position_walks_all_anchors() {
        let mut app = test_app(Flags {
            position: Some(Position::BottomRight),
            ..Flags::default()
        });

        let _ = app.update(Message::CyclePosition);
        assert_eq!(app.toaster().borrow().position(), Position::TopLeft);
    }

    #[test]
    fn dropping_app_unmounts_toaster() {
        let app = test_app(Flags::default());
        let notifier = app.notifier().clone();
        drop(app);

        assert!(notifier.notify("after shutdown").is_none());
    }

    #[test]
    fn capitalize_handles_empty_and_ascii() {
        assert_eq!(capitalize("info"), "Info");
        assert_eq!(capitalize(""), "");
    }
}
