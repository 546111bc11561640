//! Application controller and coordination layer
//!
//! The controller owns the menu, the form buffers, and the transient
//! presentation state. It translates semantic key presses into
//! collection operations and turns every outcome into a user-facing
//! notice. All handling is synchronous: one key press, one complete
//! state transition.

use crate::app::state::{ListFlash, Notice, Screen};
use crate::config::Settings;
use crate::domain::{Course, ItemDraft, Menu};
use crate::input::KeyPress;
use tracing::{debug, info, warn};

/// Fields on the add/remove screen, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Course,
    Price,
    RemoveName,
}

impl FormField {
    /// Returns the next field in focus order, wrapping around
    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Course,
            FormField::Course => FormField::Price,
            FormField::Price => FormField::RemoveName,
            FormField::RemoveName => FormField::Name,
        }
    }

    /// Returns the previous field in focus order, wrapping around
    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::RemoveName,
            FormField::Description => FormField::Name,
            FormField::Course => FormField::Description,
            FormField::Price => FormField::Course,
            FormField::RemoveName => FormField::Price,
        }
    }

    /// Returns the label shown next to this field
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Dish Name",
            FormField::Description => "Description",
            FormField::Course => "Course",
            FormField::Price => "Price",
            FormField::RemoveName => "Remove Dish by Name",
        }
    }
}

/// Edit buffers and focus for the add/remove screen
///
/// The remove-by-name input lives on the same screen as the add form,
/// so its buffer lives here too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
    pub remove_name: String,
    pub focus: FormField,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            course: Course::Starter,
            price: String::new(),
            remove_name: String::new(),
            focus: FormField::Name,
        }
    }
}

impl AddForm {
    /// Clears the add inputs after a successful add
    ///
    /// The course selection and the remove buffer are kept: the user
    /// typically adds several dishes of the same course in a row.
    fn clear_add_inputs(&mut self) {
        self.name.clear();
        self.description.clear();
        self.price.clear();
    }

    /// Returns the text buffer under focus, if the focused field has one
    fn focused_buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Price => Some(&mut self.price),
            FormField::RemoveName => Some(&mut self.remove_name),
            FormField::Course => None,
        }
    }
}

/// Main application controller
///
/// Holds all mutable state of the running app. The UI reads from it
/// every frame; the event loop feeds it one `KeyPress` at a time.
pub struct AppController {
    settings: Settings,
    menu: Menu,
    screen: Screen,
    form: AddForm,
    notice: Option<Notice>,
    flash: ListFlash,
    running: bool,
}

impl AppController {
    /// Creates a controller with an empty menu on the home screen
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            menu: Menu::new(),
            screen: Screen::Home,
            form: AddForm::default(),
            notice: None,
            flash: ListFlash::new(),
            running: true,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn form(&self) -> &AddForm {
        &self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True while the post-change list highlight should be drawn
    pub fn list_flash_active(&self) -> bool {
        self.flash.is_active()
    }

    /// False once the user has quit
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Processes one semantic key press
    ///
    /// A visible notice is modal: the first key press only dismisses
    /// it. Ctrl+C quits regardless.
    pub fn handle_key(&mut self, key: KeyPress) {
        if key == KeyPress::Interrupt {
            self.running = false;
            return;
        }

        if self.notice.take().is_some() {
            debug!("notice dismissed");
            return;
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::AddItem => self.handle_form_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyPress) {
        match key {
            KeyPress::Char('a') | KeyPress::Char('A') => {
                self.screen = Screen::AddItem;
                self.form.focus = FormField::Name;
            }
            KeyPress::Char('c') | KeyPress::Char('C') => self.sort_by_course(),
            KeyPress::Char('p') | KeyPress::Char('P') => self.sort_by_price(),
            KeyPress::Char('q') | KeyPress::Char('Q') | KeyPress::Escape => {
                self.running = false;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyPress) {
        match key {
            KeyPress::Escape => {
                self.screen = Screen::Home;
            }
            KeyPress::Tab | KeyPress::Down => {
                self.form.focus = self.form.focus.next();
            }
            KeyPress::BackTab | KeyPress::Up => {
                self.form.focus = self.form.focus.prev();
            }
            KeyPress::Left if self.form.focus == FormField::Course => {
                self.form.course = self.form.course.prev();
            }
            KeyPress::Right if self.form.focus == FormField::Course => {
                self.form.course = self.form.course.next();
            }
            KeyPress::Enter => {
                if self.form.focus == FormField::RemoveName {
                    self.submit_remove();
                } else {
                    self.submit_add();
                }
            }
            KeyPress::Char(c) => {
                if let Some(buffer) = self.form.focused_buffer_mut() {
                    buffer.push(c);
                }
            }
            KeyPress::Backspace => {
                if let Some(buffer) = self.form.focused_buffer_mut() {
                    buffer.pop();
                }
            }
            _ => {}
        }
    }

    fn submit_add(&mut self) {
        let draft = ItemDraft {
            name: self.form.name.clone(),
            description: self.form.description.clone(),
            course: self.form.course,
            price_text: self.form.price.clone(),
        };

        match self.menu.add(&draft) {
            Ok(id) => {
                info!(%id, name = %draft.name.trim(), "menu item added");
                self.form.clear_add_inputs();
                self.flash.trigger();
                self.notice = Some(Notice::success("Menu item added."));
            }
            Err(error) => {
                warn!(%error, "add rejected");
                self.notice = Some(Notice::error(error.to_string()));
            }
        }
    }

    fn submit_remove(&mut self) {
        match self.menu.remove_by_name(&self.form.remove_name) {
            Ok(removed) => {
                info!(id = %removed.id, name = %removed.name, "menu item removed");
                self.form.remove_name.clear();
                self.flash.trigger();
                self.notice = Some(Notice::success("Item removed successfully."));
            }
            Err(error) => {
                warn!(%error, "remove rejected");
                self.notice = Some(Notice::error(error.to_string()));
            }
        }
    }

    fn sort_by_course(&mut self) {
        self.menu.sort_by_course();
        info!("menu sorted by course");
    }

    fn sort_by_price(&mut self) {
        self.menu.sort_by_price();
        info!("menu sorted by price");
    }
}
