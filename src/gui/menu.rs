//! Menu Component
//!
//! A list of text entries rendered onto a surface the size of the menu. The
//! selected entry is drawn in the active color and scrolled to the vertical
//! center, so long menus work on a 16 bottle high display.
//! Each entry can carry a callback (a submenu, starting a game, quitting...).

use crate::color::{Color, BLACK, CYAN, DEFAULT_BRIGHTNESS, WHITE};
use crate::surface::Surface;
use crate::text::atlas::{CELL_PITCH, GLYPH_SIZE};
use crate::text::{Font, GlyphAtlas};

/// Something to run when an entry is activated
pub type Callback = Box<dyn FnMut()>;

/// Colors used to draw a menu
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Normal entry text color
    pub color: Color,

    /// Selected entry text color
    pub active: Color,

    /// Background color
    pub background: Color,

    /// Brightness applied to all of the above
    pub brightness: f32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            color: WHITE,
            active: CYAN,
            background: BLACK,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

/// A menu entry with its pre-rendered label
struct MenuEntry {
    text: String,
    normal: Surface,
    highlighted: Surface,
    callback: Option<Callback>,
}

/// A stateful text menu
///
/// The composed surface is cached. Changing entries or the selection drops
/// the cache, [`Menu::update`] rebuilds it and [`Menu::render`] hands it out.
///
/// # Example
///
/// ```rust
/// use mlgame::gui::Menu;
///
/// let mut menu = Menu::new(40, 16);
/// menu.add_entry("new game", None);
/// menu.add_entry("quit", None);
///
/// menu.select_next();
/// menu.update();
/// let surface = menu.render().unwrap();
/// assert_eq!(surface.width(), 40);
/// ```
pub struct Menu {
    entries: Vec<MenuEntry>,
    width: u32,
    height: u32,
    style: MenuStyle,
    atlas: GlyphAtlas,
    selected: Option<usize>,
    cache: Option<Surface>,
}

impl Menu {
    /// Creates an empty menu with default styling and the built-in font
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_style(width, height, MenuStyle::default(), GlyphAtlas::builtin())
    }

    /// Creates an empty menu with custom styling
    pub fn with_style(width: u32, height: u32, style: MenuStyle, atlas: GlyphAtlas) -> Self {
        Menu {
            entries: Vec::new(),
            width,
            height,
            style,
            atlas,
            selected: None,
            cache: None,
        }
    }

    /// Appends an entry and returns its index
    ///
    /// The first entry added becomes the selected one.
    pub fn add_entry(&mut self, text: &str, callback: Option<Callback>) -> usize {
        let normal = self.render_label(text, self.style.color);
        let highlighted = self.render_label(text, self.style.active);

        self.entries.push(MenuEntry {
            text: text.to_string(),
            normal,
            highlighted,
            callback,
        });

        if self.entries.len() == 1 {
            self.selected = Some(0);
        }
        self.cache = None;

        self.entries.len() - 1
    }

    /// Removes the entry at `index`, returns false if there is none
    ///
    /// If the last entry was selected, the selection moves up by one.
    pub fn del_entry(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);

        if self.selected == Some(self.entries.len()) {
            self.selected = self.entries.len().checked_sub(1);
        }
        self.cache = None;
        true
    }

    /// Selects the entry at `index` if it exists
    pub fn select_entry(&mut self, index: usize) {
        if index < self.entries.len() {
            self.selected = Some(index);
            self.cache = None;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        if let Some(selected) = self.selected {
            self.select_entry((selected + 1) % self.entries.len());
        }
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if let Some(selected) = self.selected {
            if selected == 0 {
                self.select_entry(self.entries.len() - 1);
            } else {
                self.select_entry(selected - 1);
            }
        }
    }

    /// Runs the callback of the selected entry
    ///
    /// Returns whether a callback ran.
    pub fn activate(&mut self) -> bool {
        let Some(selected) = self.selected else {
            return false;
        };
        match self.entries[selected].callback.as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the menu surface unless a cached one is still valid
    pub fn update(&mut self) {
        if self.cache.is_some() {
            return;
        }

        let mut cache = Surface::new(self.width, self.height);
        cache.fill(self.style.background, self.style.brightness);

        if let Some(selected) = self.selected {
            let mut list = Surface::new(self.width, self.entries.len() as u32 * CELL_PITCH);
            list.fill(self.style.background, self.style.brightness);

            for (i, entry) in self.entries.iter().enumerate() {
                let label = if i == selected {
                    &entry.highlighted
                } else {
                    &entry.normal
                };
                let x = self.width as i32 / 2 - label.width() as i32 / 2;
                let y = (i as u32 * CELL_PITCH) as i32;
                list.blit(label, (x, y));
            }

            // keep the selected entry in the vertical center
            let offset = self.height as i32 / 2
                - GLYPH_SIZE as i32 / 2
                - (selected as u32 * CELL_PITCH) as i32;
            cache.blit(&list, (0, offset));
        }

        self.cache = Some(cache);
    }

    /// The menu surface as of the last [`Menu::update`]
    pub fn render(&self) -> Option<&Surface> {
        self.cache.as_ref()
    }

    fn render_label(&self, text: &str, color: Color) -> Surface {
        Font::new(&self.atlas, text, color, self.style.background)
            .with_brightness(self.style.brightness)
            .update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::get_color;
    use std::cell::Cell;
    use std::rc::Rc;

    fn three_entry_menu() -> Menu {
        let mut menu = Menu::new(40, 40);
        menu.add_entry("a", None);
        menu.add_entry("b", None);
        menu.add_entry("c", None);
        menu
    }

    #[test]
    fn test_first_entry_is_selected() {
        let mut menu = Menu::new(40, 16);
        assert_eq!(menu.selected(), None);

        assert_eq!(menu.add_entry("new game", None), 0);
        assert_eq!(menu.add_entry("quit", None), 1);

        assert_eq!(menu.selected(), Some(0));
        assert_eq!(menu.label(1), Some("quit"));
    }

    #[test]
    fn test_delete_selected_last_entry_moves_selection_up() {
        let mut menu = three_entry_menu();
        menu.select_entry(2);

        assert!(menu.del_entry(2));

        assert_eq!(menu.len(), 2);
        assert_eq!(menu.selected(), Some(1));
        assert_eq!(menu.label(2), None);
    }

    #[test]
    fn test_delete_all_entries_clears_selection() {
        let mut menu = Menu::new(10, 10);
        menu.add_entry("x", None);

        assert!(menu.del_entry(0));
        assert!(menu.is_empty());
        assert_eq!(menu.selected(), None);
    }

    #[test]
    fn test_delete_out_of_range_is_ignored() {
        let mut menu = three_entry_menu();
        assert!(!menu.del_entry(3));
        assert_eq!(menu.len(), 3);
    }

    #[test]
    fn test_select_entry_zero_and_out_of_range() {
        let mut menu = three_entry_menu();
        menu.select_entry(2);
        menu.select_entry(0);
        assert_eq!(menu.selected(), Some(0));

        menu.select_entry(3);
        assert_eq!(menu.selected(), Some(0));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = three_entry_menu();

        menu.select_previous();
        assert_eq!(menu.selected(), Some(2));

        menu.select_next();
        assert_eq!(menu.selected(), Some(0));
    }

    #[test]
    fn test_render_requires_update() {
        let mut menu = three_entry_menu();
        assert!(menu.render().is_none());

        menu.update();
        assert!(menu.render().is_some());

        menu.select_next();
        assert!(menu.render().is_none());
    }

    #[test]
    fn test_update_centers_selected_entry() {
        let mut menu = three_entry_menu();
        menu.update();
        let surface = menu.render().unwrap();

        let active = get_color(CYAN, DEFAULT_BRIGHTNESS);
        let normal = get_color(WHITE, DEFAULT_BRIGHTNESS);

        // 'a' is 5 wide, centered at x = 20 - 2, its top row lands on y = 40 / 2 - 2
        // and reads .###.
        assert_eq!(surface.get((18, 18)), Some(BLACK));
        assert_eq!(surface.get((19, 18)), Some(active));
        assert_eq!(surface.get((21, 18)), Some(active));
        // 'b' follows six rows below in the normal color, top row ####.
        assert_eq!(surface.get((18, 24)), Some(normal));
        assert_eq!(surface.get((21, 24)), Some(normal));
        assert_eq!(surface.get((22, 24)), Some(BLACK));
    }

    #[test]
    fn test_update_scrolls_with_selection() {
        let mut menu = three_entry_menu();
        menu.select_entry(2);
        menu.update();
        let surface = menu.render().unwrap();

        let active = get_color(CYAN, DEFAULT_BRIGHTNESS);
        // 'c' top row reads .####
        assert_eq!(surface.get((19, 18)), Some(active));
        assert_eq!(surface.get((22, 18)), Some(active));
        // 'a' scrolled up to y = 18 - 12
        assert_eq!(surface.get((19, 6)), Some(get_color(WHITE, DEFAULT_BRIGHTNESS)));
    }

    #[test]
    fn test_empty_menu_renders_background() {
        let mut menu = Menu::new(8, 8);
        menu.update();

        let surface = menu.render().unwrap();
        assert!(surface.pixels().iter().all(|p| *p == BLACK));
    }

    #[test]
    fn test_activate_runs_selected_callback() {
        let hits = Rc::new(Cell::new(0));
        let mut menu = Menu::new(40, 16);
        menu.add_entry("options", None);
        let counter = Rc::clone(&hits);
        menu.add_entry("quit", Some(Box::new(move || counter.set(counter.get() + 1))));

        assert!(!menu.activate());
        menu.select_entry(1);
        assert!(menu.activate());
        assert!(menu.activate());

        assert_eq!(hits.get(), 2);
    }
}
