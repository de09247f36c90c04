//! Right-click context menu: subdivision levels 0–3 and Exit.
//!
//! Pure layout and hit-testing over the engine's input snapshots, so the
//! whole interaction runs headless in tests. Drawing emits panel and text
//! primitives for the overlay renderers.

use gasket_core::SubdivisionLevel;
use gasket_engine::coords::{Rect, Vec2};
use gasket_engine::input::{InputFrame, InputState, Key, MouseButton};
use gasket_engine::paint::Color;
use gasket_engine::render::{Panel, TextSpan};
use gasket_engine::text::FontId;

/// Highest level the menu offers. The generator accepts more, but buffers
/// grow as 4^level, so the exposed range stays small.
pub const MAX_MENU_LEVEL: SubdivisionLevel = 3;

const MENU_WIDTH: f32 = 168.0;
const ITEM_HEIGHT: f32 = 24.0;
const SEPARATOR_HEIGHT: f32 = 9.0;
const PADDING: f32 = 6.0;
const MARKER_GUTTER: f32 = 18.0;
const TEXT_SIZE: f32 = 14.0;

/// Request surfaced to the application.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuAction {
    Exit,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ItemId {
    Level(SubdivisionLevel),
    Exit,
}

/// Popup menu state. Level selection is retained across open/close; the
/// application polls [`selected_level`](Self::selected_level) every frame.
pub struct ContextMenu {
    selected_level: SubdivisionLevel,
    /// Top-left corner of the open popup; `None` while closed.
    anchor: Option<Vec2>,
    hovered: Option<ItemId>,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self {
            selected_level: 0,
            anchor: None,
            hovered: None,
        }
    }

    /// Level the user last picked (0 at startup).
    pub fn selected_level(&self) -> SubdivisionLevel {
        self.selected_level
    }

    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    /// While open, the menu owns pointer input; camera drag must not react.
    pub fn wants_pointer(&self) -> bool {
        self.is_open()
    }

    /// While open, the menu owns the keyboard (Escape dismissal); global
    /// bindings like the quit key must not react.
    pub fn wants_keyboard(&self) -> bool {
        self.is_open()
    }

    /// Processes one frame of input.
    pub fn handle_input(&mut self, state: &InputState, frame: &InputFrame) -> Option<MenuAction> {
        if self.is_open() && frame.keys_pressed.contains(&Key::Escape) {
            self.close();
            return None;
        }

        // Right press opens (or moves) the popup at the pointer.
        if frame.buttons_pressed.contains(&MouseButton::Right) {
            if let Some((x, y)) = state.pointer_pos {
                self.anchor = Some(Vec2::new(x, y));
                self.hovered = None;
            }
            return None;
        }

        let Some(anchor) = self.anchor else {
            return None;
        };

        let pointer = state.pointer_pos.map(|(x, y)| Vec2::new(x, y));
        self.hovered = pointer.and_then(|p| hit_item(anchor, p));

        if frame.buttons_pressed.contains(&MouseButton::Left) {
            match self.hovered {
                Some(ItemId::Level(level)) => {
                    self.selected_level = level;
                    self.close();
                }
                Some(ItemId::Exit) => {
                    self.close();
                    return Some(MenuAction::Exit);
                }
                None => {
                    // Clicks inside the frame but off every item (padding,
                    // separator) keep the popup; anything else dismisses.
                    if pointer.is_none_or(|p| !frame_rect(anchor).contains(p)) {
                        self.close();
                    }
                }
            }
        }

        None
    }

    fn close(&mut self) {
        self.anchor = None;
        self.hovered = None;
    }

    /// Emits the popup's overlay primitives. No-op while closed.
    pub fn draw(&self, panels: &mut Vec<Panel>, text: &mut Vec<TextSpan>, font: FontId) {
        let Some(anchor) = self.anchor else {
            return;
        };

        let frame = frame_rect(anchor);

        // 1px border drawn as a slightly larger panel behind the body.
        panels.push(Panel {
            rect: Rect::new(
                frame.origin.x - 1.0,
                frame.origin.y - 1.0,
                frame.size.x + 2.0,
                frame.size.y + 2.0,
            ),
            color: Color::from_srgb_u8(82, 82, 94, 255),
        });
        panels.push(Panel {
            rect: frame,
            color: Color::from_srgb_u8(28, 28, 34, 245),
        });

        for (item, rect) in item_rects(anchor) {
            if self.hovered == Some(item) {
                panels.push(Panel {
                    rect,
                    color: Color::from_srgb_u8(62, 84, 134, 220),
                });
            }

            if let ItemId::Level(level) = item {
                if level == self.selected_level {
                    // Marker square in the gutter, in place of a glyph check.
                    panels.push(Panel {
                        rect: Rect::new(
                            rect.origin.x + (MARKER_GUTTER - 6.0) / 2.0,
                            rect.origin.y + (ITEM_HEIGHT - 6.0) / 2.0,
                            6.0,
                            6.0,
                        ),
                        color: Color::from_srgb_u8(120, 170, 255, 255),
                    });
                }
            }

            let label = match item {
                ItemId::Level(level) => format!("Level {level}"),
                ItemId::Exit => "Exit (Q)".to_string(),
            };
            text.push(TextSpan {
                text: label,
                origin: Vec2::new(
                    rect.origin.x + MARKER_GUTTER,
                    rect.origin.y + (ITEM_HEIGHT - TEXT_SIZE) / 2.0,
                ),
                size: TEXT_SIZE,
                color: Color::from_srgb_u8(230, 230, 235, 255),
                font,
            });
        }

        // Separator line between the level block and Exit.
        let sep_y = anchor.y + PADDING
            + (MAX_MENU_LEVEL + 1) as f32 * ITEM_HEIGHT
            + (SEPARATOR_HEIGHT - 1.0) / 2.0;
        panels.push(Panel {
            rect: Rect::new(frame.origin.x + PADDING, sep_y, frame.size.x - 2.0 * PADDING, 1.0),
            color: Color::from_srgb_u8(82, 82, 94, 255),
        });
    }
}

impl Default for ContextMenu {
    fn default() -> Self {
        Self::new()
    }
}

fn frame_rect(anchor: Vec2) -> Rect {
    let items = (MAX_MENU_LEVEL + 2) as f32; // levels plus Exit
    Rect::new(
        anchor.x,
        anchor.y,
        MENU_WIDTH,
        2.0 * PADDING + items * ITEM_HEIGHT + SEPARATOR_HEIGHT,
    )
}

fn item_rects(anchor: Vec2) -> impl Iterator<Item = (ItemId, Rect)> {
    (0..=MAX_MENU_LEVEL + 1).map(move |i| {
        let item = if i <= MAX_MENU_LEVEL {
            ItemId::Level(i)
        } else {
            ItemId::Exit
        };
        let mut y = anchor.y + PADDING + i as f32 * ITEM_HEIGHT;
        if item == ItemId::Exit {
            y += SEPARATOR_HEIGHT;
        }
        (item, Rect::new(anchor.x + 1.0, y, MENU_WIDTH - 2.0, ITEM_HEIGHT))
    })
}

fn hit_item(anchor: Vec2, p: Vec2) -> Option<ItemId> {
    item_rects(anchor).find(|(_, rect)| rect.contains(p)).map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(state: &mut InputState, x: f32, y: f32) {
        state.pointer_pos = Some((x, y));
    }

    fn press(frame: &mut InputFrame, button: MouseButton) {
        frame.buttons_pressed.insert(button);
    }

    fn open_at(menu: &mut ContextMenu, x: f32, y: f32) {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        pointer(&mut state, x, y);
        press(&mut frame, MouseButton::Right);
        menu.handle_input(&state, &frame);
        assert!(menu.is_open());
    }

    fn click_at(menu: &mut ContextMenu, x: f32, y: f32) -> Option<MenuAction> {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        pointer(&mut state, x, y);
        press(&mut frame, MouseButton::Left);
        menu.handle_input(&state, &frame)
    }

    fn center_of(item: ItemId, anchor: Vec2) -> Vec2 {
        let (_, rect) = item_rects(anchor).find(|(i, _)| *i == item).unwrap();
        Vec2::new(
            rect.origin.x + rect.size.x / 2.0,
            rect.origin.y + rect.size.y / 2.0,
        )
    }

    #[test]
    fn right_click_opens_at_the_pointer() {
        let mut menu = ContextMenu::new();
        assert!(!menu.is_open());
        open_at(&mut menu, 120.0, 80.0);
        assert_eq!(menu.anchor, Some(Vec2::new(120.0, 80.0)));
    }

    #[test]
    fn clicking_a_level_selects_it_and_closes() {
        let mut menu = ContextMenu::new();
        open_at(&mut menu, 100.0, 100.0);

        let p = center_of(ItemId::Level(2), Vec2::new(100.0, 100.0));
        assert_eq!(click_at(&mut menu, p.x, p.y), None);

        assert_eq!(menu.selected_level(), 2);
        assert!(!menu.is_open());
    }

    #[test]
    fn clicking_outside_dismisses_without_changing_the_level() {
        let mut menu = ContextMenu::new();
        open_at(&mut menu, 100.0, 100.0);

        click_at(&mut menu, 500.0, 500.0);

        assert_eq!(menu.selected_level(), 0);
        assert!(!menu.is_open());
    }

    #[test]
    fn escape_dismisses() {
        let mut menu = ContextMenu::new();
        open_at(&mut menu, 100.0, 100.0);

        let state = InputState::default();
        let mut frame = InputFrame::default();
        frame.keys_pressed.insert(Key::Escape);
        menu.handle_input(&state, &frame);

        assert!(!menu.is_open());
    }

    #[test]
    fn exit_item_surfaces_the_action() {
        let mut menu = ContextMenu::new();
        open_at(&mut menu, 100.0, 100.0);

        let p = center_of(ItemId::Exit, Vec2::new(100.0, 100.0));
        assert_eq!(click_at(&mut menu, p.x, p.y), Some(MenuAction::Exit));
        assert!(!menu.is_open());
    }

    #[test]
    fn capture_flags_track_the_open_state() {
        let mut menu = ContextMenu::new();
        assert!(!menu.wants_pointer());
        assert!(!menu.wants_keyboard());

        open_at(&mut menu, 50.0, 50.0);
        assert!(menu.wants_pointer());
        assert!(menu.wants_keyboard());
    }

    #[test]
    fn reselecting_the_same_level_keeps_it() {
        let mut menu = ContextMenu::new();
        open_at(&mut menu, 100.0, 100.0);
        let p = center_of(ItemId::Level(2), Vec2::new(100.0, 100.0));
        click_at(&mut menu, p.x, p.y);

        open_at(&mut menu, 100.0, 100.0);
        click_at(&mut menu, p.x, p.y);

        assert_eq!(menu.selected_level(), 2);
    }
}
