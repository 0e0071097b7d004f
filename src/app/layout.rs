//! Window layout: where every panel and control sits for a given client size.
//!
//! Pure geometry so it can be tested off-Windows; the host positions its
//! child windows and the renderer draws its panels from the same rectangles.

use crate::model::constants::DRAG_STRIP_HEIGHT;
use crate::model::geometry::{Rect, Size};

const OUTER: i32 = 15;
const SPACING: i32 = 15;
const TITLE_INSET: i32 = 10;
const BUTTON: i32 = 32;
const TITLE_WIDTH: i32 = 160;
const PANEL_PADDING: i32 = 10;
const HEADER_HEIGHT: i32 = 24;
const ADD_BUTTON_HEIGHT: i32 = 44;
const SPLITTER: i32 = 1;

const DETAILS_PADDING: i32 = 20;
const BANNER_HEIGHT: i32 = 200;
const ICON_BOX: i32 = 80;
const ICON: i32 = 40;
const PLAY_WIDTH: i32 = 160;
const PLAY_HEIGHT: i32 = 50;

pub const FAVORITE_BUTTON: i32 = 40;
pub const FAVORITE_ADD_BUTTON: i32 = 32;
const FAVORITE_SPACING: i32 = 8;

/// Library list row height.
pub const LIST_ITEM_HEIGHT: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowLayout {
    pub client: Size,
    pub title: Rect,
    /// Strip between the title and the window buttons holding favorites.
    pub favorites_bar: Rect,
    pub settings_button: Rect,
    pub minimize_button: Rect,
    pub close_button: Rect,

    pub library_panel: Rect,
    pub library_header: Rect,
    pub list: Rect,
    pub add_button: Rect,

    pub details_panel: Rect,
    pub details_header: Rect,
    pub details_body: Rect,
    pub banner: Rect,
    pub icon: Rect,
    pub name: Rect,
    pub path: Rect,
    pub play_button: Rect,
}

impl WindowLayout {
    pub fn compute(client: Size) -> Self {
        let w = client.width.max(0);
        let h = client.height.max(0);

        // Title bar, vertically centred in the drag strip
        let bar_y = OUTER.min((DRAG_STRIP_HEIGHT - BUTTON) / 2 + 1).max(0);
        let title = Rect::new(OUTER + TITLE_INSET, bar_y, TITLE_WIDTH, BUTTON);
        let close_button = Rect::new(w - OUTER - TITLE_INSET - BUTTON, bar_y, BUTTON, BUTTON);
        let minimize_button = Rect::new(close_button.x - SPACING - BUTTON, bar_y, BUTTON, BUTTON);
        let settings_button = Rect::new(minimize_button.x - SPACING - BUTTON, bar_y, BUTTON, BUTTON);
        let fav_x = title.right() + SPACING;
        let favorites_bar = Rect::new(
            fav_x,
            bar_y + (BUTTON - FAVORITE_BUTTON) / 2,
            (settings_button.x - SPACING - fav_x).max(0),
            FAVORITE_BUTTON,
        );

        // Content: 30% library, 70% details
        let content_top = bar_y + BUTTON + SPACING;
        let content_height = (h - content_top - OUTER).max(0);
        let inner_width = (w - 2 * OUTER - SPLITTER).max(0);
        let left_width = inner_width * 3 / 10;

        let library_panel = Rect::new(OUTER, content_top, left_width, content_height);
        let library_header = Self::header(library_panel);
        let add_button = Rect::new(
            library_panel.x + PANEL_PADDING,
            library_panel.bottom() - PANEL_PADDING - ADD_BUTTON_HEIGHT,
            (library_panel.width - 2 * PANEL_PADDING).max(0),
            ADD_BUTTON_HEIGHT,
        );
        let list_top = library_header.bottom() + SPACING;
        let list = Rect::new(
            library_panel.x + PANEL_PADDING,
            list_top,
            add_button.width,
            (add_button.y - SPACING - list_top).max(0),
        );

        let details_panel = Rect::new(
            library_panel.right() + SPLITTER,
            content_top,
            inner_width - left_width,
            content_height,
        );
        let details_header = Self::header(details_panel);
        let body_top = details_header.bottom() + SPACING;
        let details_body = Rect::new(
            details_panel.x + PANEL_PADDING,
            body_top,
            (details_panel.width - 2 * PANEL_PADDING).max(0),
            (details_panel.bottom() - PANEL_PADDING - body_top).max(0),
        );

        let banner = Rect::new(
            details_body.x + DETAILS_PADDING,
            details_body.y + DETAILS_PADDING,
            (details_body.width - 2 * DETAILS_PADDING).max(0),
            BANNER_HEIGHT,
        );
        let row_top = banner.bottom() + DETAILS_PADDING;
        let icon_offset = (ICON_BOX - ICON) / 2;
        let icon = Rect::new(banner.x + icon_offset, row_top + icon_offset, ICON, ICON);
        let text_x = banner.x + ICON_BOX + DETAILS_PADDING;
        let text_width = (banner.right() - text_x).max(0);
        let name = Rect::new(text_x, row_top, text_width, ICON_BOX / 2);
        let path = Rect::new(text_x, name.bottom(), text_width, ICON_BOX / 2);
        let play_button = Rect::new(
            details_body.x + (details_body.width - PLAY_WIDTH) / 2,
            row_top + ICON_BOX + DETAILS_PADDING,
            PLAY_WIDTH,
            PLAY_HEIGHT,
        );

        Self {
            client: Size::new(w, h),
            title,
            favorites_bar,
            settings_button,
            minimize_button,
            close_button,
            library_panel,
            library_header,
            list,
            add_button,
            details_panel,
            details_header,
            details_body,
            banner,
            icon,
            name,
            path,
            play_button,
        }
    }

    fn header(panel: Rect) -> Rect {
        Rect::new(
            panel.x + PANEL_PADDING,
            panel.y + PANEL_PADDING,
            (panel.width - 2 * PANEL_PADDING).max(0),
            HEADER_HEIGHT,
        )
    }

    /// Slots for `count` favorite buttons followed by the "+" button,
    /// centred in the favorites bar.
    pub fn favorite_slots(&self, count: usize) -> (Vec<Rect>, Rect) {
        let count = count as i32;
        let total = count * (FAVORITE_BUTTON + FAVORITE_SPACING) + FAVORITE_ADD_BUTTON;
        let bar = self.favorites_bar;
        let mut x = bar.x + ((bar.width - total) / 2).max(0);

        let mut slots = Vec::with_capacity(count as usize);
        for _ in 0..count {
            slots.push(Rect::new(x, bar.y, FAVORITE_BUTTON, FAVORITE_BUTTON));
            x += FAVORITE_BUTTON + FAVORITE_SPACING;
        }
        let add = Rect::new(
            x,
            bar.y + (FAVORITE_BUTTON - FAVORITE_ADD_BUTTON) / 2,
            FAVORITE_ADD_BUTTON,
            FAVORITE_ADD_BUTTON,
        );
        (slots, add)
    }
}
