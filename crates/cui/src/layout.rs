use arcanum_core::{SpreadMode, Theme};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

pub const TILE_W: u16 = 12;
pub const TILE_H: u16 = 4;
const TOOLBAR_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panes {
    pub header: Rect,
    pub toolbar: Rect,
    pub grid: Rect,
    pub context: Rect,
    pub prompt: Rect,
    pub log: Rect,
    pub footer: Rect,
}

pub fn panes(area: Rect) -> Panes {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(root[2]);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(8),
        ])
        .split(body[1]);
    Panes {
        header: root[0],
        toolbar: root[1],
        grid: body[0],
        context: side[0],
        prompt: side[1],
        log: side[2],
        footer: root[3],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Mode(SpreadMode),
    Shuffle,
    Random,
    Names,
    Theme,
    Generate,
    Copy,
}

pub const TOOLBAR: [ToolbarButton; 10] = [
    ToolbarButton::Mode(SpreadMode::Single),
    ToolbarButton::Mode(SpreadMode::ThreeCard),
    ToolbarButton::Mode(SpreadMode::CelticCross),
    ToolbarButton::Mode(SpreadMode::Astrological),
    ToolbarButton::Shuffle,
    ToolbarButton::Random,
    ToolbarButton::Names,
    ToolbarButton::Theme,
    ToolbarButton::Generate,
    ToolbarButton::Copy,
];

pub fn toolbar_label(button: ToolbarButton, theme: Theme, show_names: bool) -> String {
    match button {
        ToolbarButton::Mode(mode) => format!("[{}]", mode.limit()),
        ToolbarButton::Shuffle => "[s Mezclar]".to_string(),
        ToolbarButton::Random => "[r Al azar]".to_string(),
        ToolbarButton::Names => {
            let mark = if show_names { "x" } else { " " };
            format!("[n Nombres {mark}]")
        }
        ToolbarButton::Theme => format!("[t {}]", theme.icon()),
        ToolbarButton::Generate => "[g Generar]".to_string(),
        ToolbarButton::Copy => "[y Copiar]".to_string(),
    }
}

/// Screen rectangles of each toolbar button, left to right, clipped to `area`.
pub fn toolbar_hits(area: Rect, theme: Theme, show_names: bool) -> Vec<(ToolbarButton, Rect)> {
    let mut x = area.x;
    let mut hits = Vec::with_capacity(TOOLBAR.len());
    for button in TOOLBAR {
        let width = toolbar_label(button, theme, show_names).width() as u16;
        if x >= area.right() {
            break;
        }
        let clipped = width.min(area.right() - x);
        hits.push((button, Rect::new(x, area.y, clipped, 1)));
        x = x.saturating_add(width + TOOLBAR_GAP);
    }
    hits
}

/// Tile placement for the card grid inside a bordered pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub inner: Rect,
    pub cols: usize,
    pub visible_rows: usize,
    pub scroll_row: usize,
    pub total: usize,
}

impl GridGeometry {
    pub fn new(pane: Rect, total: usize, scroll_row: usize) -> Self {
        let inner = Rect::new(
            pane.x.saturating_add(1),
            pane.y.saturating_add(1),
            pane.width.saturating_sub(2),
            pane.height.saturating_sub(2),
        );
        let cols = usize::from((inner.width / TILE_W).max(1));
        let visible_rows = usize::from((inner.height / TILE_H).max(1));
        let mut geometry = Self {
            inner,
            cols,
            visible_rows,
            scroll_row: 0,
            total,
        };
        geometry.scroll_row = scroll_row.min(geometry.max_scroll());
        geometry
    }

    pub fn rows(&self) -> usize {
        self.total.div_ceil(self.cols)
    }

    pub fn max_scroll(&self) -> usize {
        self.rows().saturating_sub(self.visible_rows)
    }

    pub fn tile_rect(&self, slot: usize) -> Option<Rect> {
        if slot >= self.total {
            return None;
        }
        let row = slot / self.cols;
        let col = slot % self.cols;
        if row < self.scroll_row || row >= self.scroll_row + self.visible_rows {
            return None;
        }
        let x = self.inner.x + (col as u16) * TILE_W;
        let y = self.inner.y + ((row - self.scroll_row) as u16) * TILE_H;
        let rect = Rect::new(x, y, TILE_W, TILE_H).intersection(self.inner);
        (!rect.is_empty()).then_some(rect)
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        if !self.inner.contains(position) {
            return None;
        }
        let col = usize::from((column - self.inner.x) / TILE_W);
        let line = usize::from((row - self.inner.y) / TILE_H);
        if col >= self.cols {
            return None;
        }
        let slot = (self.scroll_row + line) * self.cols + col;
        (slot < self.total).then_some(slot)
    }

    /// Scroll offset that keeps `cursor` on screen, moving as little as possible.
    pub fn scroll_for(&self, cursor: usize) -> usize {
        let row = cursor / self.cols;
        let scroll = if row < self.scroll_row {
            row
        } else if row >= self.scroll_row + self.visible_rows {
            row + 1 - self.visible_rows
        } else {
            self.scroll_row
        };
        scroll.min(self.max_scroll())
    }
}

pub fn detail_rect(area: Rect) -> Rect {
    centered_rect(60, 60, area)
}

/// The `[x]` control drawn on the detail popup's top border.
pub fn detail_close_rect(popup: Rect) -> Rect {
    Rect::new(
        popup.right().saturating_sub(5),
        popup.y,
        3.min(popup.width),
        1,
    )
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(scroll: usize) -> GridGeometry {
        // 10 columns, 3 visible rows inside the border.
        GridGeometry::new(Rect::new(0, 0, 10 * TILE_W + 2, 3 * TILE_H + 2), 78, scroll)
    }

    #[test]
    fn grid_dimensions() {
        let grid = geometry(0);
        assert_eq!(grid.cols, 10);
        assert_eq!(grid.visible_rows, 3);
        assert_eq!(grid.rows(), 8);
        assert_eq!(grid.max_scroll(), 5);
        assert_eq!(geometry(99).scroll_row, 5);
    }

    #[test]
    fn hit_maps_back_to_tile() {
        let grid = geometry(2);
        let rect = grid.tile_rect(23).expect("visible");
        assert_eq!(grid.hit(rect.x, rect.y), Some(23));
        assert_eq!(grid.hit(rect.x + TILE_W - 1, rect.y + TILE_H - 1), Some(23));
        assert_eq!(grid.tile_rect(5), None);
        assert_eq!(grid.hit(0, 0), None);
    }

    #[test]
    fn hit_past_last_card_is_empty() {
        let grid = geometry(5);
        // Row 7 holds slots 70..78; the ninth column of it is empty.
        let y = grid.inner.y + 2 * TILE_H;
        assert_eq!(grid.hit(grid.inner.x + 7 * TILE_W, y), Some(77));
        assert_eq!(grid.hit(grid.inner.x + 8 * TILE_W, y), None);
    }

    #[test]
    fn scroll_follows_cursor() {
        let grid = geometry(0);
        assert_eq!(grid.scroll_for(5), 0);
        assert_eq!(grid.scroll_for(45), 2);
        let scrolled = geometry(4);
        assert_eq!(scrolled.scroll_for(12), 1);
        assert_eq!(scrolled.scroll_for(77), 5);
    }

    #[test]
    fn toolbar_buttons_do_not_overlap() {
        let hits = toolbar_hits(Rect::new(0, 0, 200, 1), Theme::Dark, true);
        assert_eq!(hits.len(), TOOLBAR.len());
        for pair in hits.windows(2) {
            assert!(pair[0].1.right() < pair[1].1.x);
        }
        assert_eq!(hits[0].0, ToolbarButton::Mode(SpreadMode::Single));
    }

    #[test]
    fn close_control_sits_on_popup_border() {
        let popup = detail_rect(Rect::new(0, 0, 100, 40));
        let close = detail_close_rect(popup);
        assert_eq!(close.y, popup.y);
        assert!(popup.contains(Position::new(close.x, close.y)));
    }
}
