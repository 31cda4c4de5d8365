use ratatui::layout::{Constraint, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Regions of the form inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRegions {
    pub tabs: Rect,
    pub input: Rect,
    pub length: Rect,
    pub status: Rect,
    pub result: Rect,
}

/// Split the body top to bottom: tabs, input editor, length selector,
/// status line, then whatever is left for the error or summary panel.
pub fn form_regions(body: Rect) -> FormRegions {
    let [tabs, input, length, status, result] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Percentage(45),
    ])
    .areas(body);
    FormRegions {
        tabs,
        input,
        length,
        status,
        result,
    }
}
