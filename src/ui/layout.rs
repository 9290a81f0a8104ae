use ratatui::layout::Rect;

/// Rows taken by one counter panel: border, content line, border.
pub const PANEL_HEIGHT: u16 = 3;

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

/// Split the body into `count` stacked panels of `PANEL_HEIGHT` rows, top
/// down. Panels that don't fit get zero height.
pub fn panel_rects(body: Rect, count: usize) -> Vec<Rect> {
    let mut y = body.y;
    let bottom = body.y.saturating_add(body.height);
    (0..count)
        .map(|_| {
            let height = if bottom.saturating_sub(y) >= PANEL_HEIGHT {
                PANEL_HEIGHT
            } else {
                0
            };
            let rect = Rect {
                x: body.x,
                y,
                width: body.width,
                height,
            };
            y += height;
            rect
        })
        .collect()
}
