// Hero parallax: two background layers drift in opposite directions as the
// pointer moves across the hero block

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pixel travel of each layer when the pointer sits on the hero's edge,
/// measured from its center.
pub const LAYER_FACTORS: [f64; 2] = [20.0, -30.0];

/// Pointer position relative to the rect's center, each axis in `[-0.5, 0.5]`
/// while the pointer is inside. `None` for an empty rect.
pub fn relative_offset(client_x: f64, client_y: f64, rect: &Rect) -> Option<(f64, f64)> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x = (client_x - rect.left) / rect.width - 0.5;
    let y = (client_y - rect.top) / rect.height - 0.5;
    Some((x, y))
}

/// CSS transforms for both layers, front layer first.
pub fn layer_transforms(client_x: f64, client_y: f64, rect: &Rect) -> Option<[String; 2]> {
    let (x, y) = relative_offset(client_x, client_y, rect)?;
    let translate = |factor: f64| format!("translate({}px, {}px)", x * factor, y * factor);
    Some([translate(LAYER_FACTORS[0]), translate(LAYER_FACTORS[1])])
}
