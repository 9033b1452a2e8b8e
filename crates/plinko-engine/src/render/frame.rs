use glam::Vec2;

/// A filled circle, optionally with a centered text label (particle names).
#[derive(Debug, Clone)]
pub struct CircleInstance {
    pub pos: Vec2,
    pub radius: f32,
    pub color: [u8; 3],
    pub label: Option<String>,
}

/// A filled axis-aligned rectangle, positioned by its center.
#[derive(Debug, Clone, Copy)]
pub struct RectInstance {
    pub center: Vec2,
    pub size: Vec2,
    pub color: [u8; 3],
}

/// Free-standing text at an absolute position (zone point labels).
#[derive(Debug, Clone)]
pub struct TextLabel {
    pub pos: Vec2,
    pub text: String,
    pub size: f32,
    pub color: [u8; 3],
}

/// Everything the rendering sink needs to paint one frame, in paint order:
/// background, labels, circles, then rects (walls cover settled particles).
#[derive(Debug, Clone, Default)]
pub struct FrameSnapshot {
    pub background: [u8; 3],
    pub labels: Vec<TextLabel>,
    pub circles: Vec<CircleInstance>,
    pub rects: Vec<RectInstance>,
}
