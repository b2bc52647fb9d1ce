// surface.rs - Drawing surface abstraction and a recording implementation

use egui::Color32;

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pixel dimensions of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub const fn square(edge: u32) -> Self {
        Self { width: edge, height: edge }
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::square(20)
    }
}

/// Axis-aligned rectangle in surface pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// The rectangle covering a whole surface.
    pub const fn covering(size: SurfaceSize) -> Self {
        Self { x: 0, y: 0, width: size.width, height: size.height }
    }

    pub fn contains_rect(&self, other: &PixelRect) -> bool {
        let right = |r: &PixelRect| u64::from(r.x) + u64::from(r.width);
        let bottom = |r: &PixelRect| u64::from(r.y) + u64::from(r.height);
        other.x >= self.x
            && other.y >= self.y
            && right(other) <= right(self)
            && bottom(other) <= bottom(self)
    }
}

/// A rectangular pixel canvas that can be cleared and filled.
pub trait Surface {
    fn size(&self) -> SurfaceSize;
    fn clear(&mut self, region: PixelRect);
    fn fill_rect(&mut self, rect: PixelRect, color: Color32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(PixelRect),
    Fill(PixelRect, Color32),
}

/// Surface that records draw calls so they can be replayed later.
///
/// A clear covering the whole surface discards everything recorded before
/// it, so the list only ever holds the latest frame.
#[derive(Debug, Clone)]
pub struct DrawList {
    size: SurfaceSize,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(size: SurfaceSize) -> Self {
        Self { size, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for command in &self.commands {
            match *command {
                DrawCommand::Clear(region) => target.clear(region),
                DrawCommand::Fill(rect, color) => target.fill_rect(rect, color),
            }
        }
    }
}

impl Surface for DrawList {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self, region: PixelRect) {
        if region.contains_rect(&PixelRect::covering(self.size)) {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear(region));
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color32) {
        self.commands.push(DrawCommand::Fill(rect, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_clear_drops_previous_frame() {
        let size = SurfaceSize::new(40, 20);
        let mut list = DrawList::new(size);
        let cell = PixelRect { x: 0, y: 0, width: 20, height: 20 };

        list.fill_rect(cell, Color32::RED);
        list.clear(PixelRect::covering(size));
        list.fill_rect(cell, Color32::BLUE);

        assert_eq!(
            list.commands(),
            &[DrawCommand::Clear(PixelRect::covering(size)), DrawCommand::Fill(cell, Color32::BLUE)]
        );
    }

    #[test]
    fn partial_clear_keeps_history() {
        let mut list = DrawList::new(SurfaceSize::new(40, 20));
        let cell = PixelRect { x: 20, y: 0, width: 20, height: 20 };

        list.fill_rect(cell, Color32::RED);
        list.clear(cell);

        assert_eq!(list.commands().len(), 2);
    }

    #[test]
    fn contains_rect_near_u32_max() {
        let whole = PixelRect::covering(SurfaceSize::new(40, 20));
        let far = PixelRect { x: u32::MAX - 1, y: u32::MAX - 1, width: u32::MAX, height: u32::MAX };

        assert!(!whole.contains_rect(&far));
        assert!(!far.contains_rect(&whole));

        let mut list = DrawList::new(SurfaceSize::new(40, 20));
        list.clear(far);
        assert_eq!(list.commands(), &[DrawCommand::Clear(far)]);
    }

    #[test]
    fn replay_reissues_commands_in_order() {
        let size = SurfaceSize::new(20, 20);
        let mut source = DrawList::new(size);
        source.clear(PixelRect::covering(size));
        source.fill_rect(PixelRect::covering(size), Color32::WHITE);

        let mut target = DrawList::new(size);
        source.replay(&mut target);

        assert_eq!(source.commands(), target.commands());
    }
}
