/// Computed overflow style of an element on one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Auto,
    Scroll,
}

impl Overflow {
    pub fn allows_scroll(self) -> bool {
        matches!(self, Self::Auto | Self::Scroll)
    }
}

/// Scroll geometry of one element on an event's propagation path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollNode {
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

impl ScrollNode {
    /// A vertically scrollable container (`overflow-y: auto`).
    pub fn vertical(client_height: f64, scroll_height: f64, scroll_top: f64) -> Self {
        Self {
            overflow_y: Overflow::Auto,
            client_height,
            scroll_height,
            scroll_top,
            ..Self::default()
        }
    }

    /// A horizontally scrollable container (`overflow-x: auto`).
    pub fn horizontal(client_width: f64, scroll_width: f64, scroll_left: f64) -> Self {
        Self {
            overflow_x: Overflow::Auto,
            client_width,
            scroll_width,
            scroll_left,
            ..Self::default()
        }
    }

    /// Returns `true` if this element would scroll natively for a delta of `(dx, dy)`.
    ///
    /// An axis counts only when its overflow allows scrolling, its content overflows, and the
    /// element is not already at the boundary in the direction of travel.
    pub fn can_absorb(&self, dx: f64, dy: f64) -> bool {
        let ox = self.overflow_x.allows_scroll();
        let oy = self.overflow_y.allows_scroll();
        if !ox && !oy {
            return false;
        }

        let mx = self.scroll_width > self.client_width;
        let my = self.scroll_height > self.client_height;
        if !mx && !my {
            return false;
        }

        let max_left = self.scroll_width - self.client_width;
        let max_top = self.scroll_height - self.client_height;

        let sx = dx != 0.0
            && ox
            && mx
            && ((dx > 0.0 && self.scroll_left < max_left) || (dx < 0.0 && self.scroll_left > 0.0));
        let sy = dy != 0.0
            && oy
            && my
            && ((dy > 0.0 && self.scroll_top < max_top) || (dy < 0.0 && self.scroll_top > 0.0));
        sx || sy
    }
}

/// Returns `true` if any element on `path` can absorb the delta.
pub fn path_absorbs(path: &[ScrollNode], dx: f64, dy: f64) -> bool {
    path.iter().any(|node| node.can_absorb(dx, dy))
}
