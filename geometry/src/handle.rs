//! The eight resize handles and their per-axis dispatch.
//!
//! A handle is reduced to at most one horizontal and one vertical edge it
//! moves; the resize algebra then needs only two parametrized rules per
//! axis (grow from the origin edge, or move the near edge while the far
//! edge stays fixed) instead of eight hand-written branches.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

/// One of the eight directional resize handles around the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

/// Which vertical edge a resize moves along the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XEdge {
    /// The right edge follows the pointer; `x` stays put.
    East,
    /// The left edge follows the pointer; the right edge stays put.
    West,
}

/// Which horizontal edge a resize moves along the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YEdge {
    /// The bottom edge follows the pointer; `y` stays put.
    South,
    /// The top edge follows the pointer; the bottom edge stays put.
    North,
}

impl Handle {
    /// All handles, in clockwise order from north.
    pub const ALL: [Self; 8] =
        [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    /// The vertical edge this handle moves, if any.
    #[must_use]
    pub fn x_edge(self) -> Option<XEdge> {
        match self {
            Self::E | Self::Ne | Self::Se => Some(XEdge::East),
            Self::W | Self::Nw | Self::Sw => Some(XEdge::West),
            Self::N | Self::S => None,
        }
    }

    /// The horizontal edge this handle moves, if any.
    #[must_use]
    pub fn y_edge(self) -> Option<YEdge> {
        match self {
            Self::S | Self::Se | Self::Sw => Some(YEdge::South),
            Self::N | Self::Ne | Self::Nw => Some(YEdge::North),
            Self::E | Self::W => None,
        }
    }
}
