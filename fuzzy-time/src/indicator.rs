use crate::Delta;

/// Row of the indicator track, just below the text.
pub const TRACK_Y: i32 = 167;
pub const TRACK_HEIGHT: u32 = 1;

/// `(x, width)` of each track segment. The middle segment is wider to line up with the
/// display's pixel grid; the gap before the last segment is part of the layout.
const SEGMENTS: [(i32, u32); 5] = [(0, 28), (28, 28), (56, 32), (84, 28), (116, 28)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Where the indicator bar slides from and to on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorGeometry {
    pub from: Frame,
    pub to: Frame,
}

impl IndicatorGeometry {
    /// The bar advances one segment per minute, so it always starts from the segment left of
    /// its target. After `+2` rounding flips to `-2` and the bar wraps to the left edge.
    pub const fn for_delta(delta: Delta) -> Self {
        let position = delta.position();
        Self {
            from: segment((position + SEGMENTS.len() - 1) % SEGMENTS.len()),
            to: segment(position),
        }
    }
}

const fn segment(position: usize) -> Frame {
    let (x, width) = SEGMENTS[position];
    Frame::new(x, TRACK_Y, width, TRACK_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_matches_the_track_table() {
        let expected = [
            (Delta::MinusTwo, (116, 28), (0, 28)),
            (Delta::MinusOne, (0, 28), (28, 28)),
            (Delta::Zero, (28, 28), (56, 32)),
            (Delta::PlusOne, (56, 32), (84, 28)),
            (Delta::PlusTwo, (84, 28), (116, 28)),
        ];

        for (delta, (from_x, from_w), (to_x, to_w)) in expected {
            let geometry = IndicatorGeometry::for_delta(delta);
            assert_eq!(geometry.from, Frame::new(from_x, TRACK_Y, from_w, 1), "{delta:?}");
            assert_eq!(geometry.to, Frame::new(to_x, TRACK_Y, to_w, 1), "{delta:?}");
        }
    }

    #[test]
    fn consecutive_minutes_continue_where_the_bar_stopped() {
        let cycle = [
            Delta::Zero,
            Delta::PlusOne,
            Delta::PlusTwo,
            Delta::MinusTwo,
            Delta::MinusOne,
            Delta::Zero,
        ];
        for pair in cycle.windows(2) {
            let previous = IndicatorGeometry::for_delta(pair[0]);
            let next = IndicatorGeometry::for_delta(pair[1]);
            assert_eq!(previous.to, next.from);
        }
    }

    #[test]
    fn segments_stay_on_the_track() {
        for delta in Delta::ALL {
            let frame = IndicatorGeometry::for_delta(delta).to;
            assert!(!frame.is_empty());
            assert!(frame.x >= 0 && frame.x + frame.width as i32 <= 144);
        }
    }
}
