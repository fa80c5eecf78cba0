use crate::models::SwipeDirection;

/// Horizontal drag, in logical pixels, a card must travel to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 120.0;

/// Turn a released drag into a decision. `None` means the card springs back.
pub fn classify_drag(dx: f64, threshold: f64) -> Option<SwipeDirection> {
    if dx.abs() > threshold {
        Some(if dx > 0.0 {
            SwipeDirection::Like
        } else {
            SwipeDirection::Pass
        })
    } else {
        None
    }
}
