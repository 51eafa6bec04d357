pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized logic to check if an element fits in the remaining space.
///
/// * `available_height`: Space left between the cursor and the bottom margin.
/// * `child_height`: The required height for the element.
/// * `tolerance`: Slack absorbing floating point inaccuracies.
pub fn check_child_fit(available_height: f32, child_height: f32, tolerance: f32) -> BreakAnalysis {
    let available = available_height.max(0.0);
    BreakAnalysis {
        should_break: child_height > available + tolerance,
        remaining_height: available,
    }
}
