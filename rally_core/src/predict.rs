use glam::Vec2;

/// Vertical coordinate at which the ball will cross `target_x`, with any
/// number of top/bottom wall bounces accounted for in closed form.
///
/// Only the direction ratio matters, not the speed: between bounces the
/// flight is a straight line, so the unfolded displacement is
/// `(target_x - x) * dir.y / dir.x`, and reflecting it back into the field
/// is a triangle wave with period twice the field height.
///
/// A horizontally dead ball never crosses `target_x`; that case returns
/// `None` and the caller keeps whatever aim it had.
pub fn intercept_y(
    ball_pos: Vec2,
    ball_dir: Vec2,
    target_x: f32,
    field_height: f32,
) -> Option<f32> {
    if ball_dir.x == 0.0 {
        return None;
    }
    let y_raw = ball_pos.y + (target_x - ball_pos.x) * (ball_dir.y / ball_dir.x);
    Some(fold(y_raw, field_height))
}

/// Reflect an unfolded coordinate into `[0, height]`
fn fold(y_raw: f32, height: f32) -> f32 {
    let period = 2.0 * height;
    let y_mod = y_raw.rem_euclid(period);
    if y_mod <= height {
        y_mod
    } else {
        period - y_mod
    }
}
