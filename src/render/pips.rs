use crate::layout::Pattern;
use crate::model::PercentagePosition;

use super::descriptor::ImageDescriptor;

/// Directives for one pass of a rank's standard pips.
///
/// `rotated` selects the pass drawn before the canvas is turned, `anchor`
/// is the centre of the top left pip and `pip` is moved to every offset of
/// the pattern in turn.
pub fn draw_standard_pips(
    pattern: &Pattern,
    rotated: bool,
    anchor: &PercentagePosition,
    pip: &mut ImageDescriptor,
) -> String {
    let mut out = String::new();

    for offset in pattern.pips(rotated) {
        pip.reposition(anchor.centre_x() + offset.x, anchor.centre_y() + offset.y);
        out.push_str(pip.draw());
    }

    out
}
