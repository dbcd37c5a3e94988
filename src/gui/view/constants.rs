//! View constants (layout/sizing).

pub(crate) const WINDOW_W: f32 = 960.0;
pub(crate) const WINDOW_H: f32 = 720.0;

pub(crate) const STAGE_H: f32 = 520.0;

pub(crate) const TITLE_TEXT: f32 = 28.0;
pub(crate) const CAPTION_TEXT: f32 = 18.0;
pub(crate) const CONTROL_TEXT: f32 = 18.0;
pub(crate) const INDICATOR_TEXT: f32 = 14.0;
pub(crate) const STATUS_TEXT: f32 = 12.0;

pub(crate) const CONTROL_W: f32 = 56.0;
pub(crate) const INDICATOR_SPACING: f32 = 6.0;
