//! Unit newtypes for style output: percentages and raw pixels.

/// A percentage value, as emitted in style descriptors.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Pct(pub f32);

/// Raw pixels.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f32);
